//! Nested menu tree and the flat registry of its selectable leaves.
//!
//! The catalog is built once from a static label tree ([`MenuSpec`]) and is
//! immutable afterwards. Building walks the tree depth-first and, for every
//! node, derives its full path by joining the ancestor labels with
//! [`PATH_SEPARATOR`]. Leaves are recorded in a [`LeafRegistry`] in
//! traversal order.

use crate::types::{LeafId, PATH_SEPARATOR};

/// Static description of one menu entry and its children.
///
/// An entry with no children is a leaf.
#[derive(Debug)]
pub struct MenuSpec {
    pub label: &'static str,
    pub children: &'static [MenuSpec],
}

/// The application menu used by the reaction test.
pub static MAIN_MENU: &[MenuSpec] = &[
    MenuSpec {
        label: "Файл",
        children: &[
            MenuSpec { label: "Создать", children: &[] },
            MenuSpec { label: "Открыть", children: &[] },
            MenuSpec { label: "Сохранить", children: &[] },
            MenuSpec {
                label: "Сохранить как",
                children: &[
                    MenuSpec { label: "Текст RTF", children: &[] },
                    MenuSpec {
                        label: "Форматы XML",
                        children: &[
                            MenuSpec { label: "Office Open XML", children: &[] },
                            MenuSpec { label: "OpenDocument", children: &[] },
                        ],
                    },
                    MenuSpec { label: "Простой текст", children: &[] },
                    MenuSpec {
                        label: "Другие",
                        children: &[
                            MenuSpec { label: "PDF", children: &[] },
                            MenuSpec {
                                label: "Экспорт в",
                                children: &[
                                    MenuSpec { label: "PNG", children: &[] },
                                    MenuSpec { label: "JPEG", children: &[] },
                                ],
                            },
                        ],
                    },
                ],
            },
            MenuSpec { label: "Печать", children: &[] },
            MenuSpec { label: "Выход", children: &[] },
        ],
    },
    MenuSpec {
        label: "Правка",
        children: &[
            MenuSpec { label: "Отменить", children: &[] },
            MenuSpec { label: "Повторить", children: &[] },
            MenuSpec { label: "Копировать", children: &[] },
            MenuSpec { label: "Вставить", children: &[] },
        ],
    },
    MenuSpec {
        label: "Справка",
        children: &[MenuSpec { label: "О программе", children: &[] }],
    },
];

/// A built menu entry with its full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    Leaf {
        label: String,
        path: String,
        id: LeafId,
    },
    Group {
        label: String,
        path: String,
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    pub fn label(&self) -> &str {
        match self {
            MenuNode::Leaf { label, .. } | MenuNode::Group { label, .. } => label,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            MenuNode::Leaf { path, .. } | MenuNode::Group { path, .. } => path,
        }
    }
}

/// One selectable leaf as seen by the trial session.
///
/// `depth` is the number of path segments, i.e. ancestor count + 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafEntry {
    pub path: String,
    pub depth: usize,
}

/// Every leaf of a catalog, in depth-first traversal order.
#[derive(Debug, Default)]
pub struct LeafRegistry {
    entries: Vec<LeafEntry>,
}

impl LeafRegistry {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: LeafId) -> Option<&LeafEntry> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeafId, &LeafEntry)> {
        self.entries.iter().enumerate()
    }

    /// Looks up a leaf by its full path.
    pub fn find(&self, path: &str) -> Option<LeafId> {
        self.entries.iter().position(|e| e.path == path)
    }

    /// Number of leaves whose path has exactly `depth` segments.
    pub fn count_at_depth(&self, depth: usize) -> usize {
        self.entries.iter().filter(|e| e.depth == depth).count()
    }

    /// Number of leaves at the same depth as `path`, the path itself included.
    ///
    /// The depth is taken from the path text, so this also works for paths
    /// that are not in the registry.
    pub fn count_alternatives(&self, path: &str) -> usize {
        self.count_at_depth(path_depth(path))
    }
}

/// The built menu tree together with its leaf registry.
#[derive(Debug)]
pub struct Catalog {
    roots: Vec<MenuNode>,
    registry: LeafRegistry,
}

impl Catalog {
    /// Builds the catalog for [`MAIN_MENU`].
    pub fn build() -> Self {
        Self::from_spec(MAIN_MENU)
    }

    /// Builds a catalog from an arbitrary static label tree.
    ///
    /// Top-level entries have no ancestors, so their path is their label.
    pub fn from_spec(spec: &[MenuSpec]) -> Self {
        let mut leaves = Vec::new();
        let roots = spec
            .iter()
            .map(|s| build_node(s, None, 1, &mut leaves))
            .collect();

        Self {
            roots,
            registry: LeafRegistry { entries: leaves },
        }
    }

    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    pub fn registry(&self) -> &LeafRegistry {
        &self.registry
    }
}

/// Joins a parent path and a label into a full path.
pub fn join_path(parent: Option<&str>, label: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}{PATH_SEPARATOR}{label}"),
        None => label.to_owned(),
    }
}

/// Number of segments in a full path.
pub fn path_depth(path: &str) -> usize {
    path.split(PATH_SEPARATOR).count()
}

fn build_node(
    spec: &MenuSpec,
    parent: Option<&str>,
    depth: usize,
    leaves: &mut Vec<LeafEntry>,
) -> MenuNode {
    let path = join_path(parent, spec.label);

    if spec.children.is_empty() {
        let id = leaves.len();
        leaves.push(LeafEntry {
            path: path.clone(),
            depth,
        });
        return MenuNode::Leaf {
            label: spec.label.to_owned(),
            path,
            id,
        };
    }

    let children = spec
        .children
        .iter()
        .map(|child| build_node(child, Some(&path), depth + 1, leaves))
        .collect();

    MenuNode::Group {
        label: spec.label.to_owned(),
        path,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    static FLAT: &[MenuSpec] = &[
        MenuSpec { label: "A", children: &[] },
        MenuSpec { label: "B", children: &[] },
    ];

    /// Walks the tree and returns `(path, ancestor_count)` for every leaf.
    fn leaves_with_ancestors(
        nodes: &[MenuNode],
        ancestors: usize,
        out: &mut Vec<(String, usize)>,
    ) {
        for node in nodes {
            match node {
                MenuNode::Leaf { path, .. } => out.push((path.clone(), ancestors)),
                MenuNode::Group { children, .. } => {
                    leaves_with_ancestors(children, ancestors + 1, out)
                }
            }
        }
    }

    #[test]
    fn flat_catalog_has_depth_one_leaves() {
        let catalog = Catalog::from_spec(FLAT);
        let reg = catalog.registry();

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(0).map(|e| e.path.as_str()), Some("A"));
        assert_eq!(reg.get(1).map(|e| e.path.as_str()), Some("B"));
        assert_eq!(reg.count_alternatives("A"), 2);
    }

    #[test]
    fn main_menu_paths_join_ancestors_with_arrow() {
        let catalog = Catalog::build();
        let reg = catalog.registry();

        assert!(reg.find("Файл → Открыть").is_some());
        assert!(reg.find("Файл → Сохранить как → Форматы XML → OpenDocument").is_some());
        assert!(
            reg.find("Файл → Сохранить как → Другие → Экспорт в → JPEG")
                .is_some()
        );
        assert!(reg.find("Справка → О программе").is_some());

        // Groups are not selectable.
        assert!(reg.find("Файл").is_none());
        assert!(reg.find("Файл → Сохранить как").is_none());
    }

    #[test]
    fn main_menu_has_expected_leaf_counts_per_depth() {
        let catalog = Catalog::build();
        let reg = catalog.registry();

        assert_eq!(reg.len(), 17);
        assert_eq!(reg.count_at_depth(1), 0);
        assert_eq!(reg.count_at_depth(2), 10);
        assert_eq!(reg.count_at_depth(3), 2);
        assert_eq!(reg.count_at_depth(4), 3);
        assert_eq!(reg.count_at_depth(5), 2);
        assert_eq!(reg.count_at_depth(6), 0);
    }

    #[test]
    fn registry_follows_depth_first_order() {
        let catalog = Catalog::build();
        let paths: Vec<&str> = catalog
            .registry()
            .iter()
            .map(|(_, e)| e.path.as_str())
            .take(5)
            .collect();

        assert_eq!(
            paths,
            vec![
                "Файл → Создать",
                "Файл → Открыть",
                "Файл → Сохранить",
                "Файл → Сохранить как → Текст RTF",
                "Файл → Сохранить как → Форматы XML → Office Open XML",
            ]
        );
    }

    #[test]
    fn every_leaf_path_is_unique() {
        let catalog = Catalog::build();
        let reg = catalog.registry();
        let unique: HashSet<&str> = reg.iter().map(|(_, e)| e.path.as_str()).collect();
        assert_eq!(unique.len(), reg.len());
    }

    #[test]
    fn depth_equals_ancestor_count_plus_one() {
        let catalog = Catalog::build();
        let mut leaves = Vec::new();
        leaves_with_ancestors(catalog.roots(), 0, &mut leaves);

        assert_eq!(leaves.len(), catalog.registry().len());
        for (path, ancestors) in leaves {
            let id = catalog.registry().find(&path).expect("leaf is registered");
            let entry = catalog.registry().get(id).unwrap();
            assert_eq!(entry.depth, ancestors + 1, "depth mismatch for {path}");
            assert_eq!(path_depth(&path), entry.depth);
        }
    }

    #[test]
    fn count_alternatives_matches_registry_scan() {
        let catalog = Catalog::build();
        let reg = catalog.registry();

        for (_, entry) in reg.iter() {
            let manual = reg.iter().filter(|(_, e)| e.depth == entry.depth).count();
            assert_eq!(reg.count_alternatives(&entry.path), manual);
        }
    }

    #[test]
    fn leaf_ids_point_back_into_registry() {
        let catalog = Catalog::build();

        fn check(nodes: &[MenuNode], reg: &LeafRegistry) {
            for node in nodes {
                match node {
                    MenuNode::Leaf { path, id, .. } => {
                        assert_eq!(reg.get(*id).map(|e| e.path.as_str()), Some(path.as_str()));
                    }
                    MenuNode::Group { children, .. } => check(children, reg),
                }
            }
        }

        check(catalog.roots(), catalog.registry());
    }

    #[test]
    fn group_paths_and_labels_are_kept() {
        let catalog = Catalog::build();
        let roots = catalog.roots();

        let labels: Vec<&str> = roots.iter().map(MenuNode::label).collect();
        assert_eq!(labels, vec!["Файл", "Правка", "Справка"]);

        let MenuNode::Group { children, .. } = &roots[0] else {
            panic!("top-level entry should be a group");
        };
        let save_as = children
            .iter()
            .find(|c| c.label() == "Сохранить как")
            .expect("submenu exists");
        assert_eq!(save_as.path(), "Файл → Сохранить как");
        assert!(matches!(save_as, MenuNode::Group { .. }));
    }

    #[test]
    fn join_path_without_parent_is_label() {
        assert_eq!(join_path(None, "Файл"), "Файл");
        assert_eq!(join_path(Some("Файл"), "Открыть"), "Файл → Открыть");
        assert_eq!(path_depth("Файл"), 1);
        assert_eq!(path_depth("Файл → Открыть"), 2);
    }

    #[test]
    fn empty_spec_builds_empty_catalog() {
        let catalog = Catalog::from_spec(&[]);
        assert!(catalog.roots().is_empty());
        assert!(catalog.registry().is_empty());
    }
}
