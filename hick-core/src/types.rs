/// Identifier for a leaf in a [`crate::catalog::LeafRegistry`].
///
/// This is an index into the registry's entries, and is only meaningful
/// within the lifetime of a given `Catalog` instance.
pub type LeafId = usize;

/// Separator placed between labels when building a full menu path.
pub const PATH_SEPARATOR: &str = " → ";
