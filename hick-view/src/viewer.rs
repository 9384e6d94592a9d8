//! Interactive Hick's-law menu test built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the trial [`Session`] and
//! implements [`eframe::App`] to render the menu, the instructions, the
//! transcript, and the result chart.

use std::time::{Duration, Instant};

use eframe::App;
use hick_core::{
    catalog::{Catalog, MenuNode},
    error::SessionError,
    schedule::AdvanceTicket,
    session::{Advanced, Phase, Rejection, Selection, Session},
};
use rand::rng;
use tracing::{debug, error, info};

use crate::chart;

/// Main application state for the test window.
///
/// [`Viewer`] glues together:
/// - The test core: a [`Session`] owning the menu catalog and all results.
/// - The host side of the deferred advance: the pending [`AdvanceTicket`].
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Fire the pending advance if it is due, or schedule a repaint for it.
/// 2. Render the menu bar and deliver a clicked leaf to the session.
/// 3. Render instructions, transcript, dialogs, and results.
///
/// ### Fields
/// - `session` - Trial state machine and menu catalog.
/// - `rng` - Random number generator used to draw targets.
/// - `ticket` - Advance scheduled by the last correct pick, if any.
/// - `rejection` - Wrong pick currently shown in the dialog.
/// - `show_results` - Whether the result window is open.
pub struct Viewer {
    session: Session,
    rng: rand::rngs::ThreadRng,

    ticket: Option<AdvanceTicket>,
    rejection: Option<Rejection>,
    show_results: bool,
}

impl Viewer {
    /// Creates a viewer for the built-in menu, waiting for the start button.
    pub fn new() -> Self {
        Self {
            session: Session::new(Catalog::build()),
            rng: rng(),
            ticket: None,
            rejection: None,
            show_results: false,
        }
    }

    fn report_misuse(err: &SessionError) {
        error!(%err, "session driven out of order");
        if cfg!(debug_assertions) {
            panic!("session driven out of order: {err}");
        }
    }

    fn on_advanced(&mut self, advanced: Advanced) {
        if advanced == Advanced::Completed {
            self.show_results = true;
        }
    }

    /// Starts the test in response to the start button.
    fn start(&mut self, now: Instant) {
        match self.session.start(now, &mut self.rng) {
            Ok(advanced) => self.on_advanced(advanced),
            Err(err) => Self::report_misuse(&err),
        }
    }

    /// Delivers a click on the leaf at `path` to the session.
    ///
    /// Clicks before the start or after the end are logged and dropped.
    fn handle_click(&mut self, path: &str, now: Instant) {
        info!(path, "menu item clicked");

        if self.session.phase() != Phase::AwaitingSelection {
            debug!(path, phase = ?self.session.phase(), "click outside of a trial");
            return;
        }

        match self.session.select(path, now) {
            Ok(Selection::Accepted { ticket, .. }) => self.ticket = Some(ticket),
            Ok(Selection::Rejected(rejection)) => self.rejection = Some(rejection),
            Ok(Selection::Ignored) => {}
            Err(err) => Self::report_misuse(&err),
        }
    }

    /// Fires the pending advance once it is due.
    ///
    /// ### Returns
    /// The time left until the pending advance, or `None` if nothing is
    /// waiting any more.
    fn poll_advance(&mut self, now: Instant) -> Option<Duration> {
        let ticket = self.ticket?;
        if !ticket.is_due(now) {
            return Some(ticket.remaining(now));
        }

        self.ticket = None;
        match self.session.fire(ticket, now, &mut self.rng) {
            Ok(Some(advanced)) => self.on_advanced(advanced),
            Ok(None) => {}
            Err(err) => Self::report_misuse(&err),
        }
        None
    }

    /// Drops the pending advance when the window goes away.
    fn teardown(&mut self) {
        self.session.cancel_pending();
        self.ticket = None;
    }

    /// Renders one menu entry, recursing into submenus.
    fn menu_entry(ui: &mut egui::Ui, node: &MenuNode, clicked: &mut Option<String>) {
        match node {
            MenuNode::Group {
                label, children, ..
            } => {
                ui.menu_button(label.as_str(), |ui| {
                    for child in children {
                        Self::menu_entry(ui, child, clicked);
                    }
                });
            }
            MenuNode::Leaf { label, path, .. } => {
                if ui.button(label.as_str()).clicked() {
                    *clicked = Some(path.clone());
                    ui.close();
                }
            }
        }
    }

    /// Builds the menu bar and returns the path of a clicked leaf.
    fn ui_menu_bar(&self, ctx: &egui::Context) -> Option<String> {
        let mut clicked = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                for node in self.session.catalog().roots() {
                    Self::menu_entry(ui, node, &mut clicked);
                }
            });
        });
        clicked
    }

    /// Builds the central panel with instructions, start button, and transcript.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(self.session.instruction());

            if self.session.phase() == Phase::Idle {
                if ui.button("▶️ Начать тест").clicked() {
                    self.start(Instant::now());
                }
                return;
            }

            ui.separator();
            let mut transcript = self.session.transcript();
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut transcript)
                            .desired_rows(20)
                            .desired_width(f32::INFINITY),
                    );
                });
        });
    }

    /// Shows the "wrong item" dialog until it is dismissed.
    fn ui_rejection_dialog(&mut self, ctx: &egui::Context) {
        let Some(rejection) = &self.rejection else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Неверный пункт")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(rejection.message());
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.rejection = None;
        }
    }

    /// Shows the bar chart once the session has completed.
    fn ui_results_window(&mut self, ctx: &egui::Context) {
        let Some(results) = self.session.final_results() else {
            return;
        };

        egui::Window::new("Результаты по попыткам")
            .default_size([800.0, 600.0])
            .open(&mut self.show_results)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| chart::show(ui, results));
            });
    }
}

impl App for Viewer {
    /// eframe callback that drives the session and builds the UI each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.teardown();
        }

        if let Some(wait) = self.poll_advance(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        if let Some(path) = self.ui_menu_bar(ctx) {
            self.handle_click(&path, Instant::now());
        }

        self.ui_central_panel(ctx);
        self.ui_rejection_dialog(ctx);
        self.ui_results_window(ctx);
    }
}
