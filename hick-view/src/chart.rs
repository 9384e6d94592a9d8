//! Bar chart comparing measured and predicted times per trial.

use hick_core::session::TrialResult;

/// Width in pixels of the bar for the slowest measured trial.
pub const MAX_BAR_WIDTH: f32 = 500.0;

const BAR_HEIGHT: f32 = 20.0;

/// Geometry and captions for one trial in the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub trial: u32,
    pub actual_width: f32,
    pub predicted_width: f32,
    pub actual_ms: u64,
    pub predicted_ms: f64,
}

/// Scales every result against the largest measured time.
///
/// The scale never drops below 1 ms, so an all-zero log does not divide
/// by zero. Predicted bars use the same scale and may be wider than
/// `max_width`.
pub fn layout(results: &[TrialResult], max_width: f32) -> Vec<BarRow> {
    let max_actual = results.iter().map(|r| r.actual_ms).max().unwrap_or(0).max(1) as f32;

    results
        .iter()
        .map(|r| BarRow {
            trial: r.trial,
            actual_width: r.actual_ms as f32 * max_width / max_actual,
            predicted_width: r.predicted_ms as f32 * max_width / max_actual,
            actual_ms: r.actual_ms,
            predicted_ms: r.predicted_ms,
        })
        .collect()
}

fn bar(ui: &mut egui::Ui, width: f32, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, BAR_HEIGHT), egui::Sense::hover());
    ui.painter().rect_filled(rect, 0.0, color);
}

/// Draws one labeled pair of bars per trial.
pub fn show(ui: &mut egui::Ui, results: &[TrialResult]) {
    let actual_color = ui.visuals().selection.bg_fill;
    let predicted_color = egui::Color32::GRAY;

    for row in layout(results, MAX_BAR_WIDTH) {
        ui.label(egui::RichText::new(format!("Попытка {}", row.trial)).size(16.0));
        ui.horizontal(|ui| {
            bar(ui, row.actual_width, actual_color);
            ui.label(format!("Факт: {} мс", row.actual_ms));
        });
        ui.horizontal(|ui| {
            bar(ui, row.predicted_width, predicted_color);
            ui.label(format!("Хик: {:.0} мс", row.predicted_ms));
        });
        ui.separator();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(trial: u32, actual_ms: u64, predicted_ms: f64) -> TrialResult {
        TrialResult {
            trial,
            path: format!("Пункт {trial}"),
            actual_ms,
            predicted_ms,
        }
    }

    #[test]
    fn slowest_trial_gets_full_width() {
        let rows = layout(&[result(1, 250, 200.0), result(2, 1000, 350.0)], 500.0);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].actual_width, 125.0);
        assert_eq!(rows[1].actual_width, 500.0);
        assert_eq!(rows[0].predicted_width, 100.0);
        assert_eq!(rows[1].predicted_width, 175.0);
        assert_eq!(rows[1].trial, 2);
    }

    #[test]
    fn predicted_bar_may_exceed_max_width() {
        let rows = layout(&[result(1, 100, 200.0)], 500.0);
        assert_eq!(rows[0].actual_width, 500.0);
        assert_eq!(rows[0].predicted_width, 1000.0);
    }

    #[test]
    fn zero_times_do_not_divide_by_zero() {
        let rows = layout(&[result(1, 0, 50.0)], 500.0);
        assert_eq!(rows[0].actual_width, 0.0);
        assert_eq!(rows[0].predicted_width, 25_000.0);
        assert!(rows[0].predicted_width.is_finite());
    }

    #[test]
    fn empty_log_has_no_rows() {
        assert!(layout(&[], 500.0).is_empty());
    }
}
