use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};
use crate::ui::view::AnalysisView;

/// Filled area rendering of the historical price series. Axis scales are
/// hidden; hovering reveals the date and price of the nearest point.
pub struct PriceChart<'a> {
    view: &'a AnalysisView,
}

impl<'a> PriceChart<'a> {
    pub fn new(view: &'a AnalysisView) -> Self {
        Self { view }
    }

    pub fn render(&self, ui: &mut Ui) {
        if self.view.chart_points.is_empty() {
            return;
        }

        // Fill down to the series low so the area hugs the curve after
        // the y-domain auto-fits.
        let baseline = self
            .view
            .chart_points
            .iter()
            .map(|p| p[1])
            .fold(f64::INFINITY, f64::min);

        let line = Line::new("price", PlotPoints::new(self.view.chart_points.clone()))
            .color(UI_CONFIG.colors.accent)
            .width(3.0)
            .fill(baseline as f32);

        let dates = self.view.chart_dates.clone();
        Plot::new("price_history")
            .height(UI_CONFIG.chart_height)
            .show_axes([false, false])
            .show_grid([false, true])
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .label_formatter(move |_name, point| {
                let idx = point.x.round();
                if idx >= 0.0 && (idx as usize) < dates.len() {
                    format!(
                        "{}\n{}{:.2}",
                        dates[idx as usize], UI_TEXT.currency, point.y
                    )
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    }
}
