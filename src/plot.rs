//! Rendering of a [`Canvas`] with `egui_plot`.
//!
//! X values are seconds since the UNIX epoch; tick labels are formatted as
//! UTC dates.

use egui_plot::{Legend, Line, Plot, PlotResponse};

use crate::canvas::{x_to_timestamp, Canvas, CurveKind};

/// Default tick label format for the date axis.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format an x value as a date; out-of-range values render empty.
pub fn format_date_tick(x: f64, date_format: &str) -> String {
    x_to_timestamp(x)
        .map(|dt| dt.format(date_format).to_string())
        .unwrap_or_default()
}

/// Draw the canvas title, then the plot with all visible curves.
pub fn show_canvas(
    ui: &mut egui::Ui,
    canvas: &Canvas,
    plot_id: &str,
    date_format: &str,
) -> PlotResponse<()> {
    if !canvas.title().is_empty() {
        ui.vertical_centered(|ui| ui.heading(canvas.title()));
    }
    let tick_format = date_format.to_owned();
    let mut plot = Plot::new(plot_id)
        .x_axis_label(canvas.x_label().to_owned())
        .y_axis_label(canvas.y_label().to_owned())
        .x_axis_formatter(move |x, _range| format_date_tick(x.value, &tick_format));
    if canvas.legend() {
        plot = plot.legend(Legend::default());
    }
    plot.show(ui, |plot_ui| {
        for curve in canvas.curves() {
            if !curve.look.visible {
                continue;
            }
            let line = match curve.kind {
                CurveKind::Line => Line::new(&curve.label, curve.plot_points())
                    .color(curve.look.color)
                    .width(curve.look.width.max(0.1))
                    .style(curve.look.style),
                // Legend entry only
                CurveKind::Annotation => {
                    Line::new(&curve.label, Vec::<[f64; 2]>::new()).color(egui::Color32::TRANSPARENT)
                }
            };
            plot_ui.line(line);
        }
    })
}
