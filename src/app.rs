//! Native window showing a [`Canvas`].
//!
//! The [`run_canvas`] function opens an eframe window with the rendered
//! canvas and a small top bar for saving a PNG screenshot or exporting the
//! curves. The call blocks until the window is closed.

use eframe::egui;
use image::{Rgba, RgbaImage};
use tracing::{error, info};

use crate::canvas::Canvas;
use crate::config::VisualizerConfig;
use crate::plot::show_canvas;

/// Environment variable naming a path to save the next screenshot to,
/// bypassing the file dialog.
pub const SCREENSHOT_ENV: &str = "STOCKPLOT_SAVE_SCREENSHOT_TO";

pub struct CanvasApp {
    canvas: Canvas,
    date_format: String,
    request_window_shot: bool,
}

impl CanvasApp {
    pub fn new(canvas: Canvas, cfg: &VisualizerConfig) -> Self {
        Self {
            canvas,
            date_format: cfg.date_format.clone(),
            request_window_shot: false,
        }
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button("🖼 Save PNG")
                .on_hover_text("Take a screenshot of the window")
                .clicked()
            {
                self.request_window_shot = true;
            }
            if ui
                .button("📤 Export curves")
                .on_hover_text("Export all plotted curves as CSV")
                .clicked()
            {
                self.prompt_and_export_curves();
            }
        });
    }

    /// Show a file dialog and save the curves in the chosen format.
    fn prompt_and_export_curves(&self) {
        let mut dlg = rfd::FileDialog::new();
        dlg = dlg.add_filter("CSV", &["csv"]);
        #[cfg(feature = "parquet")]
        {
            dlg = dlg.add_filter("Parquet", &["parquet"]);
        }
        let Some(path) = dlg.set_file_name("stockplot_curves.csv").save_file() else {
            return;
        };
        let res = {
            #[cfg(feature = "parquet")]
            {
                match path.extension().and_then(|s| s.to_str()).unwrap_or("") {
                    "parquet" => crate::export::save_curves_parquet(&path, &self.canvas),
                    _ => crate::export::save_curves_csv(&path, &self.canvas),
                }
            }
            #[cfg(not(feature = "parquet"))]
            {
                crate::export::save_curves_csv(&path, &self.canvas)
            }
        };
        if let Err(e) = res {
            error!("Failed to export curves: {e}");
        }
    }

    /// Handle a pending screenshot request and save the image to the env path or a chosen path.
    fn handle_screenshot_result(&mut self, ctx: &egui::Context) {
        if self.request_window_shot {
            self.request_window_shot = false;
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
        let Some(image) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        }) else {
            return;
        };
        let path = match std::env::var(SCREENSHOT_ENV) {
            Ok(p) => {
                std::env::remove_var(SCREENSHOT_ENV);
                Some(std::path::PathBuf::from(p))
            }
            Err(_) => {
                let default_name = format!("stockplot_{}.png", chrono::Local::now().timestamp_millis());
                rfd::FileDialog::new()
                    .set_file_name(&default_name)
                    .add_filter("PNG", &["png"])
                    .save_file()
            }
        };
        if let Some(path) = path {
            match color_image_to_rgba(&image).save(&path) {
                Ok(()) => info!("Saved viewport screenshot to {:?}", path),
                Err(e) => error!("Failed to save viewport screenshot: {e}"),
            }
        }
    }
}

fn color_image_to_rgba(image: &egui::ColorImage) -> RgbaImage {
    let [w, h] = image.size;
    let mut out = RgbaImage::new(w as u32, h as u32);
    for y in 0..h {
        for x in 0..w {
            let p = image.pixels[y * w + x];
            out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
        }
    }
    out
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("stockplot_top_bar").show(ctx, |ui| {
            self.render_top_bar(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            show_canvas(ui, &self.canvas, "stockplot_canvas", &self.date_format);
        });
        self.handle_screenshot_result(ctx);
    }
}

/// Open a native window showing `canvas`.
pub fn run_canvas(canvas: Canvas, cfg: &VisualizerConfig) -> eframe::Result<()> {
    let app = CanvasApp::new(canvas, cfg);
    let [w, h] = cfg.window_size;
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(w, h)),
        ..Default::default()
    };
    eframe::run_native(&cfg.title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
