//! CurveLook: visual styling for plotted curves.

use eframe::egui;
use egui_plot::LineStyle;

/// `matplotlib`'s named "purple", used for real prices.
pub const PURPLE: egui::Color32 = egui::Color32::from_rgb(128, 0, 128);
/// Pure red, used for predicted prices.
pub const RED: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);

/// The visual presentation of a curve (color, visibility, width, line style).
#[derive(Debug, Clone, PartialEq)]
pub struct CurveLook {
    pub color: egui::Color32,
    pub visible: bool,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for CurveLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            visible: true,
            width: 1.5,
            style: LineStyle::Solid,
        }
    }
}

impl CurveLook {
    pub fn solid(color: egui::Color32) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn dashed(color: egui::Color32) -> Self {
        Self {
            color,
            style: LineStyle::Dashed { length: 6.0 },
            ..Default::default()
        }
    }

    pub fn is_dashed(&self) -> bool {
        matches!(self.style, LineStyle::Dashed { .. })
    }

    /// Allocate a distinct color for the given curve index.
    pub fn alloc_color(index: usize) -> egui::Color32 {
        const PALETTE: [egui::Color32; 10] = [
            egui::Color32::from_rgb(31, 119, 180),
            egui::Color32::from_rgb(255, 127, 14),
            egui::Color32::from_rgb(44, 160, 44),
            egui::Color32::from_rgb(214, 39, 40),
            egui::Color32::from_rgb(148, 103, 189),
            egui::Color32::from_rgb(140, 86, 75),
            egui::Color32::from_rgb(227, 119, 194),
            egui::Color32::from_rgb(127, 127, 127),
            egui::Color32::from_rgb(188, 189, 34),
            egui::Color32::from_rgb(23, 190, 207),
        ];
        PALETTE[index % PALETTE.len()]
    }
}
