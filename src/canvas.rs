//! Canvas: a caller-owned plotting surface that collects curves.
//!
//! Plotting operations only draw onto a canvas; rendering it (see
//! [`crate::plot`]) and releasing it are up to the caller. A canvas has a
//! single writer and is not shared across threads while being drawn on.

use chrono::{DateTime, Utc};

use crate::data::curve_look::CurveLook;

/// Plot x coordinate of a timestamp: seconds since the UNIX epoch.
pub fn timestamp_to_x(ts: DateTime<Utc>) -> f64 {
    ts.timestamp() as f64 + ts.timestamp_subsec_nanos() as f64 * 1e-9
}

/// Inverse of [`timestamp_to_x`]; `None` for non-finite or out-of-range x.
pub fn x_to_timestamp(x: f64) -> Option<DateTime<Utc>> {
    if !x.is_finite() {
        return None;
    }
    let secs = x.floor() as i64;
    let nsecs = (((x - secs as f64) * 1e9) as u32).min(999_999_999);
    DateTime::from_timestamp(secs, nsecs)
}

/// Identifies a curve on the canvas it was drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurveHandle(usize);

impl CurveHandle {
    /// Position of the curve in draw order.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// A polyline through the curve's points.
    Line,
    /// A legend-only entry without points.
    Annotation,
}

/// One drawn curve.
#[derive(Debug, Clone)]
pub struct Curve {
    pub label: String,
    pub points: Vec<(DateTime<Utc>, f64)>,
    pub look: CurveLook,
    pub kind: CurveKind,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.0).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.1).collect()
    }

    /// Points as `[x, y]` with `x` in seconds since the UNIX epoch.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|&(t, v)| [timestamp_to_x(t), v])
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Canvas {
    title: String,
    x_label: String,
    y_label: String,
    legend: bool,
    curves: Vec<Curve>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.x_label = label.into();
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.y_label = label.into();
    }

    pub fn legend(&self) -> bool {
        self.legend
    }

    pub fn set_legend(&mut self, on: bool) {
        self.legend = on;
    }

    /// Draw a line curve and return its handle.
    pub fn plot(
        &mut self,
        label: impl Into<String>,
        points: impl IntoIterator<Item = (DateTime<Utc>, f64)>,
        look: CurveLook,
    ) -> CurveHandle {
        self.push(Curve {
            label: label.into(),
            points: points.into_iter().collect(),
            look,
            kind: CurveKind::Line,
        })
    }

    /// Add a legend entry that draws nothing.
    pub fn annotate(&mut self, label: impl Into<String>) -> CurveHandle {
        self.push(Curve {
            label: label.into(),
            points: Vec::new(),
            look: CurveLook::default(),
            kind: CurveKind::Annotation,
        })
    }

    fn push(&mut self, curve: Curve) -> CurveHandle {
        self.curves.push(curve);
        CurveHandle(self.curves.len() - 1)
    }

    pub fn curve(&self, handle: CurveHandle) -> Option<&Curve> {
        self.curves.get(handle.0)
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Curve> {
        self.curves
            .iter()
            .filter(|c| c.kind == CurveKind::Annotation)
    }

    /// Labels in draw order, as a legend would list them.
    pub fn legend_labels(&self) -> Vec<&str> {
        self.curves.iter().map(|c| c.label.as_str()).collect()
    }

    /// Remove all curves and labels, keeping the legend setting.
    pub fn clear(&mut self) {
        self.title.clear();
        self.x_label.clear();
        self.y_label.clear();
        self.curves.clear();
    }
}
