//! Export of plotted curves to CSV (and Parquet with the `parquet` feature).

use std::io::Write;
use std::path::Path;

use chrono::SecondsFormat;

use crate::canvas::{Canvas, CurveKind};
use crate::error::Result;

/// Write every line curve as `curve,timestamp,value` rows.
///
/// Timestamps are RFC 3339 in UTC. Annotation curves carry no points and
/// are skipped.
pub fn write_curves_csv<W: Write>(writer: W, canvas: &Canvas) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["curve", "timestamp", "value"])?;
    for curve in canvas.curves().iter().filter(|c| c.kind == CurveKind::Line) {
        for (t, v) in &curve.points {
            w.write_record([
                curve.label.clone(),
                t.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                v.to_string(),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}

pub fn save_curves_csv<P: AsRef<Path>>(path: P, canvas: &Canvas) -> Result<()> {
    let f = std::fs::File::create(path.as_ref())?;
    write_curves_csv(f, canvas)?;
    tracing::info!(path = %path.as_ref().display(), "exported curves to CSV");
    Ok(())
}

#[cfg(feature = "parquet")]
pub fn save_curves_parquet<P: AsRef<Path>>(path: P, canvas: &Canvas) -> Result<()> {
    use arrow_array::{Float64Array, RecordBatch, StringArray};
    use arrow_schema::{DataType, Field, Schema};
    use parquet::arrow::arrow_writer::ArrowWriter;
    use parquet::file::properties::WriterProperties;
    use std::sync::Arc;

    let mut curve_col: Vec<String> = Vec::new();
    let mut ts_col: Vec<f64> = Vec::new();
    let mut val_col: Vec<f64> = Vec::new();
    for curve in canvas.curves().iter().filter(|c| c.kind == CurveKind::Line) {
        for p in curve.plot_points() {
            curve_col.push(curve.label.clone());
            ts_col.push(p[0]);
            val_col.push(p[1]);
        }
    }
    let schema = Arc::new(Schema::new(vec![
        Field::new("curve", DataType::Utf8, false),
        Field::new("timestamp", DataType::Float64, false),
        Field::new("value", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(curve_col)) as _,
            Arc::new(Float64Array::from(ts_col)) as _,
            Arc::new(Float64Array::from(val_col)) as _,
        ],
    )?;
    let file = std::fs::File::create(path.as_ref())?;
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;
    writer.write(&batch)?;
    writer.close()?;
    tracing::info!(path = %path.as_ref().display(), "exported curves to Parquet");
    Ok(())
}
