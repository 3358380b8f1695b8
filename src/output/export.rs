// CSV export of labeled price curves, one row per (curve, spot) point.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;

use crate::models::curve::LabeledCurve;

#[derive(Serialize)]
struct CurveRow<'a> {
    label: &'a str,
    maturity: f64,
    spot: f64,
    price: f64,
}

const HEADER: [&str; 4] = ["label", "maturity", "spot", "price"];

/// Write `label,maturity,spot,price` rows, curves in the given order.
///
/// The header is always written, even when there are no points.
pub fn write_csv<W: io::Write>(curves: &[LabeledCurve], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADER)?;

    for labeled in curves {
        for &(spot, price) in &labeled.curve.points {
            wtr.serialize(CurveRow {
                label: &labeled.label,
                maturity: labeled.curve.maturity,
                spot,
                price,
            })?;
        }
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file<P: AsRef<Path>>(curves: &[LabeledCurve], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(curves, file).with_context(|| format!("failed to write {}", path.display()))
}
