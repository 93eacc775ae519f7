//! Report rendering.
//!
//! ## Text Output
//! ```text
//! Most purchased product: Keyboard (4 units)
//!
//! Product Sales Distribution
//! Keyboard    ████████████              30.8%  (4 units)
//! Headphones  █████████                 23.1%  (3 units)
//! ...
//! ```
//!
//! Rendering only formats what [`SalesTotals`] already decided; the
//! best-seller tie-break and the slice order come from ecom-core.

use std::io::{self, Write};

use ecom_core::{BestSeller, SalesShare, SalesTotals};
use serde::Serialize;

pub const NO_PURCHASES: &str = "No product purchases found.";
pub const NO_CHART_DATA: &str = "No sales data available for visualization.";
pub const CHART_TITLE: &str = "Product Sales Distribution";

const BAR: char = '█';

/// Everything the report prints, computed once from the totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub best_seller: Option<BestSeller>,
    pub total_units: i64,
    pub distribution: Vec<SalesShare>,
}

impl SalesReport {
    pub fn from_totals(totals: &SalesTotals) -> Self {
        SalesReport {
            best_seller: totals.best_seller(),
            total_units: totals.total_units(),
            distribution: totals.distribution(),
        }
    }
}

/// Writes the best-seller line, or [`NO_PURCHASES`].
pub fn write_best_seller<W: Write>(out: &mut W, best: Option<&BestSeller>) -> io::Result<()> {
    match best {
        Some(best) => writeln!(
            out,
            "Most purchased product: {} ({} units)",
            best.name, best.units
        ),
        None => writeln!(out, "{NO_PURCHASES}"),
    }
}

/// Writes the distribution as a labeled bar chart, or [`NO_CHART_DATA`].
///
/// Each slice shows the product name, a bar proportional to its share
/// (`width` characters = 100%), the share with one decimal place and the
/// unit count.
pub fn write_distribution<W: Write>(
    out: &mut W,
    shares: &[SalesShare],
    width: usize,
) -> io::Result<()> {
    if shares.is_empty() {
        return writeln!(out, "{NO_CHART_DATA}");
    }

    let label_width = shares
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    writeln!(out, "{CHART_TITLE}")?;
    for share in shares {
        let bar: String = std::iter::repeat(BAR).take(bar_len(share.percent, width)).collect();
        writeln!(
            out,
            "{:<label_width$}  {:<width$}  {:>6}  ({} units)",
            share.name,
            bar,
            share.percent_label(),
            share.units,
        )?;
    }

    Ok(())
}

/// Writes the full text report.
pub fn write_text<W: Write>(out: &mut W, report: &SalesReport, width: usize) -> io::Result<()> {
    write_best_seller(out, report.best_seller.as_ref())?;
    writeln!(out)?;
    write_distribution(out, &report.distribution, width)
}

/// Writes the report as one pretty-printed JSON document.
pub fn write_json<W: Write>(out: &mut W, report: &SalesReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// Bar length for a percentage, rounded, at least one cell for non-zero
/// shares.
fn bar_len(percent: f64, width: usize) -> usize {
    let len = (percent / 100.0 * width as f64).round() as usize;
    if percent > 0.0 {
        len.clamp(1, width)
    } else {
        0
    }
}
