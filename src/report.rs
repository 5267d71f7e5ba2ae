//! Text renderers for the plant report and the grid report.

use std::fmt;
use std::io::{self, Write};

use tracing::warn;

use crate::grid::Grid;
use crate::plant::Plant;

/// Column width that report labels are left-justified to.
pub const LABEL_WIDTH: usize = 20;

const GRID_REPORT_TITLE: &str = "Power Grid Report";

/// Writes a title line followed by a dash rule of the same length.
fn write_heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "-".repeat(title.len()))
}

/// One labeled block of the plant report.
pub struct PlantBlock<'a> {
    pub index: usize,
    pub plant: &'a Plant,
}

impl fmt::Display for PlantBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, &format!("Plant #{}", self.index))?;
        writeln!(f, "{:<LABEL_WIDTH$}{}", "Type:", self.plant.plant_type)?;
        writeln!(f, "{:<LABEL_WIDTH$}{:.0}", "Capacty:", self.plant.capacity)?;
        writeln!(f, "{:<LABEL_WIDTH$}{}", "Status:", self.plant.status)?;
        writeln!(f)
    }
}

/// Writes one block per plant, in catalog order, regardless of status.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_plant_report(grid: &Grid, mut writer: impl Write) -> io::Result<()> {
    for (index, plant) in grid.plants.iter().enumerate() {
        write!(writer, "{}", PlantBlock { index, plant })?;
    }
    writer.flush()
}

/// Aggregate grid figures, computed over active plants only.
#[derive(Debug, Clone, PartialEq)]
pub struct GridReport {
    /// Total capacity of active plants.
    pub capacity: f64,
    /// Grid load.
    pub load: f64,
    /// `load / capacity * 100`; non-finite when `capacity` is zero.
    pub utilization_pct: f64,
}

impl GridReport {
    /// Computes the report figures for a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            capacity: grid.active_capacity(),
            load: grid.load,
            utilization_pct: grid.utilization_pct(),
        }
    }
}

/// Renders `value` with two decimals; non-finite values as `+Inf`, `-Inf` or `NaN`.
fn format_pct(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{value:.2}")
    }
}

impl fmt::Display for GridReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, GRID_REPORT_TITLE)?;
        writeln!(f, "{:<LABEL_WIDTH$}{:.0}", "Capacity: ", self.capacity)?;
        writeln!(f, "{:<LABEL_WIDTH$}{:.0}", "Load: ", self.load)?;
        writeln!(
            f,
            "{:<LABEL_WIDTH$}{}%",
            "Utilization: ",
            format_pct(self.utilization_pct)
        )
    }
}

/// Computes and writes the grid report.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_grid_report(grid: &Grid, mut writer: impl Write) -> io::Result<()> {
    let report = GridReport::from_grid(grid);
    if !report.utilization_pct.is_finite() {
        warn!(
            capacity = report.capacity,
            load = report.load,
            "no active capacity, utilization is not finite"
        );
    }
    write!(writer, "{report}")?;
    writer.flush()
}
