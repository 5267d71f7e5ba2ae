//! CSV export for the plant catalog.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::grid::Grid;

/// Column header for catalog CSV export.
const HEADER: &str = "index,type,capacity,status";

/// Exports the grid's plants to a CSV file at the given path.
///
/// Writes a header row followed by one row per plant in catalog order.
///
/// # Arguments
///
/// * `grid` - Grid whose plants are exported
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(grid: &Grid, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(grid, buf)
}

/// Writes the grid's plants as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(grid: &Grid, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for (idx, p) in grid.plants.iter().enumerate() {
        wtr.write_record(&[
            idx.to_string(),
            p.plant_type.to_string(),
            format!("{:.0}", p.capacity),
            p.status.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;

    fn render(grid: &Grid) -> String {
        let mut buf = Vec::new();
        write_csv(grid, &mut buf).expect("csv export should succeed");
        String::from_utf8(buf).expect("csv should be valid UTF-8")
    }

    #[test]
    fn demo_catalog_rows() {
        let csv = render(&CatalogConfig::demo().into_grid());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "0,Hydro,300,Active");
        assert_eq!(lines[5], "4,Solar,45,Unavailable");
    }

    #[test]
    fn empty_grid_writes_header_only() {
        let csv = render(&Grid::new(0.0, Vec::new()));
        assert_eq!(csv, format!("{HEADER}\n"));
    }

    #[test]
    fn output_readable_by_csv_reader() {
        let csv = render(&CatalogConfig::demo().into_grid());
        let mut rdr = csv::ReaderBuilder::new().from_reader(csv.as_bytes());
        let capacities: Vec<f64> = rdr
            .records()
            .filter_map(Result::ok)
            .filter_map(|rec| rec.get(2).and_then(|c| c.parse().ok()))
            .collect();
        assert_eq!(capacities, vec![300.0, 30.0, 25.0, 35.0, 45.0, 40.0]);
    }
}
