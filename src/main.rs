//! grid-report entry point: CLI wiring, catalog loading, and the menu.

use std::io;
use std::process;

use tracing::{debug, warn};

use grid_report::cli::{parse_args, print_usage};
use grid_report::config::CatalogConfig;
use grid_report::io::export::export_csv;
use grid_report::logging::init_logging;
use grid_report::menu;

fn main() {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            print_usage();
            process::exit(1);
        }
    };
    if cli.help {
        print_usage();
        return;
    }

    init_logging();

    // Load catalog: --catalog file if given, else the built-in demo
    let catalog = if let Some(ref path) = cli.catalog {
        match CatalogConfig::from_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        CatalogConfig::demo()
    };

    let errors = catalog.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let grid = catalog.into_grid();
    debug!(plants = grid.plants.len(), load = grid.load, "catalog ready");

    if let Some(ref path) = cli.export_csv {
        if let Err(e) = export_csv(&grid, path) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Catalog written to {}", path.display());
    }

    let stdin = io::stdin();
    // Menu outcomes always exit 0, including a stdout that cannot be written.
    if let Err(e) = menu::run(&grid, stdin.lock(), io::stdout().lock()) {
        warn!(error = %e, "failed to write report");
    }
}
