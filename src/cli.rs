use std::env;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct CliOptions {
    pub catalog: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
    pub help: bool,
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(&args)
}

pub fn parse_args_from(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut opts = CliOptions::default();

    while i < args.len() {
        match args[i].as_str() {
            "--catalog" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --catalog (expected a TOML or JSON file path)",
                )?;
                if opts.catalog.replace(PathBuf::from(path)).is_some() {
                    return Err("--catalog provided more than once".to_string());
                }
            }
            "--export-csv" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --export-csv (expected a file path)")?;
                if opts.export_csv.replace(PathBuf::from(path)).is_some() {
                    return Err("--export-csv provided more than once".to_string());
                }
            }
            "--help" | "-h" => opts.help = true,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(opts)
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("grid-report - power plant and grid utilization reports");
    eprintln!();
    eprintln!("Usage: grid-report [--catalog <path>] [--export-csv <path>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --catalog <path>      Load plants from a TOML or JSON catalog file");
    eprintln!("  --export-csv <path>   Write the catalog to CSV before showing the menu");
    eprintln!("  --help                Show this help message");
    eprintln!();
    eprintln!("Without --catalog the built-in six-plant catalog is used.");
    eprintln!("Log verbosity follows RUST_LOG (default: warn).");
}
