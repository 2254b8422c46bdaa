use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use offgrid_core::models::{RiskAssessment, ScanReport};
use offgrid_core::{config, risk, scan, steam};

mod output;

#[derive(Parser)]
#[command(
    name = "offgrid",
    about = "offgrid — offline playability audit for your Steam library"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the Steam library and score every game
    Scan {
        /// Steam root directory (auto-detected if omitted)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output format (rich, json)
        #[arg(long)]
        format: Option<String>,

        /// Write output to file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also list runtime/support entries excluded from scoring
        #[arg(long)]
        show_noise: bool,
    },

    /// Score one or more titles by name, without touching the filesystem
    Risk {
        /// Title names to assess
        #[arg(required = true)]
        names: Vec<String>,

        /// Output format (rich, json)
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Scan {
            root,
            format,
            output,
            show_noise,
        }) => cmd_scan(root, format, output, show_noise),
        Some(Commands::Risk { names, format }) => cmd_risk(&names, format),
        None => {
            // Default: full scan with defaults
            cmd_scan(None, None, None, false)
        }
    }
}

fn cmd_scan(
    root: Option<PathBuf>,
    format: Option<String>,
    output_path: Option<PathBuf>,
    show_noise: bool,
) -> Result<()> {
    let cfg = config::load_config();

    let root = match root.or(cfg.steam_root) {
        Some(r) => r,
        None => steam::find_steam_root()?,
    };
    let steamapps = steam::steamapps_dir(&root);

    let report = scan::scan_library(&steamapps);
    let format = format.or(cfg.format).unwrap_or_else(|| "rich".to_string());

    match format.as_str() {
        "json" => {
            if let Some(path) = output_path {
                write_report_file(&report, &path)?;
            } else {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        _ => {
            output::print_scan_report(&report, show_noise);
            // File output is always the JSON artifact.
            if let Some(path) = output_path {
                write_report_file(&report, &path)?;
            }
        }
    }

    Ok(())
}

fn write_report_file(report: &ScanReport, path: &std::path::Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    eprintln!("Output written to {}", path.display());
    Ok(())
}

fn cmd_risk(names: &[String], format: Option<String>) -> Result<()> {
    let format = format.unwrap_or_else(|| "rich".to_string());
    let assessments: Vec<(&String, RiskAssessment)> =
        names.iter().map(|n| (n, risk::assess(n))).collect();

    if format == "json" {
        let data: Vec<serde_json::Value> = assessments
            .iter()
            .map(|(name, risk)| {
                serde_json::json!({
                    "name": name,
                    "risk": risk,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        for (name, risk) in &assessments {
            output::print_risk_assessment(name, risk);
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_file_is_parseable_json() {
        let report = ScanReport {
            scanned_at: "2024-01-01T00:00:00Z".to_string(),
            manifest_count: 1,
            games: vec![],
            noise: vec![],
            faults: vec![],
        };

        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        write_report_file(&report, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let back: ScanReport = serde_json::from_str(&content).expect("file holds valid JSON");
        assert_eq!(back.manifest_count, 1);
        assert_eq!(back.scanned_at, "2024-01-01T00:00:00Z");
    }
}
