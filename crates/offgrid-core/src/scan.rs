//! Library scan orchestration: parse, classify, and score every manifest.

use std::path::Path;

use chrono::Utc;
use log::{info, warn};

use crate::classify::classify;
use crate::manifest::{parse_manifest, read_manifest_text};
use crate::models::{AppKind, GameEntry, ScanFault, ScanReport};
use crate::risk::assess;
use crate::steam::list_manifests;

/// Scan one steamapps directory.
///
/// Each manifest is handled independently: a file that cannot be read or
/// parsed becomes a [`ScanFault`] and the batch moves on. Only records
/// classified as games are risk-scored.
pub fn scan_library(steamapps: &Path) -> ScanReport {
    let manifests = list_manifests(steamapps);
    info!(
        "found {} appmanifests under {}",
        manifests.len(),
        steamapps.display()
    );

    let mut report = ScanReport {
        scanned_at: Utc::now().to_rfc3339(),
        manifest_count: manifests.len(),
        games: Vec::new(),
        noise: Vec::new(),
        faults: Vec::new(),
    };

    for path in &manifests {
        let text = match read_manifest_text(path) {
            Ok(t) => t,
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                report.faults.push(ScanFault {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
                continue;
            }
        };

        let record = match parse_manifest(path, &text) {
            Ok(r) => r,
            Err(e) => {
                warn!("{e}");
                report.faults.push(ScanFault {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
                continue;
            }
        };

        match classify(&record.name) {
            AppKind::Noise => report.noise.push(record),
            AppKind::Game => {
                let risk = assess(&record.name);
                report.games.push(GameEntry { record, risk });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, file: &str, appid: &str, name: &str) {
        let text = format!(
            "\"AppState\"\n{{\n\t\"appid\"\t\t\"{appid}\"\n\t\"name\"\t\t\"{name}\"\n}}\n"
        );
        fs::write(dir.join(file), text).unwrap();
    }

    #[test]
    fn mixed_library_splits_into_games_noise_and_faults() {
        let tmp = TempDir::new().unwrap();
        write_manifest(tmp.path(), "appmanifest_220.acf", "220", "Half-Life 2");
        write_manifest(tmp.path(), "appmanifest_1070560.acf", "1070560", "Steam Linux Runtime");
        // Malformed: no name key. Sorts before the last good file, which
        // must still be processed.
        fs::write(
            tmp.path().join("appmanifest_300.acf"),
            "\"appid\"\t\"300\"\n",
        )
        .unwrap();
        write_manifest(tmp.path(), "appmanifest_990.acf", "990", "Destiny 2");

        let report = scan_library(tmp.path());

        assert_eq!(report.manifest_count, 4);
        assert_eq!(report.games.len(), 2);
        assert_eq!(report.noise.len(), 1);
        assert_eq!(report.faults.len(), 1);

        assert!(report.faults[0].path.ends_with("appmanifest_300.acf"));
        assert!(report.faults[0].message.contains("\"name\""));

        // Lexicographic manifest order carries into the report.
        assert_eq!(report.games[0].record.name, "Half-Life 2");
        assert_eq!(report.games[1].record.name, "Destiny 2");
        assert_eq!(report.games[1].risk.score, 80);
        assert_eq!(report.noise[0].app_id, "1070560");
    }

    #[test]
    fn empty_directory_yields_empty_report() {
        let tmp = TempDir::new().unwrap();
        let report = scan_library(tmp.path());
        assert_eq!(report.manifest_count, 0);
        assert!(report.games.is_empty());
        assert!(report.noise.is_empty());
        assert!(report.faults.is_empty());
    }

    #[test]
    fn noise_records_are_never_scored() {
        // The report type itself enforces this: noise entries carry no
        // RiskAssessment. Verify a noise-only library produces none.
        let tmp = TempDir::new().unwrap();
        write_manifest(tmp.path(), "appmanifest_1493710.acf", "1493710", "Proton Experimental");

        let report = scan_library(tmp.path());
        assert!(report.games.is_empty());
        assert_eq!(report.noise.len(), 1);
    }
}
