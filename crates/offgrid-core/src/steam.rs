//! Locate the Steam installation and enumerate appmanifest files.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

/// Candidate Steam roots, relative to $HOME. First existing directory wins.
const ROOT_CANDIDATES: &[&str] = &[".local/share/Steam", ".steam/steam"];

/// No Steam root exists among the known candidate locations. Fatal to the
/// whole run; there is no per-file recovery from this one.
#[derive(Debug, thiserror::Error)]
#[error("Steam root not found (checked ~/.local/share/Steam and ~/.steam/steam)")]
pub struct SteamRootNotFound;

/// Find the Steam root on this machine.
pub fn find_steam_root() -> Result<PathBuf, SteamRootNotFound> {
    let home = std::env::var("HOME")
        .map(PathBuf::from)
        .map_err(|_| SteamRootNotFound)?;
    let candidates: Vec<PathBuf> = ROOT_CANDIDATES.iter().map(|c| home.join(c)).collect();
    first_existing_root(&candidates)
}

/// Return the first candidate that is a directory.
pub fn first_existing_root(candidates: &[PathBuf]) -> Result<PathBuf, SteamRootNotFound> {
    for candidate in candidates {
        debug!("checking Steam root candidate {}", candidate.display());
        if candidate.is_dir() {
            return Ok(candidate.clone());
        }
    }
    Err(SteamRootNotFound)
}

/// The steamapps directory under a Steam root.
pub fn steamapps_dir(root: &Path) -> PathBuf {
    root.join("steamapps")
}

/// Enumerate `appmanifest_<digits>.acf` files directly under `steamapps`,
/// lexicographically sorted.
///
/// Sort order only affects presentation order downstream, never results.
pub fn list_manifests(steamapps: &Path) -> Vec<PathBuf> {
    let mut manifests = Vec::new();

    for entry in WalkDir::new(steamapps).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("error reading directory entry: {e}");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_manifest_name(&entry.file_name().to_string_lossy()) {
            manifests.push(path.to_path_buf());
        }
    }

    manifests.sort();
    manifests
}

/// `appmanifest_<digits>.acf`, nothing else.
fn is_manifest_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("appmanifest_") else {
        return false;
    };
    let Some(id) = rest.strip_suffix(".acf") else {
        return false;
    };
    !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
}
