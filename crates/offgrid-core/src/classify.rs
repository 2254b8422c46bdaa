//! Separate real games from runtime/support artifacts.
//!
//! A Steam library directory mixes games with Proton builds, runtimes,
//! redistributable bundles, and shader caches. Only games are worth risk
//! scoring.

use crate::keywords::NOISE_SIGNATURES;
use crate::models::AppKind;

/// Classify a display name.
///
/// Case-insensitive substring containment against [`NOISE_SIGNATURES`]; any
/// single hit suffices. Stateless and recomputable at any time.
pub fn classify(name: &str) -> AppKind {
    let lowered = name.to_lowercase();
    if NOISE_SIGNATURES.iter().any(|sig| lowered.contains(sig)) {
        AppKind::Noise
    } else {
        AppKind::Game
    }
}
