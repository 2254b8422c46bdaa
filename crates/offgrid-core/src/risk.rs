//! Offline-playability risk heuristic.
//!
//! A transparent, auditable rule table rather than a trained classifier:
//! every point of score traces to one human-readable reason. Hits across and
//! within tiers accumulate; the running sum is clamped to [0, 100] at the
//! end.
//!
//! Known gap, preserved on purpose: launcher-backed titles are recognized
//! only when the publisher brand is literally part of the display name.
//! "Grand Theft Auto V" carries no "rockstar" substring and therefore scores
//! as fully offline-safe.

use crate::keywords::{ALWAYS_ONLINE_TITLES, LAUNCHER_KEYWORDS, ONLINE_FEATURE_KEYWORDS};
use crate::models::{RiskAssessment, RiskLabel};

/// Every title starts here: save sync, DRM check-in, and optional online
/// features carry some residual risk even for single-player games.
const BASELINE_SCORE: i32 = 10;

const ALWAYS_ONLINE_POINTS: i32 = 70;
const ONLINE_KEYWORD_POINTS: i32 = 50;
const LAUNCHER_POINTS: i32 = 25;

const ALWAYS_ONLINE_REASON: &str = "live service or always-online title";
const ONLINE_KEYWORD_REASON: &str =
    "name advertises online play; offline use possible but unlikely";
const LAUNCHER_REASON: &str = "third-party launcher publisher; offline play may still work";

/// Score a display name for offline-playability risk.
pub fn assess(name: &str) -> RiskAssessment {
    let lowered = name.to_lowercase();
    let mut score = BASELINE_SCORE;
    let mut reasons = Vec::new();

    for title in ALWAYS_ONLINE_TITLES {
        if lowered.contains(title) {
            score += ALWAYS_ONLINE_POINTS;
            reasons.push(ALWAYS_ONLINE_REASON.to_string());
        }
    }

    for keyword in ONLINE_FEATURE_KEYWORDS {
        if lowered.contains(keyword) {
            score += ONLINE_KEYWORD_POINTS;
            reasons.push(ONLINE_KEYWORD_REASON.to_string());
        }
    }

    for launcher in LAUNCHER_KEYWORDS {
        if lowered.contains(launcher) {
            score += LAUNCHER_POINTS;
            reasons.push(LAUNCHER_REASON.to_string());
        }
    }

    // Additive-only construction: only the upper bound is reachable, but
    // clamp both ends anyway.
    let score = score.clamp(0, 100) as u32;

    RiskAssessment {
        score,
        label: RiskLabel::from_score(score),
        reasons,
    }
}
