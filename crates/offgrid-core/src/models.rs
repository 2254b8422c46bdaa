use serde::{Deserialize, Serialize};

/// One installed application, parsed from its appmanifest file.
///
/// Immutable once constructed; a record only exists if both fields were
/// successfully extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    /// Steam's app id, kept as the literal manifest token.
    pub app_id: String,
    /// Human-readable display name.
    pub name: String,
}

/// Whether a manifest names a real game or a support artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    Game,
    Noise,
}

impl AppKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Noise => "noise",
        }
    }
}

impl std::fmt::Display for AppKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offline-playability verdict derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    LikelyOffline,
    RiskyOffline,
    UnlikelyOffline,
}

impl RiskLabel {
    /// Map a clamped score to its verdict. The three brackets partition
    /// [0, 100] with closed upper bounds.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=25 => Self::LikelyOffline,
            26..=60 => Self::RiskyOffline,
            _ => Self::UnlikelyOffline,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LikelyOffline => "Likely Offline",
            Self::RiskyOffline => "Risky Offline",
            Self::UnlikelyOffline => "Unlikely Offline",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic estimate of a title's online dependency.
///
/// `reasons` may carry near-duplicate entries when several phrases from the
/// same tier match; every point of score traces to one entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0 (safest offline) to 100 (most likely online-only).
    pub score: u32,
    pub label: RiskLabel,
    pub reasons: Vec<String>,
}

/// A game record together with its risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEntry {
    #[serde(flatten)]
    pub record: AppRecord,
    pub risk: RiskAssessment,
}

/// A manifest that could not be parsed. The failure is local to this file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanFault {
    pub path: String,
    pub message: String,
}

/// Result of scanning one steamapps directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub scanned_at: String,
    pub manifest_count: usize,
    pub games: Vec<GameEntry>,
    pub noise: Vec<AppRecord>,
    pub faults: Vec<ScanFault>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_label_as_str() {
        assert_eq!(RiskLabel::LikelyOffline.as_str(), "Likely Offline");
        assert_eq!(RiskLabel::RiskyOffline.as_str(), "Risky Offline");
        assert_eq!(RiskLabel::UnlikelyOffline.as_str(), "Unlikely Offline");
    }

    #[test]
    fn risk_label_boundaries() {
        // Exact boundary values for each bracket
        assert_eq!(RiskLabel::from_score(0), RiskLabel::LikelyOffline);
        assert_eq!(RiskLabel::from_score(25), RiskLabel::LikelyOffline);
        assert_eq!(RiskLabel::from_score(26), RiskLabel::RiskyOffline);
        assert_eq!(RiskLabel::from_score(60), RiskLabel::RiskyOffline);
        assert_eq!(RiskLabel::from_score(61), RiskLabel::UnlikelyOffline);
        assert_eq!(RiskLabel::from_score(100), RiskLabel::UnlikelyOffline);
    }

    #[test]
    fn app_kind_display() {
        assert_eq!(format!("{}", AppKind::Game), "game");
        assert_eq!(format!("{}", AppKind::Noise), "noise");
    }

    #[test]
    fn game_entry_serializes_flattened() {
        let entry = GameEntry {
            record: AppRecord {
                app_id: "440".to_string(),
                name: "Team Fortress 2".to_string(),
            },
            risk: RiskAssessment {
                score: 60,
                label: RiskLabel::RiskyOffline,
                reasons: vec!["name advertises online play".to_string()],
            },
        };

        let json = serde_json::to_string(&entry).expect("serialize GameEntry");
        assert!(json.contains("\"app_id\":\"440\""));
        assert!(json.contains("\"label\":\"risky_offline\""));

        let back: GameEntry = serde_json::from_str(&json).expect("deserialize GameEntry");
        assert_eq!(back.record.name, "Team Fortress 2");
        assert_eq!(back.risk.score, 60);
    }

    #[test]
    fn scan_report_round_trip() {
        let report = ScanReport {
            scanned_at: "2024-01-01T00:00:00Z".to_string(),
            manifest_count: 2,
            games: vec![],
            noise: vec![AppRecord {
                app_id: "1070560".to_string(),
                name: "Steam Linux Runtime".to_string(),
            }],
            faults: vec![ScanFault {
                path: "/tmp/appmanifest_9.acf".to_string(),
                message: "no \"name\" entry".to_string(),
            }],
        };

        let json = serde_json::to_string(&report).expect("serialize ScanReport");
        let back: ScanReport = serde_json::from_str(&json).expect("deserialize ScanReport");
        assert_eq!(back.manifest_count, 2);
        assert_eq!(back.noise.len(), 1);
        assert_eq!(back.faults.len(), 1);
    }
}
