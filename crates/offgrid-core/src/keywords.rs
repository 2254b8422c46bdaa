//! Static keyword tables driving classification and risk scoring.
//!
//! All matching is case-insensitive substring containment against the
//! lower-cased display name. The tables are closed lists; extending one is a
//! code change, not configuration.

/// Name fragments that mark a manifest as a support artifact rather than a
/// game: compatibility layers, runtimes, redistributables, anti-cheat
/// services, shader caches.
pub const NOISE_SIGNATURES: &[&str] = &[
    "proton",
    "steam linux runtime",
    "redistributables",
    "eas anti-cheat runtime",
    "easyanticheat runtime",
    "steamworks common redistributables",
    "vulkan shader",
    "compatibility tool",
];

/// Titles whose core loop is known to require live connectivity.
pub const ALWAYS_ONLINE_TITLES: &[&str] = &[
    "overwatch",
    "destiny",
    "warzone",
    "apex",
    "fortnite",
    "valorant",
    "the finals",
    "dead by daylight",
    "hitman world of assassination",
    "steep",
];

/// Generic terms implying multiplayer, seasonal, or live-service mechanics.
pub const ONLINE_FEATURE_KEYWORDS: &[&str] = &[
    "online",
    "multiplayer",
    "pvp",
    "mmo",
    "season",
    "battle pass",
    "live service",
];

/// Publisher and launcher brands that historically route through an
/// auxiliary online-capable client. Only fires when the brand is literally
/// part of the display name; titles that omit it score as offline-safe
/// (known gap, see risk module).
pub const LAUNCHER_KEYWORDS: &[&str] = &[
    "rockstar",
    "ubisoft",
    "ea",
    "origin",
    "uplay",
    "2k",
    "bethesda",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_lowercase() {
        // Matching lower-cases the name only, so table entries must already
        // be lower-case.
        for table in [
            NOISE_SIGNATURES,
            ALWAYS_ONLINE_TITLES,
            ONLINE_FEATURE_KEYWORDS,
            LAUNCHER_KEYWORDS,
        ] {
            for entry in table {
                assert_eq!(*entry, entry.to_lowercase(), "not lower-case: {entry}");
            }
        }
    }

    #[test]
    fn tables_have_no_empty_entries() {
        for table in [
            NOISE_SIGNATURES,
            ALWAYS_ONLINE_TITLES,
            ONLINE_FEATURE_KEYWORDS,
            LAUNCHER_KEYWORDS,
        ] {
            assert!(table.iter().all(|e| !e.is_empty()));
        }
    }
}
