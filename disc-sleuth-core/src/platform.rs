use serde::{Deserialize, Serialize};

/// Platform/console identifiers for the systems this workspace can detect.
///
/// Centralizes console identity (short names and display names) in one
/// place, so the magic-number table and the serial extractors agree on what
/// they report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    // Sony
    Ps1,
    Psp,

    // Nintendo
    GameCube,
    Wii,

    // Sega
    SegaCd,
    Saturn,
    Dreamcast,
}

impl Platform {
    /// Canonical short name used for identifiers and database keys.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Ps1 => "ps1",
            Self::Psp => "psp",
            Self::GameCube => "gc",
            Self::Wii => "wii",
            Self::SegaCd => "scd",
            Self::Saturn => "sat",
            Self::Dreamcast => "dc",
        }
    }

    /// Full display name for the platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ps1 => "Sony PlayStation",
            Self::Psp => "Sony PlayStation Portable",
            Self::GameCube => "Nintendo GameCube",
            Self::Wii => "Nintendo Wii",
            Self::SegaCd => "Sega CD / Mega CD",
            Self::Saturn => "Sega Saturn",
            Self::Dreamcast => "Sega Dreamcast",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
