//! Enumerations shared by releases and SPRs

use serde::{Deserialize, Serialize};

/// Operational zone a release or SPR belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Territory {
    CetcWest,
    Hudson,
    Sed,
    Ned,
    Chicago,
    Pscc,
    Unified,
}

impl Territory {
    pub const ALL: [Territory; 7] = [
        Territory::CetcWest,
        Territory::Hudson,
        Territory::Sed,
        Territory::Ned,
        Territory::Chicago,
        Territory::Pscc,
        Territory::Unified,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Territory::CetcWest => "CETC_WEST",
            Territory::Hudson => "HUDSON",
            Territory::Sed => "SED",
            Territory::Ned => "NED",
            Territory::Chicago => "CHICAGO",
            Territory::Pscc => "PSCC",
            Territory::Unified => "UNIFIED",
        }
    }

    /// Human readable name shown in the board.
    pub fn label(self) -> &'static str {
        match self {
            Territory::CetcWest => "CETC WEST",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for Territory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Territory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CETC_WEST" | "CETC WEST" => Ok(Territory::CetcWest),
            "HUDSON" => Ok(Territory::Hudson),
            "SED" => Ok(Territory::Sed),
            "NED" => Ok(Territory::Ned),
            "CHICAGO" => Ok(Territory::Chicago),
            "PSCC" => Ok(Territory::Pscc),
            "UNIFIED" => Ok(Territory::Unified),
            _ => Err(format!("Invalid territory: {}", s)),
        }
    }
}

/// SPR urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Showstopper,
    Emergency,
    High,
    Low,
    Routine,
    Defer,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Showstopper => "SHOWSTOPPER",
            Priority::Emergency => "EMERGENCY",
            Priority::High => "HIGH",
            Priority::Low => "LOW",
            Priority::Routine => "ROUTINE",
            Priority::Defer => "DEFER",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHOWSTOPPER" => Ok(Priority::Showstopper),
            "EMERGENCY" => Ok(Priority::Emergency),
            "HIGH" => Ok(Priority::High),
            "LOW" => Ok(Priority::Low),
            "ROUTINE" => Ok(Priority::Routine),
            "DEFER" => Ok(Priority::Defer),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

/// Lifecycle state of an SPR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    New,
    Released,
    Duplicate,
    Tested,
    Fixed,
    PartiallyFixed,
    Reviewed,
    CannotReproduce,
}

impl Resolution {
    /// Resolutions that take an SPR off the open list.
    pub const CLOSED: [Resolution; 5] = [
        Resolution::Released,
        Resolution::CannotReproduce,
        Resolution::Tested,
        Resolution::Reviewed,
        Resolution::Fixed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::New => "NEW",
            Resolution::Released => "RELEASED",
            Resolution::Duplicate => "DUPLICATE",
            Resolution::Tested => "TESTED",
            Resolution::Fixed => "FIXED",
            Resolution::PartiallyFixed => "PARTIALLY_FIXED",
            Resolution::Reviewed => "REVIEWED",
            Resolution::CannotReproduce => "CANNOT_REPRODUCE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Resolution::PartiallyFixed => "PARTIALLY FIXED",
            Resolution::CannotReproduce => "CANNOT REPRODUCE",
            other => other.as_str(),
        }
    }

    pub fn is_closed(self) -> bool {
        Self::CLOSED.contains(&self)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Resolution::New),
            "RELEASED" => Ok(Resolution::Released),
            "DUPLICATE" => Ok(Resolution::Duplicate),
            "TESTED" => Ok(Resolution::Tested),
            "FIXED" => Ok(Resolution::Fixed),
            "PARTIALLY_FIXED" | "PARTIALLY FIXED" => Ok(Resolution::PartiallyFixed),
            "REVIEWED" => Ok(Resolution::Reviewed),
            "CANNOT_REPRODUCE" | "CANNOT REPRODUCE" => Ok(Resolution::CannotReproduce),
            _ => Err(format!("Invalid resolution: {}", s)),
        }
    }
}
