use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DalError;

/// Fielding position of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Pitcher,
    Catcher,
    #[serde(rename = "First Base")]
    FirstBase,
    #[serde(rename = "Second Base")]
    SecondBase,
    #[serde(rename = "Third Base")]
    ThirdBase,
    Shortstop,
    #[serde(rename = "Left Field")]
    LeftField,
    #[serde(rename = "Center Field")]
    CenterField,
    #[serde(rename = "Right Field")]
    RightField,
    #[serde(rename = "Designated Hitter")]
    DesignatedHitter,
}

impl Position {
    pub const ALL: [Position; 10] = [
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
        Position::DesignatedHitter,
    ];

    /// Display name, also used as the stored value
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Pitcher => "Pitcher",
            Position::Catcher => "Catcher",
            Position::FirstBase => "First Base",
            Position::SecondBase => "Second Base",
            Position::ThirdBase => "Third Base",
            Position::Shortstop => "Shortstop",
            Position::LeftField => "Left Field",
            Position::CenterField => "Center Field",
            Position::RightField => "Right Field",
            Position::DesignatedHitter => "Designated Hitter",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = DalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DalError::InvalidValue {
                field: "position",
                value: s.to_string(),
            })
    }
}
