// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// Photo set a query searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Set {
    #[default]
    Full,
    Public,
}

impl Set {
    pub const ALL: [Set; 2] = [Set::Full, Set::Public];

    pub fn as_str(&self) -> &'static str {
        match self {
            Set::Full => "full",
            Set::Public => "public",
        }
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image size the returned photo links point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    #[default]
    Original,
    Medium,
    Small,
    Thumbnail,
    Square,
    MiniSquare,
}

impl Size {
    pub const ALL: [Size; 6] = [
        Size::Original,
        Size::Medium,
        Size::Small,
        Size::Thumbnail,
        Size::Square,
        Size::MiniSquare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Original => "original",
            Size::Medium => "medium",
            Size::Small => "small",
            Size::Thumbnail => "thumbnail",
            Size::Square => "square",
            Size::MiniSquare => "mini_square",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
