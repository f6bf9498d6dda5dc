use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of node colors. Serialized by name, never by a derived value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Purple,
    Green,
    Amber,
    Rose,
    Cyan,
    Orange,
    Indigo,
}

impl Color {
    /// Palette order, as offered by the color picker.
    pub const ALL: [Color; 8] = [
        Color::Blue,
        Color::Purple,
        Color::Green,
        Color::Amber,
        Color::Rose,
        Color::Cyan,
        Color::Orange,
        Color::Indigo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Green => "green",
            Color::Amber => "amber",
            Color::Rose => "rose",
            Color::Cyan => "cyan",
            Color::Orange => "orange",
            Color::Indigo => "indigo",
        }
    }

    /// Next entry in palette order, wrapping around.
    pub fn next(self) -> Color {
        let idx = Color::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Color::ALL[(idx + 1) % Color::ALL.len()]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown palette color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
