//! A single named shade.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Which half of the palette a shade belongs to.
///
/// Natural shades are colors hair grows in; fashion shades are dyed
/// colors. The matcher leans toward natural shades when the two are close
/// (see [`MatchOptions::bias_margin`](crate::MatchOptions::bias_margin)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadeGroup {
    #[default]
    Natural,
    Fashion,
}

impl ShadeGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            ShadeGroup::Natural => "natural",
            ShadeGroup::Fashion => "fashion",
        }
    }
}

impl fmt::Display for ShadeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShadeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "natural" => Ok(ShadeGroup::Natural),
            "fashion" => Ok(ShadeGroup::Fashion),
            other => Err(format!("unknown shade group: {other}")),
        }
    }
}

/// A named reference color with descriptive text.
///
/// Entries are authored once and never mutated. `name` is expected to be
/// unique within a palette but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadeEntry {
    /// Short identifier, e.g. `N3` or `F1`
    pub id: String,
    /// Display name
    pub name: String,
    /// Reference color
    pub color: Color,
    /// Flavor text
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub group: ShadeGroup,
}

impl ShadeEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: Color,
        description: impl Into<String>,
        group: ShadeGroup,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            description: description.into(),
            group,
        }
    }

    /// Shorthand for a natural-group entry.
    pub fn natural(id: &str, name: &str, color: Color, description: &str) -> Self {
        Self::new(id, name, color, description, ShadeGroup::Natural)
    }

    /// Shorthand for a fashion-group entry.
    pub fn fashion(id: &str, name: &str, color: Color, description: &str) -> Self {
        Self::new(id, name, color, description, ShadeGroup::Fashion)
    }
}
