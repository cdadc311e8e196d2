//! The shade table and its built-in contents.

use serde::{Deserialize, Serialize};

use super::shade::{ShadeEntry, ShadeGroup};
use crate::color::Color;

/// An ordered, read-only table of shades.
///
/// Iteration order is authoring order. The matcher relies on it for
/// tie-breaking, so entries are never sorted or deduplicated.
///
/// An empty palette can be constructed; matching against it fails with
/// [`MatchError::NoPalette`](crate::MatchError::NoPalette).
///
/// # Example
///
/// ```
/// use shade_match::{ShadeGroup, ShadePalette};
///
/// let palette = ShadePalette::builtin();
/// assert!(palette.is_grouped());
/// assert_eq!(palette.get("N3").unwrap().name, "Medium Copper");
/// assert!(palette.group(ShadeGroup::Fashion).count() > 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShadePalette {
    entries: Vec<ShadeEntry>,
}

impl ShadePalette {
    pub fn new(entries: Vec<ShadeEntry>) -> Self {
        Self { entries }
    }

    /// The hand-authored default palette of copper and fashion-red shades.
    pub fn builtin() -> Self {
        let entries = BUILTIN_SHADES
            .iter()
            .map(|&(id, name, rgb, description, group)| {
                ShadeEntry::new(id, name, Color::from_bytes(rgb), description, group)
            })
            .collect();
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShadeEntry> {
        self.entries.iter()
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&ShadeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries of one group, in palette order.
    pub fn group(&self, group: ShadeGroup) -> impl Iterator<Item = &ShadeEntry> + '_ {
        self.entries.iter().filter(move |e| e.group == group)
    }

    pub fn has_group(&self, group: ShadeGroup) -> bool {
        self.entries.iter().any(|e| e.group == group)
    }

    /// True when both natural and fashion entries are present.
    pub fn is_grouped(&self) -> bool {
        self.has_group(ShadeGroup::Natural) && self.has_group(ShadeGroup::Fashion)
    }
}

impl From<Vec<ShadeEntry>> for ShadePalette {
    fn from(entries: Vec<ShadeEntry>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a ShadePalette {
    type Item = &'a ShadeEntry;
    type IntoIter = std::slice::Iter<'a, ShadeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

type BuiltinShade = (&'static str, &'static str, [u8; 3], &'static str, ShadeGroup);

#[rustfmt::skip]
const BUILTIN_SHADES: &[BuiltinShade] = &[
    ("N1", "Light Copper Blonde",      [0xED, 0xA5, 0x7C], "A true light copper tone with soft vibrancy.", ShadeGroup::Natural),
    ("N2", "Very Light Copper Blonde", [0xF8, 0xBF, 0x9A], "A soft strawberry blonde with dimension.", ShadeGroup::Natural),
    ("N3", "Medium Copper",            [0xC9, 0x69, 0x4A], "Classic midtone redhead shade with depth.", ShadeGroup::Natural),
    ("N4", "Dark Copper Red",          [0xA9, 0x40, 0x2C], "Rich auburn tones with dark copper intensity.", ShadeGroup::Natural),
    ("N5", "Auburn",                   [0x7E, 0x3A, 0x26], "Deep brown-red with a quiet copper glow.", ShadeGroup::Natural),
    ("N6", "Chestnut Red",             [0x5C, 0x2E, 0x22], "Dark brunette base with red catching the light.", ShadeGroup::Natural),
    ("F1", "Fire Engine Red",          [0xC2, 0x18, 0x07], "Saturated primary red with no brown undertone.", ShadeGroup::Fashion),
    ("F2", "Cherry Cola",              [0x6B, 0x1E, 0x26], "Red-violet over a cola-brown base.", ShadeGroup::Fashion),
    ("F3", "Rose Gold",                [0xE8, 0xA0, 0xA0], "Pink-washed blonde with a metallic sheen.", ShadeGroup::Fashion),
    ("F4", "Neon Orange",              [0xFF, 0x6A, 0x1A], "High-voltage orange that no follicle grows.", ShadeGroup::Fashion),
];
