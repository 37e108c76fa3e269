use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A named camera destination: where to stand and what to face.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewPreset {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl ViewPreset {
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }
}

/// Preset library keyed by name. Serialises as a plain JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetTable {
    presets: HashMap<String, ViewPreset>,
}

impl PresetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, preset: ViewPreset) -> Option<ViewPreset> {
        self.presets.insert(name.into(), preset)
    }

    pub fn get(&self, name: &str) -> Option<ViewPreset> {
        self.presets.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Preset names in alphabetical order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Merge `other` into `self`; entries in `other` win.
    pub fn extend(&mut self, other: PresetTable) {
        self.presets.extend(other.presets);
    }
}

impl<S: Into<String>> FromIterator<(S, ViewPreset)> for PresetTable {
    fn from_iter<I: IntoIterator<Item = (S, ViewPreset)>>(iter: I) -> Self {
        Self {
            presets: iter.into_iter().map(|(name, preset)| (name.into(), preset)).collect(),
        }
    }
}
