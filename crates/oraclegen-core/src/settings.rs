//! Structural settings and the space of their valid combinations
//!
//! A [`Settings`] value enables a subset of [`SETTINGS`]. Flags listed
//! together in [`INCOMPATIBLE`] may never all be enabled at once; this is
//! enforced both when enumerating and when constructing directly.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Flag names in declaration order. Suffixes and display names follow it.
pub const SETTINGS: [&str; 3] = ["implicit", "linkage", "unlabeled"];

/// Groups of flags that must not be enabled together.
pub const INCOMPATIBLE: &[(&str, &str)] = &[("linkage", "unlabeled")];

/// Effective value of one flag once applied to the parser configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingValue {
    Flag(bool),
    /// `None` tracks every node label; `Some(vec![])` tracks none.
    Labels(Option<Vec<String>>),
}

pub type Overrides = BTreeMap<&'static str, SettingValue>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Settings {
    enabled: [bool; SETTINGS.len()],
}

impl Settings {
    /// Build settings from enabled flag names. Order and duplicates don't matter.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut enabled = [false; SETTINGS.len()];
        for name in names {
            let name = name.as_ref();
            let idx = SETTINGS
                .iter()
                .position(|s| *s == name)
                .ok_or_else(|| Error::UnknownSetting(name.to_string()))?;
            enabled[idx] = true;
        }
        let settings = Self { enabled };
        match settings.conflict() {
            Some((first, second)) => Err(Error::IncompatibleSettings { first, second }),
            None => Ok(settings),
        }
    }

    /// Every valid combination, smallest first.
    pub fn enumerate_all() -> AllSettings {
        AllSettings::default()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        SETTINGS
            .iter()
            .position(|s| *s == name)
            .is_some_and(|idx| self.enabled[idx])
    }

    pub fn active_names(&self) -> Vec<&'static str> {
        SETTINGS
            .iter()
            .zip(self.enabled)
            .filter_map(|(name, on)| on.then_some(*name))
            .collect()
    }

    /// `""`, or `_` followed by the `_`-joined active names.
    pub fn suffix(&self) -> String {
        self.active_names()
            .iter()
            .map(|name| format!("_{}", name))
            .collect()
    }

    pub fn display_name(&self) -> String {
        let names = self.active_names();
        if names.is_empty() {
            "default".to_string()
        } else {
            names.join("-")
        }
    }

    pub fn to_overrides(&self) -> Overrides {
        SETTINGS
            .iter()
            .zip(self.enabled)
            .map(|(name, on)| (*name, value_of(name, on)))
            .collect()
    }

    fn conflict(&self) -> Option<(&'static str, &'static str)> {
        INCOMPATIBLE
            .iter()
            .find(|(a, b)| self.is_enabled(a) && self.is_enabled(b))
            .copied()
    }

    fn from_indices(indices: &[usize]) -> Self {
        let mut enabled = [false; SETTINGS.len()];
        for &i in indices {
            enabled[i] = true;
        }
        Self { enabled }
    }
}

fn value_of(name: &str, enabled: bool) -> SettingValue {
    match name {
        "unlabeled" => SettingValue::Labels(enabled.then(Vec::new)),
        _ => SettingValue::Flag(enabled),
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Parses `"implicit,linkage"`; `""` and `"default"` give the empty settings.
impl FromStr for Settings {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s == "default" {
            return Ok(Self::default());
        }
        Self::new(s.split(',').map(str::trim).filter(|n| !n.is_empty()))
    }
}

/// Lazy walk over flag combinations by size, then in lexicographic index order.
/// Cloning restarts from the clone's position.
#[derive(Clone, Debug, Default)]
pub struct AllSettings {
    size: usize,
    combo: Option<Vec<usize>>,
}

impl AllSettings {
    fn advance(&mut self) -> Option<Vec<usize>> {
        loop {
            if self.size > SETTINGS.len() {
                return None;
            }
            match self.combo.take() {
                None => {
                    let first: Vec<usize> = (0..self.size).collect();
                    self.combo = Some(first.clone());
                    return Some(first);
                }
                Some(mut combo) => {
                    if next_combination(&mut combo, SETTINGS.len()) {
                        self.combo = Some(combo.clone());
                        return Some(combo);
                    }
                    self.size += 1;
                }
            }
        }
    }
}

impl Iterator for AllSettings {
    type Item = Settings;

    fn next(&mut self) -> Option<Settings> {
        loop {
            let combo = self.advance()?;
            let settings = Settings::from_indices(&combo);
            if settings.conflict().is_none() {
                return Some(settings);
            }
        }
    }
}

fn next_combination(combo: &mut [usize], n: usize) -> bool {
    let k = combo.len();
    for i in (0..k).rev() {
        if combo[i] < n - k + i {
            combo[i] += 1;
            for j in i + 1..k {
                combo[j] = combo[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_follow_size_then_lex_order() {
        let mut combo = vec![0, 1];
        assert!(next_combination(&mut combo, 3));
        assert_eq!(combo, vec![0, 2]);
        assert!(next_combination(&mut combo, 3));
        assert_eq!(combo, vec![1, 2]);
        assert!(!next_combination(&mut combo, 3));
    }

    #[test]
    fn empty_combination_has_no_successor() {
        assert!(!next_combination(&mut [], 3));
    }

    #[test]
    fn unlabeled_value_table() {
        assert_eq!(value_of("unlabeled", false), SettingValue::Labels(None));
        assert_eq!(value_of("unlabeled", true), SettingValue::Labels(Some(vec![])));
        assert_eq!(value_of("implicit", true), SettingValue::Flag(true));
    }
}
