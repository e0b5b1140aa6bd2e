// Ordinal scales used by the feature extractors.
//
// The integer levels are only an approximation: the distance between B1 and C2
// is not "3 units" in any real sense, but the classifier can still exploit the
// ordering. Absent or unrecognized values always map to level 0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub trait Ordinal: Copy {
    fn level(self) -> i32;
}

/// Level of an optional value, 0 when absent.
pub fn level_of<T: Ordinal>(value: Option<T>) -> i32 {
    value.map_or(0, Ordinal::level)
}

/// A scale value as the raw record gave it.
///
/// `Other` keeps a value that was stated but is not on the scale, so it can be
/// told apart from a field that was never filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stated<T> {
    Absent,
    Known(T),
    Other(String),
}

impl<T> Default for Stated<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: Ordinal> Stated<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// 0 unless the value is on the scale.
    pub fn level(&self) -> i32 {
        level_of(self.known())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    Midlevel,
    Senior,
}

impl Ordinal for Seniority {
    fn level(self) -> i32 {
        match self {
            Self::Junior => 1,
            Self::Midlevel => 2,
            Self::Senior => 3,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Degree {
    Apprenticeship,
    Bachelor,
    Master,
    Doctorate,
}

impl Ordinal for Degree {
    fn level(self) -> i32 {
        match self {
            Self::Apprenticeship => 1,
            Self::Bachelor => 2,
            Self::Master => 3,
            Self::Doctorate => 4,
        }
    }
}

/// CEFR proficiency, A1 (lowest) to C2 (highest).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum LanguageRating {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl Ordinal for LanguageRating {
    fn level(self) -> i32 {
        match self {
            Self::A1 => 1,
            Self::A2 => 2,
            Self::B1 => 3,
            Self::B2 => 4,
            Self::C1 => 5,
            Self::C2 => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn levels_are_consecutive_and_follow_declaration_order() {
        let seniority: Vec<i32> = Seniority::iter().map(Ordinal::level).collect();
        assert_eq!(seniority, vec![1, 2, 3]);
        let degree: Vec<i32> = Degree::iter().map(Ordinal::level).collect();
        assert_eq!(degree, vec![1, 2, 3, 4]);
        let rating: Vec<i32> = LanguageRating::iter().map(Ordinal::level).collect();
        assert_eq!(rating, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn parses_raw_spelling() {
        assert_eq!(Seniority::from_str("midlevel").unwrap(), Seniority::Midlevel);
        assert_eq!(Degree::from_str("doctorate").unwrap(), Degree::Doctorate);
        assert_eq!(LanguageRating::from_str("B2").unwrap(), LanguageRating::B2);
        assert!(Seniority::from_str("none").is_err());
        assert!(LanguageRating::from_str("native").is_err());
    }

    #[test]
    fn absent_maps_to_zero() {
        assert_eq!(level_of::<Degree>(None), 0);
        assert_eq!(level_of(Some(Degree::Master)), 3);
    }

    #[test]
    fn off_scale_value_is_stated_but_level_zero() {
        let other: Stated<Seniority> = Stated::Other("principal".to_string());
        assert!(!other.is_absent());
        assert_eq!(other.level(), 0);
        assert_eq!(Stated::Known(Seniority::Senior).level(), 3);
        assert!(Stated::<Seniority>::Absent.is_absent());
    }
}
