use anyhow::{Error, bail};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::config::GRADE_LETTERS;

/// Item condition of a listing. Codes form the closed set 0..=5, 5 being the best.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum ConditionGrade {
    J = 0,
    D = 1,
    C = 2,
    B = 3,
    A = 4,
    S = 5,
}

impl ConditionGrade {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Display letter, looked up in the shared grade table.
    pub fn letter(self) -> &'static str {
        GRADE_LETTERS[self.code() as usize]
    }
}

impl TryFrom<u8> for ConditionGrade {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => ConditionGrade::J,
            1 => ConditionGrade::D,
            2 => ConditionGrade::C,
            3 => ConditionGrade::B,
            4 => ConditionGrade::A,
            5 => ConditionGrade::S,
            other => bail!("Unknown item condition code {} (expected 0..=5)", other),
        })
    }
}

impl From<ConditionGrade> for u8 {
    fn from(grade: ConditionGrade) -> Self {
        grade.code()
    }
}

impl std::fmt::Display for ConditionGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_map_to_letters() {
        let letters: Vec<&str> = ConditionGrade::iter().map(|g| g.letter()).collect();
        assert_eq!(letters, vec!["J", "D", "C", "B", "A", "S"]);
        assert_eq!(ConditionGrade::S.code(), 5);
        assert_eq!(ConditionGrade::J.to_string(), "J");
    }

    #[test]
    fn test_out_of_range_code_is_rejected() {
        assert!(ConditionGrade::try_from(6).is_err());
        assert_eq!(ConditionGrade::try_from(3).unwrap(), ConditionGrade::B);
    }

    #[test]
    fn test_serde_uses_numeric_code() {
        let json = serde_json::to_string(&ConditionGrade::A).unwrap();
        assert_eq!(json, "4");
        let back: ConditionGrade = serde_json::from_str("0").unwrap();
        assert_eq!(back, ConditionGrade::J);
        assert!(serde_json::from_str::<ConditionGrade>("9").is_err());
    }
}
