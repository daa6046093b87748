//! Binary parity labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class label of a state: `+1` for the even-parity subspace, `-1` for odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Label {
    /// Even number of set bits, `+1`.
    Even,
    /// Odd number of set bits, `-1`.
    Odd,
}

impl Label {
    /// Parity label of a basis index.
    #[inline]
    pub fn of_index(index: usize) -> Self {
        if index.count_ones() % 2 == 0 {
            Label::Even
        } else {
            Label::Odd
        }
    }

    /// The label as `+1` / `-1`.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Label::Even => 1,
            Label::Odd => -1,
        }
    }

    /// The label as a float, for scoring against predictions.
    #[inline]
    pub fn value(self) -> f64 {
        f64::from(self.sign())
    }
}

impl From<Label> for i8 {
    fn from(label: Label) -> Self {
        label.sign()
    }
}

impl TryFrom<i8> for Label {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Label::Even),
            -1 => Ok(Label::Odd),
            other => Err(format!("label must be 1 or -1, got {other}")),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.sign())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_index() {
        assert_eq!(Label::of_index(0), Label::Even);
        assert_eq!(Label::of_index(1), Label::Odd);
        assert_eq!(Label::of_index(2), Label::Odd);
        assert_eq!(Label::of_index(3), Label::Even);
        assert_eq!(Label::of_index(0b1011), Label::Odd);
    }

    #[test]
    fn test_values() {
        assert_eq!(Label::Even.value(), 1.0);
        assert_eq!(Label::Odd.value(), -1.0);
        assert_eq!(Label::Odd.to_string(), "-1");
        assert_eq!(Label::Even.to_string(), "+1");
    }

    #[test]
    fn test_serde_as_integer() {
        assert_eq!(serde_json::to_string(&Label::Odd).unwrap(), "-1");
        let labels: Vec<Label> = serde_json::from_str("[1, -1, 1]").unwrap();
        assert_eq!(labels, vec![Label::Even, Label::Odd, Label::Even]);
        assert!(serde_json::from_str::<Label>("0").is_err());
    }
}
