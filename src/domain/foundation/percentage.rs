//! Percentage value object (0-100 scale).

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A whole-number rate between 0 and 100 inclusive.
///
/// Rendered on the wire as text with a percent sign (`"100%"`), the way
/// the dashboard widgets display protection rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Share of `part` in `whole`, rounded to the nearest whole percent.
    ///
    /// An empty whole counts as fully covered.
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::HUNDRED;
        }
        let ratio = (part.min(whole) as f64) * 100.0 / whole as f64;
        Self::new(ratio.round() as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let digits = raw.trim().trim_end_matches('%');
        let value: u8 = digits
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid percentage: {}", raw)))?;
        if value > 100 {
            return Err(de::Error::custom(format!("percentage out of range: {}", raw)));
        }
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_of_rounds_to_nearest() {
        assert_eq!(Percentage::of(5, 5), Percentage::HUNDRED);
        assert_eq!(Percentage::of(1, 3).value(), 33);
        assert_eq!(Percentage::of(2, 3).value(), 67);
        assert_eq!(Percentage::of(0, 4), Percentage::ZERO);
    }

    #[test]
    fn percentage_of_empty_whole_is_full() {
        assert_eq!(Percentage::of(0, 0), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_serializes_with_percent_sign() {
        let json = serde_json::to_string(&Percentage::HUNDRED).unwrap();
        assert_eq!(json, "\"100%\"");
    }

    #[test]
    fn percentage_deserializes_from_text() {
        let pct: Percentage = serde_json::from_str("\"42%\"").unwrap();
        assert_eq!(pct.value(), 42);
    }

    #[test]
    fn percentage_rejects_out_of_range_text() {
        assert!(serde_json::from_str::<Percentage>("\"140%\"").is_err());
        assert!(serde_json::from_str::<Percentage>("\"lots\"").is_err());
    }
}
