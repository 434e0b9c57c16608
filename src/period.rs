//! Reporting periods and periodic form types.

use super::error::{EdgarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar quarter (Q1-Q4).
///
/// Each quarter covers a fixed, inclusive month-day range:
/// - Q1: `01-01` through `03-31`
/// - Q2: `04-01` through `06-30`
/// - Q3: `07-01` through `09-30`
/// - Q4: `10-01` through `12-31`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quarter {
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
    Q4 = 4,
}

impl Quarter {
    /// Creates a Quarter from its number (1-4).
    ///
    /// # Errors
    /// `EdgarError::InvalidQuarter` for anything outside 1-4.
    pub fn new(quarter: u32) -> Result<Self> {
        match quarter {
            1 => Ok(Quarter::Q1),
            2 => Ok(Quarter::Q2),
            3 => Ok(Quarter::Q3),
            4 => Ok(Quarter::Q4),
            _ => Err(EdgarError::InvalidQuarter),
        }
    }

    /// Creates a Quarter from a month number (1-12)
    ///
    /// # Errors
    /// `EdgarError::InvalidMonth` if month is outside 1-12.
    pub fn from_month(month: u32) -> Result<Self> {
        match month {
            1..=3 => Ok(Quarter::Q1),
            4..=6 => Ok(Quarter::Q2),
            7..=9 => Ok(Quarter::Q3),
            10..=12 => Ok(Quarter::Q4),
            _ => Err(EdgarError::InvalidMonth),
        }
    }

    /// Converts the quarter to its integer representation (1-4).
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// First and last `MM-DD` of the quarter.
    pub fn month_days(&self) -> (&'static str, &'static str) {
        match self {
            Quarter::Q1 => ("01-01", "03-31"),
            Quarter::Q2 => ("04-01", "06-30"),
            Quarter::Q3 => ("07-01", "09-30"),
            Quarter::Q4 => ("10-01", "12-31"),
        }
    }

    /// Inclusive `YYYY-MM-DD` bounds of the quarter in `year`.
    ///
    /// The bounds compare lexicographically against ISO filing dates.
    pub fn date_range(&self, year: i32) -> (String, String) {
        let (start, end) = self.month_days();
        (format!("{year}-{start}"), format!("{year}-{end}"))
    }
}

impl TryFrom<u32> for Quarter {
    type Error = EdgarError;

    fn try_from(quarter: u32) -> Result<Self> {
        Self::new(quarter)
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.as_u32())
    }
}

/// Periodic report form types the selector understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormType {
    /// Annual report
    #[serde(rename = "10-K")]
    Annual,
    /// Quarterly report
    #[serde(rename = "10-Q")]
    Quarterly,
}

impl FormType {
    /// The form tag as it appears in submission histories.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Annual => "10-K",
            FormType::Quarterly => "10-Q",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_from_number() {
        assert_eq!(Quarter::new(1).unwrap(), Quarter::Q1);
        assert_eq!(Quarter::try_from(4).unwrap(), Quarter::Q4);
        assert!(matches!(Quarter::new(0), Err(EdgarError::InvalidQuarter)));
        assert!(matches!(Quarter::new(5), Err(EdgarError::InvalidQuarter)));
    }

    #[test]
    fn test_quarter_from_month() {
        assert_eq!(Quarter::from_month(3).unwrap(), Quarter::Q1);
        assert_eq!(Quarter::from_month(4).unwrap(), Quarter::Q2);
        assert_eq!(Quarter::from_month(9).unwrap(), Quarter::Q3);
        assert_eq!(Quarter::from_month(12).unwrap(), Quarter::Q4);
        assert!(matches!(Quarter::from_month(13), Err(EdgarError::InvalidMonth)));
    }

    #[test]
    fn test_date_range() {
        assert_eq!(
            Quarter::Q2.date_range(2024),
            ("2024-04-01".to_string(), "2024-06-30".to_string())
        );
        assert_eq!(
            Quarter::Q4.date_range(1999),
            ("1999-10-01".to_string(), "1999-12-31".to_string())
        );
    }

    #[test]
    fn test_form_type_tags() {
        assert_eq!(FormType::Annual.as_str(), "10-K");
        assert_eq!(FormType::Quarterly.to_string(), "10-Q");
        assert_eq!(Quarter::Q3.to_string(), "Q3");
    }
}
