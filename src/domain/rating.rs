//! Star rating value and input validation.

use crate::domain::error::{CarFavoritesError, Result};
use std::fmt;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// A rating between [`MIN_RATING`] and [`MAX_RATING`] inclusive.
///
/// # Examples
///
/// ```
/// use car_favorites::domain::Rating;
///
/// assert_eq!(Rating::new(5).map(Rating::get), Some(5));
/// assert!(Rating::new(0).is_none());
/// assert!(Rating::new(6).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    /// Returns `None` when `value` is outside the accepted range.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= MIN_RATING && value <= MAX_RATING {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Converts a loosely typed store value, dropping anything out of range.
    #[must_use]
    pub fn from_wire(value: i64) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::new)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Validates one keystroke-level edit of the rating field.
    ///
    /// Only the empty string (rating cleared) or a single digit `1`-`5` is
    /// accepted. The caller keeps its previous value when this fails.
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::Validation`] for any other input, such as
    /// `"0"`, `"6"`, `"12"` or `"a"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use car_favorites::domain::Rating;
    ///
    /// assert_eq!(Rating::parse_input("").unwrap(), None);
    /// assert_eq!(Rating::parse_input("4").unwrap(), Rating::new(4));
    /// assert!(Rating::parse_input("12").is_err());
    /// ```
    pub fn parse_input(input: &str) -> Result<Option<Self>> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(None),
            (Some(c @ '1'..='5'), None) => {
                let digit = c.to_digit(10).and_then(|d| u8::try_from(d).ok());
                Ok(digit.and_then(Self::new))
            }
            _ => Err(CarFavoritesError::Validation(format!(
                "rating must be empty or a single digit from {MIN_RATING} to {MAX_RATING}, got {input:?}"
            ))),
        }
    }

    /// Renders the rating as filled and empty stars, e.g. `★★★☆☆`.
    #[must_use]
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(MAX_RATING) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
