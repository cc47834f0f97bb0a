//! Car record domain model.
//!
//! A [`CarRecord`] is the authoritative, store-side representation of a searched
//! car. Identity belongs to the store: [`CarId`] values are only ever taken from
//! store responses, never fabricated locally.

use crate::domain::rating::Rating;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned by the car store on creation.
///
/// Stores disagree on whether ids are numbers or strings, so both shapes are
/// accepted and written back exactly as received.
///
/// # Examples
///
/// ```
/// use car_favorites::domain::CarId;
///
/// let id: CarId = serde_json::from_str("42").unwrap();
/// assert_eq!(id.to_string(), "42");
/// assert_eq!(serde_json::to_string(&id).unwrap(), "42");
///
/// let id: CarId = serde_json::from_str("\"a1b2\"").unwrap();
/// assert_eq!(serde_json::to_string(&id).unwrap(), "\"a1b2\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CarId {
    Number(u64),
    Text(String),
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for CarId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CarId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A car as known to the remote store.
///
/// # Fields
///
/// - `id`: store identifier, `None` until the first successful create
/// - `name`: display name the user searched for
/// - `image_url`: `None` when the lookup failed or was never attempted
/// - `description`: free text, empty by default
/// - `rating`: optional 1-5 rating
/// - `is_favorite`: the flag as persisted by the store, independent of local
///   registry membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarRecord {
    pub id: Option<CarId>,
    pub name: String,
    pub image_url: Option<String>,
    pub description: String,
    pub rating: Option<Rating>,
    pub is_favorite: bool,
}

impl CarRecord {
    /// Creates an unpersisted record with only a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use car_favorites::domain::CarRecord;
    ///
    /// let record = CarRecord::new("Ferrari");
    /// assert!(record.id.is_none());
    /// assert!(record.description.is_empty());
    /// assert!(!record.is_favorite);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            image_url: None,
            description: String::new(),
            rating: None,
            is_favorite: false,
        }
    }

    /// Returns `true` once the store has assigned an id.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
