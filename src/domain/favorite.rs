//! Local favorite entry model.
//!
//! A [`FavoriteEntry`] is the UI-facing projection of a favorited
//! [`CarRecord`]. The car name is the local key; the store id rides along so
//! later saves update the same remote record.

use crate::domain::car::{CarId, CarRecord};
use crate::domain::rating::Rating;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A car in the local favorites registry.
///
/// `saved_at` is the unix timestamp of the last local insert or replace and is
/// only used for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub id: Option<CarId>,
    pub car_name: String,
    pub car_image: Option<String>,
    pub description: String,
    pub rating: Option<Rating>,
    pub saved_at: i64,
}

impl FavoriteEntry {
    /// Creates an entry stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use car_favorites::domain::FavoriteEntry;
    ///
    /// let entry = FavoriteEntry::new("Ferrari");
    /// assert_eq!(entry.car_name, "Ferrari");
    /// assert!(entry.id.is_none());
    /// assert_eq!(entry.time_ago(), "just now");
    /// ```
    #[must_use]
    pub fn new(car_name: impl Into<String>) -> Self {
        Self {
            id: None,
            car_name: car_name.into(),
            car_image: None,
            description: String::new(),
            rating: None,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Projects a store record into a local entry.
    ///
    /// The record's id is carried over unchanged.
    #[must_use]
    pub fn from_record(record: &CarRecord) -> Self {
        Self {
            id: record.id.clone(),
            car_name: record.name.clone(),
            car_image: record.image_url.clone(),
            description: record.description.clone(),
            rating: record.rating,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Returns a human-readable string describing how long ago the entry was saved.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    #[must_use]
    pub fn time_ago(&self) -> String {
        let diff = chrono::Utc::now().timestamp() - self.saved_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        }
    }
}
