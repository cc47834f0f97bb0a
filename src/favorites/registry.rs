//! Ordered favorites registry keyed by car name.

use crate::domain::error::{CarFavoritesError, Result};
use crate::domain::{CarRecord, FavoriteEntry};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// In-memory list of favorite cars.
///
/// Entries keep insertion order. At most one entry exists per exact
/// (case-sensitive) `car_name`; every mutating method preserves that.
///
/// # Example
///
/// ```rust
/// use car_favorites::domain::FavoriteEntry;
/// use car_favorites::favorites::FavoritesRegistry;
///
/// let mut favorites = FavoritesRegistry::new();
/// favorites.add(FavoriteEntry::new("Ferrari"))?;
/// assert!(favorites.is_favorite("Ferrari"));
/// assert!(!favorites.is_favorite("ferrari"));
///
/// favorites.remove("Ferrari");
/// assert!(favorites.is_empty());
/// # Ok::<(), car_favorites::CarFavoritesError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesRegistry {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a new favorite.
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::DuplicateFavorite`] if an entry with the same
    /// `car_name` already exists. Use [`update`](Self::update) to replace it.
    pub fn add(&mut self, entry: FavoriteEntry) -> Result<()> {
        if self.is_favorite(&entry.car_name) {
            return Err(CarFavoritesError::DuplicateFavorite(entry.car_name));
        }

        tracing::debug!(car_name = %entry.car_name, id = ?entry.id, "favorite added");
        self.entries.push(entry);
        Ok(())
    }

    /// Removes the entry whose name matches exactly. No-op if absent.
    pub fn remove(&mut self, car_name: &str) -> Option<FavoriteEntry> {
        let position = self.position(car_name)?;
        tracing::debug!(car_name = %car_name, "favorite removed");
        Some(self.entries.remove(position))
    }

    #[must_use]
    pub fn is_favorite(&self, car_name: &str) -> bool {
        self.position(car_name).is_some()
    }

    /// Replaces the entry with the same `car_name` in place.
    ///
    /// The entry keeps its position and there is no moment where the name is
    /// missing from the registry.
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::FavoriteNotFound`] if no entry has that name.
    pub fn update(&mut self, entry: FavoriteEntry) -> Result<()> {
        let Some(position) = self.position(&entry.car_name) else {
            return Err(CarFavoritesError::FavoriteNotFound(entry.car_name));
        };

        tracing::debug!(car_name = %entry.car_name, id = ?entry.id, "favorite updated");
        self.entries[position] = entry;
        Ok(())
    }

    #[must_use]
    pub fn get(&self, car_name: &str) -> Option<&FavoriteEntry> {
        self.entries.iter().find(|entry| entry.car_name == car_name)
    }

    #[must_use]
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuilds the registry from a store listing.
    ///
    /// Only records flagged `is_favorite` are kept. When the store holds several
    /// favorited records with the same name the first one wins and the rest are
    /// logged, since the name is the local key.
    pub fn replace_from_records(&mut self, records: &[CarRecord]) {
        let _span = tracing::debug_span!("replace_from_records", total_records = records.len()).entered();

        let mut entries: Vec<FavoriteEntry> = Vec::new();
        for record in records.iter().filter(|record| record.is_favorite) {
            if entries.iter().any(|entry| entry.car_name == record.name) {
                tracing::warn!(
                    car_name = %record.name,
                    id = ?record.id,
                    "skipping favorite with duplicate name"
                );
                continue;
            }
            entries.push(FavoriteEntry::from_record(record));
        }

        tracing::debug!(favorite_count = entries.len(), "favorites rebuilt from store");
        self.entries = entries;
    }

    /// Filters entries by a whitespace-separated query.
    ///
    /// Every token must fuzzy-match the lowercased car name. An empty query
    /// returns all entries. Registry order is preserved.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&FavoriteEntry> {
        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return self.entries.iter().collect();
        }

        let matcher = SkimMatcherV2::default();
        self.entries
            .iter()
            .filter(|entry| {
                let name_lower = entry.car_name.to_lowercase();
                tokens.iter().all(|token| matcher.fuzzy_match(&name_lower, token).is_some())
            })
            .collect()
    }

    fn position(&self, car_name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.car_name == car_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CarId, Rating};

    fn entry(name: &str, description: &str) -> FavoriteEntry {
        FavoriteEntry {
            description: description.to_string(),
            ..FavoriteEntry::new(name)
        }
    }

    fn record(id: u64, name: &str, is_favorite: bool) -> CarRecord {
        CarRecord {
            id: Some(CarId::Number(id)),
            is_favorite,
            ..CarRecord::new(name)
        }
    }

    #[test]
    fn add_then_remove_toggles_membership() {
        let mut favorites = FavoritesRegistry::new();

        favorites.add(entry("Fusca", "")).unwrap();
        assert!(favorites.is_favorite("Fusca"));

        let removed = favorites.remove("Fusca");
        assert_eq!(removed.map(|e| e.car_name), Some("Fusca".to_string()));
        assert!(!favorites.is_favorite("Fusca"));
    }

    #[test]
    fn add_rejects_duplicate_names() {
        let mut favorites = FavoritesRegistry::new();
        favorites.add(entry("Gol", "first")).unwrap();

        let err = favorites.add(entry("Gol", "second")).unwrap_err();

        assert!(matches!(err, CarFavoritesError::DuplicateFavorite(name) if name == "Gol"));
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.get("Gol").unwrap().description, "first");
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut favorites = FavoritesRegistry::new();
        favorites.add(entry("Civic", "")).unwrap();
        favorites.add(entry("civic", "")).unwrap();

        assert_eq!(favorites.len(), 2);
        favorites.remove("CIVIC");
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut favorites = FavoritesRegistry::new();
        favorites.add(entry("Palio", "")).unwrap();

        assert!(favorites.remove("Uno").is_none());
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut favorites = FavoritesRegistry::new();
        favorites.add(entry("A", "")).unwrap();
        favorites.add(entry("B", "old")).unwrap();
        favorites.add(entry("C", "")).unwrap();

        let mut replacement = entry("B", "new");
        replacement.rating = Rating::new(4);
        favorites.update(replacement).unwrap();

        let names: Vec<&str> = favorites.entries().iter().map(|e| e.car_name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(favorites.get("B").unwrap().description, "new");
        assert_eq!(favorites.get("B").unwrap().rating, Rating::new(4));
    }

    #[test]
    fn update_missing_is_an_error() {
        let mut favorites = FavoritesRegistry::new();

        let err = favorites.update(entry("Ka", "")).unwrap_err();

        assert!(matches!(err, CarFavoritesError::FavoriteNotFound(_)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn replace_from_records_keeps_favorites_and_first_duplicate() {
        let mut favorites = FavoritesRegistry::new();
        favorites.add(entry("Stale", "")).unwrap();

        favorites.replace_from_records(&[
            record(1, "Ferrari", true),
            record(2, "Draft", false),
            record(3, "Ferrari", true),
            record(4, "Porsche", true),
        ]);

        let ids: Vec<Option<CarId>> = favorites.entries().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, [Some(CarId::Number(1)), Some(CarId::Number(4))]);
        assert!(!favorites.is_favorite("Stale"));
    }

    #[test]
    fn search_matches_all_tokens() {
        let mut favorites = FavoritesRegistry::new();
        favorites.add(entry("Ferrari Testarossa", "")).unwrap();
        favorites.add(entry("Ford Focus", "")).unwrap();
        favorites.add(entry("Porsche 911", "")).unwrap();

        let names = |query: &str| -> Vec<String> {
            favorites.search(query).iter().map(|e| e.car_name.clone()).collect()
        };

        assert_eq!(names("").len(), 3);
        assert_eq!(names("ferr testa"), ["Ferrari Testarossa"]);
        assert_eq!(names("911"), ["Porsche 911"]);
        assert!(names("lamborghini").is_empty());
    }
}
