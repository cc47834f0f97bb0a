//! Wire models for the car store.
//!
//! The store speaks Portuguese field names (`nome`, `imagem`, `descricao`).
//! [`CarPayload`] mirrors that JSON shape exactly and converts to and from the
//! domain [`CarRecord`], so no other module sees the wire names.

use crate::domain::{CarId, CarRecord, Rating};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A car record as serialized by the store.
///
/// Decoding is lenient about optional data: a missing or `null` description
/// becomes empty, a rating that is not an integer (`"5"` and `4.0` still count)
/// is unset, and a rating outside 1-5 is dropped when converting to the
/// domain type. `id` is left out of the body when unset.
///
/// # Examples
///
/// ```
/// use car_favorites::storage::CarPayload;
///
/// let payload: CarPayload = serde_json::from_str(
///     r#"{"id": 7, "nome": "Uno", "imagem": null, "descricao": null, "rating": 9, "isFavorite": true}"#,
/// ).unwrap();
/// let record = payload.into_record();
/// assert_eq!(record.name, "Uno");
/// assert!(record.description.is_empty());
/// assert!(record.rating.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CarId>,

    pub nome: String,

    #[serde(default)]
    pub imagem: Option<String>,

    #[serde(default)]
    pub descricao: Option<String>,

    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<i64>,

    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
}

impl CarPayload {
    #[must_use]
    pub fn from_record(record: &CarRecord) -> Self {
        Self {
            id: record.id.clone(),
            nome: record.name.clone(),
            imagem: record.image_url.clone(),
            descricao: Some(record.description.clone()),
            rating: record.rating.map(|r| i64::from(r.get())),
            is_favorite: record.is_favorite,
        }
    }

    #[must_use]
    pub fn into_record(self) -> CarRecord {
        let rating = self.rating.and_then(|value| {
            let rating = Rating::from_wire(value);
            if rating.is_none() {
                tracing::debug!(car_name = %self.nome, rating = value, "dropping out-of-range rating");
            }
            rating
        });

        CarRecord {
            id: self.id,
            name: self.nome,
            image_url: self.imagem.filter(|url| !url.is_empty()),
            description: self.descricao.unwrap_or_default(),
            rating,
            is_favorite: self.is_favorite,
        }
    }
}

/// Accepts any JSON value for `rating`; integral numbers and numeric strings
/// are kept, everything else becomes `None`.
#[allow(clippy::cast_possible_truncation)]
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= f64::from(u8::MAX))
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}
