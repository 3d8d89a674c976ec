//! Serde helpers that store `Uuid`s as hyphenated strings.
//!
//! Inserted documents and query filters then agree on one encoding, and v7
//! ids sort by creation time.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     #[serde(rename = "_id", with = "database::mongodb::uuid_string")]
//!     id: Uuid,
//!     #[serde(default, with = "database::mongodb::uuid_string::option")]
//!     package_id: Option<Uuid>,
//! }
//!
//! let filter = doc! { "_id": uuid_string::to_bson(id) };
//! ```

use mongodb::bson::Bson;
use serde::{Deserialize, Deserializer, Serializer, de::Error};
use uuid::Uuid;

pub fn serialize<S: Serializer>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&id.hyphenated())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Uuid::parse_str(&raw).map_err(D::Error::custom)
}

/// Filter value matching a field written by [`serialize`].
pub fn to_bson(id: Uuid) -> Bson {
    Bson::String(id.hyphenated().to_string())
}

pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(id: &Option<Uuid>, serializer: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => serializer.collect_str(&id.hyphenated()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Uuid>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| Uuid::parse_str(&raw).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{self, doc};
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        #[serde(rename = "_id", with = "super")]
        id: Uuid,
        #[serde(default, with = "super::option")]
        parent: Option<Uuid>,
    }

    #[test]
    fn stored_as_string_and_matches_filter_value() {
        let id = Uuid::now_v7();
        let stored = bson::to_document(&Doc { id, parent: None }).unwrap();
        assert_eq!(stored.get("_id"), Some(&super::to_bson(id)));
        assert_eq!(doc! { "_id": super::to_bson(id) }.get_str("_id").unwrap(), id.to_string());
    }

    #[test]
    fn optional_field_round_trips() {
        let value = Doc {
            id: Uuid::now_v7(),
            parent: Some(Uuid::now_v7()),
        };
        let stored = bson::to_document(&value).unwrap();
        let back: Doc = bson::from_document(stored).unwrap();
        assert_eq!(back, value);

        let missing: Doc =
            bson::from_document(doc! { "_id": Uuid::now_v7().to_string() }).unwrap();
        assert_eq!(missing.parent, None);
    }

    #[test]
    fn rejects_garbage() {
        let err = bson::from_document::<Doc>(doc! { "_id": "nope" });
        assert!(err.is_err());
    }
}
