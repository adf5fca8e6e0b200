//! Serde helpers for request deserialization.

use serde::{Deserialize, Deserializer};

/// Deserializes a field into `Some(value)` so partial-update bodies can
/// distinguish "field omitted" (outer `None`, via `#[serde(default)]`) from
/// "field explicitly null" (`Some(None)`).
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use uuid::Uuid;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "super::double_option")]
        table_id: Option<Option<Uuid>>,
    }

    #[test]
    fn omitted_field_stays_none() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert!(body.table_id.is_none());
    }

    #[test]
    fn explicit_null_becomes_some_none() {
        let body: Body = serde_json::from_str(r#"{"table_id":null}"#).unwrap();
        assert_eq!(body.table_id, Some(None));
    }

    #[test]
    fn value_becomes_some_some() {
        let id = Uuid::new_v4();
        let body: Body = serde_json::from_str(&format!(r#"{{"table_id":"{id}"}}"#)).unwrap();
        assert_eq!(body.table_id, Some(Some(id)));
    }
}
