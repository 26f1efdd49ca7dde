use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::{PathItem, Response};
use crate::object::{is_extension, Extensions};
use crate::reference::RefOr;

/// An object made only of patterned fields: every key is a runtime name
/// (a path template, a status code, a runtime expression) except the `x-`
/// keys, which are kept apart as extensions.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternedFields<T> {
    pub entries: BTreeMap<String, T>,
    pub extensions: Extensions,
}

/// The Paths Object, keyed by path template (`/pets/{petId}`).
pub type Paths<S> = PatternedFields<PathItem<S>>;

/// A Callback Object, keyed by runtime expression (`{$request.body#/callbackUrl}`).
pub type Callback<S> = PatternedFields<PathItem<S>>;

/// The Responses Object, keyed by HTTP status code, `1XX`..`5XX` range or `default`.
pub type Responses<S> = PatternedFields<RefOr<Response<S>>>;

impl<T> PatternedFields<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.entries.insert(key.into(), value)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries; extensions are not counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for PatternedFields<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            extensions: Extensions::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PatternedFields<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = btree_map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for PatternedFields<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
            extensions: Extensions::new(),
        }
    }
}

impl<S> Responses<S> {
    pub fn default_response(&self) -> Option<&RefOr<Response<S>>> {
        self.entries.get("default")
    }

    /// Picks the response documented for `code`: an explicit code wins over
    /// its `nXX` range, and the range wins over `default`. Ranges only exist
    /// for `1XX` to `5XX`; other codes go straight to `default`.
    pub fn for_status(&self, code: u16) -> Option<&RefOr<Response<S>>> {
        self.entries
            .get(&code.to_string())
            .or_else(|| match code {
                100..=599 => self.entries.get(&format!("{}XX", code / 100)),
                _ => None,
            })
            .or_else(|| self.default_response())
    }
}

impl<T: Serialize> Serialize for PatternedFields<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len() + self.extensions.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        for (key, value) in &self.extensions {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, T> Deserialize<'de> for PatternedFields<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PatternedVisitor<T>(PhantomData<fn() -> T>);

        impl<'de, T> Visitor<'de> for PatternedVisitor<T>
        where
            T: Deserialize<'de>,
        {
            type Value = PatternedFields<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of patterned fields")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = PatternedFields::default();
                while let Some(key) = map.next_key::<String>()? {
                    if is_extension(&key) {
                        let value = map.next_value()?;
                        fields.extensions.insert(key, value);
                    } else {
                        let value = map.next_value()?;
                        fields.entries.insert(key, value);
                    }
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(PatternedVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v3_0;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn description(response: Option<&RefOr<v3_0::Response>>) -> Option<String> {
        response
            .and_then(|r| r.decode().ok())
            .map(|r: v3_0::Response| r.description)
    }

    #[test]
    fn test_responses_keep_every_status_key() {
        let responses: v3_0::Responses = serde_json::from_value(json!({
            "200": {"description": "ok"},
            "404": {"description": "missing"},
            "default": {"description": "error"},
            "5XX": {"description": "server error"}
        }))
        .unwrap();

        let keys: Vec<&str> = responses.entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["200", "404", "5XX", "default"]);
        assert_eq!(description(responses.get("404")), Some("missing".to_string()));
        assert_eq!(description(responses.default_response()), Some("error".to_string()));
        assert!(responses.extensions.is_empty());
    }

    #[test]
    fn test_for_status_precedence() {
        let responses: v3_0::Responses = serde_json::from_value(json!({
            "200": {"description": "exact"},
            "2XX": {"description": "range"},
            "default": {"description": "fallback"}
        }))
        .unwrap();

        assert_eq!(description(responses.for_status(200)), Some("exact".to_string()));
        assert_eq!(description(responses.for_status(201)), Some("range".to_string()));
        assert_eq!(description(responses.for_status(404)), Some("fallback".to_string()));

        let only_exact: v3_0::Responses =
            serde_json::from_value(json!({"200": {"description": "exact"}})).unwrap();
        assert!(only_exact.for_status(500).is_none());
    }

    #[test]
    fn test_for_status_outside_range_uses_default() {
        let responses: v3_0::Responses = serde_json::from_value(json!({
            "0XX": {"description": "zero"},
            "10XX": {"description": "thousand"},
            "5XX": {"description": "server error"},
            "default": {"description": "fallback"}
        }))
        .unwrap();

        assert_eq!(description(responses.for_status(42)), Some("fallback".to_string()));
        assert_eq!(description(responses.for_status(1000)), Some("fallback".to_string()));
        assert_eq!(description(responses.for_status(599)), Some("server error".to_string()));
        assert_eq!(description(responses.for_status(600)), Some("fallback".to_string()));
    }

    #[test]
    fn test_extensions_split_from_entries() {
        let paths: v3_0::Paths = serde_json::from_value(json!({
            "/pets": {"summary": "Pets"},
            "x-internal-id": 42
        }))
        .unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths.get("/pets").unwrap().summary.as_deref(), Some("Pets"));
        assert_eq!(paths.extensions.get("x-internal-id"), Some(&json!(42)));
        assert_eq!(
            serde_json::to_value(&paths).unwrap(),
            json!({"/pets": {"summary": "Pets"}, "x-internal-id": 42})
        );
    }

    #[test]
    fn test_yaml_integer_status_codes() {
        let responses: v3_0::Responses = serde_yaml::from_str(
            "200:\n  description: ok\n'404':\n  description: missing\n",
        )
        .unwrap();
        assert_eq!(description(responses.get("200")), Some("ok".to_string()));
        assert_eq!(description(responses.get("404")), Some("missing".to_string()));
    }

    #[test]
    fn test_entry_error_is_reported() {
        let err = serde_json::from_value::<v3_0::Paths>(json!({"/pets": "nope"})).unwrap_err();
        assert!(err.to_string().contains("PathItem"));
    }

    #[test]
    fn test_from_iterator() {
        let callback: v3_0::Callback =
            vec![("{$request.body#/url}", v3_0::PathItem::default())].into_iter().collect();
        assert_eq!(callback.len(), 1);
        assert!(callback.get("{$request.body#/url}").is_some());
    }
}
