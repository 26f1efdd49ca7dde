use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Result;

/// A Reference Object: a JSON Reference pointer such as `#/components/schemas/Pet`.
///
/// `summary` and `description` only exist in OpenAPI 3.1, where they
/// override the referenced component's own text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub ref_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Reference {
    pub fn new(ref_path: impl Into<String>) -> Self {
        Self {
            ref_path: ref_path.into(),
            summary: None,
            description: None,
        }
    }
}

/// A field typed "`T` | Reference Object".
///
/// The value is kept exactly as decoded; nothing decides at decode time
/// whether it is a reference or a concrete `T`. Inspect it with
/// [`is_reference`](Self::is_reference) and [`as_reference`](Self::as_reference),
/// or interpret it as `T` with [`decode`](Self::decode).
pub struct RefOr<T> {
    value: Value,
    target: PhantomData<fn() -> T>,
}

impl<T> RefOr<T> {
    pub fn from_value(value: Value) -> Self {
        Self {
            value,
            target: PhantomData,
        }
    }

    pub fn from_reference(reference: Reference) -> Self {
        let mut object = Map::new();
        object.insert("$ref".to_string(), Value::String(reference.ref_path));
        if let Some(summary) = reference.summary {
            object.insert("summary".to_string(), Value::String(summary));
        }
        if let Some(description) = reference.description {
            object.insert("description".to_string(), Value::String(description));
        }
        Self::from_value(Value::Object(object))
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// The `$ref` pointer, when the value is an object with a string `$ref` key.
    pub fn ref_path(&self) -> Option<&str> {
        self.value.get("$ref").and_then(Value::as_str)
    }

    pub fn is_reference(&self) -> bool {
        self.ref_path().is_some()
    }

    /// Reads the value as a Reference Object. Keys other than `$ref`,
    /// `summary` and `description` are ignored.
    pub fn as_reference(&self) -> Option<Reference> {
        let ref_path = self.ref_path()?;
        let text = |key: &str| self.value.get(key).and_then(Value::as_str).map(str::to_owned);
        Some(Reference {
            ref_path: ref_path.to_owned(),
            summary: text("summary"),
            description: text("description"),
        })
    }
}

impl<T: DeserializeOwned> RefOr<T> {
    /// Interprets the value as a concrete `T`.
    ///
    /// A reference is decoded like any other object, so check
    /// [`is_reference`](Self::is_reference) first when that matters.
    pub fn decode(&self) -> Result<T> {
        Ok(T::deserialize(&self.value)?)
    }
}

impl<T: Serialize> RefOr<T> {
    pub fn from_item(item: &T) -> Result<Self> {
        Ok(Self::from_value(serde_json::to_value(item)?))
    }
}

impl<T> From<Reference> for RefOr<T> {
    fn from(reference: Reference) -> Self {
        Self::from_reference(reference)
    }
}

impl<T> From<Value> for RefOr<T> {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl<T> fmt::Debug for RefOr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefOr").field(&self.value).finish()
    }
}

impl<T> Clone for RefOr<T> {
    fn clone(&self) -> Self {
        Self::from_value(self.value.clone())
    }
}

impl<T> PartialEq for RefOr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Serialize for RefOr<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for RefOr<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}
