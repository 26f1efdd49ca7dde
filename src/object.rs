use std::collections::BTreeMap;

use serde_json::Value;

/// Specification extensions: every `x-` prefixed key of an object, kept verbatim.
pub type Extensions = BTreeMap<String, Value>;

/// Keys starting with `x-` are specification extensions.
pub fn is_extension(key: &str) -> bool {
    key.starts_with("x-")
}

/// Declares an extensible OpenAPI object.
///
/// Each field is bound to its serialized key. The generated decoder walks
/// the input map once: a known key fills its field, an `x-` key lands in
/// `extensions`, anything else is skipped. A known key given twice is a
/// `duplicate field` error. Fields whose key is missing keep their `Default`
/// value, so required fields are never enforced here.
///
/// Encoding is derived; pair every `Option` field with
/// `skip_serializing_if = "Option::is_none"` so unset fields are omitted.
macro_rules! openapi_object {
    (
        $(#[$meta:meta])*
        pub struct $name:ident $(<$param:ident>)? {
            $(
                $(#[$field_meta:meta])*
                $key:literal => pub $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        pub struct $name $(<$param>)? {
            $(
                $(#[$field_meta])*
                #[serde(rename = $key)]
                pub $field: $ty,
            )*
            /// Specification extensions (`x-` keys).
            #[serde(flatten)]
            pub extensions: $crate::object::Extensions,
        }

        impl $(<$param>)? Default for $name $(<$param>)? {
            fn default() -> Self {
                Self {
                    $($field: Default::default(),)*
                    extensions: Default::default(),
                }
            }
        }

        impl<'de $(, $param)?> ::serde::Deserialize<'de> for $name $(<$param>)?
        $(where $param: ::serde::Deserialize<'de>)?
        {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct ObjectVisitor $(<$param>)? (
                    ::std::marker::PhantomData<fn() -> $name $(<$param>)?>,
                );

                impl<'de $(, $param)?> ::serde::de::Visitor<'de> for ObjectVisitor $(<$param>)?
                $(where $param: ::serde::Deserialize<'de>)?
                {
                    type Value = $name $(<$param>)?;

                    fn expecting(&self, formatter: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                        formatter.write_str(concat!("an OpenAPI ", stringify!($name), " object"))
                    }

                    fn visit_map<A>(self, mut map: A) -> ::std::result::Result<Self::Value, A::Error>
                    where
                        A: ::serde::de::MapAccess<'de>,
                    {
                        let mut object = <$name $(<$param>)? as Default>::default();
                        let mut seen = ::std::collections::BTreeSet::<&'static str>::new();
                        while let Some(key) = map.next_key::<String>()? {
                            match key.as_str() {
                                $($key => {
                                    if !seen.insert($key) {
                                        return Err(<A::Error as ::serde::de::Error>::duplicate_field($key));
                                    }
                                    object.$field = map.next_value()?;
                                })*
                                other if $crate::object::is_extension(other) => {
                                    let value = map.next_value()?;
                                    object.extensions.insert(other.to_owned(), value);
                                }
                                other => {
                                    ::log::trace!(
                                        "Skipping unknown key `{}` in {}",
                                        other,
                                        stringify!($name)
                                    );
                                    map.next_value::<::serde::de::IgnoredAny>()?;
                                }
                            }
                        }
                        Ok(object)
                    }
                }

                deserializer.deserialize_map(ObjectVisitor(::std::marker::PhantomData))
            }
        }
    };
}

pub(crate) use openapi_object;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    openapi_object! {
        /// Test object with one required and one optional field.
        pub struct Sample {
            "name" => pub name: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            "maxItems" => pub max_items: Option<u64>,
        }
    }

    #[test]
    fn test_is_extension() {
        assert!(is_extension("x-internal-id"));
        assert!(is_extension("x-"));
        assert!(!is_extension("X-upper"));
        assert!(!is_extension("name"));
    }

    #[test]
    fn test_known_keys_extensions_and_unknown_keys() {
        let sample: Sample = serde_json::from_value(json!({
            "name": "a",
            "maxItems": 3,
            "x-internal-id": 42,
            "bogus": true
        }))
        .unwrap();

        assert_eq!(sample.name, "a");
        assert_eq!(sample.max_items, Some(3));
        assert_eq!(sample.extensions.get("x-internal-id"), Some(&json!(42)));
        assert_eq!(sample.extensions.len(), 1);

        let encoded = serde_json::to_value(&sample).unwrap();
        assert_eq!(
            encoded,
            json!({"name": "a", "maxItems": 3, "x-internal-id": 42})
        );
    }

    #[test]
    fn test_missing_fields_fall_back_to_default() {
        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample, Sample::default());
        assert_eq!(serde_json::to_string(&sample).unwrap(), r#"{"name":""}"#);
    }

    #[test]
    fn test_non_map_input_is_rejected() {
        let err = serde_json::from_str::<Sample>(r#""just a string""#).unwrap_err();
        assert!(err.to_string().contains("an OpenAPI Sample object"));
    }

    #[test]
    fn test_repeated_known_key_is_rejected() {
        let err = serde_json::from_str::<Sample>(r#"{"name":"a","name":"b"}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate field `name`"));

        let err = serde_yaml::from_str::<Sample>("maxItems: 1\nmaxItems: 2\n").unwrap_err();
        assert!(err.to_string().contains("maxItems"));
    }

    #[test]
    fn test_yaml_numeric_keys_and_scalars() {
        let sample: Sample = serde_yaml::from_str("name: 1.0\nx-count: 7\n").unwrap();
        assert_eq!(sample.name, "1.0");
        assert_eq!(sample.extensions.get("x-count"), Some(&json!(7)));
    }
}
