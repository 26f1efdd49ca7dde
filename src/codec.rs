//! Thin wrappers over `serde_json` and `serde_yaml`.
//!
//! Decoder errors are returned unchanged; nothing here validates content.

use std::fmt;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Infers the format from a `.json`, `.yaml` or `.yml` extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Yaml => write!(f, "YAML"),
        }
    }
}

/// Decodes any model type, whole documents or fragments such as a single
/// `Components` object.
pub fn decode<T: DeserializeOwned>(data: &[u8], format: Format) -> Result<T> {
    debug!(
        "Decoding {} bytes of {} into {}",
        data.len(),
        format,
        std::any::type_name::<T>()
    );
    let decoded = match format {
        Format::Json => serde_json::from_slice(data)?,
        Format::Yaml => serde_yaml::from_slice(data)?,
    };
    Ok(decoded)
}

/// Encodes compactly for JSON. YAML is always block style.
pub fn encode<T: Serialize>(value: &T, format: Format) -> Result<String> {
    debug!("Encoding {} as {}", std::any::type_name::<T>(), format);
    let encoded = match format {
        Format::Json => serde_json::to_string(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(encoded)
}

/// Same as [`encode`] with indented JSON.
pub fn encode_pretty<T: Serialize>(value: &T, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            debug!("Encoding {} as indented JSON", std::any::type_name::<T>());
            Ok(serde_json::to_string_pretty(value)?)
        }
        Format::Yaml => encode(value, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::v3_0;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("api/openapi.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("openapi.YAML")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("openapi.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("openapi.toml")), None);
        assert_eq!(Format::from_path(Path::new("openapi")), None);
    }

    #[test]
    fn test_decode_fragment() {
        let components: v3_0::Components = decode(
            b"schemas:\n  Pet:\n    type: object\nx-owner: pets-team\n",
            Format::Yaml,
        )
        .unwrap();
        assert!(components.schemas.as_ref().unwrap().contains_key("Pet"));
        assert_eq!(components.extensions.len(), 1);
    }

    #[test]
    fn test_malformed_json_keeps_decoder_error() {
        let err = decode::<v3_0::OpenAPI>(b"{not json", Format::Json).unwrap_err();
        let source = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        match err {
            Error::Json(inner) => {
                assert_eq!(inner.to_string(), source.to_string());
                assert_eq!(inner.line(), 1);
            }
            other => panic!("expected a JSON error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml() {
        let err = decode::<v3_0::OpenAPI>(b"openapi: [3.0\n", Format::Yaml).unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_encode_pretty_json() {
        let tag = crate::models::Tag {
            name: "pets".to_string(),
            ..Default::default()
        };
        assert_eq!(encode(&tag, Format::Json).unwrap(), r#"{"name":"pets"}"#);
        assert_eq!(
            encode_pretty(&tag, Format::Json).unwrap(),
            "{\n  \"name\": \"pets\"\n}"
        );
        assert_eq!(encode(&tag, Format::Yaml).unwrap(), "name: pets\n");
    }
}
