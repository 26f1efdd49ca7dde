//! Structural object model for OpenAPI 3.0 and 3.1 documents.
//!
//! Every OpenAPI object is a plain record that decodes from and encodes to
//! JSON or YAML. Decoding is purely structural: references are not resolved
//! and nothing is validated beyond the shape of each value.
//!
//! ```
//! let doc = openapi_model::from_json(
//!     br#"{"openapi":"3.0.0","info":{"title":"Minimal","version":"1.0.0"},"paths":{}}"#,
//! )?;
//! assert_eq!(doc.version(), openapi_model::Version::V3_0);
//! # Ok::<(), openapi_model::Error>(())
//! ```

pub mod codec;
pub mod error;
pub mod models;
mod object;
pub mod patterned;
pub mod reference;
pub mod v3_0;
pub mod v3_1;
pub mod version;

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

pub use codec::Format;
pub use error::{Error, Result};
pub use models::{
    Contact, Discriminator, Example, ExternalDocumentation, Link, OAuthFlow, OAuthFlows,
    SecurityRequirement, SecurityScheme, Server, ServerVariable, Tag, Xml,
};
pub use object::{is_extension, Extensions};
pub use patterned::PatternedFields;
pub use reference::{RefOr, Reference};
pub use version::Version;

/// A decoded document of either dialect, chosen from its `openapi` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    V3_0(v3_0::OpenAPI),
    V3_1(v3_1::OpenAPI),
}

impl Document {
    pub fn version(&self) -> Version {
        match self {
            Document::V3_0(_) => Version::V3_0,
            Document::V3_1(_) => Version::V3_1,
        }
    }

    /// The declared `openapi` string, e.g. `3.0.3`.
    pub fn openapi(&self) -> &str {
        match self {
            Document::V3_0(doc) => &doc.openapi,
            Document::V3_1(doc) => &doc.openapi,
        }
    }

    pub fn as_v3_0(&self) -> Option<&v3_0::OpenAPI> {
        match self {
            Document::V3_0(doc) => Some(doc),
            Document::V3_1(_) => None,
        }
    }

    pub fn as_v3_1(&self) -> Option<&v3_1::OpenAPI> {
        match self {
            Document::V3_1(doc) => Some(doc),
            Document::V3_0(_) => None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        codec::encode(self, Format::Json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        codec::encode_pretty(self, Format::Json)
    }

    pub fn to_yaml(&self) -> Result<String> {
        codec::encode(self, Format::Yaml)
    }
}

impl From<v3_0::OpenAPI> for Document {
    fn from(doc: v3_0::OpenAPI) -> Self {
        Document::V3_0(doc)
    }
}

impl From<v3_1::OpenAPI> for Document {
    fn from(doc: v3_1::OpenAPI) -> Self {
        Document::V3_1(doc)
    }
}

/// Reads only the `openapi` key; every other key is skipped.
#[derive(Deserialize)]
struct DeclaredVersion {
    openapi: Option<String>,
}

/// Decodes a document, picking the dialect from its `openapi` field.
pub fn from_slice(data: &[u8], format: Format) -> Result<Document> {
    let declared_version: DeclaredVersion = codec::decode(data, format)?;
    let declared = declared_version.openapi.ok_or(Error::MissingVersion)?;
    let version: Version = declared.parse()?;
    debug!("Detected OpenAPI {} dialect from declared version {}", version, declared);

    let document = match version {
        Version::V3_0 => Document::V3_0(codec::decode(data, format)?),
        Version::V3_1 => Document::V3_1(codec::decode(data, format)?),
    };
    Ok(document)
}

/// Decodes a JSON document of either dialect.
pub fn from_json(data: &[u8]) -> Result<Document> {
    from_slice(data, Format::Json)
}

/// Decodes a YAML document of either dialect.
pub fn from_yaml(data: &[u8]) -> Result<Document> {
    from_slice(data, Format::Yaml)
}

/// Reads and decodes a `.json`, `.yaml` or `.yml` file.
pub fn from_path(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| Error::UnknownFormat(path.to_path_buf()))?;
    debug!("Reading {} document from {:?}", format, path);
    let data = fs::read(path)?;
    from_slice(&data, format)
}
