//! OpenAPI 3.0.x dialect.
//!
//! The Schema Object here is the 3.0 subset of JSON Schema Wright Draft 00,
//! with `nullable` and boolean `exclusiveMaximum` / `exclusiveMinimum`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::{self, Format};
use crate::error::Result;
use crate::models::{
    self, Contact, Discriminator, ExternalDocumentation, SecurityRequirement, Server, Tag, Xml,
};
use crate::object::openapi_object;
use crate::patterned;
use crate::reference::RefOr;

pub type Header = models::Header<Schema>;
pub type Encoding = models::Encoding<Schema>;
pub type MediaType = models::MediaType<Schema>;
pub type Parameter = models::Parameter<Schema>;
pub type RequestBody = models::RequestBody<Schema>;
pub type Response = models::Response<Schema>;
pub type Operation = models::Operation<Schema>;
pub type PathItem = models::PathItem<Schema>;
pub type Components = models::Components<Schema>;
pub type Paths = patterned::Paths<Schema>;
pub type Responses = patterned::Responses<Schema>;
pub type Callback = patterned::Callback<Schema>;

openapi_object! {
    /// Represents a complete OpenAPI 3.0 document
    pub struct OpenAPI {
        "openapi" => pub openapi: String,
        "info" => pub info: Info,
        #[serde(skip_serializing_if = "Option::is_none")]
        "servers" => pub servers: Option<Vec<Server>>,
        "paths" => pub paths: Paths,
        #[serde(skip_serializing_if = "Option::is_none")]
        "components" => pub components: Option<Components>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "security" => pub security: Option<Vec<SecurityRequirement>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "tags" => pub tags: Option<Vec<Tag>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "externalDocs" => pub external_docs: Option<ExternalDocumentation>,
    }
}

impl OpenAPI {
    /// Decodes a 3.0 document from JSON. The declared `openapi` version is not checked.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        codec::decode(data, Format::Json)
    }

    /// Decodes a 3.0 document from YAML. The declared `openapi` version is not checked.
    pub fn from_yaml(data: &[u8]) -> Result<Self> {
        codec::decode(data, Format::Yaml)
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

openapi_object! {
    /// Information about the API
    pub struct Info {
        "title" => pub title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "termsOfService" => pub terms_of_service: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "contact" => pub contact: Option<Contact>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "license" => pub license: Option<License>,
        /// Version of the API document, not of the OpenAPI Specification.
        "version" => pub version: String,
    }
}

openapi_object! {
    /// License information for the API
    pub struct License {
        "name" => pub name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        "url" => pub url: Option<String>,
    }
}

openapi_object! {
    /// Schema object for OpenAPI 3.0
    pub struct Schema {
        #[serde(skip_serializing_if = "Option::is_none")]
        "title" => pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "multipleOf" => pub multiple_of: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "maximum" => pub maximum: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "exclusiveMaximum" => pub exclusive_maximum: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "minimum" => pub minimum: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "exclusiveMinimum" => pub exclusive_minimum: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "maxLength" => pub max_length: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "minLength" => pub min_length: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "pattern" => pub pattern: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "maxItems" => pub max_items: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "minItems" => pub min_items: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "uniqueItems" => pub unique_items: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "maxProperties" => pub max_properties: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "minProperties" => pub min_properties: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "required" => pub required: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "enum" => pub enum_values: Option<Vec<Value>>,

        /// A single type name; 3.0 has no type arrays.
        #[serde(skip_serializing_if = "Option::is_none")]
        "type" => pub schema_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "allOf" => pub all_of: Option<Vec<RefOr<Schema>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "oneOf" => pub one_of: Option<Vec<RefOr<Schema>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "anyOf" => pub any_of: Option<Vec<RefOr<Schema>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "not" => pub not: Option<RefOr<Schema>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "items" => pub items: Option<RefOr<Schema>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "properties" => pub properties: Option<BTreeMap<String, RefOr<Schema>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "additionalProperties" => pub additional_properties: Option<AdditionalProperties>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "format" => pub format: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "default" => pub default: Option<Value>,

        #[serde(skip_serializing_if = "Option::is_none")]
        "nullable" => pub nullable: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "discriminator" => pub discriminator: Option<Discriminator>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "readOnly" => pub read_only: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "writeOnly" => pub write_only: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "xml" => pub xml: Option<Xml>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "externalDocs" => pub external_docs: Option<ExternalDocumentation>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "example" => pub example: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "deprecated" => pub deprecated: Option<bool>,
    }
}

/// `additionalProperties`: a boolean or a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(RefOr<Schema>),
}

impl Serialize for AdditionalProperties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AdditionalProperties::Allowed(allowed) => serializer.serialize_bool(*allowed),
            AdditionalProperties::Schema(schema) => schema.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AdditionalProperties {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(allowed) => AdditionalProperties::Allowed(allowed),
            other => AdditionalProperties::Schema(RefOr::from_value(other)),
        })
    }
}
