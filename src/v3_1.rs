//! OpenAPI 3.1.x dialect.
//!
//! Schemas are JSON Schema 2020-12 with the OpenAPI base vocabulary on top.
//! Only that vocabulary is typed; every other keyword is kept as a raw value.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::codec::{self, Format};
use crate::error::Result;
use crate::models::{
    self, Contact, Discriminator, ExternalDocumentation, SecurityRequirement, Server, Tag, Xml,
};
use crate::object::{is_extension, openapi_object};
use crate::patterned;

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
    /// Represents a complete OpenAPI 3.1 document
    pub struct OpenAPI {
        "openapi" => pub openapi: String,
        "info" => pub info: Info,
        /// Default `$schema` for Schema Objects in this document.
        #[serde(skip_serializing_if = "Option::is_none")]
        "jsonSchemaDialect" => pub json_schema_dialect: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "servers" => pub servers: Option<Vec<Server>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "paths" => pub paths: Option<Paths>,
        /// Keyed by webhook name; values may be `$ref` path items.
        #[serde(skip_serializing_if = "Option::is_none")]
        "webhooks" => pub webhooks: Option<BTreeMap<String, PathItem>>,
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
    /// Decodes a 3.1 document from JSON. The declared `openapi` version is not checked.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        codec::decode(data, Format::Json)
    }

    /// Decodes a 3.1 document from YAML. The declared `openapi` version is not checked.
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
        "summary" => pub summary: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "termsOfService" => pub terms_of_service: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "contact" => pub contact: Option<Contact>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "license" => pub license: Option<License>,
        "version" => pub version: String,
    }
}

openapi_object! {
    /// License information for the API
    pub struct License {
        "name" => pub name: String,
        /// SPDX expression. Meant to exclude `url`; both may be set here.
        #[serde(skip_serializing_if = "Option::is_none")]
        "identifier" => pub identifier: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "url" => pub url: Option<String>,
    }
}

/// Schema object for OpenAPI 3.1
///
/// JSON Schema keywords (`type`, `properties`, `$ref`, `$defs`, ...) and
/// `x-` extensions stay in `keywords` in their decoded form. The bare
/// `true` and `false` schemas set `boolean` and leave everything else empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    pub boolean: Option<bool>,
    pub discriminator: Option<Discriminator>,
    pub xml: Option<Xml>,
    pub external_docs: Option<ExternalDocumentation>,
    /// Deprecated in favour of the JSON Schema `examples` keyword.
    pub example: Option<Value>,
    pub keywords: Map<String, Value>,
}

impl Schema {
    /// `true` accepts every instance, `false` accepts none.
    pub fn from_bool(accepts: bool) -> Self {
        Schema {
            boolean: Some(accepts),
            ..Default::default()
        }
    }

    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords.get(name)
    }

    /// The `$ref` keyword. In 3.1 it may sit next to other keywords.
    pub fn reference(&self) -> Option<&str> {
        self.keyword("$ref").and_then(Value::as_str)
    }

    pub fn extensions(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.keywords.iter().filter(|(key, _)| is_extension(key))
    }
}

impl Serialize for Schema {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(accepts) = self.boolean {
            return serializer.serialize_bool(accepts);
        }

        let mut map = serializer.serialize_map(None)?;
        if let Some(discriminator) = &self.discriminator {
            map.serialize_entry("discriminator", discriminator)?;
        }
        if let Some(xml) = &self.xml {
            map.serialize_entry("xml", xml)?;
        }
        if let Some(external_docs) = &self.external_docs {
            map.serialize_entry("externalDocs", external_docs)?;
        }
        if let Some(example) = &self.example {
            map.serialize_entry("example", example)?;
        }
        for (key, value) in &self.keywords {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SchemaVisitor;

        impl<'de> Visitor<'de> for SchemaVisitor {
            type Value = Schema;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an OpenAPI Schema object or a boolean schema")
            }

            fn visit_bool<E>(self, accepts: bool) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Schema::from_bool(accepts))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut schema = Schema::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "discriminator" => set_once(&mut schema.discriminator, "discriminator", &mut map)?,
                        "xml" => set_once(&mut schema.xml, "xml", &mut map)?,
                        "externalDocs" => set_once(&mut schema.external_docs, "externalDocs", &mut map)?,
                        "example" => set_once(&mut schema.example, "example", &mut map)?,
                        _ => {
                            if schema.keywords.contains_key(&key) {
                                return Err(de::Error::custom(format_args!(
                                    "duplicate field `{}`",
                                    key
                                )));
                            }
                            let value = map.next_value()?;
                            schema.keywords.insert(key, value);
                        }
                    }
                }
                Ok(schema)
            }
        }

        deserializer.deserialize_any(SchemaVisitor)
    }
}

fn set_once<'de, T, A>(
    slot: &mut Option<T>,
    field: &'static str,
    map: &mut A,
) -> std::result::Result<(), A::Error>
where
    T: Deserialize<'de>,
    A: MapAccess<'de>,
{
    if slot.is_some() {
        return Err(de::Error::duplicate_field(field));
    }
    *slot = map.next_value()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::RefOr;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_schema_keeps_json_schema_keywords() {
        let input = json!({
            "$id": "https://example.com/pet",
            "type": ["object", "null"],
            "properties": {"name": {"type": "string"}},
            "exclusiveMaximum": 10,
            "const": {"a": 1},
            "discriminator": {"propertyName": "kind"},
            "externalDocs": {"url": "https://example.com/docs"},
            "example": {"name": "Rex"},
            "x-go-type": "Pet"
        });
        let schema: Schema = serde_json::from_value(input.clone()).unwrap();

        assert_eq!(
            schema.discriminator.as_ref().map(|d| d.property_name.as_str()),
            Some("kind")
        );
        assert_eq!(
            schema.external_docs.as_ref().map(|d| d.url.as_str()),
            Some("https://example.com/docs")
        );
        assert_eq!(schema.keyword("type"), Some(&json!(["object", "null"])));
        assert_eq!(schema.keyword("exclusiveMaximum"), Some(&json!(10)));
        assert!(schema.keyword("discriminator").is_none());

        let extensions: Vec<&String> = schema.extensions().map(|(key, _)| key).collect();
        assert_eq!(extensions, vec!["x-go-type"]);

        assert_eq!(serde_json::to_value(&schema).unwrap(), input);
    }

    #[test]
    fn test_ref_with_sibling_keywords() {
        let schema: Schema = serde_json::from_value(json!({
            "$ref": "#/$defs/base",
            "description": "Narrowed"
        }))
        .unwrap();
        assert_eq!(schema.reference(), Some("#/$defs/base"));
        assert_eq!(schema.keyword("description"), Some(&json!("Narrowed")));
    }

    #[test]
    fn test_boolean_schemas() {
        let components: Components = serde_json::from_value(json!({
            "schemas": {
                "Any": true,
                "Nothing": false,
                "Pet": {"type": "object", "properties": {"extra": false}}
            }
        }))
        .unwrap();
        let schemas = components.schemas.as_ref().unwrap();

        let any = schemas["Any"].decode().unwrap();
        assert_eq!(any, Schema::from_bool(true));
        assert!(any.keywords.is_empty());
        assert_eq!(schemas["Nothing"].decode().unwrap().boolean, Some(false));
        assert_eq!(schemas["Pet"].decode().unwrap().boolean, None);

        assert_eq!(serde_json::to_value(&any).unwrap(), json!(true));
        assert_eq!(RefOr::from_item(&any).unwrap().as_value(), &json!(true));
        assert_eq!(
            serde_json::to_value(&components).unwrap()["schemas"]["Any"],
            json!(true)
        );

        let from_yaml: Schema = serde_yaml::from_str("false").unwrap();
        assert_eq!(serde_yaml::to_string(&from_yaml).unwrap(), "false\n");
    }

    #[test]
    fn test_schema_rejects_other_scalars() {
        let err = serde_json::from_value::<Schema>(json!("object")).unwrap_err();
        assert!(err.to_string().contains("boolean schema"));
    }

    #[test]
    fn test_schema_repeated_keyword_is_rejected() {
        let err = serde_json::from_str::<Schema>(r#"{"type":"string","type":"integer"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate field `type`"));

        let err = serde_json::from_str::<Schema>(r#"{"xml":{},"xml":{}}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate field `xml`"));
    }

    #[test]
    fn test_license_identifier_and_url_together() {
        let license: License = serde_json::from_value(json!({
            "name": "Apache 2.0",
            "identifier": "Apache-2.0",
            "url": "https://www.apache.org/licenses/LICENSE-2.0.html"
        }))
        .unwrap();
        assert_eq!(license.identifier.as_deref(), Some("Apache-2.0"));
        assert!(license.url.is_some());
    }

    #[test]
    fn test_minimal_document_without_webhooks() {
        let doc = OpenAPI::from_json(
            br#"{"openapi":"3.1.0","info":{"title":"T","version":"1.0"},"paths":{}}"#,
        )
        .unwrap();

        assert_eq!(doc.openapi, "3.1.0");
        assert!(doc.webhooks.is_none());
        assert!(doc.json_schema_dialect.is_none());
        assert_eq!(doc.paths.as_ref().map(|p| p.len()), Some(0));
    }

    #[test]
    fn test_document_without_paths() {
        let doc = OpenAPI::from_json(
            br##"{"openapi":"3.1.0","info":{"title":"T","version":"1.0"},
                "webhooks":{"newPet":{"post":{"requestBody":{"$ref":"#/components/requestBodies/Pet"}}}}}"##,
        )
        .unwrap();

        assert!(doc.paths.is_none());
        let hook = &doc.webhooks.as_ref().unwrap()["newPet"];
        let body = hook.post.as_ref().and_then(|op| op.request_body.as_ref()).unwrap();
        assert_eq!(body.ref_path(), Some("#/components/requestBodies/Pet"));
        assert!(!doc.to_json().unwrap().contains("\"paths\""));
    }

    #[test]
    fn test_info_summary_and_components_path_items() {
        let doc = OpenAPI::from_yaml(
            br#"
openapi: 3.1.0
info:
  title: Pets
  summary: Pet store
  version: 2.0.0
components:
  schemas:
    Pet:
      type: object
      properties:
        id:
          type: integer
  pathItems:
    Pets:
      get:
        responses:
          200:
            description: ok
"#,
        )
        .unwrap();

        assert_eq!(doc.info.summary.as_deref(), Some("Pet store"));
        let components = doc.components.as_ref().unwrap();
        let pet = components.schemas.as_ref().unwrap()["Pet"].decode().unwrap();
        assert_eq!(pet.keyword("type"), Some(&json!("object")));
        let item = components.path_items.as_ref().unwrap()["Pets"].decode().unwrap();
        let responses = item.get.and_then(|op| op.responses).unwrap();
        assert!(responses.for_status(200).is_some());
    }
}
