//! Objects shared by the 3.0 and 3.1 dialects.
//!
//! Objects that embed schemas are generic over the dialect's schema type
//! `S`; the `v3_0` and `v3_1` modules bind it with type aliases.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::object::openapi_object;
use crate::patterned::{Callback, Responses};
use crate::reference::RefOr;

/// Security schemes required by an operation, each with its list of scopes.
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;

openapi_object! {
    /// Contact information for the exposed API
    pub struct Contact {
        #[serde(skip_serializing_if = "Option::is_none")]
        "name" => pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "url" => pub url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "email" => pub email: Option<String>,
    }
}

openapi_object! {
    /// External documentation for an object
    pub struct ExternalDocumentation {
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        "url" => pub url: String,
    }
}

openapi_object! {
    /// Server variable for server URL template substitution
    pub struct ServerVariable {
        #[serde(skip_serializing_if = "Option::is_none")]
        "enum" => pub enum_values: Option<Vec<String>>,
        "default" => pub default: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
    }
}

openapi_object! {
    /// A server hosting the API
    pub struct Server {
        /// May be relative and may contain `{variable}` templates.
        "url" => pub url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "variables" => pub variables: Option<BTreeMap<String, ServerVariable>>,
    }
}

openapi_object! {
    /// Discriminator object for Schema composition
    pub struct Discriminator {
        "propertyName" => pub property_name: String,
        /// Payload values to schema names or references.
        #[serde(skip_serializing_if = "Option::is_none")]
        "mapping" => pub mapping: Option<BTreeMap<String, String>>,
    }
}

openapi_object! {
    /// XML object
    pub struct Xml {
        #[serde(skip_serializing_if = "Option::is_none")]
        "name" => pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "namespace" => pub namespace: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "prefix" => pub prefix: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "attribute" => pub attribute: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "wrapped" => pub wrapped: Option<bool>,
    }
}

openapi_object! {
    /// Tag information for API operations
    pub struct Tag {
        "name" => pub name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "externalDocs" => pub external_docs: Option<ExternalDocumentation>,
    }
}

openapi_object! {
    /// Example object
    pub struct Example {
        #[serde(skip_serializing_if = "Option::is_none")]
        "summary" => pub summary: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "value" => pub value: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "externalValue" => pub external_value: Option<String>,
    }
}

openapi_object! {
    /// Response or encoding header. Same fields as a Parameter minus `name` and `in`.
    pub struct Header<S> {
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "required" => pub required: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "deprecated" => pub deprecated: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "allowEmptyValue" => pub allow_empty_value: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "style" => pub style: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "explode" => pub explode: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "allowReserved" => pub allow_reserved: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "schema" => pub schema: Option<RefOr<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "example" => pub example: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "examples" => pub examples: Option<BTreeMap<String, RefOr<Example>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "content" => pub content: Option<BTreeMap<String, MediaType<S>>>,
    }
}

openapi_object! {
    /// Encoding of a single property of a multipart or form body
    pub struct Encoding<S> {
        #[serde(skip_serializing_if = "Option::is_none")]
        "contentType" => pub content_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "headers" => pub headers: Option<BTreeMap<String, RefOr<Header<S>>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "style" => pub style: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "explode" => pub explode: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "allowReserved" => pub allow_reserved: Option<bool>,
    }
}

openapi_object! {
    /// Media type object
    pub struct MediaType<S> {
        #[serde(skip_serializing_if = "Option::is_none")]
        "schema" => pub schema: Option<RefOr<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "example" => pub example: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "examples" => pub examples: Option<BTreeMap<String, RefOr<Example>>>,
        /// Keyed by property name.
        #[serde(skip_serializing_if = "Option::is_none")]
        "encoding" => pub encoding: Option<BTreeMap<String, Encoding<S>>>,
    }
}

openapi_object! {
    /// Parameter for an operation
    pub struct Parameter<S> {
        "name" => pub name: String,
        /// `query`, `header`, `path` or `cookie`.
        "in" => pub location: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "required" => pub required: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "deprecated" => pub deprecated: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "allowEmptyValue" => pub allow_empty_value: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "style" => pub style: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "explode" => pub explode: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "allowReserved" => pub allow_reserved: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "schema" => pub schema: Option<RefOr<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "example" => pub example: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "examples" => pub examples: Option<BTreeMap<String, RefOr<Example>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "content" => pub content: Option<BTreeMap<String, MediaType<S>>>,
    }
}

impl<S> Parameter<S> {
    /// Whether the parameter is mandatory: the declared `required`, or
    /// `true` for path parameters that leave it out.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(self.location == "path")
    }
}

openapi_object! {
    /// Request body object
    pub struct RequestBody<S> {
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        "content" => pub content: BTreeMap<String, MediaType<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "required" => pub required: Option<bool>,
    }
}

openapi_object! {
    /// A single response of an operation
    pub struct Response<S> {
        "description" => pub description: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        "headers" => pub headers: Option<BTreeMap<String, RefOr<Header<S>>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "content" => pub content: Option<BTreeMap<String, MediaType<S>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "links" => pub links: Option<BTreeMap<String, RefOr<Link>>>,
    }
}

openapi_object! {
    /// Link object. Runtime expressions in `parameters` and `request_body`
    /// are kept as raw values.
    pub struct Link {
        #[serde(skip_serializing_if = "Option::is_none")]
        "operationRef" => pub operation_ref: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "operationId" => pub operation_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "parameters" => pub parameters: Option<BTreeMap<String, Value>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "requestBody" => pub request_body: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "server" => pub server: Option<Server>,
    }
}

openapi_object! {
    /// An operation (endpoint) of the API
    pub struct Operation<S> {
        #[serde(skip_serializing_if = "Option::is_none")]
        "tags" => pub tags: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "summary" => pub summary: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "externalDocs" => pub external_docs: Option<ExternalDocumentation>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "operationId" => pub operation_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "parameters" => pub parameters: Option<Vec<RefOr<Parameter<S>>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "requestBody" => pub request_body: Option<RefOr<RequestBody<S>>>,
        /// Required in 3.0, optional in 3.1.
        #[serde(skip_serializing_if = "Option::is_none")]
        "responses" => pub responses: Option<Responses<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "callbacks" => pub callbacks: Option<BTreeMap<String, RefOr<Callback<S>>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "deprecated" => pub deprecated: Option<bool>,
        /// An empty list removes the document-level requirements.
        #[serde(skip_serializing_if = "Option::is_none")]
        "security" => pub security: Option<Vec<SecurityRequirement>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "servers" => pub servers: Option<Vec<Server>>,
    }
}

openapi_object! {
    /// A single path item with all its operations
    pub struct PathItem<S> {
        #[serde(skip_serializing_if = "Option::is_none")]
        "$ref" => pub ref_path: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "summary" => pub summary: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "get" => pub get: Option<Operation<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "put" => pub put: Option<Operation<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "post" => pub post: Option<Operation<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "delete" => pub delete: Option<Operation<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "options" => pub options: Option<Operation<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "head" => pub head: Option<Operation<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "patch" => pub patch: Option<Operation<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "trace" => pub trace: Option<Operation<S>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "servers" => pub servers: Option<Vec<Server>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "parameters" => pub parameters: Option<Vec<RefOr<Parameter<S>>>>,
    }
}

impl<S> PathItem<S> {
    /// The operations that are set, paired with their lowercase HTTP method,
    /// in `get, put, post, delete, options, head, patch, trace` order.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation<S>)> {
        [
            ("get", &self.get),
            ("put", &self.put),
            ("post", &self.post),
            ("delete", &self.delete),
            ("options", &self.options),
            ("head", &self.head),
            ("patch", &self.patch),
            ("trace", &self.trace),
        ]
        .into_iter()
        .filter_map(|(method, operation)| operation.as_ref().map(|op| (method, op)))
    }
}

openapi_object! {
    /// OAuth Flow Object
    pub struct OAuthFlow {
        /// Required for `implicit` and `authorizationCode`.
        #[serde(skip_serializing_if = "Option::is_none")]
        "authorizationUrl" => pub authorization_url: Option<String>,
        /// Required for `password`, `clientCredentials` and `authorizationCode`.
        #[serde(skip_serializing_if = "Option::is_none")]
        "tokenUrl" => pub token_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "refreshUrl" => pub refresh_url: Option<String>,
        "scopes" => pub scopes: BTreeMap<String, String>,
    }
}

openapi_object! {
    /// OAuth Flows Object
    pub struct OAuthFlows {
        #[serde(skip_serializing_if = "Option::is_none")]
        "implicit" => pub implicit: Option<OAuthFlow>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "password" => pub password: Option<OAuthFlow>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "clientCredentials" => pub client_credentials: Option<OAuthFlow>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "authorizationCode" => pub authorization_code: Option<OAuthFlow>,
    }
}

openapi_object! {
    /// Security scheme object
    pub struct SecurityScheme {
        /// `apiKey`, `http`, `oauth2`, `openIdConnect`, or `mutualTLS` (3.1).
        "type" => pub scheme_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        "description" => pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "name" => pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "in" => pub location: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "scheme" => pub scheme: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "bearerFormat" => pub bearer_format: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "flows" => pub flows: Option<OAuthFlows>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "openIdConnectUrl" => pub open_id_connect_url: Option<String>,
    }
}

openapi_object! {
    /// Components object for reusable components, keyed by component name
    pub struct Components<S> {
        #[serde(skip_serializing_if = "Option::is_none")]
        "schemas" => pub schemas: Option<BTreeMap<String, RefOr<S>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "responses" => pub responses: Option<BTreeMap<String, RefOr<Response<S>>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "parameters" => pub parameters: Option<BTreeMap<String, RefOr<Parameter<S>>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "examples" => pub examples: Option<BTreeMap<String, RefOr<Example>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "requestBodies" => pub request_bodies: Option<BTreeMap<String, RefOr<RequestBody<S>>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "headers" => pub headers: Option<BTreeMap<String, RefOr<Header<S>>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "securitySchemes" => pub security_schemes: Option<BTreeMap<String, RefOr<SecurityScheme>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "links" => pub links: Option<BTreeMap<String, RefOr<Link>>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        "callbacks" => pub callbacks: Option<BTreeMap<String, RefOr<Callback<S>>>>,
        /// OpenAPI 3.1 only.
        #[serde(skip_serializing_if = "Option::is_none")]
        "pathItems" => pub path_items: Option<BTreeMap<String, RefOr<PathItem<S>>>>,
    }
}
