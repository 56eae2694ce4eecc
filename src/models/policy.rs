//! The POST policy document that the storage provider validates before
//! accepting a direct browser upload.

use base64::{Engine as _, engine::general_purpose};
use serde::ser::{SerializeMap, SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

/// Access-control level applied to the uploaded object.
///
/// Serialized as the provider's lowercase token (`private`, `public-read`).
/// The same value must appear both as a policy condition and as the `acl`
/// field of the upload form, or the provider rejects the upload.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Acl {
    Private,
    PublicRead,
}

impl Acl {
    pub fn as_str(&self) -> &'static str {
        match self {
            Acl::Private => "private",
            Acl::PublicRead => "public-read",
        }
    }
}

impl std::str::FromStr for Acl {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Acl::Private),
            "public-read" => Ok(Acl::PublicRead),
            other => Err(format!(
                "unsupported acl `{}` (expected `private` or `public-read`)",
                other
            )),
        }
    }
}

/// A single constraint inside a policy document.
///
/// The provider's policy grammar has three condition forms, each with its own
/// wire encoding:
/// - exact match: `{"field": "value"}`
/// - prefix match: `["starts-with", "$field", "prefix"]`
/// - size range: `["content-length-range", min, max]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    Exact { field: String, value: String },
    StartsWith { field: String, prefix: String },
    ContentLengthRange { min: u64, max: u64 },
}

impl Condition {
    pub fn exact(field: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::Exact {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn starts_with(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Condition::StartsWith {
            field: field.into(),
            prefix: prefix.into(),
        }
    }

    pub fn content_length_range(min: u64, max: u64) -> Self {
        Condition::ContentLengthRange { min, max }
    }
}

impl Serialize for Condition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Condition::Exact { field, value } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(field, value)?;
                map.end()
            }
            Condition::StartsWith { field, prefix } => {
                let mut seq = serializer.serialize_tuple(3)?;
                seq.serialize_element("starts-with")?;
                seq.serialize_element(&format!("${}", field))?;
                seq.serialize_element(prefix)?;
                seq.end()
            }
            Condition::ContentLengthRange { min, max } => {
                let mut seq = serializer.serialize_tuple(3)?;
                seq.serialize_element("content-length-range")?;
                seq.serialize_element(min)?;
                seq.serialize_element(max)?;
                seq.end()
            }
        }
    }
}

/// The policy document: an expiration timestamp plus the ordered condition
/// set. Condition order is the declaration order of the vector, so encoding
/// is deterministic for a fixed input.
#[derive(Serialize, Clone, Debug)]
pub struct PolicyDocument {
    pub expiration: String,
    pub conditions: Vec<Condition>,
}

impl PolicyDocument {
    /// Serialize to compact JSON and base64-encode the result.
    ///
    /// The returned string is both what the upload form submits as `policy`
    /// and the exact byte sequence the signature is computed over.
    pub fn encode(&self) -> serde_json::Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(general_purpose::STANDARD.encode(json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn exact_condition_serializes_as_map() {
        let condition = Condition::exact("bucket", "s3-bucket");
        let value = serde_json::to_value(&condition).unwrap();
        assert_eq!(value, json!({"bucket": "s3-bucket"}));
    }

    #[test]
    fn starts_with_condition_serializes_as_triple() {
        let condition = Condition::starts_with("key", "data/");
        let value = serde_json::to_value(&condition).unwrap();
        assert_eq!(value, json!(["starts-with", "$key", "data/"]));
    }

    #[test]
    fn content_length_range_serializes_as_triple() {
        let condition = Condition::content_length_range(0, 68157440);
        let value = serde_json::to_value(&condition).unwrap();
        assert_eq!(value, json!(["content-length-range", 0, 68157440]));
    }

    #[test]
    fn document_encodes_to_base64_json() {
        let document = PolicyDocument {
            expiration: "2024-01-01T00:45:00Z".into(),
            conditions: vec![
                Condition::exact("bucket", "s3-bucket"),
                Condition::content_length_range(0, 1024),
            ],
        };

        let encoded = document.encode().unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&encoded)
            .unwrap();
        let value: Value = serde_json::from_slice(&decoded).unwrap();

        assert_eq!(value["expiration"], "2024-01-01T00:45:00Z");
        assert_eq!(value["conditions"].as_array().unwrap().len(), 2);
        assert_eq!(value["conditions"][0], json!({"bucket": "s3-bucket"}));
    }

    #[test]
    fn acl_tokens_round_trip() {
        assert_eq!("private".parse::<Acl>().unwrap(), Acl::Private);
        assert_eq!("public-read".parse::<Acl>().unwrap(), Acl::PublicRead);
        assert!("authenticated-read".parse::<Acl>().is_err());
        assert_eq!(serde_json::to_value(Acl::Private).unwrap(), "private");
    }
}
