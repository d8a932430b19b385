//! Response schema descriptor sent to the backend as a hard output constraint.
//!
//! Modeled as plain data in the OpenAPI subset the Gemini API accepts, so the
//! exact shape can be inspected and asserted on without a network call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    pub fn string(description: &str) -> Self {
        Self {
            kind: SchemaType::String,
            description: Some(description.to_string()),
            properties: BTreeMap::new(),
            required: Vec::new(),
            items: None,
        }
    }

    pub fn array(items: Schema) -> Self {
        Self {
            kind: SchemaType::Array,
            description: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            items: Some(Box::new(items)),
        }
    }

    /// Object whose listed properties are all required
    pub fn object(properties: Vec<(&str, Schema)>) -> Self {
        let required = properties.iter().map(|(name, _)| name.to_string()).collect();
        Self {
            kind: SchemaType::Object,
            description: None,
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
            required,
            items: None,
        }
    }
}

/// Schema of a single `VideoItem`
pub fn video_item_schema() -> Schema {
    Schema::object(vec![
        (
            "title",
            Schema::string("The likely title of a real YouTube video"),
        ),
        ("channelName", Schema::string("The name of the creator/channel")),
        (
            "duration",
            Schema::string("Approximate duration (e.g. '12:30')"),
        ),
        ("description", Schema::string("Brief content summary")),
        (
            "reasoning",
            Schema::string("Why this specific video was chosen for this flow"),
        ),
    ])
}

/// Schema of the whole `PlaylistResponse`
pub fn playlist_schema() -> Schema {
    Schema::object(vec![
        (
            "playlistName",
            Schema::string("A catchy title for the curated playlist"),
        ),
        (
            "totalDuration",
            Schema::string("Estimated total duration string (e.g. '45 mins')"),
        ),
        (
            "description",
            Schema::string("A short summary of what the user will learn or experience"),
        ),
        ("items", Schema::array(video_item_schema())),
    ])
}
