use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_record_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub unicode: String,
    pub description: String,
}
