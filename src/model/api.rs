use rocket::serde::{Deserialize, Serialize};

use crate::model::content_types::ContentTypes;
use crate::model::repository::ContentRecord;
use crate::model::response::TagApi;

/// wire representation of a content item, tags populated
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct ContentApi {
    pub id: u32,
    pub title: String,
    pub link: String,
    #[serde(rename = "type")]
    pub content_type: ContentTypes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "isShared")]
    pub is_shared: bool,
    #[serde(default)]
    pub tags: Vec<TagApi>,
}

impl ContentApi {
    pub fn from_with_tags(record: ContentRecord, tags: Vec<TagApi>) -> Self {
        let mut api: Self = record.into();
        api.tags = tags;
        api
    }
}

impl From<ContentRecord> for ContentApi {
    fn from(value: ContentRecord) -> Self {
        Self {
            // records straight from the database always carry an id
            id: value.id.unwrap_or(0),
            title: value.title,
            link: value.link,
            content_type: value.content_type,
            notes: value.notes,
            is_shared: value.is_shared,
            tags: Vec::new(),
        }
    }
}
