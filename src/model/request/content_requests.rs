use rocket::serde::{Deserialize, Serialize};

/// `content_type` stays a plain string here; it's parsed against the fixed
/// enum as an explicit validation step in the service instead of failing
/// somewhere inside deserialization
#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CreateContentRequest {
    pub title: String,
    pub link: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(rename = "isShared", default)]
    pub is_shared: bool,
    /// ids of existing tags to attach; each must be owned by the caller or global
    #[serde(default)]
    pub tags: Vec<u32>,
}

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct UpdateContentRequest {
    pub id: u32,
    pub title: String,
    pub link: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// replaces the item's entire tag set
    #[serde(default)]
    pub tags: Vec<u32>,
}

#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SetSharedRequest {
    #[serde(rename = "isShared")]
    pub is_shared: bool,
}
