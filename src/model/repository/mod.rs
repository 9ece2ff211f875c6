use crate::model::content_types::ContentTypes;

/// represents a row in the users table. The password hash is a sha256 digest
/// of `email:password`, never the raw password
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub password_hash: String,
}

/// represents a tag in the tags table. [`user_id`] is `None` for global tags,
/// which are visible to every user
///
/// [`user_id`]: Tag::user_id
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Tag {
    pub id: u32,
    pub title: String,
    pub user_id: Option<u32>,
    pub is_global: bool,
}

/// a bookmarked item owned by a single user
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ContentRecord {
    /// the id, will only be populated when pulled from the database
    pub id: Option<u32>,
    pub user_id: u32,
    pub title: String,
    pub link: String,
    pub content_type: ContentTypes,
    /// optional markdown notes
    pub notes: Option<String>,
    /// item-level gate for the public brain; defaults to false
    pub is_shared: bool,
}

/// the per-user share-link record gating anonymous access to a brain.
/// At most one exists per user; the token never changes once created,
/// only [`is_public`] flips
///
/// [`is_public`]: ShareLink::is_public
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShareLink {
    pub id: u32,
    pub user_id: u32,
    pub token: String,
    pub is_public: bool,
}
