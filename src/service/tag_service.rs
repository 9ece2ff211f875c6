use std::backtrace::Backtrace;

use crate::model::error::tag_errors::{CreateTagError, GetTagsError};
use crate::model::response::TagApi;
use crate::repository::{open_connection, tag_repository};

/// creates a user-owned tag, enforcing scope-level uniqueness: the title must
/// not already exist as one of the caller's tags or as a global tag. The
/// check happens here instead of in a db constraint because sqlite treats the
/// null owner of global tags as distinct in unique indexes
pub fn create_tag(user_id: u32, title: String) -> Result<TagApi, CreateTagError> {
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(CreateTagError::MissingTitle);
    }
    let con = open_connection();
    let existing = match tag_repository::find_in_scope(&title, user_id, &con) {
        Ok(tag) => tag,
        Err(e) => {
            log::error!(
                "Failed to check if any tags with the name {title} already exist! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(CreateTagError::DbError);
        }
    };
    if existing.is_some() {
        con.close().unwrap();
        return Err(CreateTagError::AlreadyExists);
    }
    let tag = match tag_repository::create_tag(&title, user_id, &con) {
        Ok(tag) => tag,
        Err(e) => {
            log::error!(
                "Failed to create a new tag with the name {title}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(CreateTagError::DbError);
        }
    };
    con.close().unwrap();
    Ok(TagApi::from(tag))
}

/// lists the union of the caller's own tags and all global tags. Scope
/// uniqueness means no title can appear twice in the result
pub fn get_tags(user_id: u32) -> Result<Vec<TagApi>, GetTagsError> {
    let con = open_connection();
    let tags = match tag_repository::get_for_user(user_id, &con) {
        Ok(tags) => tags,
        Err(e) => {
            log::error!(
                "Failed to retrieve tags for user {user_id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(GetTagsError::DbError);
        }
    };
    con.close().unwrap();
    Ok(tags.into_iter().map(TagApi::from).collect())
}
