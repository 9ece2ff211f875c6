use std::backtrace::Backtrace;
use std::collections::HashSet;

use regex::Regex;
use rusqlite::Connection;

use crate::model::api::ContentApi;
use crate::model::content_types::ContentTypes;
use crate::model::error::content_errors::{
    CreateContentError, DeleteContentError, GetContentError, SetSharedError, ShareAllError,
    UpdateContentError,
};
use crate::model::repository::ContentRecord;
use crate::model::request::content_requests::{CreateContentRequest, UpdateContentRequest};
use crate::model::response::TagApi;
use crate::repository::{content_repository, open_connection, tag_repository};

/// outcome of the shared field checks between create and update
enum FieldError {
    MissingTitle,
    InvalidLink,
    InvalidType,
}

/// validates the scalar fields every content mutation carries and returns the
/// parsed content type. Happens before anything touches the database
fn check_fields(title: &str, link: &str, content_type: &str) -> Result<ContentTypes, FieldError> {
    if title.trim().is_empty() {
        return Err(FieldError::MissingTitle);
    }
    //language=RegExp
    let url_regex = Regex::new("^https?://\\S+\\.\\S+$").unwrap();
    if !url_regex.is_match(link.trim()) {
        return Err(FieldError::InvalidLink);
    }
    ContentTypes::parse(content_type).ok_or(FieldError::InvalidType)
}

/// checks every referenced tag exists and is visible to the caller (their own
/// or global), returning the deduplicated id list in input order
fn check_tag_refs(
    tag_ids: &[u32],
    user_id: u32,
    con: &Connection,
) -> Result<Vec<u32>, Option<rusqlite::Error>> {
    let mut seen: HashSet<u32> = HashSet::new();
    let mut checked: Vec<u32> = Vec::new();
    for tag_id in tag_ids {
        if !seen.insert(*tag_id) {
            continue;
        }
        match tag_repository::get_visible_by_id(*tag_id, user_id, con) {
            Ok(Some(_)) => checked.push(*tag_id),
            // the tag doesn't exist for this caller's purposes
            Ok(None) => return Err(None),
            Err(e) => return Err(Some(e)),
        }
    }
    Ok(checked)
}

/// turns db records into wire items with their tags populated in one batched
/// lookup. Also used by the brain resolution path
pub(crate) fn to_api_with_tags(
    records: Vec<ContentRecord>,
    con: &Connection,
) -> Result<Vec<ContentApi>, rusqlite::Error> {
    let ids: Vec<u32> = records.iter().filter_map(|r| r.id).collect();
    let mut tag_map = tag_repository::get_tags_for_contents(ids, con)?;
    Ok(records
        .into_iter()
        .map(|record| {
            let tags: Vec<TagApi> = tag_map
                .remove(&record.id.unwrap_or(0))
                .unwrap_or_default()
                .into_iter()
                .map(TagApi::from)
                .collect();
            ContentApi::from_with_tags(record, tags)
        })
        .collect())
}

/// validates and stores a new content item for the passed user, returning it
/// with tags populated
pub fn create_content(
    user_id: u32,
    request: CreateContentRequest,
) -> Result<ContentApi, CreateContentError> {
    let content_type = match check_fields(&request.title, &request.link, &request.content_type) {
        Ok(t) => t,
        Err(FieldError::MissingTitle) => return Err(CreateContentError::MissingTitle),
        Err(FieldError::InvalidLink) => return Err(CreateContentError::InvalidLink),
        Err(FieldError::InvalidType) => return Err(CreateContentError::InvalidType),
    };
    let con = open_connection();
    let tag_ids = match check_tag_refs(&request.tags, user_id, &con) {
        Ok(ids) => ids,
        Err(None) => {
            con.close().unwrap();
            return Err(CreateContentError::TagNotFound);
        }
        Err(Some(e)) => {
            log::error!(
                "Failed to validate tag references! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(CreateContentError::DbError);
        }
    };
    let record = ContentRecord {
        id: None,
        user_id,
        title: request.title.trim().to_string(),
        link: request.link.trim().to_string(),
        content_type,
        notes: request.notes,
        is_shared: request.is_shared,
    };
    let content_id = match content_repository::create_content(&record, &con) {
        Ok(id) => id,
        Err(e) => {
            log::error!(
                "Failed to create content! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(CreateContentError::DbError);
        }
    };
    for tag_id in tag_ids {
        if let Err(e) = tag_repository::add_tag_to_content(content_id, tag_id, &con) {
            log::error!(
                "Failed to add tag {tag_id} to content {content_id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(CreateContentError::DbError);
        }
    }
    let result = fetch_single(content_id, &con);
    con.close().unwrap();
    result.map_err(|e| {
        log::error!(
            "Failed to read back created content {content_id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        CreateContentError::DbError
    })
}

/// all of the passed user's content, tags populated, ordered by id
pub fn get_content(user_id: u32) -> Result<Vec<ContentApi>, GetContentError> {
    let con = open_connection();
    let records = match content_repository::get_for_user(user_id, &con) {
        Ok(records) => records,
        Err(e) => {
            log::error!(
                "Failed to retrieve content for user {user_id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(GetContentError::DbError);
        }
    };
    let result = to_api_with_tags(records, &con);
    con.close().unwrap();
    result.map_err(|e| {
        log::error!(
            "Failed to populate tags on content for user {user_id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        GetContentError::DbError
    })
}

/// replaces the scalar fields and the entire tag set of one of the caller's
/// items. Only the owner may update; a non-owner gets the same generic denial
/// no matter what the record holds
pub fn update_content(
    user_id: u32,
    request: UpdateContentRequest,
) -> Result<ContentApi, UpdateContentError> {
    let content_type = match check_fields(&request.title, &request.link, &request.content_type) {
        Ok(t) => t,
        Err(FieldError::MissingTitle) => return Err(UpdateContentError::MissingTitle),
        Err(FieldError::InvalidLink) => return Err(UpdateContentError::InvalidLink),
        Err(FieldError::InvalidType) => return Err(UpdateContentError::InvalidType),
    };
    let con = open_connection();
    let existing = match content_repository::get_by_id(request.id, &con) {
        Ok(record) => record,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(UpdateContentError::ContentNotFound);
        }
        Err(e) => {
            log::error!(
                "Failed to retrieve content {} for update! Error is {e:?}\n{}",
                request.id,
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(UpdateContentError::DbError);
        }
    };
    if existing.user_id != user_id {
        con.close().unwrap();
        return Err(UpdateContentError::NotOwner);
    }
    let tag_ids = match check_tag_refs(&request.tags, user_id, &con) {
        Ok(ids) => ids,
        Err(None) => {
            con.close().unwrap();
            return Err(UpdateContentError::TagNotFound);
        }
        Err(Some(e)) => {
            log::error!(
                "Failed to validate tag references! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(UpdateContentError::DbError);
        }
    };
    let record = ContentRecord {
        id: Some(request.id),
        user_id,
        title: request.title.trim().to_string(),
        link: request.link.trim().to_string(),
        content_type,
        notes: request.notes,
        is_shared: existing.is_shared,
    };
    if let Err(e) = content_repository::update_content(&record, &con) {
        log::error!(
            "Failed to update content {}! Error is {e:?}\n{}",
            request.id,
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(UpdateContentError::DbError);
    }
    if let Err(e) = tag_repository::remove_tags_from_content(request.id, &con) {
        log::error!(
            "Failed to clear tags on content {}! Error is {e:?}\n{}",
            request.id,
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(UpdateContentError::DbError);
    }
    for tag_id in tag_ids {
        if let Err(e) = tag_repository::add_tag_to_content(request.id, tag_id, &con) {
            log::error!(
                "Failed to add tag {tag_id} to content {}! Error is {e:?}\n{}",
                request.id,
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(UpdateContentError::DbError);
        }
    }
    let result = fetch_single(request.id, &con);
    con.close().unwrap();
    result.map_err(|e| {
        log::error!(
            "Failed to read back updated content {}! Error is {e:?}\n{}",
            request.id,
            Backtrace::force_capture()
        );
        UpdateContentError::DbError
    })
}

/// deletes one of the caller's content items. The delete targets the content
/// table and nothing else
pub fn delete_content(user_id: u32, content_id: u32) -> Result<(), DeleteContentError> {
    let con = open_connection();
    let existing = match content_repository::get_by_id(content_id, &con) {
        Ok(record) => record,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(DeleteContentError::ContentNotFound);
        }
        Err(e) => {
            log::error!(
                "Failed to retrieve content {content_id} for delete! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(DeleteContentError::DbError);
        }
    };
    if existing.user_id != user_id {
        con.close().unwrap();
        return Err(DeleteContentError::NotOwner);
    }
    if let Err(e) = content_repository::delete_content(content_id, &con) {
        log::error!(
            "Failed to delete content {content_id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(DeleteContentError::DbError);
    }
    con.close().unwrap();
    Ok(())
}

/// sets the item-level shared flag on one of the caller's items, returning
/// the updated item. Independent of whether the caller's brain link is public
pub fn set_shared(
    user_id: u32,
    content_id: u32,
    shared: bool,
) -> Result<ContentApi, SetSharedError> {
    let con = open_connection();
    let existing = match content_repository::get_by_id(content_id, &con) {
        Ok(record) => record,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(SetSharedError::ContentNotFound);
        }
        Err(e) => {
            log::error!(
                "Failed to retrieve content {content_id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(SetSharedError::DbError);
        }
    };
    if existing.user_id != user_id {
        con.close().unwrap();
        return Err(SetSharedError::NotOwner);
    }
    if let Err(e) = content_repository::set_shared(content_id, shared, &con) {
        log::error!(
            "Failed to set the shared flag on content {content_id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(SetSharedError::DbError);
    }
    let result = fetch_single(content_id, &con);
    con.close().unwrap();
    result.map_err(|e| {
        log::error!(
            "Failed to read back content {content_id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        SetSharedError::DbError
    })
}

/// marks every one of the caller's items shared in one statement; each row
/// update is independent and idempotent. Does not touch the brain's public
/// flag; callers compose this with the sharing toggle if they want both
pub fn share_all(user_id: u32) -> Result<u32, ShareAllError> {
    let con = open_connection();
    let changed = match content_repository::share_all(user_id, &con) {
        Ok(changed) => changed,
        Err(e) => {
            log::error!(
                "Failed to share all content for user {user_id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(ShareAllError::DbError);
        }
    };
    con.close().unwrap();
    Ok(changed as u32)
}

fn fetch_single(content_id: u32, con: &Connection) -> Result<ContentApi, rusqlite::Error> {
    let record = content_repository::get_by_id(content_id, con)?;
    let tags = tag_repository::get_tags_for_content(content_id, con)?
        .into_iter()
        .map(TagApi::from)
        .collect();
    Ok(ContentApi::from_with_tags(record, tags))
}


#[cfg(test)]
mod update_content_tests {
    use super::*;
    use crate::test::{cleanup, create_content_db, create_tag_db, create_user_db, refresh_db};

    fn request(id: u32, title: &str, tags: Vec<u32>) -> UpdateContentRequest {
        UpdateContentRequest {
            id,
            title: title.to_string(),
            link: "https://x.com".to_string(),
            content_type: "article".to_string(),
            notes: None,
            tags,
        }
    }

    #[test]
    fn update_content_replaces_the_tag_set() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        let content_id = create_content_db(user_id, "Post", false);
        let first = create_tag_db("first", user_id);
        let second = create_tag_db("second", user_id);
        update_content(user_id, request(content_id, "Post", vec![first])).unwrap();
        let updated = update_content(user_id, request(content_id, "Renamed", vec![second])).unwrap();
        assert_eq!("Renamed", updated.title);
        assert_eq!(1, updated.tags.len());
        assert_eq!(Some(second), updated.tags[0].id);
        cleanup();
    }

    #[test]
    fn update_content_requires_ownership() {
        refresh_db();
        let owner = create_user_db("a@b.com");
        let other = create_user_db("c@d.com");
        let content_id = create_content_db(owner, "Post", false);
        assert_eq!(
            Err(UpdateContentError::NotOwner),
            update_content(other, request(content_id, "Stolen", vec![]))
        );
        cleanup();
    }

    #[test]
    fn update_content_missing_id_is_not_found() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        assert_eq!(
            Err(UpdateContentError::ContentNotFound),
            update_content(user_id, request(999, "Post", vec![]))
        );
        cleanup();
    }
}



#[cfg(test)]
mod share_all_tests {
    use super::*;
    use crate::test::{cleanup, create_content_db, create_user_db, refresh_db};

    #[test]
    fn share_all_reports_the_number_of_items() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        create_content_db(user_id, "one", false);
        create_content_db(user_id, "two", false);
        assert_eq!(Ok(2), share_all(user_id));
        assert!(get_content(user_id).unwrap().iter().all(|c| c.is_shared));
        cleanup();
    }
}
