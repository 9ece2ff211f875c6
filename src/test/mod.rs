use std::fs::remove_file;
use std::path::Path;

use crate::model::repository::ContentRecord;
use crate::model::content_types::ContentTypes;
use crate::repository::{
    content_repository, initialize_db, open_connection, tag_repository, user_repository,
};
use crate::service::auth_service;

#[cfg(test)]
pub fn refresh_db() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    initialize_db().unwrap();
}

#[cfg(test)]
pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

/// creates a user directly in the database and returns their id
#[cfg(test)]
pub fn create_user_db(email: &str) -> u32 {
    let connection = open_connection();
    let hash = auth_service::hash_credentials(email, "password123");
    let id = user_repository::create_user(&email.to_string(), &hash, &connection).unwrap();
    connection.close().unwrap();
    id
}

/// creates a content row for the passed user and returns its id
#[cfg(test)]
pub fn create_content_db(user_id: u32, title: &str, shared: bool) -> u32 {
    let connection = open_connection();
    let id = content_repository::create_content(
        &ContentRecord {
            id: None,
            user_id,
            title: title.to_string(),
            link: "https://example.com/post".to_string(),
            content_type: ContentTypes::Article,
            notes: None,
            is_shared: shared,
        },
        &connection,
    )
    .unwrap();
    connection.close().unwrap();
    id
}

/// creates a tag owned by the passed user and returns its id
#[cfg(test)]
pub fn create_tag_db(title: &str, user_id: u32) -> u32 {
    let connection = open_connection();
    let id = tag_repository::create_tag(&title.to_string(), user_id, &connection)
        .unwrap()
        .id;
    connection.close().unwrap();
    id
}

/// creates a tag for the passed user and attaches it to the passed content,
/// returning the tag's id
#[cfg(test)]
pub fn create_tag_content(title: &str, user_id: u32, content_id: u32) -> u32 {
    let connection = open_connection();
    let id = tag_repository::create_tag(&title.to_string(), user_id, &connection)
        .unwrap()
        .id;
    tag_repository::add_tag_to_content(content_id, id, &connection).unwrap();
    connection.close().unwrap();
    id
}

/// inserts an ownerless global tag the way the migration seeds do
#[cfg(test)]
pub fn create_global_tag_db(title: &str) -> u32 {
    let connection = open_connection();
    let mut pst = connection
        .prepare("insert into tags (title, userId, isGlobal) values (?1, null, 1)")
        .unwrap();
    let id = pst.insert(rusqlite::params![title]).unwrap() as u32;
    drop(pst);
    connection.close().unwrap();
    id
}

#[cfg(test)]
pub fn cleanup() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
}
