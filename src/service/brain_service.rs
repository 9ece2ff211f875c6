use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::config::SECOND_BRAIN_CONFIG;
use crate::model::api::ContentApi;
use crate::model::error::brain_errors::{BrainStatusError, ResolveBrainError, ToggleShareError};
use crate::model::repository::ShareLink;
use crate::model::response::brain_responses::BrainStatusApi;
use crate::repository::{content_repository, link_repository, open_connection};
use crate::service::content_service;

/// number of random bytes behind a share token; 22 characters once encoded
const SHARE_TOKEN_BYTES: usize = 16;

/// builds the public url for a share token off the configured base url
fn share_url(token: &str) -> String {
    format!(
        "{}/brain/{token}",
        SECOND_BRAIN_CONFIG.server.base_url.trim_end_matches('/')
    )
}

/// flips the caller's brain between public and private. The first call
/// creates the share link with a fresh random token and leaves it public;
/// every call after that flips the flag on the existing row and never
/// regenerates the token
pub fn toggle_sharing(user_id: u32) -> Result<BrainStatusApi, ToggleShareError> {
    let con = open_connection();
    let result = toggle_with_connection(user_id, &con);
    con.close().unwrap();
    result.map(|link| BrainStatusApi {
        is_public: link.is_public,
        link: if link.is_public {
            Some(share_url(&link.token))
        } else {
            None
        },
    })
}

fn toggle_with_connection(user_id: u32, con: &Connection) -> Result<ShareLink, ToggleShareError> {
    let existing = link_repository::get_by_user(user_id, con).map_err(|e| {
        log::error!(
            "Failed to look up share link for user {user_id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        ToggleShareError::DbError
    })?;
    match existing {
        None => {
            let token = super::random_token(SHARE_TOKEN_BYTES);
            link_repository::create_link(user_id, &token, con).map_err(|e| {
                log::error!(
                    "Failed to create share link for user {user_id}! Error is {e:?}\n{}",
                    Backtrace::force_capture()
                );
                ToggleShareError::DbError
            })
        }
        Some(link) => {
            link_repository::toggle_link(user_id, con).map_err(|e| {
                log::error!(
                    "Failed to toggle share link for user {user_id}! Error is {e:?}\n{}",
                    Backtrace::force_capture()
                );
                ToggleShareError::DbError
            })?;
            Ok(ShareLink {
                is_public: !link.is_public,
                ..link
            })
        }
    }
}

/// the caller's current sharing state without changing anything. Users who
/// never toggled sharing read as private
pub fn sharing_status(user_id: u32) -> Result<BrainStatusApi, BrainStatusError> {
    let con = open_connection();
    let link = link_repository::get_by_user(user_id, &con);
    con.close().unwrap();
    match link {
        Ok(Some(link)) if link.is_public => Ok(BrainStatusApi {
            is_public: true,
            link: Some(share_url(&link.token)),
        }),
        Ok(_) => Ok(BrainStatusApi {
            is_public: false,
            link: None,
        }),
        Err(e) => {
            log::error!(
                "Failed to read sharing status for user {user_id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(BrainStatusError::DbError)
        }
    }
}

/// resolves a share token to the owner's shared items, tags included, ordered
/// by id. Unknown tokens and private brains both come back as `NotFound` so a
/// visitor can't tell whether a brain exists
pub fn resolve_brain(token: &String) -> Result<Vec<ContentApi>, ResolveBrainError> {
    let con = open_connection();
    let result = resolve_with_connection(token, &con);
    con.close().unwrap();
    result
}

fn resolve_with_connection(
    token: &String,
    con: &Connection,
) -> Result<Vec<ContentApi>, ResolveBrainError> {
    let link = link_repository::get_by_token(token, con).map_err(|e| {
        log::error!(
            "Failed to look up share link by token! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        ResolveBrainError::DbError
    })?;
    let link = match link {
        Some(link) if link.is_public => link,
        _ => return Err(ResolveBrainError::NotFound),
    };
    let records = content_repository::get_shared_for_user(link.user_id, con).map_err(|e| {
        log::error!(
            "Failed to retrieve shared content for user {}! Error is {e:?}\n{}",
            link.user_id,
            Backtrace::force_capture()
        );
        ResolveBrainError::DbError
    })?;
    content_service::to_api_with_tags(records, con).map_err(|e| {
        log::error!(
            "Failed to populate tags on shared content! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        ResolveBrainError::DbError
    })
}


#[cfg(test)]
mod sharing_status_tests {
    use super::*;
    use crate::test::{cleanup, create_user_db, refresh_db};

    #[test]
    fn users_without_a_link_read_as_private() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        let status = sharing_status(user_id).unwrap();
        assert!(!status.is_public);
        assert_eq!(None, status.link);
        cleanup();
    }

    #[test]
    fn status_does_not_change_anything() {
        refresh_db();
        let user_id = create_user_db("a@b.com");
        toggle_sharing(user_id).unwrap();
        let before = sharing_status(user_id).unwrap();
        let after = sharing_status(user_id).unwrap();
        assert_eq!(before, after);
        assert!(after.is_public);
        cleanup();
    }
}
