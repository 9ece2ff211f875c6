use std::backtrace::Backtrace;
use std::io::Write;

use regex::Regex;
use sha2::{Digest, Sha256};

use crate::model::error::auth_errors::{SigninError, SignupError};
use crate::model::request::NewCredentials;
use crate::repository::{open_connection, user_repository};
use crate::service::random_token;

/// number of random bytes behind an issued bearer token
const SESSION_TOKEN_BYTES: usize = 24;

/// validates and creates a new account, returning the new user's id
pub fn signup(credentials: NewCredentials) -> Result<u32, SignupError> {
    let email = credentials.email.trim().to_lowercase();
    if !is_email_shaped(&email) {
        return Err(SignupError::InvalidEmail);
    }
    let password_length = credentials.password.chars().count();
    if !(8..=20).contains(&password_length) {
        return Err(SignupError::InvalidPassword);
    }
    let con = open_connection();
    let existing = match user_repository::get_by_email(&email, &con) {
        Ok(user) => user,
        Err(e) => {
            log::error!(
                "Failed to check if a user with the email {email} already exists! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(SignupError::DbError);
        }
    };
    if existing.is_some() {
        con.close().unwrap();
        return Err(SignupError::AlreadyExists);
    }
    let hash = hash_credentials(&email, &credentials.password);
    let id = match user_repository::create_user(&email, &hash, &con) {
        Ok(id) => id,
        Err(e) => {
            log::error!(
                "Failed to create a new user! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(SignupError::DbError);
        }
    };
    con.close().unwrap();
    Ok(id)
}

/// verifies the passed credentials and issues a fresh bearer token.
/// Unknown email and wrong password are indistinguishable to the caller
pub fn signin(credentials: NewCredentials) -> Result<String, SigninError> {
    let email = credentials.email.trim().to_lowercase();
    let con = open_connection();
    let user = match user_repository::get_by_email(&email, &con) {
        Ok(Some(user)) => user,
        Ok(None) => {
            con.close().unwrap();
            return Err(SigninError::BadCredentials);
        }
        Err(e) => {
            log::error!(
                "Failed to look up user during signin! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            con.close().unwrap();
            return Err(SigninError::DbError);
        }
    };
    if hash_credentials(&email, &credentials.password) != user.password_hash {
        con.close().unwrap();
        return Err(SigninError::BadCredentials);
    }
    let token = random_token(SESSION_TOKEN_BYTES);
    if let Err(e) = user_repository::save_token(&token, user.id, &con) {
        log::error!(
            "Failed to save session token for user {}! Error is {e:?}\n{}",
            user.id,
            Backtrace::force_capture()
        );
        con.close().unwrap();
        return Err(SigninError::DbError);
    }
    con.close().unwrap();
    Ok(token)
}

/// resolves a bearer token to the user id it was issued to. Used by the
/// request guard; every failure collapses to `None` so handlers only ever see
/// a generic denial
pub fn resolve_token(token: &String) -> Option<u32> {
    let con = open_connection();
    let result = user_repository::get_user_id_by_token(token, &con);
    con.close().unwrap();
    match result {
        Ok(user_id) => user_id,
        Err(e) => {
            log::error!(
                "Failed to resolve bearer token! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            None
        }
    }
}

/// digest of email and password combined; the email doubles as a per-user salt
pub fn hash_credentials(email: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    let combined = format!("{}:{}", email.trim(), password.trim());
    hasher.write_all(combined.as_bytes()).unwrap();
    format!("{:x}", hasher.finalize())
}

fn is_email_shaped(email: &str) -> bool {
    //language=RegExp
    let email_regex = Regex::new("^[^@\\s]+@[^@\\s]+\\.[^@\\s]+$").unwrap();
    email_regex.is_match(email)
}
