use rocket::async_trait;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;

use crate::service::auth_service;

/// used to represent the result of calling `Auth::validate`
pub enum ValidateResult {
    /// the token maps to a live session; holds the session user's id
    Ok(u32),
    Invalid,
}

#[derive(Debug, PartialEq)]
pub struct Auth {
    pub token: String,
}

impl Auth {
    /// creates an `Auth` object from the passed header value.
    /// The value of header must be a bearer token.
    pub fn from(header: &str) -> Result<Auth, &str> {
        // remove the "Bearer " from the header, leaving only the token
        let token = header.to_string().replace("Bearer ", "");
        if token.trim().is_empty() {
            return Err("Invalid bearer auth format: missing token");
        }
        Ok(Auth {
            token: token.trim().to_string(),
        })
    }

    /// resolves our token against the session store and returns the owning
    /// user's id when it's live.
    ///
    /// _this is a convenience method to be used only in handlers_
    pub fn validate(self) -> ValidateResult {
        match auth_service::resolve_token(&self.token) {
            Some(user_id) => ValidateResult::Ok(user_id),
            None => ValidateResult::Invalid,
        }
    }
}

#[async_trait]
impl<'a> FromRequest<'a> for Auth {
    type Error = AuthError;

    async fn from_request(request: &'a Request<'_>) -> Outcome<Self, Self::Error> {
        // just check if it's bearer auth
        fn check_bearer_auth(value: &str) -> bool {
            String::from(value).starts_with("Bearer")
        }
        match request.headers().get_one("Authorization") {
            None => Outcome::Error((Status::Unauthorized, AuthError::Missing)),
            Some(value) if check_bearer_auth(value) => match Auth::from(value) {
                Ok(auth) => Outcome::Success(auth),
                Err(_) => Outcome::Error((Status::BadRequest, AuthError::Invalid)),
            },
            // not bearer auth
            Some(_) => Outcome::Error((Status::BadRequest, AuthError::Invalid)),
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    /// no Authorization header was passed at all
    Missing,
    /// the Authorization header isn't a usable bearer token
    Invalid,
}

#[cfg(test)]
mod auth_from_tests {
    use super::Auth;

    #[test]
    fn from_strips_the_scheme() {
        let auth = Auth::from("Bearer abc123").unwrap();
        assert_eq!("abc123", auth.token);
    }

    #[test]
    fn from_rejects_an_empty_token() {
        assert!(Auth::from("Bearer ").is_err());
        assert!(Auth::from("Bearer").is_err());
    }
}
