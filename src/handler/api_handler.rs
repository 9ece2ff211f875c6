use rocket::serde::json::Json;
use rocket::serde::Serialize;

use crate::model::error::auth_errors::{SigninError, SignupError};
use crate::model::request::NewCredentials;
use crate::model::response::api_responses::{
    CreatedUser, SessionToken, SigninResponse, SignupResponse,
};
use crate::model::response::BasicMessage;
use crate::service::auth_service;

static API_VERSION_NUMBER: f64 = 1.0;

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ApiVersion {
    version: f64,
}

impl ApiVersion {
    fn new() -> ApiVersion {
        ApiVersion {
            version: API_VERSION_NUMBER,
        }
    }
}

#[get("/version")]
pub fn api_version() -> Json<ApiVersion> {
    Json(ApiVersion::new())
}

#[post("/signup", data = "<credentials>")]
pub fn signup(credentials: Json<NewCredentials>) -> SignupResponse {
    match auth_service::signup(credentials.into_inner()) {
        Ok(id) => SignupResponse::Success(Json::from(CreatedUser {
            message: "User created".to_string(),
            id,
        })),
        Err(SignupError::InvalidEmail) => {
            SignupResponse::BadRequest(BasicMessage::new("A valid email address is required."))
        }
        Err(SignupError::InvalidPassword) => SignupResponse::BadRequest(BasicMessage::new(
            "Password must be between 8 and 20 characters.",
        )),
        Err(SignupError::AlreadyExists) => SignupResponse::UserAlreadyExists(BasicMessage::new(
            "A user with that email already exists.",
        )),
        Err(SignupError::DbError) => SignupResponse::UserDbError(BasicMessage::new(
            "Failed to create user in database. Check server logs for details",
        )),
    }
}

#[post("/signin", data = "<credentials>")]
pub fn signin(credentials: Json<NewCredentials>) -> SigninResponse {
    match auth_service::signin(credentials.into_inner()) {
        Ok(token) => SigninResponse::Success(Json::from(SessionToken { token })),
        Err(SigninError::BadCredentials) => {
            SigninResponse::BadCredentials(BasicMessage::new("Bad Credentials"))
        }
        Err(SigninError::DbError) => SigninResponse::UserDbError(BasicMessage::new(
            "Failed to sign in. Check server logs for details",
        )),
    }
}
