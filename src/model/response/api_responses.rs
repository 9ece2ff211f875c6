use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::response::BasicMessage;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct CreatedUser {
    pub message: String,
    pub id: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct SessionToken {
    pub token: String,
}

#[derive(Responder)]
pub enum SignupResponse {
    #[response(status = 201, content_type = "json")]
    Success(Json<CreatedUser>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    UserAlreadyExists(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    UserDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum SigninResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<SessionToken>),
    #[response(status = 401, content_type = "json")]
    BadCredentials(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    UserDbError(Json<BasicMessage>),
}
