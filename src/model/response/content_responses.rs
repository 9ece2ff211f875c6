use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::api::ContentApi;
use crate::model::response::BasicMessage;

pub type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct SharedCount {
    pub shared: u32,
}

#[derive(Responder)]
pub enum CreateContentResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    TagNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    ContentDbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 201, content_type = "json")]
    Success(Json<ContentApi>),
}

#[derive(Responder)]
pub enum GetContentResponse {
    #[response(status = 500, content_type = "json")]
    ContentDbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 200)]
    Success(Json<Vec<ContentApi>>),
}

#[derive(Responder)]
pub enum UpdateContentResponse {
    #[response(status = 404, content_type = "json")]
    ContentNotFound(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    NotAllowed(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    TagNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    ContentDbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 200, content_type = "json")]
    Success(Json<ContentApi>),
}

#[derive(Responder)]
pub enum DeleteContentResponse {
    #[response(status = 404, content_type = "json")]
    ContentNotFound(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    NotAllowed(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    ContentDbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 204)]
    Success(NoContent),
}

#[derive(Responder)]
pub enum SetSharedResponse {
    #[response(status = 404, content_type = "json")]
    ContentNotFound(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    NotAllowed(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    ContentDbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 200, content_type = "json")]
    Success(Json<ContentApi>),
}

#[derive(Responder)]
pub enum ShareAllResponse {
    #[response(status = 500, content_type = "json")]
    ContentDbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 200, content_type = "json")]
    Success(Json<SharedCount>),
}
