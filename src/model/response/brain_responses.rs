use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::api::ContentApi;
use crate::model::response::BasicMessage;

/// response body for the sharing toggle; `link` is only present while the
/// brain is public
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ShareStatusApi {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "isPublic")]
    pub is_public: bool,
}

/// non-mutating view of the caller's sharing state. `link` is null unless the
/// brain is currently public
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BrainStatusApi {
    #[serde(rename = "isPublic")]
    pub is_public: bool,
    pub link: Option<String>,
}

#[derive(Responder)]
pub enum ToggleShareResponse {
    #[response(status = 500, content_type = "json")]
    LinkDbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 200, content_type = "json")]
    Success(Json<ShareStatusApi>),
}

#[derive(Responder)]
pub enum BrainStatusResponse {
    #[response(status = 500, content_type = "json")]
    LinkDbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 200, content_type = "json")]
    Success(Json<BrainStatusApi>),
}

#[derive(Responder)]
pub enum ResolveBrainResponse {
    #[response(status = 404, content_type = "json")]
    BrainNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    LinkDbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<ContentApi>>),
}
