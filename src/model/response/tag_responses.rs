use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, TagApi};

#[derive(Responder)]
pub enum CreateTagResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    TagAlreadyExists(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 201, content_type = "json")]
    Success(Json<TagApi>),
}

#[derive(Responder)]
pub enum GetTagsResponse {
    #[response(status = 500, content_type = "json")]
    TagDbError(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 200)]
    Success(Json<Vec<TagApi>>),
}
