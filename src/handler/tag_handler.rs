use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::model::error::tag_errors::CreateTagError;
use crate::model::response::tag_responses::{CreateTagResponse, GetTagsResponse};
use crate::model::response::{BasicMessage, TagApi};
use crate::service::tag_service;

#[post("/", data = "<tag>")]
pub fn create_tag(tag: Json<TagApi>, auth: Auth) -> CreateTagResponse {
    let user_id = match auth.validate() {
        ValidateResult::Ok(id) => id,
        ValidateResult::Invalid => {
            return CreateTagResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match tag_service::create_tag(user_id, tag.into_inner().title) {
        Ok(tag) => CreateTagResponse::Success(Json::from(tag)),
        Err(CreateTagError::MissingTitle) => {
            CreateTagResponse::BadRequest(BasicMessage::new("A tag title is required."))
        }
        Err(CreateTagError::AlreadyExists) => CreateTagResponse::TagAlreadyExists(
            BasicMessage::new("A tag with that name already exists."),
        ),
        Err(CreateTagError::DbError) => CreateTagResponse::TagDbError(BasicMessage::new(
            "Failed to create tag info in database. Check server logs for details",
        )),
    }
}

#[get("/")]
pub fn get_tags(auth: Auth) -> GetTagsResponse {
    let user_id = match auth.validate() {
        ValidateResult::Ok(id) => id,
        ValidateResult::Invalid => {
            return GetTagsResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match tag_service::get_tags(user_id) {
        Ok(tags) => GetTagsResponse::Success(Json::from(tags)),
        Err(_) => GetTagsResponse::TagDbError(BasicMessage::new(
            "Failed to pull tag info from database. Check server logs for details",
        )),
    }
}
