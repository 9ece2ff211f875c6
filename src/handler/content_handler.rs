use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::model::error::content_errors::{
    CreateContentError, DeleteContentError, SetSharedError, UpdateContentError,
};
use crate::model::request::content_requests::{
    CreateContentRequest, SetSharedRequest, UpdateContentRequest,
};
use crate::model::response::content_responses::{
    CreateContentResponse, DeleteContentResponse, GetContentResponse, SetSharedResponse,
    ShareAllResponse, SharedCount, UpdateContentResponse,
};
use crate::model::response::BasicMessage;
use crate::service::content_service;

#[post("/", data = "<content>")]
pub fn create_content(content: Json<CreateContentRequest>, auth: Auth) -> CreateContentResponse {
    let user_id = match auth.validate() {
        ValidateResult::Ok(id) => id,
        ValidateResult::Invalid => {
            return CreateContentResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match content_service::create_content(user_id, content.into_inner()) {
        Ok(content) => CreateContentResponse::Success(Json::from(content)),
        Err(CreateContentError::MissingTitle) => {
            CreateContentResponse::BadRequest(BasicMessage::new("A content title is required."))
        }
        Err(CreateContentError::InvalidLink) => {
            CreateContentResponse::BadRequest(BasicMessage::new("The link must be a valid url."))
        }
        Err(CreateContentError::InvalidType) => CreateContentResponse::BadRequest(
            BasicMessage::new("Type must be one of image, video, article, or audio."),
        ),
        Err(CreateContentError::TagNotFound) => CreateContentResponse::TagNotFound(
            BasicMessage::new("One of the referenced tags could not be found."),
        ),
        Err(CreateContentError::DbError) => CreateContentResponse::ContentDbError(
            BasicMessage::new("Failed to save content to database. Check server logs for details"),
        ),
    }
}

#[get("/")]
pub fn get_content(auth: Auth) -> GetContentResponse {
    let user_id = match auth.validate() {
        ValidateResult::Ok(id) => id,
        ValidateResult::Invalid => {
            return GetContentResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match content_service::get_content(user_id) {
        Ok(content) => GetContentResponse::Success(Json::from(content)),
        Err(_) => GetContentResponse::ContentDbError(BasicMessage::new(
            "Failed to pull content from database. Check server logs for details",
        )),
    }
}

#[put("/", data = "<content>")]
pub fn update_content(content: Json<UpdateContentRequest>, auth: Auth) -> UpdateContentResponse {
    let user_id = match auth.validate() {
        ValidateResult::Ok(id) => id,
        ValidateResult::Invalid => {
            return UpdateContentResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match content_service::update_content(user_id, content.into_inner()) {
        Ok(content) => UpdateContentResponse::Success(Json::from(content)),
        Err(UpdateContentError::ContentNotFound) => UpdateContentResponse::ContentNotFound(
            BasicMessage::new("The content with the passed id could not be found."),
        ),
        Err(UpdateContentError::NotOwner) => UpdateContentResponse::NotAllowed(BasicMessage::new(
            "That content does not belong to you.",
        )),
        Err(UpdateContentError::MissingTitle) => {
            UpdateContentResponse::BadRequest(BasicMessage::new("A content title is required."))
        }
        Err(UpdateContentError::InvalidLink) => {
            UpdateContentResponse::BadRequest(BasicMessage::new("The link must be a valid url."))
        }
        Err(UpdateContentError::InvalidType) => UpdateContentResponse::BadRequest(
            BasicMessage::new("Type must be one of image, video, article, or audio."),
        ),
        Err(UpdateContentError::TagNotFound) => UpdateContentResponse::TagNotFound(
            BasicMessage::new("One of the referenced tags could not be found."),
        ),
        Err(UpdateContentError::DbError) => UpdateContentResponse::ContentDbError(
            BasicMessage::new("Failed to update content. Check server logs for details"),
        ),
    }
}

#[delete("/<id>")]
pub fn delete_content(id: u32, auth: Auth) -> DeleteContentResponse {
    let user_id = match auth.validate() {
        ValidateResult::Ok(id) => id,
        ValidateResult::Invalid => {
            return DeleteContentResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match content_service::delete_content(user_id, id) {
        Ok(()) => DeleteContentResponse::Success(()),
        Err(DeleteContentError::ContentNotFound) => DeleteContentResponse::ContentNotFound(
            BasicMessage::new("The content with the passed id could not be found."),
        ),
        Err(DeleteContentError::NotOwner) => DeleteContentResponse::NotAllowed(BasicMessage::new(
            "That content does not belong to you.",
        )),
        Err(DeleteContentError::DbError) => DeleteContentResponse::ContentDbError(
            BasicMessage::new("Failed to delete content. Check server logs for details"),
        ),
    }
}

#[patch("/<id>/share", data = "<body>")]
pub fn set_shared(id: u32, body: Json<SetSharedRequest>, auth: Auth) -> SetSharedResponse {
    let user_id = match auth.validate() {
        ValidateResult::Ok(id) => id,
        ValidateResult::Invalid => {
            return SetSharedResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match content_service::set_shared(user_id, id, body.into_inner().is_shared) {
        Ok(content) => SetSharedResponse::Success(Json::from(content)),
        Err(SetSharedError::ContentNotFound) => SetSharedResponse::ContentNotFound(
            BasicMessage::new("The content with the passed id could not be found."),
        ),
        Err(SetSharedError::NotOwner) => SetSharedResponse::NotAllowed(BasicMessage::new(
            "That content does not belong to you.",
        )),
        Err(SetSharedError::DbError) => SetSharedResponse::ContentDbError(BasicMessage::new(
            "Failed to update the shared flag. Check server logs for details",
        )),
    }
}

#[post("/share-all")]
pub fn share_all(auth: Auth) -> ShareAllResponse {
    let user_id = match auth.validate() {
        ValidateResult::Ok(id) => id,
        ValidateResult::Invalid => {
            return ShareAllResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match content_service::share_all(user_id) {
        Ok(shared) => ShareAllResponse::Success(Json::from(SharedCount { shared })),
        Err(_) => ShareAllResponse::ContentDbError(BasicMessage::new(
            "Failed to share content. Check server logs for details",
        )),
    }
}
