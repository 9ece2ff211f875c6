use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::model::error::brain_errors::ResolveBrainError;
use crate::model::response::brain_responses::{
    BrainStatusResponse, ResolveBrainResponse, ShareStatusApi, ToggleShareResponse,
};
use crate::model::response::BasicMessage;
use crate::service::brain_service;

#[post("/share")]
pub fn share_brain(auth: Auth) -> ToggleShareResponse {
    let user_id = match auth.validate() {
        ValidateResult::Ok(id) => id,
        ValidateResult::Invalid => {
            return ToggleShareResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match brain_service::toggle_sharing(user_id) {
        Ok(status) => {
            let message = if status.is_public {
                "Sharing enabled"
            } else {
                "Sharing disabled"
            };
            ToggleShareResponse::Success(Json::from(ShareStatusApi {
                message: message.to_string(),
                link: status.link,
                is_public: status.is_public,
            }))
        }
        Err(_) => ToggleShareResponse::LinkDbError(BasicMessage::new(
            "Failed to update sharing. Check server logs for details",
        )),
    }
}

#[get("/status")]
pub fn brain_status(auth: Auth) -> BrainStatusResponse {
    let user_id = match auth.validate() {
        ValidateResult::Ok(id) => id,
        ValidateResult::Invalid => {
            return BrainStatusResponse::Unauthorized("Bad Credentials".to_string())
        }
    };
    match brain_service::sharing_status(user_id) {
        Ok(status) => BrainStatusResponse::Success(Json::from(status)),
        Err(_) => BrainStatusResponse::LinkDbError(BasicMessage::new(
            "Failed to read sharing status. Check server logs for details",
        )),
    }
}

// no auth guard here; anyone with the token may read a public brain
#[get("/<token>")]
pub fn get_brain(token: String) -> ResolveBrainResponse {
    match brain_service::resolve_brain(&token) {
        Ok(content) => ResolveBrainResponse::Success(Json::from(content)),
        Err(ResolveBrainError::NotFound) => ResolveBrainResponse::BrainNotFound(BasicMessage::new(
            "This brain does not exist or is not shared.",
        )),
        Err(ResolveBrainError::DbError) => ResolveBrainResponse::LinkDbError(BasicMessage::new(
            "Failed to resolve the share link. Check server logs for details",
        )),
    }
}
