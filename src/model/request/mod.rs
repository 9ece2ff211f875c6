pub mod content_requests;

use rocket::serde::{Deserialize, Serialize};

/// Because `Auth` is used as a request guard, we can't use it for signup or
/// signin credentials. This allows us to accept them in a post body.
#[derive(Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct NewCredentials {
    pub email: String,
    pub password: String,
}
