pub mod auth_errors;
pub mod brain_errors;
pub mod content_errors;
pub mod tag_errors;
