pub mod api_handler;
pub mod brain_handler;
pub mod content_handler;
pub mod tag_handler;
