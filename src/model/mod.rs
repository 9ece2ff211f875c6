pub mod api;
pub mod content_types;
pub mod error;
pub mod repository;
pub mod request;
pub mod response;
