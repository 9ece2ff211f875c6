#[derive(Debug, PartialEq)]
pub enum CreateContentError {
    /// the title was empty
    MissingTitle,
    /// the link is not url-shaped
    InvalidLink,
    /// the type is not in the fixed content type set
    InvalidType,
    /// a referenced tag doesn't exist or isn't visible to the caller
    TagNotFound,
    /// an error with the database
    DbError,
}

#[derive(Debug, PartialEq)]
pub enum GetContentError {
    /// an error with the database
    DbError,
}

#[derive(Debug, PartialEq)]
pub enum UpdateContentError {
    /// no content with that id exists
    ContentNotFound,
    /// the caller doesn't own the content
    NotOwner,
    /// the title was empty
    MissingTitle,
    /// the link is not url-shaped
    InvalidLink,
    /// the type is not in the fixed content type set
    InvalidType,
    /// a referenced tag doesn't exist or isn't visible to the caller
    TagNotFound,
    /// an error with the database
    DbError,
}

#[derive(Debug, PartialEq)]
pub enum DeleteContentError {
    /// no content with that id exists
    ContentNotFound,
    /// the caller doesn't own the content
    NotOwner,
    /// an error with the database
    DbError,
}

#[derive(Debug, PartialEq)]
pub enum SetSharedError {
    /// no content with that id exists
    ContentNotFound,
    /// the caller doesn't own the content
    NotOwner,
    /// an error with the database
    DbError,
}

#[derive(Debug, PartialEq)]
pub enum ShareAllError {
    /// an error with the database
    DbError,
}
