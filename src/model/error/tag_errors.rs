#[derive(Debug, PartialEq)]
pub enum CreateTagError {
    /// the title was empty
    MissingTitle,
    /// a tag with that title already exists for the caller, or globally
    AlreadyExists,
    /// an error with the database
    DbError,
}

#[derive(Debug, PartialEq)]
pub enum GetTagsError {
    /// an error with the database
    DbError,
}
