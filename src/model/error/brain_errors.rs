#[derive(Debug, PartialEq)]
pub enum ToggleShareError {
    /// an error with the database
    DbError,
}

#[derive(Debug, PartialEq)]
pub enum BrainStatusError {
    /// an error with the database
    DbError,
}

#[derive(Debug, PartialEq)]
pub enum ResolveBrainError {
    /// the token doesn't match any share link, or the link is private.
    /// The two are deliberately indistinguishable
    NotFound,
    /// an error with the database
    DbError,
}
