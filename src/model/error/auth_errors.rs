#[derive(Debug, PartialEq)]
pub enum SignupError {
    /// the email doesn't look like an email address
    InvalidEmail,
    /// the password is outside the allowed length range
    InvalidPassword,
    /// a user with that email already exists
    AlreadyExists,
    /// an error with the database
    DbError,
}

#[derive(Debug, PartialEq)]
pub enum SigninError {
    /// unknown email or wrong password; callers must not learn which
    BadCredentials,
    /// an error with the database
    DbError,
}
