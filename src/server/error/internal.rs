use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing or hash parsing failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// A value read back from the database violates an invariant the application relies on.
    #[error("Invalid stored value for {field}: {reason}")]
    InvalidStoredValue {
        /// Column or field carrying the bad value
        field: String,
        /// What was wrong with it
        reason: String,
    },
}
