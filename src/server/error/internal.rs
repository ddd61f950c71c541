use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash or parse a stored password hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a JWT failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to encode {token_type} token: {source}")]
    TokenEncoding {
        /// Kind of token being issued
        token_type: String,
        /// The underlying encoding error
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    /// A row that was just written could not be read back.
    #[error("{kind} with id {id} not found after write")]
    MissingAfterWrite {
        /// Entity kind that was written
        kind: String,
        /// Primary key of the written row
        id: String,
    },
}
