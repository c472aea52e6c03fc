use std::fmt;

/// Error surfaced to pages by the API helpers.
///
/// `status` is the HTTP status of the failed response. Failures that happen in the
/// browser before or after the request (building a form, reading a file, decoding a
/// body) use `CLIENT_ERROR_STATUS`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

pub const CLIENT_ERROR_STATUS: u64 = 0;

impl ApiError {
    pub fn client(message: impl Into<String>) -> Self {
        Self {
            status: CLIENT_ERROR_STATUS,
            message: message.into(),
        }
    }

    /// Builds an error from a non-success response.
    ///
    /// A 413 from the body limit carries no JSON body, so it gets a readable message
    /// instead of the raw response text.
    pub fn from_response(status: u64, body_message: Option<String>) -> Self {
        let message = match (status, body_message) {
            (413, _) => "File is too large to upload".to_string(),
            (_, Some(message)) if !message.trim().is_empty() => message,
            _ => format!("Request failed with status {}", status),
        };

        Self { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
