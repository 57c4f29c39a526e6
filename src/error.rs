use thiserror::Error;

/// Errors surfaced by the MAST archive client.
#[derive(Error, Debug)]
pub enum MastError {
    /// The archive answered with a non-success HTTP status.
    #[error("MAST archive returned HTTP status {status}")]
    Status {
        /// The HTTP status code of the response.
        status: u16,
    },

    /// The request never produced a usable response.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response decoded as JSON but did not have the expected shape.
    #[error("Invalid response from MAST archive: {0}")]
    InvalidResponse(String),

    /// A result row carried wire fields the model's field table does not declare.
    #[error("Unrecognized parameters for {model}: {}", .fields.join(", "))]
    UnrecognizedFields {
        /// Name of the record variant that rejected the row.
        model: &'static str,
        /// The leftover wire keys, in row order.
        fields: Vec<String>,
    },

    /// An attribute lookup used a key the field table does not declare.
    #[error("{model} has no attribute '{name}'")]
    UnknownAttribute {
        /// Name of the record variant.
        model: &'static str,
        /// The requested attribute key.
        name: String,
    },
}

impl MastError {
    /// The HTTP status code, when this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            MastError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
