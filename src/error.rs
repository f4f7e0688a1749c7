// Error types for chart request parsing

use std::fmt;
use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Which numeric-stream parameter a malformed value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataParameter {
    Data,
    LineStyle,
}

impl fmt::Display for DataParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataParameter::Data => f.write_str("data"),
            DataParameter::LineStyle => f.write_str("line style"),
        }
    }
}

/// Failure raised while turning a parameter map into a `Chart`.
///
/// Every variant except `Internal` is a client error; the transport layer is
/// expected to answer those with HTTP 400 and the display string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid {param} specification: {reason}")]
    MalformedData {
        param: DataParameter,
        reason: String,
    },

    #[error("invalid size specification: {token:?} is not an integer")]
    MalformedSize { token: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ChartError {
    pub(crate) fn malformed(param: DataParameter, reason: impl fmt::Display) -> Self {
        ChartError::MalformedData {
            param,
            reason: reason.to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, ChartError::Internal(_))
    }

    /// HTTP status a transport layer should answer with
    pub fn http_status(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }
}
