//! Response Envelope
//!
//! Every form endpoint answers with the same JSON shape:
//!
//! ```json
//! {"code": 1, "message": "Login successful", "data": {"jump": "/index?rand=..."}}
//! ```
//!
//! `code` is `1` on success and `0` on failure; `data` is omitted when absent.

use std::borrow::Cow;

use serde::Serialize;

/// `{code, message, data}` response body
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub code: u8,
    pub message: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub const SUCCESS: u8 = 1;
    pub const FAILURE: u8 = 0;

    pub fn success(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            code: Self::SUCCESS,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: Self::FAILURE,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Self::SUCCESS
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for Envelope<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}
