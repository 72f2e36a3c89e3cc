//! Lambda-proxy-style response envelope.
//!
//! The caller-facing contract: a status code, a content-type header, and a
//! body that is base64-encoded when it carries image bytes. Serialized
//! camelCase (`statusCode`, `isBase64Encoded`, ...) to match the proxy
//! integration format.

use crate::error::CoverError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ResponseHeaders {
    /// Serialized under the literal HTTP header name, not camelCase — the
    /// headers map carries header names, unlike the envelope's own fields.
    #[serde(rename = "Content-Type")]
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: ResponseHeaders,
    pub is_base64_encoded: bool,
    pub body: String,
}

impl ResponseEnvelope {
    /// Wrap encoded JPEG bytes in a 200 response with a base64 body.
    pub fn jpeg(bytes: &[u8]) -> Self {
        Self {
            status_code: 200,
            headers: ResponseHeaders {
                content_type: "image/jpeg".to_string(),
            },
            is_base64_encoded: true,
            body: STANDARD.encode(bytes),
        }
    }

    /// Map an error to a terminal response. Plain-text body, not base64.
    pub fn from_error(err: &CoverError) -> Self {
        let status_code = match err {
            CoverError::InvalidDimension(_) => 400,
            CoverError::UnsupportedFormat(_) => 415,
            CoverError::FetchFailure { .. } => 502,
            CoverError::Io(_) | CoverError::Encode(_) => 500,
        };

        Self {
            status_code,
            headers: ResponseHeaders {
                content_type: "text/plain".to_string(),
            },
            is_base64_encoded: false,
            body: err.to_string(),
        }
    }
}
