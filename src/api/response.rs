//! The `{ success, data, error }` envelope
//!
//! Whatever happens on the wire, callers get an [`ApiResponse`]: transport
//! failures, non-2xx statuses and undecodable bodies are all folded into a
//! failed envelope with a message.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::transport::{RawResponse, TransportError};
use crate::error::{FinanceError, FinanceResult};

pub const RATE_LIMIT_MESSAGE: &str = "Too many requests, please try again later.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip)]
    pub status: Option<u16>,

    /// No HTTP response was received at all
    #[serde(skip)]
    pub transport_failed: bool,
}

/// Failure bodies are read loosely: some routes send `message` instead of `error`
#[derive(Deserialize)]
struct FailureBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status: Some(200),
            transport_failed: false,
        }
    }

    pub fn failure(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            status,
            transport_failed: false,
        }
    }

    fn network_failure(err: TransportError) -> Self {
        Self {
            transport_failed: true,
            ..Self::failure(None, err.to_string())
        }
    }

    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Request failed")
    }

    fn into_error(self) -> FinanceError {
        if self.transport_failed {
            return FinanceError::Network(self.error_message().to_string());
        }
        let message = self.error_message().to_string();
        FinanceError::from_api(self.status, message)
    }

    /// `Ok(data)` for a successful envelope (data may be absent)
    pub fn into_result(self) -> FinanceResult<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.into_error())
        }
    }

    /// Like [`into_result`](Self::into_result) but a missing payload is an error
    pub fn into_data(self) -> FinanceResult<T> {
        let status = self.status;
        self.into_result()?.ok_or_else(|| FinanceError::Api {
            status,
            message: "Response contained no data".into(),
        })
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Normalize whatever the transport produced into an envelope
    pub fn from_raw(raw: Result<RawResponse, TransportError>) -> Self {
        let raw = match raw {
            Ok(raw) => raw,
            Err(err) => return Self::network_failure(err),
        };

        if !raw.is_success() {
            let message = serde_json::from_str::<FailureBody>(&raw.body)
                .ok()
                .and_then(|b| b.error.or(b.message))
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| default_failure_message(raw.status));
            return Self::failure(Some(raw.status), message);
        }

        if raw.body.trim().is_empty() {
            return Self {
                success: true,
                data: None,
                error: None,
                status: Some(raw.status),
                transport_failed: false,
            };
        }

        match serde_json::from_str::<ApiResponse<T>>(&raw.body) {
            Ok(mut envelope) => {
                envelope.status = Some(raw.status);
                if !envelope.success && envelope.error.is_none() {
                    envelope.error = Some("Request failed".into());
                }
                envelope
            }
            Err(e) => Self::failure(Some(raw.status), format!("Invalid response from server: {}", e)),
        }
    }
}

impl ApiResponse<Value> {
    /// Decode the payload of an untyped envelope
    pub fn decode<T: DeserializeOwned>(self) -> ApiResponse<T> {
        let ApiResponse {
            success,
            data,
            error,
            status,
            transport_failed,
        } = self;
        match data.map(serde_json::from_value::<T>).transpose() {
            Ok(data) => ApiResponse {
                success,
                data,
                error,
                status,
                transport_failed,
            },
            Err(e) => ApiResponse::failure(status, format!("Invalid response from server: {}", e)),
        }
    }
}

fn default_failure_message(status: u16) -> String {
    if status == 429 {
        RATE_LIMIT_MESSAGE.to_string()
    } else {
        format!("Request failed with status {}", status)
    }
}
