//! API client
//!
//! Thin wrapper that attaches the session token, sends through the
//! configured [`Transport`] and normalizes the reply into an [`ApiResponse`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::endpoints;
use super::response::ApiResponse;
use super::transport::{ApiRequest, HttpMethod, ReqwestTransport, Transport};
use crate::config::{ApiSettings, Session};
use crate::error::FinanceResult;

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, session: Arc<Session>) -> Self {
        Self { transport, session }
    }

    /// Client talking HTTP to the configured backend
    pub fn from_settings(settings: &ApiSettings, session: Arc<Session>) -> FinanceResult<Self> {
        let transport = ReqwestTransport::new(settings)?;
        Ok(Self::new(Arc::new(transport), session))
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Send a request and normalize the reply
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResponse<T> {
        let request = request.with_token(self.session.access_token());
        let method = request.method;
        let path = request.path.clone();

        let response = ApiResponse::from_raw(self.transport.send(request).await);
        if response.success {
            debug!(%method, %path, status = ?response.status, "request succeeded");
        } else {
            warn!(%method, %path, status = ?response.status, error = %response.error_message(), "request failed");
        }
        response
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request(ApiRequest::new(HttpMethod::Get, path)).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResponse<T> {
        let request = query
            .iter()
            .fold(ApiRequest::new(HttpMethod::Get, path), |req, (k, v)| req.with_query(k, v));
        self.request(request).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        self.send_with_body(HttpMethod::Post, path, body).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        self.send_with_body(HttpMethod::Put, path, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request(ApiRequest::new(HttpMethod::Delete, path)).await
    }

    async fn send_with_body<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        match serde_json::to_value(body) {
            Ok(body) => self.request(ApiRequest::new(method, path).with_body(body)).await,
            Err(e) => ApiResponse::failure(None, format!("Could not encode request: {}", e)),
        }
    }

    /// `DELETE /api/auth/delete-account` with the confirming password
    pub async fn delete_account(&self, password: &str) -> ApiResponse<Value> {
        let request = ApiRequest::new(HttpMethod::Delete, endpoints::DELETE_ACCOUNT)
            .with_body(json!({ "password": password }));
        self.request(request).await
    }
}
