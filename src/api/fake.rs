//! In-memory backend for tests
//!
//! Implements the REST surface the client uses over plain JSON values:
//! collections with server-assigned ids, the options document, analytics
//! views and account deletion. Failures can be scripted per path prefix.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::endpoints;
use super::transport::{ApiRequest, HttpMethod, RawResponse, Transport, TransportError};

/// Password the fake rejects on account deletion
pub const WRONG_PASSWORD: &str = "wrong-password";

#[derive(Debug, Clone)]
pub enum Scripted {
    /// Reply with this status and `{success:false,error:message}`
    Status(u16, String),
    /// Reply with a raw body
    Body(u16, String),
    /// Fail before any response
    Network,
}

#[derive(Default)]
struct FakeState {
    collections: HashMap<String, Vec<Value>>,
    documents: HashMap<String, Value>,
    failures: VecDeque<(String, Scripted)>,
    requests: Vec<String>,
    last_token: Option<String>,
    next_id: u64,
    omit_ids: bool,
}

#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

fn ok(data: Value) -> RawResponse {
    RawResponse::new(200, json!({ "success": true, "data": data }).to_string())
}

fn fail(status: u16, message: &str) -> RawResponse {
    RawResponse::new(status, json!({ "success": false, "error": message }).to_string())
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut FakeState) -> T) -> T {
        let mut guard = self.state.lock().unwrap();
        f(&mut guard)
    }

    /// Pre-populate a collection
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        self.with_state(|s| s.collections.insert(collection.to_string(), records));
    }

    /// Fixed payload served for GET (and replaced by PUT) on `path`
    pub fn set_document(&self, path: &str, data: Value) {
        self.with_state(|s| s.documents.insert(path.to_string(), data));
    }

    /// The next request whose path starts with `prefix` fails as scripted
    pub fn fail_next(&self, prefix: &str, failure: Scripted) {
        self.with_state(|s| s.failures.push_back((prefix.to_string(), failure)));
    }

    /// Created records come back without an id
    pub fn omit_ids_on_create(&self) {
        self.with_state(|s| s.omit_ids = true);
    }

    pub fn collection(&self, name: &str) -> Vec<Value> {
        self.with_state(|s| s.collections.get(name).cloned().unwrap_or_default())
    }

    pub fn document(&self, path: &str) -> Option<Value> {
        self.with_state(|s| s.documents.get(path).cloned())
    }

    /// Requests seen so far, as `"METHOD path"`
    pub fn requests(&self) -> Vec<String> {
        self.with_state(|s| s.requests.clone())
    }

    pub fn request_count(&self) -> usize {
        self.with_state(|s| s.requests.len())
    }

    /// Number of requests with this method whose path starts with `prefix`
    pub fn count(&self, method: HttpMethod, prefix: &str) -> usize {
        let wanted = format!("{} {}", method, prefix);
        self.with_state(|s| s.requests.iter().filter(|r| r.starts_with(&wanted)).count())
    }

    pub fn last_token(&self) -> Option<String> {
        self.with_state(|s| s.last_token.clone())
    }

    fn handle(state: &mut FakeState, request: &ApiRequest) -> RawResponse {
        let path = request.path.as_str();

        if path == endpoints::DELETE_ACCOUNT {
            let password = request
                .body
                .as_ref()
                .and_then(|b| b.get("password"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            return match password {
                "" => fail(400, "Password is required"),
                WRONG_PASSWORD => fail(401, "Invalid password"),
                _ => ok(json!({ "deleted": true })),
            };
        }

        if let Some(document) = state.documents.get(path).cloned() {
            return match request.method {
                HttpMethod::Get => ok(document),
                HttpMethod::Put => {
                    let body = request.body.clone().unwrap_or(Value::Null);
                    state.documents.insert(path.to_string(), body.clone());
                    ok(body)
                }
                _ => fail(405, "Method not allowed"),
            };
        }

        let (collection, id) = match path.split_once('/') {
            Some((c, id)) => (c.to_string(), Some(id.to_string())),
            None => (path.to_string(), None),
        };

        match (request.method, id) {
            (HttpMethod::Get, None) => {
                ok(Value::Array(state.collections.get(&collection).cloned().unwrap_or_default()))
            }
            (HttpMethod::Post, None) => {
                let mut record = request.body.clone().unwrap_or_else(|| json!({}));
                if !state.omit_ids {
                    state.next_id += 1;
                    record["id"] = json!(format!("{}-{}", collection, state.next_id));
                }
                state
                    .collections
                    .entry(collection)
                    .or_default()
                    .push(record.clone());
                ok(record)
            }
            (HttpMethod::Put, Some(id)) => {
                let records = state.collections.entry(collection).or_default();
                match records.iter_mut().find(|r| r["id"] == id.as_str()) {
                    Some(existing) => {
                        if let (Some(target), Some(Value::Object(changes))) =
                            (existing.as_object_mut(), request.body.clone())
                        {
                            for (k, v) in changes {
                                target.insert(k, v);
                            }
                            target.insert("id".into(), json!(id));
                        }
                        ok(existing.clone())
                    }
                    None => fail(404, "Record not found"),
                }
            }
            (HttpMethod::Delete, Some(id)) => {
                let records = state.collections.entry(collection).or_default();
                let before = records.len();
                records.retain(|r| r["id"] != id.as_str());
                if records.len() < before {
                    ok(json!({ "id": id }))
                } else {
                    fail(404, "Record not found")
                }
            }
            _ => fail(404, "Route not found"),
        }
    }
}

#[async_trait]
impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.with_state(|state| {
            state
                .requests
                .push(format!("{} {}", request.method, request.path));
            state.last_token = request.token.clone();

            let scripted = state
                .failures
                .iter()
                .position(|(prefix, _)| request.path.starts_with(prefix.as_str()))
                .and_then(|idx| state.failures.remove(idx));
            match scripted {
                Some((_, Scripted::Network)) => Err(TransportError::Connect("connection refused".into())),
                Some((_, Scripted::Status(status, message))) => Ok(fail(status, &message)),
                Some((_, Scripted::Body(status, body))) => Ok(RawResponse::new(status, body)),
                None => Ok(Self::handle(state, &request)),
            }
        })
    }
}
