//! HTTP layer shared by every page.
//!
//! All requests go through here so the error taxonomy and the mutation
//! envelope handling live in exactly one place. Nothing in this module
//! panics; every failure comes back as an [`ApiError`] for the caller to
//! surface as a toast.

use contracts::shared::{MutationResponse, Record};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// What went wrong talking to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    Network(String),
    /// Non-2xx status without a business envelope.
    Http(u16),
    /// The body was not the JSON we expected.
    Parse(String),
    /// The server answered but rejected the operation; carries the
    /// `mensaje` verbatim.
    Rejected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Error de conexión: {}", e),
            ApiError::Http(status) => write!(f, "Error HTTP: {}", status),
            ApiError::Parse(e) => write!(f, "Respuesta inválida del servidor: {}", e),
            ApiError::Rejected(mensaje) => write!(f, "{}", mensaje),
        }
    }
}

/// Base URL of the backend API, derived from the current window location.
/// The backend always listens on port 5000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON document.
pub async fn fetch_json(path: &str) -> Result<Value, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// GET a collection. A 2xx body that is not a JSON array is coerced to an
/// empty collection rather than treated as an error.
pub async fn fetch_records(path: &str) -> Result<Vec<Record>, ApiError> {
    let value = fetch_json(path).await?;
    match value {
        Value::Array(items) => Ok(items.into_iter().map(Record::from_value).collect()),
        _ => {
            log::warn!("{}: la respuesta no es un arreglo, se asume vacía", path);
            Ok(Vec::new())
        }
    }
}

/// Create or update an entity. Create vs update is decided by `id`:
/// `POST /agregar_<entity>` without one, `PUT /editar_<entity>/<id>` with.
pub async fn submit<T: Serialize>(entity: &str, id: Option<i64>, body: &T) -> Result<(), ApiError> {
    let builder = match id {
        None => Request::post(&api_url(&format!("/agregar_{}", entity))),
        Some(id) => Request::put(&api_url(&format!("/editar_{}/{}", entity, id))),
    };
    let response = builder
        .json(body)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    mutation_outcome(response).await
}

/// DELETE an entity by id via `DELETE /eliminar_<entity>/<id>`.
pub async fn remove(entity: &str, id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&format!("/eliminar_{}/{}", entity, id)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    mutation_outcome(response).await
}

/// Resolve a mutation response. The business envelope outranks the HTTP
/// status: a parseable body without `status == "ok"` is a rejection even
/// on 2xx, and a rejection `mensaje` riding on a 4xx is still surfaced.
async fn mutation_outcome(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    match response.json::<MutationResponse>().await {
        Ok(envelope) if envelope.is_ok() => Ok(()),
        Ok(envelope) => Err(ApiError::Rejected(envelope.rejection_message())),
        Err(e) => {
            if status >= 300 {
                Err(ApiError::Http(status))
            } else {
                Err(ApiError::Parse(e.to_string()))
            }
        }
    }
}
