use serde::{Deserialize, Serialize};

/// Envelope returned by every mutation endpoint.
///
/// The backend answers `{"status": "ok"}` on success and
/// `{"status": "error", "mensaje": "..."}` on business rejection. Anything
/// other than `status == "ok"` is a rejection regardless of the HTTP
/// status code.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MutationResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
}

impl MutationResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Server-provided rejection message, verbatim, with a generic fallback
    /// when the backend sent none.
    pub fn rejection_message(&self) -> String {
        self.mensaje
            .clone()
            .unwrap_or_else(|| "Operación rechazada por el servidor".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_status() {
        let r: MutationResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(r.is_ok());
    }

    #[test]
    fn test_rejection_carries_server_message_verbatim() {
        let r: MutationResponse =
            serde_json::from_str(r#"{"status": "error", "mensaje": "La categoría ya existe"}"#)
                .unwrap();
        assert!(!r.is_ok());
        assert_eq!(r.rejection_message(), "La categoría ya existe");
    }

    #[test]
    fn test_missing_status_is_not_ok() {
        let r: MutationResponse = serde_json::from_str(r#"{"mensaje": "sin estado"}"#).unwrap();
        assert!(!r.is_ok());
        assert_eq!(r.rejection_message(), "sin estado");
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let r: MutationResponse = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert_eq!(r.rejection_message(), "Operación rechazada por el servidor");
    }
}
