//! Daemon service - dispatches requests to handlers.
//!
//! Holds the watchlist as a hot resource: loaded once at startup, read-only
//! for the lifetime of the process.

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use tracing::warn;

use crate::namelist::{store, NameList};
use crate::reply;

/// Daemon service with the loaded watchlist.
pub struct DaemonService {
    names: NameList,
    started_at: String,
}

impl DaemonService {
    /// Create a new service, loading the watchlist from the default path.
    ///
    /// A missing or unreadable names file degrades to an empty list; the
    /// daemon still serves, it just never finds anything.
    pub fn new() -> Self {
        let path = store::default_names_path();
        let names = store::load_list(&path);

        if names.is_empty() {
            warn!(
                "watchlist at {:?} is empty; every check will report not found",
                path
            );
        }

        Self::with_list(names)
    }

    /// Create a service over an already-built list.
    pub fn with_list(names: NameList) -> Self {
        Self {
            names,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Dispatch request to appropriate handler.
    pub fn dispatch(
        &self,
        method: &str,
        params: HashMap<String, serde_json::Value>,
    ) -> Result<serde_json::Value> {
        match method {
            "health" => self.health(),
            "start" => self.start(),
            "check" => self.check(params),
            "names" => self.list_names(),
            _ => Err(anyhow!("Unknown method: {}", method)),
        }
    }

    /// Health check endpoint.
    fn health(&self) -> Result<serde_json::Value> {
        Ok(serde_json::json!({
            "pid": std::process::id(),
            "started_at": self.started_at,
            "version": "v1",
            "names_loaded": self.names.len(),
        }))
    }

    /// Start/help handler: the fixed instructional message.
    fn start(&self) -> Result<serde_json::Value> {
        Ok(serde_json::json!({
            "reply": reply::WELCOME,
        }))
    }

    /// Check handler.
    /// Params: text (required)
    fn check(&self, params: HashMap<String, serde_json::Value>) -> Result<serde_json::Value> {
        let text = params
            .get("text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow!("Missing required param: text"))?;

        let result = self.names.lookup(text);

        Ok(serde_json::json!({
            "reply": reply::render(&result),
            "outcome": result.kind(),
            "suggestions": result.suggestions(),
        }))
    }

    /// Names list handler.
    fn list_names(&self) -> Result<serde_json::Value> {
        Ok(serde_json::json!({
            "names": self.names.all(),
            "count": self.names.len(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> DaemonService {
        DaemonService::with_list(NameList::new(vec![
            "Maria".to_string(),
            "Mariana".to_string(),
            "Carla".to_string(),
        ]))
    }

    fn params(text: &str) -> HashMap<String, serde_json::Value> {
        let mut params = HashMap::new();
        params.insert("text".to_string(), serde_json::json!(text));
        params
    }

    #[test]
    fn check_renders_the_match_reply() {
        let result = service().dispatch("check", params("maria")).unwrap();
        assert_eq!(result["reply"], "ESTAFADORA");
        assert_eq!(result["outcome"], "match");
        assert_eq!(result["suggestions"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn check_renders_suggestions_in_list_order() {
        let result = service().dispatch("check", params("mari")).unwrap();
        assert_eq!(result["outcome"], "suggestions");
        assert_eq!(
            result["suggestions"],
            serde_json::json!(["Maria", "Mariana"])
        );
        assert_eq!(
            result["reply"],
            "NO SE ENCUENTRA EN LA LISTA.\n\nQuizás quisiste decir:\nMaria\nMariana"
        );
    }

    #[test]
    fn check_misses_below_the_threshold() {
        let result = service().dispatch("check", params("xy")).unwrap();
        assert_eq!(result["reply"], "NO SE ENCUENTRA EN LA LISTA");
        assert_eq!(result["outcome"], "not_found");
    }

    #[test]
    fn check_requires_text_param() {
        assert!(service().dispatch("check", HashMap::new()).is_err());
    }

    #[test]
    fn start_returns_the_welcome_message() {
        let result = service().dispatch("start", HashMap::new()).unwrap();
        assert_eq!(result["reply"], reply::WELCOME);
    }

    #[test]
    fn health_reports_loaded_count() {
        let result = service().dispatch("health", HashMap::new()).unwrap();
        assert_eq!(result["names_loaded"], 3);
    }

    #[test]
    fn unknown_method_errors() {
        assert!(service().dispatch("nope", HashMap::new()).is_err());
    }
}
