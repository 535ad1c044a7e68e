//! Loading indicator shown while the contact list round-trips to the store.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum LoadingIndicator {
    #[default]
    Idle,
    Loading,
    /// Last store call failed; holds the error text.
    Error(String),
}

impl LoadingIndicator {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingIndicator::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_serialization() {
        assert_eq!(
            serde_json::to_value(LoadingIndicator::Idle).unwrap(),
            serde_json::json!({"status": "idle"})
        );
        assert_eq!(
            serde_json::to_value(LoadingIndicator::Error("boom".to_string())).unwrap(),
            serde_json::json!({"status": "error", "message": "boom"})
        );
        assert!(LoadingIndicator::Loading.is_loading());
    }
}
