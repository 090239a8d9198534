use serde::{Deserialize, Serialize};

/// A suggested action derived from a general query by keyword matching.
///
/// Never persisted; serialized into the reply body only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSuggestion {
    /// Device type the suggestion targets.
    pub device: String,
    /// Action verb (e.g. "turn on", "adjust temperature").
    pub action: String,
    /// Whether the caller should check live device status first.
    pub current_status_check: bool,
}
