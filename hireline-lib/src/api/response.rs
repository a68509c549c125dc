//! Response envelope for list endpoints

use serde::Deserialize;

/// The `{ "result": [...] }` envelope every list endpoint wraps its payload
/// in. A missing or null `result` is treated as an empty list.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub result: Option<Vec<T>>,
}

impl<T> ListEnvelope<T> {
    /// Unwraps the envelope.
    pub fn into_result(self) -> Vec<T> {
        self.result.unwrap_or_default()
    }
}
