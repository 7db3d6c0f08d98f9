//! Wire types for the hot list backend API

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Response envelope wrapping every backend payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Status code, mirroring the HTTP status
    pub code: u16,

    /// Human-readable message, set on failures
    #[serde(default)]
    pub msg: String,

    /// Payload, absent on failures
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning an error envelope into an error
    pub fn into_data(self) -> Result<T> {
        if !(200..300).contains(&self.code) {
            return Err(Error::Generic(format!(
                "API error {}: {}",
                self.code, self.msg
            )));
        }
        self.data
            .ok_or_else(|| Error::Generic("API response carried no data".to_string()))
    }
}

/// One trending hot list entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotItem {
    /// Id of the tag this entry belongs to
    #[serde(default)]
    pub tag_id: u32,

    /// Entry headline
    pub title: String,

    /// Link to the full story
    pub link: String,

    /// Extra display information, such as a heat score
    #[serde(default)]
    pub extra: Option<String>,
}
