//! Handshake with an embedded tipsy frame.
//!
//! The embedding page reads `data-url`, `data-data` and `data-filename` from
//! its placeholder element, creates a frame pointing at `url`, waits for the
//! frame to post [`READY_MESSAGE`] and then answers with a [`TipsyPayload`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Message a frame posts once it is ready to receive data.
pub const READY_MESSAGE: &str = "tipsy:ready";

/// Media type of the data handed to the frame.
pub const PAYLOAD_TYPE: &str = "application/xml";

/// Text shown in place of the frame when its attributes are incomplete.
pub const FAILURE_TEXT: &str = "Something went wrong trying to load tipsy. ";

/// The message posted to the frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipsyPayload {
    /// Name of the file being shown.
    pub filename: String,
    /// Media type of `data`.
    #[serde(rename = "type")]
    pub media_type: String,
    /// File contents.
    pub data: String,
}

/// A frame waiting for its handshake.
#[derive(Debug, Clone)]
pub struct TipsyFrame {
    url: String,
    payload: Option<TipsyPayload>,
}

impl TipsyFrame {
    /// Reads the frame configuration from a placeholder's `data-*` attributes
    /// (keys without the `data-` prefix).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAttribute`] if `url`, `data` or `filename` is absent.
    pub fn from_dataset(dataset: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &'static str| {
            dataset
                .get(key)
                .cloned()
                .ok_or(Error::MissingAttribute(key))
        };
        let data = get("data")?;
        let url = get("url")?;
        let filename = get("filename")?;
        Ok(Self {
            url,
            payload: Some(TipsyPayload {
                filename,
                media_type: PAYLOAD_TYPE.to_owned(),
                data,
            }),
        })
    }

    /// Returns the frame source URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns `true` once the payload has been handed out.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.payload.is_none()
    }

    /// Handles a message event.
    ///
    /// Returns the payload to post back when `message` is the ready message
    /// and was sent by this frame. The payload is returned at most once; any
    /// other message is ignored.
    pub fn on_message(&mut self, from_frame: bool, message: &Value) -> Option<TipsyPayload> {
        if !from_frame || message.as_str() != Some(READY_MESSAGE) {
            return None;
        }
        self.payload.take()
    }
}
