//! Claude Code hook output.
//!
//! A hook run prints exactly one JSON object on stdout. Claude Code shows
//! `systemMessage` to the user and hands `additionalContext` to the model.
//! When there is nothing to say the object is empty:
//!
//! ```json
//! {}
//! ```
//!
//! ```json
//! { "systemMessage": "New Claude Code version available! ...", "additionalContext": "..." }
//! ```

use serde::{Deserialize, Serialize};
use std::io::Write;

/// The single structured record a hook run emits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    /// Text displayed to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
    /// Text added to the model's context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl HookOutput {
    /// The "no action" record, serialized as `{}`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A record with a user-facing message and optional model context.
    pub fn message(system_message: impl Into<String>, additional_context: Option<String>) -> Self {
        Self {
            system_message: Some(system_message.into()),
            additional_context: additional_context.filter(|c| !c.is_empty()),
        }
    }

    /// Serialize as a single line of JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Write the record followed by a newline and flush.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        let line = self.to_json().map_err(std::io::Error::other)?;
        writeln!(out, "{line}")?;
        out.flush()
    }
}
