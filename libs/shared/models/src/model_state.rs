use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Error collection returned with every user-visible failure.
///
/// Keys are field names; the empty key holds errors that are not tied to a
/// single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelState {
    errors: BTreeMap<String, Vec<String>>,
}

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(key: impl Into<String>, message: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.add_model_error(key, message);
        state
    }

    pub fn add_model_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(key.into()).or_default().push(message.into());
    }

    pub fn errors(&self, key: &str) -> &[String] {
        self.errors.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The message shown in the top-level `error` field of a response.
    pub fn first_message(&self) -> Option<&str> {
        self.errors
            .get("")
            .and_then(|messages| messages.first())
            .or_else(|| self.errors.values().flatten().next())
            .map(String::as_str)
    }
}

impl fmt::Display for ModelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, messages) in &self.errors {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                first = false;
                if key.is_empty() {
                    write!(f, "{}", message)?;
                } else {
                    write!(f, "{}: {}", key, message)?;
                }
            }
        }
        Ok(())
    }
}
