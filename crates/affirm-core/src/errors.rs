//! Structured error types shared across affirm crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`AffirmError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (operator name, rendered target, arguments).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Looks up a context entry by key.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }
}

/// Canonical error type for affirm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum AffirmError {
    /// An expectation chain rejected its target.
    #[error("expectation failed: {0}")]
    Expectation(ErrorInfo),
    /// Configuration could not be loaded or is inconsistent.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl AffirmError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            AffirmError::Expectation(info) | AffirmError::Config(info) => info,
        }
    }

    /// Returns the resolved failure message without code or context decoration.
    pub fn message(&self) -> &str {
        &self.info().message
    }

    /// Whether this error was raised by a failed expectation.
    pub fn is_expectation(&self) -> bool {
        matches!(self, AffirmError::Expectation(_))
    }
}

/// Stable error codes emitted by affirm crates.
pub mod codes {
    /// A predicate rejected the target of an expectation chain.
    pub const EXPECTATION_FAILED: &str = "expectation-failed";
    /// A sequence did not contain the expected number of items.
    pub const COUNT_MISMATCH: &str = "count-mismatch";
    /// A configuration document could not be parsed.
    pub const CONFIG_PARSE: &str = "config-parse";
    /// A configuration parsed but holds values that cannot be used.
    pub const CONFIG_INVALID: &str = "config-invalid";
    /// A configuration could not be written out.
    pub const CONFIG_SERIALIZE: &str = "config-serialize";
}
