use affirm_core::errors::{codes, AffirmError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Default upper bound on the summed width of items rendered on one line.
pub const DEFAULT_MAX_INLINE_WIDTH: usize = 60;

/// Default indentation for entries of multi-line blocks.
pub const DEFAULT_INDENT: &str = "  ";

/// Layout options for the [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// A list stays on one line while the summed character count of its
    /// rendered items does not exceed this width.
    pub max_inline_width: usize,
    /// Prefix applied to each line inside a multi-line block.
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_inline_width: DEFAULT_MAX_INLINE_WIDTH,
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl RenderConfig {
    /// Parses a configuration document; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, AffirmError> {
        let config: RenderConfig = serde_json::from_str(json).map_err(|err| {
            AffirmError::Config(ErrorInfo::new(codes::CONFIG_PARSE, err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises the configuration to JSON.
    pub fn to_json(&self) -> Result<String, AffirmError> {
        serde_json::to_string_pretty(self).map_err(serialize_error)
    }

    /// Rejects indents that would break the one-entry-per-line layout.
    pub fn validate(&self) -> Result<(), AffirmError> {
        if self.indent.chars().any(|c| c == '\n' || c == '\r' || !c.is_whitespace()) {
            let info = ErrorInfo::new(
                codes::CONFIG_INVALID,
                "indent must consist of spaces or tabs only",
            )
            .with_context("indent", format!("{:?}", self.indent))
            .with_hint("use a string such as \"  \" or \"\\t\"");
            return Err(AffirmError::Config(info));
        }
        Ok(())
    }
}

fn serialize_error(err: serde_json::Error) -> AffirmError {
    AffirmError::Config(ErrorInfo::new(codes::CONFIG_SERIALIZE, err.to_string()))
}
