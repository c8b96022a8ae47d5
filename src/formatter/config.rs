use serde::{Deserialize, Serialize};

use super::error::FormatterError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    #[serde(default = "default_indent_spaces")]
    pub indent_spaces: usize,

    /// One element per line with children indented. When false everything
    /// is written on a single line.
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Write childless elements as `<name/>` instead of `<name></name>`.
    #[serde(default = "default_true")]
    pub self_close_empty: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            indent_spaces: default_indent_spaces(),
            pretty: default_true(),
            self_close_empty: default_true(),
        }
    }
}

impl FormatterConfig {
    /// Single-line output.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, FormatterError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn default_indent_spaces() -> usize {
    2
}

fn default_true() -> bool {
    true
}
