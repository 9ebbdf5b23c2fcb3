//! Templated dial-string construction

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

const STAR: char = '*';
const POUND: char = '#';

/// One templated action for a feature: the carrier's service/action codes,
/// the positional parameter placeholders, and the positional response
/// field keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub service_code: String,
    pub action_code: String,
    /// 1-based parameter position -> placeholder key. Sparse positions are
    /// tolerated; a missing position is an empty slot on the wire.
    #[serde(default)]
    pub parameters: BTreeMap<u32, String>,
    /// 0-based position into the tokenized field sequence -> field key
    /// (position 0 is the whole tokenizer match).
    #[serde(default)]
    pub response_fields: BTreeMap<u32, String>,
}

impl Command {
    pub fn new(action_code: impl Into<String>, service_code: impl Into<String>) -> Self {
        Self {
            action_code: action_code.into(),
            service_code: service_code.into(),
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, position: u32, key: impl Into<String>) -> Self {
        self.parameters.insert(position, key.into());
        self
    }

    pub fn with_response_field(mut self, position: u32, key: impl Into<String>) -> Self {
        self.response_fields.insert(position, key.into());
        self
    }

    /// Render the dial string with user-supplied `values` substituted:
    /// `action_code + service_code + ("*" + segment)* + "#"`.
    ///
    /// A declared position whose value is absent or empty renders the
    /// placeholder key itself, so an incomplete request still yields a
    /// syntactically complete command. A gap renders a bare `*`, keeping
    /// the positional alignment the network expects. Values are treated as
    /// opaque; the caller sanitizes `*`/`#`/control characters.
    pub fn render(&self, values: &HashMap<String, String>) -> String {
        let mut dial = format!("{}{}", self.action_code, self.service_code);
        let last = self.parameters.keys().next_back().copied().unwrap_or(0);
        for position in 1..=last {
            dial.push(STAR);
            let Some(key) = self.parameters.get(&position) else {
                continue; // empty slot
            };
            match values.get(key) {
                Some(value) if !value.is_empty() => dial.push_str(value),
                _ => dial.push_str(key),
            }
        }
        dial.push(POUND);
        debug!(dial = %dial, "rendered dial string");
        dial
    }

    /// The ungapped template string: placeholder keys rendered literally,
    /// gap positions skipped.
    pub fn structure(&self) -> String {
        let mut template = format!("{}{}", self.action_code, self.service_code);
        for key in self.parameters.values() {
            template.push(STAR);
            template.push_str(key);
        }
        template.push(POUND);
        template
    }
}
