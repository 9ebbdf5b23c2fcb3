//! Response tokenizing and field decoding

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::command::Command;
use crate::errors::Result;
use crate::keys;
use crate::schema::Feature;

/// The shared tokenizer: one regular expression per schema, matched in
/// full against the raw response text, whose capture groups become the
/// positional field sequence.
#[derive(Debug, Clone)]
pub struct ResponsePattern {
    regex: Regex,
}

impl ResponsePattern {
    /// Compile the carrier's pattern, anchored at both ends: full-match
    /// mode, so the engine backtracks into later alternatives rather than
    /// settling for a prefix match.
    pub fn compile(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{pattern})$"))?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Capture fields in group order, group 0 (the whole match) first.
    /// Groups that matched nothing are kept as empty strings so positions
    /// stay aligned. A response that does not match in full yields an
    /// empty sequence.
    pub fn tokenize(&self, raw: &str) -> Vec<String> {
        let Some(captures) = self.regex.captures(raw) else {
            debug!(raw, "response did not match tokenizer pattern");
            return Vec::new();
        };
        captures
            .iter()
            .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect()
    }
}

/// Decode the declared response fields of `command` out of `raw`.
///
/// Declared positions beyond the tokenized sequence produce no entry. Raw
/// values are translated through the feature's ordered result definitions;
/// an unrecognized value in the distinguished status field additionally
/// inserts the `status_code_error` sentinel.
pub(crate) fn decode(
    command: &Command,
    feature: &Feature,
    pattern: Option<&ResponsePattern>,
    raw: &str,
) -> HashMap<String, String> {
    let mut decoded = HashMap::new();
    let Some(pattern) = pattern else {
        debug!("schema has no response pattern; nothing decoded");
        return decoded;
    };
    let fields = pattern.tokenize(raw);
    for (&position, key) in &command.response_fields {
        let Some(field) = fields.get(position as usize) else {
            continue;
        };
        match feature.translate(key, field) {
            Some(label) => {
                decoded.insert(key.clone(), label.to_string());
            }
            None => {
                if key == keys::STATUS && feature.has_definitions(key) {
                    decoded.insert(
                        keys::STATUS_ERROR.to_string(),
                        keys::RESPONSE_ERROR.to_string(),
                    );
                }
                decoded.insert(key.clone(), field.clone());
            }
        }
    }
    decoded
}
