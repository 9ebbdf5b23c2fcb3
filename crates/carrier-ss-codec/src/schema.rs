//! Schema data model: features, commands, and result definitions.
//!
//! A [`Schema`] is built once per carrier identity by an external loader and
//! is read-only afterwards; the codec only borrows it.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::errors::{CodecError, Result};
use crate::response::ResponsePattern;

/// Supplementary-service operation kind.
///
/// `Unknown` is never a valid key in [`Feature::commands`]; it is the
/// classification result for dialed strings that match no template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Unknown,
    Query,
    Activate,
    Deactivate,
}

impl Action {
    /// Parse a command name as it appears in carrier documents.
    pub fn from_name(name: &str) -> Self {
        match name {
            "query" => Self::Query,
            "activate" => Self::Activate,
            "deactivate" => Self::Deactivate,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Query => "query",
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
        };
        write!(f, "{}", name)
    }
}

/// One (literal value -> human-readable label) translation for a response
/// field. Entries for a field key form an ordered list; first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub label: String,
    pub value: String,
}

impl ResultEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The label, if this entry's literal value equals the raw field.
    pub fn label_for(&self, raw: &str) -> Option<&str> {
        (self.value == raw).then_some(self.label.as_str())
    }
}

/// A named supplementary service: up to one command per action plus the
/// feature's carrier-specific status vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feature {
    pub commands: HashMap<Action, Command>,
    pub result_definitions: HashMap<String, Vec<ResultEntry>>,
}

impl Feature {
    pub fn command(&self, action: Action) -> Option<&Command> {
        self.commands.get(&action)
    }

    /// First matching label for a raw field value, if the feature defines
    /// a vocabulary for `key` and any entry matches.
    pub(crate) fn translate(&self, key: &str, raw: &str) -> Option<&str> {
        self.result_definitions
            .get(key)?
            .iter()
            .find_map(|entry| entry.label_for(raw))
    }

    pub(crate) fn has_definitions(&self, key: &str) -> bool {
        self.result_definitions.contains_key(key)
    }
}

/// Carrier schema: all features plus the shared response tokenizer.
///
/// The tokenizer pattern is an explicit field with lifecycle bound to the
/// schema, `None` when the carrier document omits it (all decoding then
/// short-circuits to empty results).
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub features: HashMap<String, Feature>,
    pub response_pattern: Option<ResponsePattern>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feature(&self, name: &str) -> Result<&Feature> {
        self.features
            .get(name)
            .ok_or_else(|| CodecError::UnknownFeature(name.to_string()))
    }

    pub fn command(&self, feature: &str, action: Action) -> Result<(&Feature, &Command)> {
        let found = self.feature(feature)?;
        let command = found
            .command(action)
            .ok_or_else(|| CodecError::UnknownCommand {
                feature: feature.to_string(),
                action,
            })?;
        Ok((found, command))
    }
}
