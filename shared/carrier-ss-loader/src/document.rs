//! Serde model of a carrier's supplementary-service definition document.
//!
//! One document per carrier identity describes every feature's commands
//! (service/action codes, positional parameters, positional response field
//! keys), the feature's status-code vocabulary, and the shared response
//! tokenizer pattern.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use carrier_ss_codec::{Action, Command, Feature, ResponsePattern, ResultEntry, Schema};

use crate::error::{LoaderError, Result};

/// Root of a carrier definition document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarrierDocument {
    /// Shared tokenizer pattern, one per document, used by all features.
    #[serde(default)]
    pub response_pattern: Option<String>,
    #[serde(default)]
    pub features: HashMap<String, FeatureDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureDef {
    /// Command name ("query" / "activate" / "deactivate") -> definition.
    #[serde(default)]
    pub commands: HashMap<String, CommandDef>,
    /// Response field key -> ordered vocabulary; first match wins.
    #[serde(default)]
    pub command_results: HashMap<String, Vec<ResultEntryDef>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandDef {
    pub service_code: String,
    pub action_code: String,
    /// 1-based parameter position -> placeholder key.
    #[serde(default)]
    pub parameters: BTreeMap<u32, String>,
    /// 0-based tokenized-field position -> response field key.
    #[serde(default)]
    pub response_format: BTreeMap<u32, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntryDef {
    pub definition: String,
    pub value: String,
}

impl CarrierDocument {
    /// Convert into the codec's immutable schema.
    ///
    /// An uncompilable tokenizer pattern does not fail the load; the
    /// schema is produced without one and all decoding degrades to empty
    /// results.
    pub fn into_schema(self) -> Result<Schema> {
        let mut schema = Schema::new();
        schema.response_pattern = match self.response_pattern.as_deref() {
            None | Some("") => None,
            Some(pattern) => match ResponsePattern::compile(pattern) {
                Ok(compiled) => Some(compiled),
                Err(err) => {
                    warn!(%err, "response pattern failed to compile; decoding disabled");
                    None
                }
            },
        };
        for (name, feature_def) in self.features {
            let feature = feature_def.into_feature(&name)?;
            schema.features.insert(name, feature);
        }
        Ok(schema)
    }
}

impl FeatureDef {
    fn into_feature(self, feature_name: &str) -> Result<Feature> {
        let mut feature = Feature::default();
        for (command_name, def) in self.commands {
            let action = Action::from_name(&command_name);
            if action == Action::Unknown {
                return Err(LoaderError::Validation(format!(
                    "feature {feature_name}: unknown command name {command_name:?}"
                )));
            }
            if def.action_code.is_empty() || def.service_code.is_empty() {
                return Err(LoaderError::Validation(format!(
                    "feature {feature_name}: {command_name} command needs \
                     both action_code and service_code"
                )));
            }
            let command = Command {
                service_code: def.service_code,
                action_code: def.action_code,
                parameters: def.parameters,
                response_fields: def.response_format,
            };
            feature.commands.insert(action, command);
        }
        for (key, entries) in self.command_results {
            feature.result_definitions.insert(
                key,
                entries
                    .into_iter()
                    .map(|entry| ResultEntry::new(entry.definition, entry.value))
                    .collect(),
            );
        }
        Ok(feature)
    }
}
