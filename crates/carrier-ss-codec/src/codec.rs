//! Codec facade over an immutable carrier schema

use std::collections::HashMap;
use std::sync::Arc;

use crate::classify::{self, CommandTemplate};
use crate::errors::Result;
use crate::response;
use crate::schema::{Action, Schema};

/// Carrier-independent entry point for the telephony/UI layer.
///
/// Holds a shared reference to a loaded [`Schema`]; every operation is a
/// pure, synchronous computation over it, safe to call from any thread.
#[derive(Debug, Clone)]
pub struct Codec {
    schema: Arc<Schema>,
}

impl Codec {
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        Self {
            schema: schema.into(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Build the dial string for `feature`/`action` with `values`
    /// substituted into the declared placeholder positions.
    pub fn build_command(
        &self,
        feature: &str,
        action: Action,
        values: &HashMap<String, String>,
    ) -> Result<String> {
        let (_, command) = self.schema.command(feature, action)?;
        Ok(command.render(values))
    }

    /// Decode a raw network response into a field-key -> value map. An
    /// empty map means nothing decoded, not a confirmed status.
    pub fn decode_response(
        &self,
        feature: &str,
        action: Action,
        raw: &str,
    ) -> Result<HashMap<String, String>> {
        let (found, command) = self.schema.command(feature, action)?;
        Ok(response::decode(
            command,
            found,
            self.schema.response_pattern.as_ref(),
            raw,
        ))
    }

    /// Which of the feature's Activate/Deactivate templates a dialed
    /// string represents, if either.
    pub fn classify_command(&self, feature: &str, candidate: &str) -> Result<Action> {
        let found = self.schema.feature(feature)?;
        Ok(classify::classify(found, candidate))
    }

    /// The ungapped template string for `feature`/`action`, for callers
    /// that compare externally-held strings themselves.
    pub fn command_template(&self, feature: &str, action: Action) -> Result<String> {
        let (_, command) = self.schema.command(feature, action)?;
        Ok(command.structure())
    }

    /// The tagged segment form of the template.
    pub fn template_segments(&self, feature: &str, action: Action) -> Result<CommandTemplate> {
        let (_, command) = self.schema.command(feature, action)?;
        Ok(CommandTemplate::of(command))
    }
}
