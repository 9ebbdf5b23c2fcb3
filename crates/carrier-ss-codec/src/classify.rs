//! Classification of dialed strings against command templates.
//!
//! Used to recognize supplementary-service codes the user typed directly
//! rather than through structured UI.

use tracing::debug;

use crate::command::Command;
use crate::schema::{Action, Feature};

/// One `*`-delimited segment of a command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    /// Must equal the corresponding input segment exactly.
    Literal(String),
    /// A declared placeholder key; matches any input segment.
    Placeholder(String),
}

/// The tagged form of a command's ungapped template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    segments: Vec<TemplateSegment>,
}

impl CommandTemplate {
    /// Build from a command: render the ungapped template, drop the
    /// trailing `#`, split on `*`, and tag every segment that names a
    /// declared placeholder.
    pub fn of(command: &Command) -> Self {
        let rendered = command.structure();
        let body = rendered.strip_suffix('#').unwrap_or(&rendered);
        let segments = body
            .split('*')
            .map(|segment| {
                if command.parameters.values().any(|key| key == segment) {
                    TemplateSegment::Placeholder(segment.to_string())
                } else {
                    TemplateSegment::Literal(segment.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    /// Segment-by-segment comparison against a dialed string: segment
    /// counts must agree, literals must match exactly, placeholders match
    /// unconditionally.
    pub fn matches(&self, candidate: &str) -> bool {
        let body = candidate.strip_suffix('#').unwrap_or(candidate);
        let input: Vec<&str> = body.split('*').collect();
        if input.len() != self.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(input)
            .all(|(segment, actual)| match segment {
                TemplateSegment::Placeholder(_) => true,
                TemplateSegment::Literal(text) => text == actual,
            })
    }
}

/// First action whose template matches the dialed string: Activate, then
/// Deactivate, else Unknown. A feature missing either command simply
/// cannot match it.
pub(crate) fn classify(feature: &Feature, candidate: &str) -> Action {
    for action in [Action::Activate, Action::Deactivate] {
        if let Some(command) = feature.command(action) {
            if CommandTemplate::of(command).matches(candidate) {
                debug!(%action, candidate, "dialed string matched command template");
                return action;
            }
        }
    }
    Action::Unknown
}
