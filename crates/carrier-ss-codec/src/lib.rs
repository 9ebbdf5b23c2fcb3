//! # Carrier SS Codec
//!
//! Carrier-configurable codec for USSD supplementary-service commands
//! (call forwarding, caller-id restriction, and friends).
//!
//! Dial-string conventions, parameter ordering, and status-code vocabulary
//! differ by operator. Those conventions are expressed declaratively as an
//! immutable [`Schema`] (produced by an external loader) and the [`Codec`]
//! operates on it:
//!
//! - build an outgoing dial string from a feature + action + parameters,
//! - decode a raw network response into carrier-independent key/value
//!   results,
//! - classify an arbitrary dialed string against the templated commands.
//!
//! ## Example
//! ```rust,ignore
//! use carrier_ss_codec::{keys, Action, Codec};
//!
//! let codec = Codec::new(schema);
//! let dial = codec.build_command(keys::FEATURE_CALLER_ID, Action::Activate, &values)?;
//! let fields = codec.decode_response(keys::FEATURE_CALLER_ID, Action::Activate, &response)?;
//! ```

pub mod classify;
pub mod codec;
pub mod command;
pub mod errors;
pub mod registry;
pub mod response;
pub mod schema;


// Re-exports
pub use classify::{CommandTemplate, TemplateSegment};
pub use codec::Codec;
pub use command::Command;
pub use errors::{CodecError, Result};
pub use registry::SchemaRegistry;
pub use response::ResponsePattern;
pub use schema::{Action, Feature, ResultEntry, Schema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Well-known feature names, placeholder tags, and response field keys.
///
/// Carrier documents are free to define their own vocabulary; these are the
/// names shared with the telephony/UI layer.
pub mod keys {
    /// Call forwarding feature
    pub const FEATURE_CALL_FORWARDING: &str = "callforwarding";
    /// Caller-id restriction feature
    pub const FEATURE_CALLER_ID: &str = "callerid";

    /// Placeholder tag for a user-supplied phone number
    pub const TAG_NUMBER: &str = "tag_number";
    /// Placeholder tag for a user-supplied timeout value
    pub const TAG_TIME: &str = "tag_time";

    /// Distinguished status field key
    pub const STATUS: &str = "status_code";
    /// Response field key for a phone number
    pub const NUMBER: &str = "number";
    /// Response field key for a timeout value
    pub const TIME: &str = "time";

    /// Sentinel key inserted when a status code matches no definition
    pub const STATUS_ERROR: &str = "status_code_error";
    /// Sentinel value for unrecognized status codes
    pub const RESPONSE_ERROR: &str = "RESPONSE_ERROR";

    /// Result definition labels
    pub const DEFINITION_ACTIVATE: &str = "activate";
    pub const DEFINITION_DEACTIVATE: &str = "deactivate";
    pub const DEFINITION_UNREGISTER: &str = "unregister";
    pub const DEFINITION_OK: &str = "ok";
    pub const DEFINITION_FAIL: &str = "fail";
}
