//! Carrier Document Integration Tests
//!
//! Full path: definition document -> schema -> registry -> build /
//! classify / decode.

use std::collections::HashMap;

use carrier_ss_codec::{keys, Action, SchemaRegistry};
use carrier_ss_loader::load_str;

const CARRIER_850_DOC: &str = r###"{
    "response_pattern": "(\\d)\\*?([0-9]*)#",
    "features": {
        "callforwarding": {
            "commands": {
                "query": {
                    "service_code": "21",
                    "action_code": "*#",
                    "response_format": { "1": "status_code", "2": "number" }
                },
                "activate": {
                    "service_code": "21",
                    "action_code": "**",
                    "parameters": { "1": "tag_number" },
                    "response_format": { "1": "status_code" }
                },
                "deactivate": {
                    "service_code": "21",
                    "action_code": "##",
                    "parameters": { "1": "tag_number" },
                    "response_format": { "1": "status_code" }
                }
            },
            "command_results": {
                "status_code": [
                    { "definition": "activate", "value": "1" },
                    { "definition": "deactivate", "value": "0" },
                    { "definition": "unregister", "value": "4" }
                ]
            }
        },
        "callerid": {
            "commands": {
                "activate": {
                    "service_code": "31",
                    "action_code": "*",
                    "parameters": { "1": "tag_number" },
                    "response_format": { "1": "status_code" }
                },
                "deactivate": {
                    "service_code": "31",
                    "action_code": "#",
                    "parameters": { "1": "tag_number" },
                    "response_format": { "1": "status_code" }
                }
            },
            "command_results": {
                "status_code": [
                    { "definition": "ok", "value": "0" },
                    { "definition": "fail", "value": "1" }
                ]
            }
        }
    }
}"###;

fn codec_for_carrier_850() -> carrier_ss_codec::Codec {
    let registry = SchemaRegistry::new();
    registry.register(850, load_str(CARRIER_850_DOC).unwrap());
    registry.codec_for(850).unwrap()
}

#[test]
fn builds_a_forwarding_command_from_user_values() {
    let codec = codec_for_carrier_850();
    let values = HashMap::from([(keys::TAG_NUMBER.to_string(), "15551234".to_string())]);
    let dialed = codec
        .build_command(keys::FEATURE_CALL_FORWARDING, Action::Activate, &values)
        .unwrap();
    assert_eq!(dialed, "**21*15551234#");
}

#[test]
fn builds_a_query_without_parameters() {
    let codec = codec_for_carrier_850();
    let dialed = codec
        .build_command(keys::FEATURE_CALL_FORWARDING, Action::Query, &HashMap::new())
        .unwrap();
    assert_eq!(dialed, "*#21#");
}

#[test]
fn classifies_directly_dialed_strings() {
    let codec = codec_for_carrier_850();
    assert_eq!(
        codec
            .classify_command(keys::FEATURE_CALL_FORWARDING, "**21*15556789#")
            .unwrap(),
        Action::Activate
    );
    assert_eq!(
        codec
            .classify_command(keys::FEATURE_CALL_FORWARDING, "##21*15556789#")
            .unwrap(),
        Action::Deactivate
    );
    assert_eq!(
        codec
            .classify_command(keys::FEATURE_CALL_FORWARDING, "*43*15556789#")
            .unwrap(),
        Action::Unknown
    );
}

#[test]
fn decodes_a_query_response_through_the_vocabulary() {
    let codec = codec_for_carrier_850();
    let decoded = codec
        .decode_response(keys::FEATURE_CALL_FORWARDING, Action::Query, "1*5551234#")
        .unwrap();
    assert_eq!(
        decoded.get(keys::STATUS).map(String::as_str),
        Some("activate")
    );
    assert_eq!(
        decoded.get(keys::NUMBER).map(String::as_str),
        Some("5551234")
    );
    assert!(!decoded.contains_key(keys::STATUS_ERROR));
}

#[test]
fn flags_an_unrecognized_status_code() {
    let codec = codec_for_carrier_850();
    let decoded = codec
        .decode_response(keys::FEATURE_CALL_FORWARDING, Action::Activate, "9#")
        .unwrap();
    assert_eq!(decoded.get(keys::STATUS).map(String::as_str), Some("9"));
    assert_eq!(
        decoded.get(keys::STATUS_ERROR).map(String::as_str),
        Some(keys::RESPONSE_ERROR)
    );
}

#[test]
fn features_keep_their_own_vocabularies() {
    let codec = codec_for_carrier_850();
    // "1" means activated for call forwarding but failure for caller id.
    let forwarding = codec
        .decode_response(keys::FEATURE_CALL_FORWARDING, Action::Activate, "1#")
        .unwrap();
    assert_eq!(
        forwarding.get(keys::STATUS).map(String::as_str),
        Some("activate")
    );

    let caller_id = codec
        .decode_response(keys::FEATURE_CALLER_ID, Action::Activate, "1#")
        .unwrap();
    assert_eq!(caller_id.get(keys::STATUS).map(String::as_str), Some("fail"));
}
