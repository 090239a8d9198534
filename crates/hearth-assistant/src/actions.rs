//! Fixed keyword-to-action matching for the general-query path.
//!
//! The model's reply text plays no part here: suggestions are derived from
//! the original query and the device list alone.

use hearth_protocol::{ActionSuggestion, DeviceRecord};

/// A single matching rule: device-type keyword + query keywords → action.
struct ActionRule {
    device_keyword: &'static str,
    query_keywords: &'static [&'static str],
    action: &'static str,
}

/// The four fixed rules, in precedence order. For each device, the first
/// rule whose device keyword and any query keyword both match wins.
const RULES: &[ActionRule] = &[
    ActionRule {
        device_keyword: "thermostat",
        query_keywords: &["cold", "hot"],
        action: "adjust temperature",
    },
    ActionRule {
        device_keyword: "light",
        query_keywords: &["dark"],
        action: "turn on",
    },
    ActionRule {
        device_keyword: "motion sensor",
        query_keywords: &["away"],
        action: "activate",
    },
    ActionRule {
        device_keyword: "smart blinds",
        query_keywords: &["sunny"],
        action: "open",
    },
];

/// Scan the query and device list for rule matches.
///
/// Matching is case-insensitive substring matching on both the device-type
/// field and the query text. Each matching device contributes its own
/// suggestion; duplicates across devices are kept.
pub fn identify_actions(query: &str, devices: &[DeviceRecord]) -> Vec<ActionSuggestion> {
    let query = query.to_lowercase();

    devices
        .iter()
        .filter_map(|device| {
            let device_type = device.device_type.to_lowercase();
            RULES
                .iter()
                .find(|rule| {
                    device_type.contains(rule.device_keyword)
                        && rule.query_keywords.iter().any(|k| query.contains(k))
                })
                .map(|rule| ActionSuggestion {
                    device: rule.device_keyword.into(),
                    action: rule.action.into(),
                    current_status_check: true,
                })
        })
        .collect()
}
