//! Prompt builders for the two model roles.
//!
//! Both builders are pure, deterministic string functions. Every caller
//! input (owner id, routine type, query text, device fields) is
//! interpolated verbatim — unescaped interpolation is part of the prompt
//! contract, and this module is the only place it happens.

use hearth_protocol::DeviceRecord;

/// One-shot example payload showing the exact JSON shape the structured
/// generator must emit. Embedded verbatim in every routine prompt.
const EXAMPLE_ROUTINE_OUTPUT: &str = r#"[
  {
    "routine_name": "morning",
    "devicetype": "light",
    "room_name": "bed room",
    "macid": "23213234",
    "time": "06:00",
    "status": "on",
    "com": [
      {
        "supportedclusid": 6,
        "supportedclus_val": "true"
      },
      {
        "supportedclusid": 8,
        "supportedclusid_val": 70
      },
      {
        "supportedclusid": 787,
        "supportedclus_val": "167"
      }
    ]
  },
  {
    "routine_name": "morning",
    "devicetype": "motion sensor",
    "room_name": "bed room",
    "macid": "23213237",
    "time": "06:15",
    "status": "off",
    "com": [
      {
        "supportedclusid": 6,
        "supportedclus_val": "false"
      }
    ]
  },
  {
    "routine_name": "morning",
    "devicetype": "thermostat",
    "room_name": "bed room",
    "macid": "232132378",
    "time": "06:30",
    "status": "on",
    "com": [
      {
        "supportedclusid": 6,
        "supportedclus_val": "true"
      }
    ]
  },
  {
    "routine_name": "morning",
    "devicetype": "smart blinds",
    "room_name": "bed room",
    "macid": "232132399",
    "time": "06:45",
    "status": "off",
    "com": [
      {
        "supportedclusid": 6,
        "supportedclus_val": "false"
      }
    ]
  }
]"#;

/// Persona and domain rules for routine synthesis.
const ROUTINE_PERSONA: &str = "\
You are a smart home assistant. You understand and control smart devices within a home environment, create routines, and show available devices in the home.

Humans, referred to as users, engage in various activities throughout their day. They live in homes equipped with multiple devices and follow different routines such as morning routines, evening routines, movie time routines, and party time routines. Each routine involves the use of specific devices in different rooms at specific times.

Imagine you are like Alexa, a smart home virtual assistant, providing suggestions for creating these routines. You need to check for available devices in the user's home and create routines based on the time and device mapping in the device directory.

For light devices, consider the following:
- When the status is 'on' or 'off', include a `supportedclusid` of 6 with a `supportedclus_val` of 'true' or 'false'.
- Suggest brightness when `supportedclusid` is 8, with `supportedclusid_val` between 0-100 (which represents brightness).
- Suggest color when `supportedclusid` is 787, with `supportedclus_val` between 0-100.

For thermostat and other devices, consider the following:
- Include only `supportedclusid` 6 with a `supportedclus_val` based on the status ('true' for on/open/up, 'false' for off/close/down).";

/// Persona for free-form query answering.
const QUERY_PERSONA: &str = "\
You are a smart home assistant. You understand and control smart devices within a home environment and respond to general user queries related to home automation.";

/// Build the routine-generation prompt for the structured generator.
///
/// `routine_type` and `hashid` are interpolated verbatim into the
/// instruction text. An empty device list is allowed and produces a prompt
/// stating that no devices are available.
pub fn routine_prompt(routine_type: &str, hashid: &str, devices: &[DeviceRecord]) -> String {
    format!(
        "{ROUTINE_PERSONA}\n\n\
         Here are the available devices in the home of user with Hashid {hashid}: {device_list}\n\n\
         Create a {routine_type} routine for the user with Hashid {hashid} in the following JSON format. \
         Make sure to replace any placeholders like 'brightness_value' with actual values:\n\
         {EXAMPLE_ROUTINE_OUTPUT}\n",
        device_list = render_device_list(devices),
    )
}

/// Build the general-query prompt for the conversational responder.
///
/// Embeds the raw query string and the deduplicated set of device-type
/// strings. The set is rendered in sorted order so identical inputs always
/// produce identical prompt text.
pub fn query_prompt(query: &str, devices: &[DeviceRecord]) -> String {
    format!(
        "{QUERY_PERSONA}\n\n\
         User query: \"{query}\"\n\n\
         Here are the available devices in the user's home: {device_types}\n\n\
         Please respond appropriately to the user's request or query based on the available devices.\n",
        device_types = render_device_types(devices),
    )
}

/// Render the full device list as one JSON array (field values verbatim).
fn render_device_list(devices: &[DeviceRecord]) -> String {
    if devices.is_empty() {
        return "none (no devices are registered for this home)".into();
    }
    let entries: Vec<serde_json::Value> = devices
        .iter()
        .map(|d| {
            serde_json::json!([
                d.hashid,
                d.location_name,
                d.friendly_name,
                d.mac_id,
                d.cluster_ids,
                d.device_type,
            ])
        })
        .collect();
    // Serializing a Value cannot fail.
    serde_json::to_string(&entries).unwrap_or_default()
}

/// Render the deduplicated, sorted device-type list.
fn render_device_types(devices: &[DeviceRecord]) -> String {
    if devices.is_empty() {
        return "none (no devices are registered for this home)".into();
    }
    let mut types: Vec<&str> = devices.iter().map(|d| d.device_type.as_str()).collect();
    types.sort_unstable();
    types.dedup();
    types.join(", ")
}
