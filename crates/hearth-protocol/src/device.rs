use serde::{Deserialize, Serialize};

/// On/off cluster, present on every controllable device.
pub const CLUSTER_ON_OFF: i64 = 6;
/// Brightness (level control) cluster, lights only. Values 0-100.
pub const CLUSTER_LEVEL: i64 = 8;
/// Color cluster, lights only. Values 0-100.
pub const CLUSTER_COLOR: i64 = 787;

/// A registered device as returned by the directory lookup.
///
/// The directory stores `cluster_ids` as a JSON-encoded string column;
/// [`decode_cluster_ids`] converts it at the lookup boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Opaque owner identifier. No format validation anywhere.
    pub hashid: String,
    /// Room the device is installed in (e.g. "bed room").
    pub location_name: String,
    /// User-facing device name.
    pub friendly_name: String,
    /// Hardware address identifier.
    pub mac_id: String,
    /// Supported cluster identifiers (6 = on/off, 8 = level, 787 = color).
    pub cluster_ids: Vec<i64>,
    /// Device type string (e.g. "light", "thermostat", "smart blinds").
    pub device_type: String,
}

/// Decode a JSON-encoded cluster-id list from the directory.
///
/// Anything that is not a JSON array of integers decodes to an empty list;
/// a malformed cluster column must never fail a lookup.
pub fn decode_cluster_ids(raw: &str) -> Vec<i64> {
    serde_json::from_str(raw).unwrap_or_default()
}
