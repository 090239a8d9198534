use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One parameter setting inside a routine step.
///
/// The model emits the value under two key spellings (`supportedclus_val`
/// for on/off and color, `supportedclusid_val` for brightness), so both are
/// modeled as optional and values stay untyped JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSetting {
    pub supportedclusid: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supportedclus_val: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supportedclusid_val: Option<Value>,
}

/// One device action inside a generated routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineStep {
    /// Routine this step belongs to (e.g. "morning").
    pub routine_name: String,
    /// Device type string.
    pub devicetype: String,
    /// Room the device is in.
    pub room_name: String,
    /// Hardware address of the target device.
    pub macid: String,
    /// Trigger time as an "HH:MM" string.
    pub time: String,
    /// Desired status ("on"/"off" or domain-specific).
    pub status: String,
    /// Parameter settings per supported cluster.
    pub com: Vec<ClusterSetting>,
}

/// A routine is an ordered sequence of steps. The pipeline persists model
/// output without validating it against this shape; the type exists so
/// well-formed payloads can be asserted in tests and consumed by clients.
pub type Routine = Vec<RoutineStep>;
