//! Device directory diagnostic endpoint.

use axum::Json;
use axum::extract::{Path, State};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use hearth_protocol::DeviceRecord;

/// GET /api/v1/devices/{hashid} — list the devices registered to an owner.
///
/// An owner with no devices gets an empty list, not an error.
pub async fn list_devices(
    State(state): State<AppState>,
    Path(hashid): Path<String>,
) -> ApiResult<Json<Vec<DeviceRecord>>> {
    let devices = hearth_directory::devices_for_owner(&state.database_path, &hashid)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok(Json(devices))
}
