//! Typed queries over the `home_details` table.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;

use hearth_protocol::{DeviceRecord, decode_cluster_ids};

use crate::error::DirectoryResult;

/// Raw directory row. The cluster column is a JSON-encoded string and is
/// decoded into `DeviceRecord::cluster_ids` before the row leaves this crate.
#[derive(Debug, Clone, sqlx::FromRow)]
struct DeviceRow {
    hashid: String,
    location_name: String,
    friendly_name: String,
    mac_id: String,
    cluster_ids: String,
    device_type: String,
}

impl From<DeviceRow> for DeviceRecord {
    fn from(row: DeviceRow) -> Self {
        DeviceRecord {
            cluster_ids: decode_cluster_ids(&row.cluster_ids),
            hashid: row.hashid,
            location_name: row.location_name,
            friendly_name: row.friendly_name,
            mac_id: row.mac_id,
            device_type: row.device_type,
        }
    }
}

/// Return every device registered to `hashid`, in insertion order.
///
/// Opens the store read-only for the duration of this call and closes it
/// before returning. An owner with no rows yields an empty vec.
pub async fn devices_for_owner(
    db_path: &Path,
    hashid: &str,
) -> DirectoryResult<Vec<DeviceRecord>> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);
    let mut conn = SqliteConnection::connect_with(&options).await?;

    let rows: Vec<DeviceRow> = sqlx::query_as(
        "SELECT hashid, location_name, friendly_name, mac_id, cluster_ids, device_type
         FROM home_details WHERE hashid = ?",
    )
    .bind(hashid)
    .fetch_all(&mut conn)
    .await?;

    conn.close().await?;

    tracing::debug!(hashid = %hashid, device_count = rows.len(), "directory lookup");
    Ok(rows.into_iter().map(DeviceRecord::from).collect())
}
