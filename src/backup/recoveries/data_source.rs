//! Read entry point of the recoveries data source

use log::{debug, info};

use crate::backup::BackupClient;
use crate::datasource::{project_all, synthetic_id, ResourceData};
use crate::error::Result;

use super::api::GetRecoveriesOptions;
use super::models::Recovery;

/// Computed attribute holding the projected recoveries
pub const RECOVERIES_KEY: &str = "recoveries";

/// List recoveries and publish them into `data`
///
/// On any failure `data` is left untouched.
pub async fn read(client: &BackupClient, data: &mut ResourceData) -> Result<Vec<Recovery>> {
    let options = GetRecoveriesOptions::from_resource_data(data);

    let recoveries = client.get_recoveries(&options).await?;
    let records = project_all(&recoveries)?;

    debug!("Projected {} recoveries", records.len());
    data.set_id(synthetic_id());
    data.set(RECOVERIES_KEY, records)?;
    info!("Read {} recoveries", recoveries.len());

    Ok(recoveries)
}
