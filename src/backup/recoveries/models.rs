//! Recovery models
//!
//! Wire names are camelCase. Serialization emits the snake_case field
//! names, which are the attribute names of the published records.

use serde::{Deserialize, Serialize};

use crate::backup::models::OracleTiers;
use crate::backup::traits::ListResponse;

/// Response of the recoveries list endpoint
#[derive(Deserialize, Debug, Default)]
pub struct RecoveriesResponse {
    #[serde(default)]
    pub recoveries: Option<Vec<Recovery>>,
}

impl ListResponse<Recovery> for RecoveriesResponse {
    fn into_items(self) -> Vec<Recovery> {
        self.recoveries.unwrap_or_default()
    }
}

/// A recovery operation
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Recovery {
    pub id: Option<String>,
    pub name: Option<String>,
    pub start_time_usecs: Option<i64>,
    pub end_time_usecs: Option<i64>,
    pub status: Option<String>,
    pub progress_task_id: Option<String>,
    pub snapshot_environment: Option<String>,
    pub recovery_action: Option<String>,
    pub permissions: Option<Vec<Tenant>>,
    pub creation_info: Option<CreationInfo>,
    pub can_tear_down: Option<bool>,
    pub tear_down_status: Option<String>,
    pub tear_down_message: Option<String>,
    pub messages: Option<Vec<String>>,
    pub is_parent_recovery: Option<bool>,
    pub parent_recovery_id: Option<String>,
    pub retrieve_archive_tasks: Option<Vec<RetrieveArchiveTask>>,
    pub is_multi_stage_restore: Option<bool>,
    pub physical_params: Option<RecoverPhysicalParams>,
    pub oracle_params: Option<RecoverOracleParams>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Tenant {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CreationInfo {
    pub user_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RetrieveArchiveTask {
    pub task_uid: Option<String>,
    pub uptier_expiry_times: Option<Vec<i64>>,
}

/// Login used against a recovery target
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct EntityRef {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverTarget {
    pub id: i64,
    pub name: Option<String>,
    pub parent_source_id: Option<i64>,
    pub parent_source_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct VlanConfig {
    pub id: Option<i64>,
    pub disable_vlan: Option<bool>,
    pub interface_name: Option<String>,
}

// Physical recoveries

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverPhysicalParams {
    pub objects: Vec<RecoverObjectSnapshotParams>,
    pub recovery_action: String,
    pub recover_volume_params: Option<RecoverVolumeParams>,
    pub mount_volume_params: Option<MountVolumeParams>,
    pub recover_file_and_folder_params: Option<RecoverFileAndFolderParams>,
    pub download_file_and_folder_params: Option<DownloadFileAndFolderParams>,
    pub system_recovery_params: Option<SystemRecoveryParams>,
}

/// Snapshot an object is recovered from, with per-object progress
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverObjectSnapshotParams {
    pub snapshot_id: String,
    pub point_in_time_usecs: Option<i64>,
    pub protection_group_id: Option<String>,
    pub protection_group_name: Option<String>,
    pub snapshot_creation_time_usecs: Option<i64>,
    pub object_info: Option<ObjectInfo>,
    pub snapshot_target_type: Option<String>,
    pub storage_domain_id: Option<i64>,
    pub archival_target_info: Option<ArchivalTargetInfo>,
    pub progress_task_id: Option<String>,
    pub recover_from_standby: Option<bool>,
    pub status: Option<String>,
    pub start_time_usecs: Option<i64>,
    pub end_time_usecs: Option<i64>,
    pub messages: Option<Vec<String>>,
    pub bytes_restored: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ObjectInfo {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub source_id: Option<i64>,
    pub source_name: Option<String>,
    pub environment: Option<String>,
    pub object_hash: Option<String>,
    pub object_type: Option<String>,
    pub logical_size_bytes: Option<i64>,
    pub uuid: Option<String>,
    pub global_id: Option<String>,
    pub protection_type: Option<String>,
    pub os_type: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ArchivalTargetInfo {
    pub target_id: Option<i64>,
    pub archival_task_id: Option<String>,
    pub target_name: Option<String>,
    pub target_type: Option<String>,
    pub usage_type: Option<String>,
    pub ownership_context: Option<String>,
    pub tier_settings: Option<ArchivalTargetTierInfo>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ArchivalTargetTierInfo {
    pub cloud_platform: String,
    pub oracle_tiering: Option<OracleTiers>,
    pub current_tier_type: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverVolumeParams {
    pub target_environment: String,
    pub physical_target_params: Option<RecoverVolumeTargetParams>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverVolumeTargetParams {
    pub mount_target: EntityRef,
    pub volume_mapping: Vec<RecoverVolumeMapping>,
    pub force_unmount_volume: Option<bool>,
    pub vlan_config: Option<VlanConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverVolumeMapping {
    pub source_volume_guid: String,
    pub destination_volume_guid: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct MountVolumeParams {
    pub target_environment: String,
    pub physical_target_params: Option<MountVolumeTargetParams>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct MountVolumeTargetParams {
    pub mount_to_original_target: bool,
    pub original_target_config: Option<MountOriginalTargetConfig>,
    pub new_target_config: Option<MountNewTargetConfig>,
    pub read_only_mount: Option<bool>,
    pub volume_names: Option<Vec<String>>,
    pub mounted_volume_mapping: Option<Vec<MountedVolumeMapping>>,
    pub vlan_config: Option<VlanConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct MountOriginalTargetConfig {
    pub server_credentials: Option<Credentials>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct MountNewTargetConfig {
    pub mount_target: RecoverTarget,
    pub server_credentials: Option<Credentials>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct MountedVolumeMapping {
    pub original_volume: Option<String>,
    pub mounted_volume: Option<String>,
    pub file_system_type: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverFileAndFolderParams {
    pub files_and_folders: Vec<FileAndFolderInfo>,
    pub target_environment: String,
    pub physical_target_params: Option<RecoverFileAndFolderTargetParams>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FileAndFolderInfo {
    pub absolute_path: String,
    pub destination_dir: Option<String>,
    pub is_directory: Option<bool>,
    pub status: Option<String>,
    pub messages: Option<Vec<String>>,
    pub is_view_file_recovery: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverFileAndFolderTargetParams {
    pub recover_target: RecoverTarget,
    pub restore_to_original_paths: Option<bool>,
    pub overwrite_existing: Option<bool>,
    pub alternate_restore_directory: Option<String>,
    pub preserve_attributes: Option<bool>,
    pub preserve_timestamps: Option<bool>,
    pub preserve_acls: Option<bool>,
    pub continue_on_error: Option<bool>,
    pub save_success_files: Option<bool>,
    pub vlan_config: Option<VlanConfig>,
    pub restore_entity_type: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DownloadFileAndFolderParams {
    pub files_and_folders: Option<Vec<FileAndFolderInfo>>,
    pub download_file_path: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SystemRecoveryParams {
    pub full_nas_path: Option<String>,
}

// Oracle recoveries

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverOracleParams {
    pub objects: Vec<RecoverOracleDbSnapshotParams>,
    pub recovery_action: String,
    pub recover_app_params: Option<RecoverOracleAppParams>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverOracleDbSnapshotParams {
    #[serde(flatten)]
    pub snapshot: RecoverObjectSnapshotParams,
    pub instant_recovery_info: Option<InstantRecoveryInfo>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct InstantRecoveryInfo {
    pub progress_task_id: Option<String>,
    pub status: Option<String>,
    pub start_time_usecs: Option<i64>,
    pub end_time_usecs: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverOracleAppParams {
    pub target_environment: String,
    pub oracle_target_params: Option<OracleTargetParams>,
    pub vlan_config: Option<VlanConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleTargetParams {
    pub recover_to_new_source: bool,
    pub new_source_config: Option<OracleNewSourceConfig>,
    pub original_source_config: Option<OracleOriginalSourceConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleNewSourceConfig {
    pub host: EntityRef,
    pub recovery_target: Option<String>,
    pub recover_database_params: Option<RecoverDatabaseParams>,
    pub recover_view_params: Option<RecoverViewParams>,
}

/// Source settings common to every Oracle recovery target
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleSourceSettings {
    pub restore_time_usecs: Option<i64>,
    pub db_channels: Option<Vec<OracleDbChannel>>,
    pub recovery_mode: Option<bool>,
    #[serde(rename(serialize = "shell_evironment_vars", deserialize = "shellEvironmentVars"))]
    pub shell_environment_vars: Option<Vec<KeyValuePair>>,
    pub granular_restore_info: Option<GranularRestoreInfo>,
    pub oracle_archive_log_info: Option<OracleArchiveLogInfo>,
    pub oracle_recovery_validation_info: Option<OracleRecoveryValidationInfo>,
    pub restore_spfile_or_pfile_info: Option<RestoreSpfileOrPfileInfo>,
    pub use_scn_for_restore: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverDatabaseParams {
    #[serde(flatten)]
    pub source: OracleSourceSettings,
    pub database_name: Option<String>,
    pub oracle_base_folder: Option<String>,
    pub oracle_home_folder: Option<String>,
    pub db_files_destination: Option<String>,
    pub db_config_file_path: Option<String>,
    pub enable_archive_log_mode: Option<bool>,
    pub pfile_parameter_map: Option<Vec<KeyValuePair>>,
    pub bct_file_path: Option<String>,
    pub num_tempfiles: Option<i64>,
    pub redo_log_config: Option<RedoLogConfig>,
    pub is_multi_stage_restore: Option<bool>,
    pub oracle_update_restore_options: Option<OracleUpdateRestoreOptions>,
    pub skip_clone_nid: Option<bool>,
    pub no_filename_check: Option<bool>,
    pub new_name_clause: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RecoverViewParams {
    #[serde(flatten)]
    pub source: OracleSourceSettings,
    pub view_mount_path: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleOriginalSourceConfig {
    #[serde(flatten)]
    pub source: OracleSourceSettings,
    pub roll_forward_log_path_vec: Option<Vec<String>>,
    pub attempt_complete_recovery: Option<bool>,
    pub roll_forward_time_msecs: Option<i64>,
    pub stop_active_passive: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleDbChannel {
    pub archive_log_retention_days: Option<i64>,
    pub archive_log_retention_hours: Option<i64>,
    pub credentials: Option<Credentials>,
    pub database_unique_name: Option<String>,
    pub database_uuid: Option<String>,
    pub default_channel_count: Option<i64>,
    pub database_node_list: Option<Vec<OracleDatabaseHost>>,
    pub max_host_count: Option<i64>,
    pub enable_dg_primary_backup: Option<bool>,
    pub rman_backup_type: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleDatabaseHost {
    pub host_id: Option<String>,
    pub channel_count: Option<i64>,
    pub port: Option<i64>,
    pub sbt_host_params: Option<OracleSbtHostParams>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleSbtHostParams {
    pub sbt_library_path: Option<String>,
    pub view_fs_path: Option<String>,
    pub vip_list: Option<Vec<String>>,
    pub vlan_info_list: Option<Vec<OracleVlanInfo>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleVlanInfo {
    pub ip_list: Option<Vec<String>>,
    pub gateway: Option<String>,
    pub id: Option<i64>,
    pub subnet_ip: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct GranularRestoreInfo {
    pub granularity_type: Option<String>,
    pub pdb_restore_params: Option<PdbRestoreParams>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PdbRestoreParams {
    #[serde(rename(deserialize = "dropDuplicatePDB"))]
    pub drop_duplicate_pdb: Option<bool>,
    pub pdb_objects: Option<Vec<OraclePdbObjectInfo>>,
    pub restore_to_existing_cdb: Option<bool>,
    pub rename_pdb_map: Option<Vec<KeyValuePair>>,
    pub include_in_restore: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OraclePdbObjectInfo {
    pub db_id: String,
    pub db_name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleArchiveLogInfo {
    pub range_type: Option<String>,
    pub range_info_vec: Option<Vec<OracleRangeMetaInfo>>,
    pub archive_log_restore_dest: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleRangeMetaInfo {
    pub start_of_range: Option<i64>,
    pub end_of_range: Option<i64>,
    pub protection_group_id: Option<String>,
    pub reset_log_id: Option<i64>,
    pub incarnation_id: Option<i64>,
    pub thread_id: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleRecoveryValidationInfo {
    pub create_dummy_instance: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RestoreSpfileOrPfileInfo {
    pub should_restore_spfile_or_pfile: Option<bool>,
    pub file_location: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RedoLogConfig {
    pub num_groups: Option<i64>,
    pub member_prefix: Option<String>,
    pub size_m_bytes: Option<i64>,
    pub group_members: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OracleUpdateRestoreOptions {
    pub delay_secs: Option<i64>,
    pub target_path_vec: Option<Vec<String>>,
}
