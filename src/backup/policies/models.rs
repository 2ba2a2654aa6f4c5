//! Protection policy models
//!
//! Wire names are camelCase. Serialization emits the snake_case field
//! names, which are the attribute names of the published records.

use serde::{Deserialize, Serialize};

use crate::backup::models::OracleTiers;
use crate::backup::traits::ListResponse;

/// Response of the policies list endpoint
#[derive(Deserialize, Debug, Default)]
pub struct ProtectionPoliciesResponse {
    #[serde(default)]
    pub policies: Option<Vec<ProtectionPolicy>>,
}

impl ListResponse<ProtectionPolicy> for ProtectionPoliciesResponse {
    fn into_items(self) -> Vec<ProtectionPolicy> {
        self.policies.unwrap_or_default()
    }
}

/// A protection policy
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ProtectionPolicy {
    pub id: Option<String>,
    pub name: String,
    pub backup_policy: BackupPolicy,
    pub description: Option<String>,
    pub blackout_window: Option<Vec<BlackoutWindow>>,
    pub extended_retention: Option<Vec<ExtendedRetentionPolicy>>,
    pub remote_target_policy: Option<TargetsConfiguration>,
    pub cascaded_targets_config: Option<Vec<CascadedTargetConfiguration>>,
    pub retry_options: Option<RetryOptions>,
    pub data_lock: Option<String>,
    pub version: Option<i64>,
    #[serde(rename(deserialize = "isCBSEnabled"))]
    pub is_cbs_enabled: Option<bool>,
    pub last_modification_time_usecs: Option<i64>,
    pub template_id: Option<String>,
    pub is_usable: Option<bool>,
    pub is_replicated: Option<bool>,
    pub num_protection_groups: Option<i64>,
    pub num_protected_objects: Option<i64>,
}

impl ProtectionPolicy {
    /// Unit of the regular incremental schedule, if any
    pub fn incremental_unit(&self) -> Option<&str> {
        self.backup_policy
            .regular
            .incremental
            .as_ref()
            .map(|i| i.schedule.unit.as_str())
    }

    /// Regular retention as "<duration> <unit>"
    pub fn retention_summary(&self) -> Option<String> {
        self.backup_policy
            .regular
            .retention
            .as_ref()
            .map(|r| format!("{} {}", r.duration, r.unit))
    }

    /// Remote copy targets as "<kind> <retention>", in declaration order
    pub fn target_summary(&self) -> Vec<String> {
        self.remote_target_policy
            .iter()
            .flat_map(|t| t.targets())
            .map(|target| {
                let retention = &target.copy_settings().retention;
                format!("{} {} {}", target.kind(), retention.duration, retention.unit)
            })
            .collect()
    }
}

/// Backup schedules and retention of a policy
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct BackupPolicy {
    pub regular: RegularBackupPolicy,
    pub log: Option<LogBackupPolicy>,
    pub bmr: Option<BmrBackupPolicy>,
    pub cdp: Option<CdpBackupPolicy>,
    pub storage_array_snapshot: Option<StorageArraySnapshotBackupPolicy>,
    pub run_timeouts: Option<Vec<CancellationTimeoutParams>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RegularBackupPolicy {
    pub incremental: Option<IncrementalBackupPolicy>,
    pub full: Option<FullBackupPolicy>,
    pub full_backups: Option<Vec<FullScheduleAndRetention>>,
    pub retention: Option<Retention>,
    pub primary_backup_target: Option<PrimaryBackupTarget>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct IncrementalBackupPolicy {
    pub schedule: IncrementalSchedule,
}

/// Schedule with minute to year granularity
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct IncrementalSchedule {
    pub unit: String,
    pub minute_schedule: Option<FrequencySchedule>,
    pub hour_schedule: Option<FrequencySchedule>,
    pub day_schedule: Option<FrequencySchedule>,
    pub week_schedule: Option<WeekSchedule>,
    pub month_schedule: Option<MonthSchedule>,
    pub year_schedule: Option<YearSchedule>,
}

pub type StorageArraySnapshotSchedule = IncrementalSchedule;

/// Every `frequency` minutes, hours or days
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FrequencySchedule {
    pub frequency: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct WeekSchedule {
    pub day_of_week: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct MonthSchedule {
    pub day_of_week: Option<Vec<String>>,
    pub week_of_month: Option<String>,
    pub day_of_month: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct YearSchedule {
    pub day_of_year: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FullBackupPolicy {
    pub schedule: Option<FullSchedule>,
}

/// Schedule with day to year granularity
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FullSchedule {
    pub unit: String,
    pub day_schedule: Option<FrequencySchedule>,
    pub week_schedule: Option<WeekSchedule>,
    pub month_schedule: Option<MonthSchedule>,
    pub year_schedule: Option<YearSchedule>,
}

pub type BmrSchedule = FullSchedule;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FullScheduleAndRetention {
    pub schedule: FullSchedule,
    pub retention: Retention,
}

/// How long snapshots are kept
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Retention {
    pub unit: String,
    pub duration: i64,
    pub data_lock_config: Option<DataLockConfig>,
}

pub type CdpRetention = Retention;

/// WORM lock applied to retained snapshots
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct DataLockConfig {
    pub mode: String,
    pub unit: String,
    pub duration: i64,
    pub enable_worm_on_external_target: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PrimaryBackupTarget {
    pub target_type: Option<String>,
    pub archival_target_settings: Option<PrimaryArchivalTarget>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PrimaryArchivalTarget {
    pub target_id: i64,
    pub target_name: Option<String>,
    pub tier_settings: Option<TierLevelSettings>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TierLevelSettings {
    pub cloud_platform: String,
    pub oracle_tiering: Option<OracleTiers>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct LogBackupPolicy {
    pub schedule: LogSchedule,
    pub retention: Retention,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct LogSchedule {
    pub unit: String,
    pub minute_schedule: Option<FrequencySchedule>,
    pub hour_schedule: Option<FrequencySchedule>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct BmrBackupPolicy {
    pub schedule: BmrSchedule,
    pub retention: Retention,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CdpBackupPolicy {
    pub retention: CdpRetention,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct StorageArraySnapshotBackupPolicy {
    pub schedule: StorageArraySnapshotSchedule,
    pub retention: Retention,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CancellationTimeoutParams {
    pub timeout_mins: Option<i64>,
    pub backup_type: Option<String>,
}

/// Period during which no backup runs start
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct BlackoutWindow {
    pub day: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub config_id: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TimeOfDay {
    pub hour: i64,
    pub minute: i64,
    pub time_zone: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ExtendedRetentionPolicy {
    pub schedule: TargetSchedule,
    pub retention: Retention,
    pub run_type: Option<String>,
    pub config_id: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TargetSchedule {
    pub unit: String,
    pub frequency: Option<i64>,
}

/// Remote copies of a policy's snapshots
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TargetsConfiguration {
    pub replication_targets: Option<Vec<ReplicationTarget>>,
    pub archival_targets: Option<Vec<ArchivalTarget>>,
    pub cloud_spin_targets: Option<Vec<CloudSpinTargetConfig>>,
    pub onprem_deploy_targets: Option<Vec<OnpremDeployTarget>>,
    pub rpaas_targets: Option<Vec<RpaasTarget>>,
}

/// A configured remote target, by kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoteTarget<'a> {
    Replication(&'a ReplicationTarget),
    Archival(&'a ArchivalTarget),
    CloudSpin(&'a CloudSpinTargetConfig),
    OnpremDeploy(&'a OnpremDeployTarget),
    Rpaas(&'a RpaasTarget),
}

impl RemoteTarget<'_> {
    /// Copy settings shared by every kind of target
    pub fn copy_settings(&self) -> &TargetCopySettings {
        match self {
            RemoteTarget::Replication(t) => &t.copy,
            RemoteTarget::Archival(t) => &t.copy,
            RemoteTarget::CloudSpin(t) => &t.copy,
            RemoteTarget::OnpremDeploy(t) => &t.copy,
            RemoteTarget::Rpaas(t) => &t.copy,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RemoteTarget::Replication(_) => "replication",
            RemoteTarget::Archival(_) => "archival",
            RemoteTarget::CloudSpin(_) => "cloud_spin",
            RemoteTarget::OnpremDeploy(_) => "onprem_deploy",
            RemoteTarget::Rpaas(_) => "rpaas",
        }
    }
}

impl TargetsConfiguration {
    /// All configured targets, grouped by kind in declaration order
    pub fn targets(&self) -> Vec<RemoteTarget<'_>> {
        let mut targets = Vec::new();
        targets.extend(
            self.replication_targets
                .iter()
                .flatten()
                .map(RemoteTarget::Replication),
        );
        targets.extend(
            self.archival_targets
                .iter()
                .flatten()
                .map(RemoteTarget::Archival),
        );
        targets.extend(
            self.cloud_spin_targets
                .iter()
                .flatten()
                .map(RemoteTarget::CloudSpin),
        );
        targets.extend(
            self.onprem_deploy_targets
                .iter()
                .flatten()
                .map(RemoteTarget::OnpremDeploy),
        );
        targets.extend(self.rpaas_targets.iter().flatten().map(RemoteTarget::Rpaas));
        targets
    }
}

/// Settings every remote copy carries, flattened into each target
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct TargetCopySettings {
    pub schedule: TargetSchedule,
    pub retention: Retention,
    pub copy_on_run_success: Option<bool>,
    pub config_id: Option<String>,
    pub backup_run_type: Option<String>,
    pub run_timeouts: Option<Vec<CancellationTimeoutParams>>,
    pub log_retention: Option<Retention>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ReplicationTarget {
    #[serde(flatten)]
    pub copy: TargetCopySettings,
    pub target_type: String,
    pub remote_target_config: Option<RemoteTargetConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RemoteTargetConfig {
    pub cluster_id: i64,
    pub cluster_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ArchivalTarget {
    #[serde(flatten)]
    pub copy: TargetCopySettings,
    pub target_id: i64,
    pub target_name: Option<String>,
    pub target_type: Option<String>,
    pub tier_settings: Option<TierLevelSettings>,
    pub extended_retention: Option<Vec<ExtendedRetentionPolicy>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CloudSpinTargetConfig {
    #[serde(flatten)]
    pub copy: TargetCopySettings,
    pub target: CloudSpinTarget,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CloudSpinTarget {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OnpremDeployTarget {
    #[serde(flatten)]
    pub copy: TargetCopySettings,
    pub params: Option<OnpremDeployParams>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct OnpremDeployParams {
    pub id: Option<i64>,
    #[serde(rename(serialize = "restore_v_mware_params", deserialize = "restoreVMwareParams"))]
    pub restore_vmware_params: Option<RestoreVmwareVmParams>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RestoreVmwareVmParams {
    #[serde(rename(deserialize = "targetVMFolderId"))]
    pub target_vm_folder_id: Option<i64>,
    pub target_data_store_id: Option<i64>,
    pub enable_copy_recovery: Option<bool>,
    pub resource_pool_id: Option<i64>,
    pub datastore_ids: Option<Vec<i64>>,
    pub overwrite_existing_vm: Option<bool>,
    pub power_off_and_rename_existing_vm: Option<bool>,
    pub attempt_differential_restore: Option<bool>,
    pub is_on_prem_deploy: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RpaasTarget {
    #[serde(flatten)]
    pub copy: TargetCopySettings,
    pub target_id: i64,
    pub target_name: Option<String>,
    pub target_type: Option<String>,
}

/// Targets a remote cluster copies further
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CascadedTargetConfiguration {
    pub source_cluster_id: i64,
    pub remote_targets: TargetsConfiguration,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct RetryOptions {
    pub retries: Option<i64>,
    pub retry_interval_mins: Option<i64>,
}
