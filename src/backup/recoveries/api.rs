//! Recovery API operations

use log::debug;

use crate::backup::BackupClient;
use crate::config::api;
use crate::datasource::ResourceData;
use crate::error::Result;

use super::models::{RecoveriesResponse, Recovery};

/// Operation name used in diagnostics
pub const OPERATION: &str = "GetRecoveries";

/// Filters for listing recoveries
///
/// A field is `Some` only when the caller set it; unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetRecoveriesOptions {
    pub ids: Option<Vec<String>>,
    pub return_only_child_recoveries: Option<bool>,
    pub tenant_ids: Option<Vec<String>>,
    pub include_tenants: Option<bool>,
    pub start_time_usecs: Option<i64>,
    pub end_time_usecs: Option<i64>,
    pub storage_domain_id: Option<i64>,
    pub snapshot_target_type: Option<Vec<String>>,
    pub archival_target_type: Option<Vec<String>>,
    pub snapshot_environments: Option<Vec<String>>,
    pub status: Option<Vec<String>>,
    pub recovery_actions: Option<Vec<String>>,
}

impl GetRecoveriesOptions {
    /// Build options from the explicitly set arguments
    pub fn from_resource_data(data: &ResourceData) -> Self {
        Self {
            ids: data.get_string_list("ids"),
            return_only_child_recoveries: data.get_bool("return_only_child_recoveries"),
            tenant_ids: data.get_string_list("tenant_ids"),
            include_tenants: data.get_bool("include_tenants"),
            start_time_usecs: data.get_int("start_time_usecs"),
            end_time_usecs: data.get_int("end_time_usecs"),
            storage_domain_id: data.get_int("storage_domain_id"),
            snapshot_target_type: data.get_string_list("snapshot_target_type"),
            archival_target_type: data.get_string_list("archival_target_type"),
            snapshot_environments: data.get_string_list("snapshot_environments"),
            status: data.get_string_list("status"),
            recovery_actions: data.get_string_list("recovery_actions"),
        }
    }

    /// Query parameters for the set filters, in declaration order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let lists = [
            ("snapshotTargetType", &self.snapshot_target_type),
            ("archivalTargetType", &self.archival_target_type),
            ("snapshotEnvironments", &self.snapshot_environments),
            ("status", &self.status),
            ("recoveryActions", &self.recovery_actions),
        ];

        let mut query = Vec::new();
        if let Some(ids) = &self.ids {
            query.push(("ids", ids.join(",")));
        }
        if let Some(only_children) = self.return_only_child_recoveries {
            query.push(("returnOnlyChildRecoveries", only_children.to_string()));
        }
        if let Some(tenant_ids) = &self.tenant_ids {
            query.push(("tenantIds", tenant_ids.join(",")));
        }
        if let Some(include) = self.include_tenants {
            query.push(("includeTenants", include.to_string()));
        }
        if let Some(start) = self.start_time_usecs {
            query.push(("startTimeUsecs", start.to_string()));
        }
        if let Some(end) = self.end_time_usecs {
            query.push(("endTimeUsecs", end.to_string()));
        }
        if let Some(domain) = self.storage_domain_id {
            query.push(("storageDomainId", domain.to_string()));
        }
        for (key, values) in lists {
            if let Some(values) = values {
                query.push((key, values.join(",")));
            }
        }
        query
    }
}

impl BackupClient {
    /// List recoveries matching the given filters
    pub async fn get_recoveries(&self, options: &GetRecoveriesOptions) -> Result<Vec<Recovery>> {
        debug!("Fetching recoveries with {:?}", options);

        self.list::<Recovery, RecoveriesResponse>(
            OPERATION,
            api::RECOVERIES,
            &options.query_pairs(),
            &[],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::schema;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn data(config: serde_json::Value) -> ResourceData {
        ResourceData::from_config(schema::recoveries(), config.as_object().cloned().unwrap())
            .unwrap()
    }

    #[test]
    fn test_options_empty_when_nothing_set() {
        let options = GetRecoveriesOptions::from_resource_data(&data(json!({})));
        assert_eq!(options, GetRecoveriesOptions::default());
        assert!(options.query_pairs().is_empty());
    }

    #[test]
    fn test_options_pass_through() {
        let options = GetRecoveriesOptions::from_resource_data(&data(json!({
            "start_time_usecs": 0,
            "end_time_usecs": 1700000000000000i64,
            "status": ["Running", "Failed"],
            "return_only_child_recoveries": false
        })));

        assert_eq!(options.start_time_usecs, Some(0));
        assert_eq!(options.end_time_usecs, Some(1700000000000000));
        assert_eq!(
            options.status,
            Some(vec!["Running".to_string(), "Failed".to_string()])
        );
        assert_eq!(options.return_only_child_recoveries, Some(false));
        assert!(options.ids.is_none());
        assert!(options.storage_domain_id.is_none());

        assert_eq!(
            options.query_pairs(),
            vec![
                ("returnOnlyChildRecoveries", "false".to_string()),
                ("startTimeUsecs", "0".to_string()),
                ("endTimeUsecs", "1700000000000000".to_string()),
                ("status", "Running,Failed".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_recoveries() {
        let mock_server = MockServer::start().await;
        let mut client = BackupClient::test_client(&mock_server.uri());
        client.set_tenant_id(Some("tenant-a/".to_string()));

        Mock::given(method("GET"))
            .and(path("/data-protect/recoveries"))
            .and(query_param("snapshotEnvironments", "kPhysical,kOracle"))
            .and(query_param("storageDomainId", "8"))
            .and(header("X-IBM-Tenant-Id", "tenant-a/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "recoveries": [
                    {"id": "r-1", "status": "Succeeded"},
                    {"id": "r-2", "status": "Running"}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = GetRecoveriesOptions {
            snapshot_environments: Some(vec!["kPhysical".to_string(), "kOracle".to_string()]),
            storage_domain_id: Some(8),
            ..Default::default()
        };

        let recoveries = client.get_recoveries(&options).await.unwrap();
        let ids: Vec<_> = recoveries
            .iter()
            .map(|r| r.id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["r-1", "r-2"]);
    }

    #[tokio::test]
    async fn test_get_recoveries_transport_error() {
        let client = BackupClient::test_client("http://127.0.0.1:9");
        let err = client
            .get_recoveries(&GetRecoveriesOptions::default())
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("GetRecoveries failed"));
    }
}
