//! Read entry point of the protection policies data source

use log::{debug, info};

use crate::backup::BackupClient;
use crate::datasource::{project_all, synthetic_id, ResourceData};
use crate::error::Result;

use super::api::GetProtectionPoliciesOptions;
use super::models::ProtectionPolicy;

/// Computed attribute holding the projected policies
pub const POLICIES_KEY: &str = "policies";

/// List protection policies and publish them into `data`
///
/// On any failure `data` is left untouched. The typed policies are returned
/// as well for callers that render summaries.
pub async fn read(client: &BackupClient, data: &mut ResourceData) -> Result<Vec<ProtectionPolicy>> {
    let options = GetProtectionPoliciesOptions::from_resource_data(data);

    let policies = client.get_protection_policies(&options).await?;
    let records = project_all(&policies)?;

    debug!("Projected {} protection policies", records.len());
    data.set_id(synthetic_id());
    data.set(POLICIES_KEY, records)?;
    info!("Read {} protection policies", policies.len());

    Ok(policies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::schema;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_policies(mock_server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/data-protect/policies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_read_minimal_policy() {
        let mock_server = MockServer::start().await;
        mock_policies(
            &mock_server,
            json!({
                "policies": [{
                    "id": "p-1",
                    "name": "Daily",
                    "backupPolicy": {
                        "regular": {"incremental": {"schedule": {"unit": "Days"}}}
                    }
                }]
            }),
        )
        .await;

        let client = BackupClient::test_client(&mock_server.uri());
        let mut data = ResourceData::new(schema::protection_policies());
        read(&client, &mut data).await.unwrap();

        assert!(data.id().is_some());
        let policies = data.get_computed(POLICIES_KEY).unwrap();
        assert_eq!(policies.len(), 1);

        let policy = &policies[0];
        let mut keys: Vec<_> = policy.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["backup_policy", "id", "name"]);

        assert_eq!(
            policy["backup_policy"],
            json!([{
                "regular": [{
                    "incremental": [{
                        "schedule": [{"unit": "Days"}]
                    }]
                }]
            }])
        );
    }

    #[tokio::test]
    async fn test_read_passes_filters() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data-protect/policies"))
            .and(query_param("ids", "a,b"))
            .and(query_param("includeTenants", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"policies": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = BackupClient::test_client(&mock_server.uri());
        let mut data = ResourceData::from_config(
            schema::protection_policies(),
            json!({"ids": ["a", "b"], "include_tenants": false})
                .as_object()
                .cloned()
                .unwrap(),
        )
        .unwrap();

        let policies = read(&client, &mut data).await.unwrap();
        assert!(policies.is_empty());
        assert_eq!(data.get_computed(POLICIES_KEY).unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_read_preserves_order() {
        let mock_server = MockServer::start().await;
        let names = ["zeta", "alpha", "mid"];
        let policies: Vec<_> = names
            .iter()
            .map(|n| json!({"name": n, "backupPolicy": {"regular": {}}}))
            .collect();
        mock_policies(&mock_server, json!({ "policies": policies })).await;

        let client = BackupClient::test_client(&mock_server.uri());
        let mut data = ResourceData::new(schema::protection_policies());
        read(&client, &mut data).await.unwrap();

        let published: Vec<_> = data
            .get_computed(POLICIES_KEY)
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(published, names);
    }

    #[tokio::test]
    async fn test_read_failure_leaves_data_untouched() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data-protect/policies"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&mock_server)
            .await;

        let client = BackupClient::test_client(&mock_server.uri());
        let mut data = ResourceData::new(schema::protection_policies());
        let err = read(&client, &mut data).await.unwrap_err();

        assert!(err.to_string().contains("GetProtectionPolicies"));
        assert!(data.id().is_none());
        assert!(data.get_computed(POLICIES_KEY).is_none());
    }

    #[tokio::test]
    async fn test_read_undecodable_policy_fails_whole_read() {
        let mock_server = MockServer::start().await;
        mock_policies(
            &mock_server,
            json!({
                "policies": [
                    {"name": "ok", "backupPolicy": {"regular": {}}},
                    {"name": "missing backup policy"}
                ]
            }),
        )
        .await;

        let client = BackupClient::test_client(&mock_server.uri());
        let mut data = ResourceData::new(schema::protection_policies());
        assert!(read(&client, &mut data).await.is_err());
        assert!(data.get_computed(POLICIES_KEY).is_none());
    }
}
