//! Protection policy API operations

use log::debug;

use crate::backup::BackupClient;
use crate::config::api;
use crate::datasource::ResourceData;
use crate::error::Result;

use super::models::{ProtectionPoliciesResponse, ProtectionPolicy};

/// Operation name used in diagnostics
pub const OPERATION: &str = "GetProtectionPolicies";

/// Filters for listing protection policies
///
/// A field is `Some` only when the caller set it; unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetProtectionPoliciesOptions {
    pub request_initiator_type: Option<String>,
    pub ids: Option<Vec<String>>,
    pub policy_names: Option<Vec<String>>,
    pub tenant_ids: Option<Vec<String>>,
    pub include_tenants: Option<bool>,
    pub types: Option<Vec<String>>,
    pub exclude_linked_policies: Option<bool>,
    pub include_replicated_policies: Option<bool>,
    pub include_stats: Option<bool>,
}

impl GetProtectionPoliciesOptions {
    /// Build options from the explicitly set arguments
    pub fn from_resource_data(data: &ResourceData) -> Self {
        Self {
            request_initiator_type: data.get_string("request_initiator_type"),
            ids: data.get_string_list("ids"),
            policy_names: data.get_string_list("policy_names"),
            tenant_ids: data.get_string_list("tenant_ids"),
            include_tenants: data.get_bool("include_tenants"),
            types: data.get_string_list("types"),
            exclude_linked_policies: data.get_bool("exclude_linked_policies"),
            include_replicated_policies: data.get_bool("include_replicated_policies"),
            include_stats: data.get_bool("include_stats"),
        }
    }

    /// Query parameters for the set filters, in declaration order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(ids) = &self.ids {
            query.push(("ids", ids.join(",")));
        }
        if let Some(names) = &self.policy_names {
            query.push(("policyNames", names.join(",")));
        }
        if let Some(tenant_ids) = &self.tenant_ids {
            query.push(("tenantIds", tenant_ids.join(",")));
        }
        if let Some(include) = self.include_tenants {
            query.push(("includeTenants", include.to_string()));
        }
        if let Some(types) = &self.types {
            query.push(("types", types.join(",")));
        }
        if let Some(exclude) = self.exclude_linked_policies {
            query.push(("excludeLinkedPolicies", exclude.to_string()));
        }
        if let Some(include) = self.include_replicated_policies {
            query.push(("includeReplicatedPolicies", include.to_string()));
        }
        if let Some(include) = self.include_stats {
            query.push(("includeStats", include.to_string()));
        }
        query
    }

    /// Per-request headers for the set filters
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        self.request_initiator_type
            .iter()
            .map(|value| (api::REQUEST_INITIATOR_HEADER, value.clone()))
            .collect()
    }
}

impl BackupClient {
    /// List protection policies matching the given filters
    pub async fn get_protection_policies(
        &self,
        options: &GetProtectionPoliciesOptions,
    ) -> Result<Vec<ProtectionPolicy>> {
        debug!("Fetching protection policies with {:?}", options);

        self.list::<ProtectionPolicy, ProtectionPoliciesResponse>(
            OPERATION,
            api::POLICIES,
            &options.query_pairs(),
            &options.headers(),
        )
        .await
    }
}
