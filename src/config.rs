/// Configuration constants for the backup-and-recovery API
pub mod api {
    /// Protection policies endpoint
    pub const POLICIES: &str = "data-protect/policies";

    /// Recoveries endpoint
    pub const RECOVERIES: &str = "data-protect/recoveries";

    /// Header carrying the tenant id
    pub const TENANT_HEADER: &str = "X-IBM-Tenant-Id";

    /// Header carrying the request initiator type (policies only)
    pub const REQUEST_INITIATOR_HEADER: &str = "requestInitiatorType";

    /// Maximum number of response body characters kept in a diagnostic
    pub const ERROR_BODY_LIMIT: usize = 512;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Total request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
}

/// Configuration constants for endpoint resolution
pub mod endpoint {
    /// Environment variable holding the service endpoint
    pub const ENV_VAR: &str = "BACKUP_RECOVERY_ENDPOINT";

    /// Environment variable holding the tenant id
    pub const TENANT_ENV_VAR: &str = "BACKUP_RECOVERY_TENANT_ID";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Path to the credentials file (relative to HOME)
    pub const FILE_PATH: &str = ".brctl/credentials.json";

    /// Environment variable names for a ready IAM token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["IC_IAM_TOKEN", "IBMCLOUD_IAM_TOKEN"];

    /// Environment variable names for an API key (checked in order)
    pub const API_KEY_ENV_VARS: &[&str] = &["IC_API_KEY", "IBMCLOUD_API_KEY"];

    /// Environment variable overriding the IAM endpoint
    pub const IAM_ENDPOINT_ENV_VAR: &str = "IBMCLOUD_IAM_API_ENDPOINT";

    /// Default IAM endpoint
    pub const IAM_ENDPOINT: &str = "https://iam.cloud.ibm.com";

    /// IAM token path
    pub const IAM_TOKEN_PATH: &str = "/identity/token";

    /// Grant type for API key exchange
    pub const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_are_relative() {
        assert!(!api::POLICIES.starts_with('/'));
        assert!(!api::RECOVERIES.starts_with('/'));
    }

    #[test]
    fn test_credentials_env_vars() {
        assert_eq!(
            credentials::TOKEN_ENV_VARS,
            &["IC_IAM_TOKEN", "IBMCLOUD_IAM_TOKEN"]
        );
        assert_eq!(
            credentials::API_KEY_ENV_VARS,
            &["IC_API_KEY", "IBMCLOUD_API_KEY"]
        );
    }

    #[test]
    fn test_iam_endpoint_is_https() {
        assert!(credentials::IAM_ENDPOINT.starts_with("https://"));
        assert!(credentials::IAM_TOKEN_PATH.starts_with('/'));
    }
}
