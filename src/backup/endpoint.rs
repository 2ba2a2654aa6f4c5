//! Service endpoint resolution from multiple sources

use log::debug;
use std::path::Path;

use super::credentials::{default_credentials_path, CredentialsFile};
use crate::config::{credentials, endpoint as endpoint_config};
use crate::error::{BrError, Result};

/// Endpoint resolution with fallback logic
pub struct EndpointResolver;

impl EndpointResolver {
    /// Resolve the endpoint from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (BACKUP_RECOVERY_ENDPOINT)
    /// 3. Credentials file:
    ///    - If 1 endpoint: use it
    ///    - Otherwise: error listing what was found
    pub fn resolve(cli_endpoint: Option<&str>) -> Result<String> {
        // 1. CLI argument takes precedence
        if let Some(endpoint) = cli_endpoint {
            debug!("Using endpoint from CLI argument: {}", endpoint);
            return Ok(endpoint.to_string());
        }

        // 2. Environment variable
        if let Ok(endpoint) = std::env::var(endpoint_config::ENV_VAR) {
            debug!(
                "Using endpoint from {} environment variable: {}",
                endpoint_config::ENV_VAR,
                endpoint
            );
            return Ok(endpoint);
        }

        // 3. Credentials file
        debug!(
            "No endpoint in CLI or {}, trying credentials file",
            endpoint_config::ENV_VAR
        );
        match default_credentials_path() {
            Some(path) => Self::resolve_from_credentials_file(&path),
            None => Err(BrError::EndpointNotFound(Self::endpoint_not_found_message(
                None, None,
            ))),
        }
    }

    /// Pick the single endpoint listed in a credentials file
    pub fn resolve_from_credentials_file(credentials_path: &Path) -> Result<String> {
        let creds = CredentialsFile::load(credentials_path)?.ok_or_else(|| {
            BrError::EndpointNotFound(Self::endpoint_not_found_message(None, None))
        })?;

        let mut endpoints: Vec<String> = creds.credentials.into_keys().collect();
        endpoints.sort();

        if endpoints.len() == 1 {
            let endpoint = endpoints.remove(0);
            debug!(
                "Using single endpoint from credentials file {}: {}",
                credentials_path.display(),
                endpoint
            );
            return Ok(endpoint);
        }

        Err(BrError::EndpointNotFound(Self::endpoint_not_found_message(
            Some(credentials_path),
            Some(&endpoints),
        )))
    }

    /// Generate helpful error message when the endpoint is not found
    fn endpoint_not_found_message(
        credentials_path: Option<&Path>,
        available: Option<&[String]>,
    ) -> String {
        let creds_info = match (credentials_path, available) {
            (Some(p), Some(endpoints)) if !endpoints.is_empty() => format!(
                "\n   Credentials file: {} ({} endpoints found)\n   Available endpoints: {}",
                p.display(),
                endpoints.len(),
                endpoints.join(", ")
            ),
            (Some(p), _) => {
                format!("\n   Credentials file: {} (no endpoints found)", p.display())
            }
            (None, _) => "\n   Credentials file: not found".to_string(),
        };

        format!(
            "No backup-and-recovery endpoint specified. Please provide one using one of:\n\
             \n\
             1. CLI argument:      brctl --endpoint <URL>\n\
             2. Environment var:   export {}=<URL>\n\
             3. Credentials file:  ~/{} with a single entry\n\
             \n\
             Checked:{}\n",
            endpoint_config::ENV_VAR,
            credentials::FILE_PATH,
            creds_info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn credentials_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cli_endpoint_takes_precedence() {
        let result = EndpointResolver::resolve(Some("https://br.example.com"));
        assert_eq!(result.unwrap(), "https://br.example.com");
    }

    #[test]
    fn test_single_endpoint_from_file() {
        let file = credentials_file(r#"{"credentials": {"br.example.com": {"token": "t"}}}"#);
        let endpoint = EndpointResolver::resolve_from_credentials_file(file.path()).unwrap();
        assert_eq!(endpoint, "br.example.com");
    }

    #[test]
    fn test_multiple_endpoints_is_error() {
        let file = credentials_file(
            r#"{"credentials": {"b.example.com": {"token": "t"}, "a.example.com": {"token": "t"}}}"#,
        );
        let err = EndpointResolver::resolve_from_credentials_file(file.path()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("2 endpoints found"));
        assert!(msg.contains("a.example.com, b.example.com"));
    }

    #[test]
    fn test_empty_file_is_error() {
        let file = credentials_file(r#"{"credentials": {}}"#);
        let err = EndpointResolver::resolve_from_credentials_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("no endpoints found"));
    }

    #[test]
    fn test_endpoint_not_found_message_format() {
        let msg = EndpointResolver::endpoint_not_found_message(None, None);
        assert!(msg.contains("brctl --endpoint"));
        assert!(msg.contains(endpoint_config::ENV_VAR));
        assert!(msg.contains("not found"));
    }
}
