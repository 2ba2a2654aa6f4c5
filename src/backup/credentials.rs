//! Bearer token resolution from multiple sources

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{api, credentials};
use crate::error::{BrError, Result};

/// Credentials file structure (shared with EndpointResolver)
#[derive(Deserialize, Debug)]
pub(crate) struct CredentialsFile {
    pub(crate) credentials: HashMap<String, CredentialEntry>,
}

/// Single credential entry, keyed by endpoint
#[derive(Deserialize, Debug, Default)]
pub(crate) struct CredentialEntry {
    #[serde(default)]
    pub(crate) token: Option<String>,
    #[serde(default)]
    pub(crate) api_key: Option<String>,
}

impl CredentialsFile {
    /// Read and parse the credentials file; `Ok(None)` if it does not exist
    pub(crate) fn load(path: &Path) -> Result<Option<Self>> {
        debug!("Looking for credentials file at: {}", path.display());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Ok(None),
        };

        serde_json::from_str(&content).map(Some).map_err(|e| {
            BrError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Default location of the credentials file (~/.brctl/credentials.json)
pub(crate) fn default_credentials_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
}

/// IAM token endpoint response
#[derive(Deserialize, Debug)]
struct IamTokenResponse {
    access_token: String,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    endpoint: String,
    credentials_path: Option<PathBuf>,
    iam_endpoint: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given service endpoint
    pub fn new(endpoint: &str) -> Self {
        let iam_endpoint = std::env::var(credentials::IAM_ENDPOINT_ENV_VAR)
            .unwrap_or_else(|_| credentials::IAM_ENDPOINT.to_string());

        Self {
            endpoint: endpoint.to_string(),
            credentials_path: default_credentials_path(),
            iam_endpoint,
        }
    }

    /// Use a different credentials file
    pub fn with_credentials_path(mut self, path: PathBuf) -> Self {
        self.credentials_path = Some(path);
        self
    }

    /// Use a different IAM endpoint
    pub fn with_iam_endpoint(mut self, iam_endpoint: &str) -> Self {
        self.iam_endpoint = iam_endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI token (if provided)
    /// 2. Token environment variables (IC_IAM_TOKEN, IBMCLOUD_IAM_TOKEN - in order)
    /// 3. API key from CLI or environment (IC_API_KEY, IBMCLOUD_API_KEY),
    ///    exchanged for a token at IAM
    /// 4. Credentials file entry for the endpoint (token, or api_key exchanged at IAM)
    pub async fn resolve(&self, cli_token: Option<&str>, cli_api_key: Option<&str>) -> Result<String> {
        // 1. CLI argument takes precedence
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        // 2. Token environment variables
        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                debug!("Using token from {} environment variable", env_var);
                return Ok(token);
            }
        }

        // 3. API key from CLI or environment
        if let Some(api_key) = cli_api_key {
            debug!("Exchanging API key from CLI argument");
            return self.exchange_api_key(api_key).await;
        }
        for env_var in credentials::API_KEY_ENV_VARS {
            if let Ok(api_key) = std::env::var(env_var) {
                debug!("Exchanging API key from {} environment variable", env_var);
                return self.exchange_api_key(&api_key).await;
            }
        }

        // 4. Credentials file
        debug!(
            "No token in environment variables {:?} or {:?}, trying credentials file",
            credentials::TOKEN_ENV_VARS,
            credentials::API_KEY_ENV_VARS
        );
        self.resolve_from_credentials_file().await
    }

    async fn resolve_from_credentials_file(&self) -> Result<String> {
        let credentials_path = self
            .credentials_path
            .as_deref()
            .ok_or_else(|| BrError::TokenNotFound(self.token_not_found_message(None)))?;

        let entry = CredentialsFile::load(credentials_path)?
            .and_then(|mut file| file.credentials.remove(&self.endpoint))
            .ok_or_else(|| {
                BrError::TokenNotFound(self.token_not_found_message(Some(credentials_path)))
            })?;

        if let Some(token) = entry.token {
            debug!(
                "Using token from credentials file {} for endpoint: {}",
                credentials_path.display(),
                self.endpoint
            );
            return Ok(token);
        }

        if let Some(api_key) = entry.api_key {
            debug!(
                "Exchanging API key from credentials file {} for endpoint: {}",
                credentials_path.display(),
                self.endpoint
            );
            return self.exchange_api_key(&api_key).await;
        }

        Err(BrError::TokenNotFound(
            self.token_not_found_message(Some(credentials_path)),
        ))
    }

    /// Exchange an API key for an IAM access token
    pub async fn exchange_api_key(&self, api_key: &str) -> Result<String> {
        let url = format!(
            "{}{}",
            self.iam_endpoint.trim_end_matches('/'),
            credentials::IAM_TOKEN_PATH
        );
        debug!("Requesting IAM token from: {}", url);

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        let body = format!(
            "grant_type={}&apikey={}",
            urlencoding::encode(credentials::IAM_GRANT_TYPE),
            urlencoding::encode(api_key)
        );

        let response = client
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BrError::Auth(format!(
                "IAM token request returned status {}: {}",
                status.as_u16(),
                body.chars().take(api::ERROR_BODY_LIMIT).collect::<String>()
            )));
        }

        let token: IamTokenResponse = response
            .json()
            .await
            .map_err(|e| BrError::Auth(format!("Could not read IAM token response: {}", e)))?;

        debug!("Obtained IAM access token");
        Ok(token.access_token)
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS
            .iter()
            .chain(credentials::API_KEY_ENV_VARS)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        let creds_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No IAM token found for endpoint '{}'. Please provide one using one of:\n\
             \n\
             1. CLI argument:      brctl --token <TOKEN>  (or --api-key <KEY>)\n\
             2. Environment var:   export IC_IAM_TOKEN=<TOKEN>  (or IC_API_KEY=<KEY>)\n\
             3. Credentials file:  ~/{} with an entry for '{}'\n\
             \n\
             Checked: env vars [{}]{}",
            self.endpoint,
            credentials::FILE_PATH,
            self.endpoint,
            env_vars,
            creds_info
        )
    }
}
