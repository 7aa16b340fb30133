//! Live catalog queries against a running simulator.

use std::time::Duration;

use bpdocs_shared::{
    BlueprintLibrary, BlueprintRecord, BpDocsError, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_TIMEOUT_MS, Result,
};
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::BlueprintProvider;

/// User-Agent string for catalog requests.
const USER_AGENT: &str = concat!("bpdocs/", env!("CARGO_PKG_VERSION"));

/// Catalog path on the simulator's endpoint.
const BLUEPRINTS_PATH: &str = "blueprints";

// ---------------------------------------------------------------------------
// Provider options
// ---------------------------------------------------------------------------

/// Connection settings for [`HttpBlueprintProvider`].
#[derive(Debug, Clone)]
pub struct ProviderOptions {
    pub host: String,
    pub port: u16,
    /// Bound on connecting and on the whole request.
    pub timeout: Duration,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

// ---------------------------------------------------------------------------
// HttpBlueprintProvider
// ---------------------------------------------------------------------------

/// Fetches `GET <base>/blueprints?filter=<pattern>` from the simulator.
#[derive(Debug, Clone)]
pub struct HttpBlueprintProvider {
    client: Client,
    base_url: Url,
}

impl HttpBlueprintProvider {
    /// Provider for `http://<host>:<port>/`.
    pub fn new(opts: &ProviderOptions) -> Result<Self> {
        // IPv6 literals need brackets in a URL authority.
        let raw = if opts.host.contains(':') && !opts.host.starts_with('[') {
            format!("http://[{}]:{}/", opts.host, opts.port)
        } else {
            format!("http://{}:{}/", opts.host, opts.port)
        };
        let base_url = Url::parse(&raw)
            .map_err(|e| BpDocsError::config(format!("invalid simulator address '{raw}': {e}")))?;
        Self::with_base_url(base_url, opts.timeout)
    }

    /// Provider rooted at an arbitrary base URL.
    pub fn with_base_url(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = build_client(timeout)?;
        Ok(Self { client, base_url })
    }

    fn catalog_url(&self, filter: &str) -> Result<Url> {
        let mut url = self.base_url.join(BLUEPRINTS_PATH).map_err(|e| {
            BpDocsError::config(format!("invalid catalog URL under {}: {e}", self.base_url))
        })?;
        url.query_pairs_mut().append_pair("filter", filter);
        Ok(url)
    }

    fn endpoint(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }
}

impl BlueprintProvider for HttpBlueprintProvider {
    fn describe(&self) -> String {
        self.endpoint()
    }

    #[instrument(skip(self), fields(endpoint = %self.base_url))]
    async fn blueprints(&self, filter: &str) -> Result<Vec<BlueprintRecord>> {
        let url = self.catalog_url(filter)?;
        debug!(%url, "requesting blueprint catalog");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BpDocsError::Provider(format!("{url}: HTTP {status}")));
        }

        let library: BlueprintLibrary = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.classify(&e)
            } else {
                BpDocsError::Provider(format!("{url}: malformed catalog response: {e}"))
            }
        })?;

        info!(count = library.blueprints.len(), "blueprint catalog received");
        Ok(library.blueprints)
    }
}

impl HttpBlueprintProvider {
    /// Unreachable or too slow maps to the connection error; anything else is a provider fault.
    fn classify(&self, e: &reqwest::Error) -> BpDocsError {
        if e.is_connect() || e.is_timeout() {
            BpDocsError::connection(self.endpoint(), e.to_string())
        } else {
            BpDocsError::Provider(format!("{}: {e}", self.endpoint()))
        }
    }
}

/// Build a reqwest client bounded by `timeout`.
fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
        .map_err(|e| BpDocsError::config(format!("failed to build HTTP client: {e}")))
}
