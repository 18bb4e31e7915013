//! HTTP access to the Chandra Observation Catalog (OCat) details service.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, trace};
use url::Url;

use crate::config::OcatConfig;
use crate::domain::{QueryParameters, RawResponse};
use crate::error::{OcatError, Result};

const USER_AGENT: &str = concat!("qocat/", env!("CARGO_PKG_VERSION"));
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const STATUS_OK: u16 = 200;

pub struct OcatClient {
    client: Client,
    endpoint: Url,
}

impl OcatClient {
    pub fn new(config: &OcatConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| OcatError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the tab-delimited details of one observation from the configured endpoint.
    pub fn query_obsid(&self, obsid: u64) -> Result<RawResponse> {
        self.fetch(&self.endpoint, &QueryParameters::for_obsid(obsid))
    }

    /// POST `params` as a form to `endpoint` and return the full body.
    ///
    /// An empty body fails with `EmptyResponse` before the status is looked at;
    /// any status other than 200 then fails with `RequestFailed`, keeping the
    /// body since the service explains errors there.
    pub fn fetch(&self, endpoint: &Url, params: &QueryParameters) -> Result<RawResponse> {
        let form = params.encode();
        debug!(endpoint = %endpoint, params = %form, "querying resource");

        let transport = |source| OcatError::Transport {
            endpoint: endpoint.to_string(),
            source,
        };

        let resp = self
            .client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form)
            .send()
            .map_err(transport)?;

        let status = resp.status().as_u16();
        let body = resp.text().map_err(transport)?;
        debug!(status, bytes = body.len(), "response received");
        trace!(%body, "response body");

        check_response(endpoint.as_str(), status, body)
    }
}

/// Apply the empty-body and status checks to a completed exchange.
pub fn check_response(endpoint: &str, status: u16, body: String) -> Result<RawResponse> {
    if body.is_empty() {
        return Err(OcatError::empty_response(endpoint));
    }
    if status != STATUS_OK {
        return Err(OcatError::request_failed(status, body));
    }
    Ok(RawResponse { status, body })
}
