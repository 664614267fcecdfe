//! HTTP implementation of the image-type check.
//!
//! Issues one GET with the query triple against the panel's check endpoint
//! and returns the body verbatim. Uses a curl Easy handle; the transfer runs
//! under `spawn_blocking` so the controller never blocks its caller.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use super::{CheckError, CheckQuery, ImageTypeCheck};
use crate::config::VmssformConfig;

pub struct HttpCheck {
    connect_timeout: Duration,
    request_timeout: Duration,
    user_agent: String,
}

impl HttpCheck {
    pub fn new(cfg: &VmssformConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

#[async_trait]
impl ImageTypeCheck for HttpCheck {
    async fn is_custom_image(&self, endpoint: &Url, query: &CheckQuery) -> Result<String> {
        let url = check_request_url(endpoint, query).to_string();
        tracing::debug!("image-type check GET {}", url);

        let connect_timeout = self.connect_timeout;
        let request_timeout = self.request_timeout;
        let user_agent = self.user_agent.clone();

        let body =
            tokio::task::spawn_blocking(move || {
                fetch_body(&url, connect_timeout, request_timeout, &user_agent)
            })
            .await
            .context("check transfer task failed")??;

        Ok(body)
    }
}

/// Appends the query triple to the endpoint URL, keeping any query the
/// endpoint already carries.
fn check_request_url(endpoint: &Url, query: &CheckQuery) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut().extend_pairs(query.as_pairs());
    url
}

/// Performs the GET and collects the body. Follows redirects; non-2xx is an
/// error. Runs in the current thread.
fn fetch_body(
    url: &str,
    connect_timeout: Duration,
    request_timeout: Duration,
    user_agent: &str,
) -> Result<String, CheckError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.useragent(user_agent)?;
    easy.connect_timeout(connect_timeout)?;
    easy.timeout(request_timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(CheckError::Http(code));
    }

    Ok(String::from_utf8(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> CheckQuery {
        CheckQuery {
            credentials_id: "cred-1".to_string(),
            resource_group: "rg-1".to_string(),
            name: "vmss-1".to_string(),
        }
    }

    #[test]
    fn request_url_carries_the_triple() {
        let endpoint = Url::parse("https://jenkins.example.com/checkCustomImage").unwrap();
        let url = check_request_url(&endpoint, &query());
        assert_eq!(
            url.as_str(),
            "https://jenkins.example.com/checkCustomImage?azureCredentialsId=cred-1&resourceGroup=rg-1&name=vmss-1"
        );
    }

    #[test]
    fn request_url_keeps_existing_endpoint_query() {
        let endpoint = Url::parse("https://jenkins.example.com/check?token=abc").unwrap();
        let url = check_request_url(&endpoint, &query());
        assert_eq!(
            url.as_str(),
            "https://jenkins.example.com/check?token=abc&azureCredentialsId=cred-1&resourceGroup=rg-1&name=vmss-1"
        );
    }

    #[test]
    fn request_url_encodes_values() {
        let endpoint = Url::parse("https://jenkins.example.com/check").unwrap();
        let mut q = query();
        q.name = "my vmss".to_string();
        let url = check_request_url(&endpoint, &q);
        assert!(url.as_str().ends_with("name=my+vmss"));
    }
}
