//! Check capability: is the scale set backed by a custom image?
//!
//! The controller only depends on the [`ImageTypeCheck`] trait and does not
//! know how the answer is produced. Production uses [`HttpCheck`]; tests
//! inject fakes.

mod http;

pub use http::HttpCheck;

use async_trait::async_trait;
use url::Url;

/// Query parameter names of the check endpoint.
pub const PARAM_CREDENTIALS_ID: &str = "azureCredentialsId";
pub const PARAM_RESOURCE_GROUP: &str = "resourceGroup";
pub const PARAM_NAME: &str = "name";

/// The (credentials, resource group, name) triple a check is issued for.
/// All three are required; the controller never builds a partial query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckQuery {
    pub credentials_id: String,
    pub resource_group: String,
    pub name: String,
}

impl CheckQuery {
    /// The triple as named query pairs, in wire order.
    pub fn as_pairs(&self) -> [(&'static str, &str); 3] {
        [
            (PARAM_CREDENTIALS_ID, self.credentials_id.as_str()),
            (PARAM_RESOURCE_GROUP, self.resource_group.as_str()),
            (PARAM_NAME, self.name.as_str()),
        ]
    }
}

/// Async capability answering the image-type question for one scale set.
///
/// Returns the raw response body; the endpoint answers the literal string
/// "true" when the scale set exists and its storage profile's image
/// reference carries a non-blank id, and "false" otherwise.
#[async_trait]
pub trait ImageTypeCheck: Send + Sync {
    async fn is_custom_image(&self, endpoint: &Url, query: &CheckQuery) -> anyhow::Result<String>;
}

/// Error produced by the HTTP check implementation.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Curl(#[from] curl::Error),
    #[error("check endpoint returned HTTP {0}")]
    Http(u32),
    #[error("check response body was not valid UTF-8")]
    Body(#[from] std::string::FromUtf8Error),
}
