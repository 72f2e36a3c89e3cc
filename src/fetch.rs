//! Byte-source resolution: generic HTTP fetch, with recognition of
//! S3-style virtual-hosted URLs.
//!
//! The contract with the imaging core is small: given a URI, return bytes
//! that decode as an image. Classification only affects reporting — both
//! source kinds are fetched with a plain GET, since bucket objects served
//! this way are public HTTP resources (storage authentication is out of
//! scope).

use crate::config::FetchConfig;
use crate::error::CoverError;
use std::time::Duration;
use ureq::Agent;

/// Where the source bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// An S3 virtual-hosted URL: `{bucket}.s3.{region}.amazonaws.com`.
    ObjectStorage { bucket: String, region: String },
    /// Anything else reachable over HTTP.
    Generic,
}

/// Classify a source URL by its hostname.
///
/// Object storage is recognized when the hostname has exactly five
/// dot-separated segments and segments 2/4/5 are `s3`/`amazonaws`/`com`;
/// the bucket is segment 1 and the region segment 3.
pub fn classify_source(url: &str) -> SourceKind {
    let host = host_of(url);
    let segments: Vec<&str> = host.split('.').collect();

    if segments.len() == 5
        && segments[1] == "s3"
        && segments[3] == "amazonaws"
        && segments[4] == "com"
    {
        SourceKind::ObjectStorage {
            bucket: segments[0].to_string(),
            region: segments[2].to_string(),
        }
    } else {
        SourceKind::Generic
    }
}

/// Extract the hostname of a URL: scheme and path stripped, then any
/// userinfo and port.
fn host_of(url: &str) -> &str {
    let after_scheme = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    let authority = after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(after_scheme);
    let host = match authority.rfind('@') {
        Some(idx) => &authority[idx + 1..],
        None => authority,
    };
    host.split(':').next().unwrap_or(host)
}

/// Build the HTTP agent used for all fetches.
pub fn build_agent(config: &FetchConfig) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
        .user_agent(config.user_agent.as_str())
        .build()
        .new_agent()
}

/// GET the source bytes. Any transport error or non-success status maps to
/// [`FetchFailure`](CoverError::FetchFailure); no retries.
pub fn fetch(agent: &Agent, url: &str) -> Result<Vec<u8>, CoverError> {
    let mut response = agent
        .get(url)
        .call()
        .map_err(|e| CoverError::FetchFailure {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    response
        .body_mut()
        .read_to_vec()
        .map_err(|e| CoverError::FetchFailure {
            url: url.to_string(),
            message: format!("reading body: {e}"),
        })
}
