use anyhow::{anyhow, Result};

use uprofile_api::reqwest::Url;

pub struct FetchTarget {
    pub base_url: String,
    pub user_id: String,
}

/// Splits a profile page url (https://<host>/user/<user_id>) into the API
/// base url and the user id.
pub fn extract_info(url: &str) -> Result<FetchTarget> {
    let url = Url::parse(url)?;
    let host = url
        .host_str()
        .ok_or_else(|| anyhow!("error: please provide an url with base"))?;
    let mut base_url = format!("{}://{}", url.scheme(), host);
    if let Some(port) = url.port() {
        base_url.push_str(&format!(":{port}"));
    }

    let mut segments = url
        .path_segments()
        .ok_or_else(|| anyhow!("error: please provide an url with base"))?;
    if segments.next() != Some("user") {
        anyhow::bail!("wrong url: https://<host>/user/<user_id>");
    }
    let user_id: String = match segments.next() {
        Some(id) if !id.is_empty() => id.into(),
        _ => return Err(anyhow!("user_id not found in url")),
    };
    if segments.next().is_some_and(|rest| !rest.is_empty()) {
        anyhow::bail!("wrong url: https://<host>/user/<user_id>");
    }

    Ok(FetchTarget { base_url, user_id })
}
