use anyhow::Result;
use reqwest::Url;

use crate::model::user_profile::UserProfile;

#[derive(Clone)]
pub struct API {
    client: reqwest::Client,
    base_url: Url,
}

impl API {
    pub fn try_with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        let base_url = Url::parse(base_url)?;
        Ok(API { client, base_url })
    }

    pub async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        let url = self
            .base_url
            .join(&format!("api/v1/user/{}/profile", user_id))?;
        let resp = self
            .client
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(anyhow::anyhow!(
                "GET {} failed with status {}",
                url,
                resp.status()
            ));
        }
        let profile: UserProfile = resp.json().await?;
        Ok(profile)
    }
}
