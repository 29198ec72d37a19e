use std::future::Future;

use anyhow::Result;

use uprofile_api::model::user_profile::UserProfile;
use uprofile_api::API;

/// The network collaborator behind a fetch. Implementations own the whole
/// request shape; the operation itself takes no parameters.
pub trait ProfileSource: Send + Sync + 'static {
    fn get_user_profile(&self) -> impl Future<Output = Result<UserProfile>> + Send;
}

/// `ProfileSource` backed by the remote profile API.
pub struct RemoteProfile {
    api: API,
    user_id: String,
}

impl RemoteProfile {
    pub fn new(api: API, user_id: String) -> Self {
        Self { api, user_id }
    }
}

impl ProfileSource for RemoteProfile {
    fn get_user_profile(&self) -> impl Future<Output = Result<UserProfile>> + Send {
        self.api.get_user_profile(&self.user_id)
    }
}
