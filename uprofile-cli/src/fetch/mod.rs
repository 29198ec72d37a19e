use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::Poll;

use anyhow::Result;
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use uprofile_api::model::user_profile::UserProfile;
use uprofile_api::API;

pub mod ctx;
mod source;
pub use source::{ProfileSource, RemoteProfile};

/// Runs profile fetches on an I/O pool so the calling context never blocks.
pub struct Fetcher<S> {
    source: Arc<S>,
    io: Handle,
}

impl<S: ProfileSource> Fetcher<S> {
    pub fn new(source: S, io: Handle) -> Self {
        Self {
            source: Arc::new(source),
            io,
        }
    }

    /// Runs the collaborator once on the I/O pool and resumes the caller
    /// with its result, untouched.
    pub async fn fetch_user_data(&self) -> Result<UserProfile> {
        let source = Arc::clone(&self.source);
        let task = AbortOnDrop(self.io.spawn(async move { source.get_user_profile().await }));
        task.await?
    }
}

pub async fn fetch_once(ctx: impl ctx::Context<'_>, io: Handle) -> Result<UserProfile> {
    let user_id = ctx.user_id();
    let base_url = ctx.api_base_url();
    debug!("fetching profile of {user_id} from {base_url}");

    let api = API::try_with_base_url(base_url)?;
    let fetcher = Fetcher::new(RemoteProfile::new(api, user_id.to_owned()), io);
    fetcher.fetch_user_data().await
}

/// Aborts the task when dropped, so an abandoned fetch does not keep its
/// request in flight.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Future for AbortOnDrop<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}
