//! One-shot member load with a disposal guard.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::model::Member;
use crate::source::MemberSource;
use crate::view::Action;
use crate::view::TableState;

/// How a [`PendingLoad`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Members were written into the table.
    Loaded(usize),
    /// The fetch failed; the table was left empty.
    Failed,
    /// The view was disposed first, or the source reported the fetch as
    /// cancelled; the table was not touched.
    Discarded,
}

/// A member fetch started when the table is mounted.
///
/// The fetch runs on the tokio runtime. Dropping the handle or calling
/// [`dispose`](Self::dispose) cancels it, and a cancelled load never writes
/// to the table.
///
/// # Example
///
/// ```ignore
/// let client = RosterClient::builder().build()?;
/// let mut state = TableState::default();
///
/// let load = PendingLoad::spawn(Arc::new(client));
/// match load.finish(&mut state).await {
///     LoadOutcome::Loaded(n) => println!("{n} members"),
///     LoadOutcome::Failed | LoadOutcome::Discarded => {}
/// }
/// ```
#[derive(Debug)]
pub struct PendingLoad {
    cancel: CancellationToken,
    task: Option<JoinHandle<Result<Vec<Member>, Error>>>,
}

impl PendingLoad {
    /// Starts fetching from `source`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(source: Arc<dyn MemberSource>) -> Self {
        Self::spawn_with_cancel(source, CancellationToken::new())
    }

    /// Starts fetching from `source`, cancelled when `cancel` is.
    pub fn spawn_with_cancel(source: Arc<dyn MemberSource>, cancel: CancellationToken) -> Self {
        log::debug!("[load] fetching members");
        let token = cancel.clone();
        let task = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => Err(Error::Cancelled),
                result = source.fetch_members() => result,
            }
        });

        Self {
            cancel,
            task: Some(task),
        }
    }

    /// Token that disposes of the load when cancelled.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Disposes of the load. Its result will be discarded.
    pub fn dispose(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` if the load was disposed of.
    pub fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Waits for the fetch and applies its result to `state`.
    ///
    /// Failures are logged and leave the collection empty.
    pub async fn finish(mut self, state: &mut TableState) -> LoadOutcome {
        let joined = match self.task.take() {
            Some(task) => task.await,
            None => return LoadOutcome::Discarded,
        };

        if self.cancel.is_cancelled() {
            log::debug!("[load] view disposed, discarding result");
            return LoadOutcome::Discarded;
        }

        let result = match joined {
            Ok(result) => result,
            Err(e) => {
                state.apply(Action::LoadFailed(format!("fetch task failed: {e}")));
                return LoadOutcome::Failed;
            }
        };

        match result {
            Err(e) if e.is_cancelled() => {
                log::debug!("[load] source gave up, discarding result");
                LoadOutcome::Discarded
            }
            Ok(members) => {
                state.apply(Action::Loaded(members));
                LoadOutcome::Loaded(state.members().len())
            }
            Err(e) => {
                state.apply(Action::LoadFailed(e.to_string()));
                LoadOutcome::Failed
            }
        }
    }
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        if self.task.is_some() {
            self.cancel.cancel();
        }
    }
}
