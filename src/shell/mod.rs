mod state;

pub use state::{PLACEHOLDER, ShellEvent, ViewState};

use crate::{Error, Result, completion::CompletionClient};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

/// Holds the view state for one screen and drives its single fetch.
#[derive(Clone)]
pub struct DisplayShell {
    inner: Arc<Inner>,
}

struct Inner {
    id: Uuid,
    state: watch::Sender<ViewState>,
    mounted: AtomicBool,
    cancel: CancellationToken,
}

impl DisplayShell {
    pub fn new() -> Self {
        Self::with_cancellation(CancellationToken::new())
    }

    /// The shell is torn down when `cancel` fires.
    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        Self {
            inner: Arc::new(Inner {
                id: Uuid::new_v4(),
                state,
                mounted: AtomicBool::new(false),
                cancel,
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn view(&self) -> ViewState {
        self.inner.state.borrow().clone()
    }

    pub fn render(&self) -> String {
        self.inner.state.borrow().render()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.inner.state.subscribe()
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }

    pub fn transition(&self, event: ShellEvent) -> Result<()> {
        let requested = event.name();
        let mut outcome = Ok(());

        self.inner.state.send_if_modified(|state| match state.apply(event) {
            Ok(next) => {
                info!(
                    shell = %self.inner.id,
                    "Shell state transition: {} -> {}",
                    state.name(),
                    next.name()
                );
                *state = next;
                true
            }
            Err(e) => {
                warn!(
                    shell = %self.inner.id,
                    "Rejected shell event {} in state {}",
                    requested,
                    state.name()
                );
                outcome = Err(e);
                false
            }
        });

        outcome
    }

    /// Starts the one fetch this shell will ever make. A second call fails
    /// with [`Error::AlreadyMounted`].
    pub fn mount(&self, client: CompletionClient) -> Result<JoinHandle<()>> {
        if self.inner.mounted.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyMounted);
        }

        let shell = self.clone();
        let cancel = self.inner.cancel.clone();
        let span = info_span!("shell_fetch", shell = %self.inner.id);

        debug!(shell = %self.inner.id, "Mounting display shell");

        let handle = tokio::spawn(
            async move {
                let outcome = tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!("Shell torn down while fetch was in flight");
                        return;
                    }
                    result = client.fetch() => result,
                };

                if cancel.is_cancelled() {
                    debug!("Shell torn down before commit, dropping fetch result");
                    return;
                }

                let event = match outcome {
                    Ok(text) => ShellEvent::Resolved(text),
                    Err(e) => {
                        warn!("Fetch failed: {}", e);
                        ShellEvent::Rejected(e.to_string())
                    }
                };

                if let Err(e) = shell.transition(event) {
                    warn!("Could not commit fetch result: {}", e);
                }
            }
            .instrument(span),
        );

        Ok(handle)
    }

    pub fn teardown(&self) {
        debug!(shell = %self.inner.id, "Tearing down display shell");
        self.inner.cancel.cancel();
    }

    /// Waits for `Loaded` or `Failed`. Never resolves for a shell torn down
    /// mid-fetch, since that shell stays `Loading`.
    pub async fn settled(&self) -> Result<ViewState> {
        let mut rx = self.subscribe();
        let state = rx
            .wait_for(ViewState::is_settled)
            .await
            .map_err(|e| Error::shell(format!("View state channel closed: {}", e)))?;
        Ok(state.clone())
    }
}

impl Default for DisplayShell {
    fn default() -> Self {
        Self::new()
    }
}
