use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::ViewState;
use crate::error::AppError;

/// Drives one page's fetch lifecycle: idle until the first [`load`], then
/// loading, then ready or error. Subscribers watch the state over a
/// [`watch`] channel and re-render on change.
///
/// Each `load` supersedes any in-flight one. The superseded task is aborted
/// and its generation invalidated, so a slow response can never overwrite a
/// newer state. Dropping the controller invalidates the same way, so a
/// fetch that outlives its page writes nothing.
///
/// [`load`]: ViewController::load
pub struct ViewController<T> {
    state: Arc<watch::Sender<ViewState<T>>>,
    generation: Arc<AtomicU64>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<T> ViewController<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self {
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ViewState<T> {
        self.state.borrow().clone()
    }

    /// Enters `loading` and runs `fetch` on the runtime. `page` only labels
    /// log lines.
    pub fn load<F>(&self, page: &'static str, fetch: F)
    where
        F: Future<Output = Result<T, AppError>> + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(superseded) = self.lock_task().take() {
            superseded.abort();
        }

        self.state.send_replace(ViewState::Loading);

        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.generation);
        let handle = tokio::spawn(async move {
            let settled = match fetch.await {
                Ok(payload) => ViewState::Ready(payload),
                Err(error) => {
                    tracing::error!(page, %error, "page fetch failed");
                    ViewState::Error(error.to_string())
                }
            };

            // The generation check runs under the channel lock; a newer
            // load's `Loading` write always lands after it, so a stale
            // result can never be the last word.
            let mut delivered = false;
            state.send_modify(|slot| {
                if latest.load(Ordering::SeqCst) == generation {
                    *slot = settled;
                    delivered = true;
                }
            });
            if !delivered {
                tracing::debug!(page, "discarded superseded fetch result");
            }
        });

        *self.lock_task() = Some(handle);
    }

    fn lock_task(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.task.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Default for ViewController<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ViewController<T> {
    fn drop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Ok(slot) = self.task.get_mut() {
            if let Some(task) = slot.take() {
                task.abort();
            }
        }
    }
}
