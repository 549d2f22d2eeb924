use std::future::Future;

use super::Notice;
use crate::error::Result;
use crate::view::ViewState;

/// One admin screen's open form: the draft being edited and, for edits of
/// an existing record, its id.
#[derive(Debug, Clone, PartialEq)]
pub struct Editor<D> {
    pub draft: D,
    pub editing_id: Option<String>,
}

/// The state every admin manager screen repeats: a listing, an optional
/// open form, a delete awaiting confirmation, and the latest notice.
///
/// The manager owns no I/O. Callers hand each operation's future to
/// [`refresh`], [`save`], or [`confirm_delete`], and the manager folds the
/// outcome into screen state: a failed save keeps the form populated and
/// raises a blocking error notice; a delete only runs once confirmed.
///
/// [`refresh`]: CollectionManager::refresh
/// [`save`]: CollectionManager::save
/// [`confirm_delete`]: CollectionManager::confirm_delete
pub struct CollectionManager<T, D> {
    list: ViewState<Vec<T>>,
    editor: Option<Editor<D>>,
    pending_delete: Option<String>,
    notice: Option<Notice>,
}

impl<T, D> CollectionManager<T, D>
where
    T: Clone,
    D: Default,
{
    pub fn new() -> Self {
        Self {
            list: ViewState::Idle,
            editor: None,
            pending_delete: None,
            notice: None,
        }
    }

    pub fn list(&self) -> &ViewState<Vec<T>> {
        &self.list
    }

    /// Reloads the listing through the given fetch.
    pub async fn refresh<F>(&mut self, fetch: F)
    where
        F: Future<Output = Result<Vec<T>>>,
    {
        self.list = ViewState::Loading;
        match fetch.await {
            Ok(items) => {
                self.list = ViewState::Ready(items);
            }
            Err(error) => {
                tracing::error!(%error, "admin listing failed");
                self.list = ViewState::Error(error.to_string());
            }
        }
    }

    /// Opens the form on a fresh default draft.
    pub fn begin_create(&mut self) {
        self.editor = Some(Editor {
            draft: D::default(),
            editing_id: None,
        });
    }

    /// Opens the form on an existing record's draft.
    pub fn begin_edit(&mut self, id: impl Into<String>, draft: D) {
        self.editor = Some(Editor {
            draft,
            editing_id: Some(id.into()),
        });
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    pub fn editor(&self) -> Option<&Editor<D>> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut Editor<D>> {
        self.editor.as_mut()
    }

    /// Id of the record the open form is editing, `None` for a create.
    pub fn editing_id(&self) -> Option<String> {
        self.editor.as_ref().and_then(|e| e.editing_id.clone())
    }

    /// Folds a save outcome into the screen. Success closes the form and
    /// raises a success notice; failure keeps the draft as typed and
    /// raises a blocking error notice, so a rejected submission is retried
    /// rather than retyped. Returns whether the save went through.
    pub async fn save<F, R>(&mut self, op: F) -> bool
    where
        F: Future<Output = Result<R>>,
    {
        match op.await {
            Ok(_) => {
                self.editor = None;
                self.notice = Some(Notice::success("Saved successfully."));
                true
            }
            Err(error) => {
                tracing::error!(%error, "save failed");
                self.notice = Some(Notice::error(format!("Save failed: {}", error)));
                false
            }
        }
    }

    /// Marks a record for deletion. Nothing is removed until
    /// [`confirm_delete`](Self::confirm_delete) runs.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Runs the confirmed delete. A no-op returning `false` when nothing is
    /// pending; otherwise the pending id is consumed whatever the outcome,
    /// and a failure raises a blocking notice.
    pub async fn confirm_delete<F, Fut>(&mut self, delete: F) -> bool
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };

        match delete(id).await {
            Ok(()) => {
                self.notice = Some(Notice::success("Deleted successfully."));
                true
            }
            Err(error) => {
                tracing::error!(%error, "delete failed");
                self.notice = Some(Notice::error(format!("Delete failed: {}", error)));
                false
            }
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl<T, D> Default for CollectionManager<T, D>
where
    T: Clone,
    D: Default,
{
    fn default() -> Self {
        Self::new()
    }
}
