//! Generic fetch / edit / save / cancel lifecycle for a remotely stored form.
//!
//! A [`RemoteEditor`] owns one snapshot of a resource. The snapshot starts as the
//! resource's placeholder, is replaced wholesale when a load completes, is rewritten
//! through pure `(&old) -> new` edits while in edit mode, and is either posted
//! wholesale on save or thrown away on cancel.
//!
//! The state lock is never held across an `.await`. Every request races the
//! editor's [`CancellationToken`]; once [`RemoteEditor::close`] has been called a
//! late response is dropped without touching the state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::error::{ApiError, EditorError};
use crate::models::common::{EditMode, Notice};

/// A backend resource that can be edited as a whole
#[async_trait]
pub trait RemoteResource: Send + Sync + 'static {
    type Data: Clone + Send + Sync + 'static;

    /// Short name used in log lines
    fn name(&self) -> &'static str;

    async fn fetch(&self) -> Result<Self::Data, ApiError>;

    async fn save(&self, data: &Self::Data) -> Result<(), ApiError>;

    /// Data shown before the first load and whenever a load fails
    fn placeholder(&self) -> Self::Data;

    /// Warning shown when a load falls back to the placeholder
    fn load_failure_notice(&self, err: &ApiError) -> Notice;

    fn saved_notice(&self) -> Notice;
}

/// What cancelling an edit does with the local snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancelPolicy {
    /// Reload from the backend
    #[default]
    Refetch,
    /// Restore the copy taken when edit mode was entered
    RestoreSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Backend data is now displayed
    Loaded,
    /// Load failed, placeholder is displayed with a warning
    Fallback,
    /// Pre-edit snapshot was put back without a request
    Restored,
    /// Editor was closed before the response arrived
    Abandoned,
}

#[derive(Debug, Clone)]
pub struct EditorState<T> {
    pub data: T,
    pub mode: EditMode,
    pub loading: bool,
    pub saving: bool,
    pub notice: Option<Notice>,
    pub last_saved: Option<DateTime<Utc>>,
    pristine: Option<T>,
}

fn lock_state<T>(state: &Mutex<EditorState<T>>) -> MutexGuard<'_, EditorState<T>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

// Clears the saving flag if a save future is dropped before it completes
struct SavingFlag<'a, T> {
    state: &'a Mutex<EditorState<T>>,
    armed: bool,
}

impl<T> SavingFlag<'_, T> {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl<T> Drop for SavingFlag<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            lock_state(self.state).saving = false;
        }
    }
}

/// Handle to one editable resource; clones share the same state
pub struct RemoteEditor<R: RemoteResource> {
    resource: Arc<R>,
    state: Arc<Mutex<EditorState<R::Data>>>,
    shutdown: CancellationToken,
    cancel_policy: CancelPolicy,
}

impl<R: RemoteResource> Clone for RemoteEditor<R> {
    fn clone(&self) -> Self {
        Self {
            resource: Arc::clone(&self.resource),
            state: Arc::clone(&self.state),
            shutdown: self.shutdown.clone(),
            cancel_policy: self.cancel_policy,
        }
    }
}

impl<R: RemoteResource> RemoteEditor<R> {
    pub fn new(resource: R) -> Self {
        let data = resource.placeholder();
        Self {
            resource: Arc::new(resource),
            state: Arc::new(Mutex::new(EditorState {
                data,
                mode: EditMode::View,
                loading: false,
                saving: false,
                notice: None,
                last_saved: None,
                pristine: None,
            })),
            shutdown: CancellationToken::new(),
            cancel_policy: CancelPolicy::default(),
        }
    }

    pub fn with_cancel_policy(mut self, policy: CancelPolicy) -> Self {
        self.cancel_policy = policy;
        self
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    fn lock(&self) -> MutexGuard<'_, EditorState<R::Data>> {
        lock_state(&*self.state)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> EditorState<R::Data> {
        self.lock().clone()
    }

    pub fn data(&self) -> R::Data {
        self.lock().data.clone()
    }

    pub fn mode(&self) -> EditMode {
        self.lock().mode
    }

    /// Render the current state through the host's callback
    pub fn view<V, F>(&self, render: F) -> V
    where
        F: FnOnce(&EditorState<R::Data>) -> V,
    {
        let state = self.lock();
        render(&*state)
    }

    /// Fetch the resource and replace the snapshot; falls back to the placeholder
    /// with a warning instead of failing
    pub async fn load(&self) -> LoadOutcome {
        if self.shutdown.is_cancelled() {
            return LoadOutcome::Abandoned;
        }

        {
            let mut state = self.lock();
            if state.loading {
                debug!(
                    "{}: load requested while another load is in flight",
                    self.resource.name()
                );
            }
            state.loading = true;
            state.notice = None;
        }

        let result = tokio::select! {
            _ = self.shutdown.cancelled() => {
                debug!("{}: editor closed during load, dropping response", self.resource.name());
                self.lock().loading = false;
                return LoadOutcome::Abandoned;
            }
            result = self.resource.fetch() => result,
        };

        let mut state = self.lock();
        state.loading = false;
        match result {
            Ok(data) => {
                info!("{}: loaded", self.resource.name());
                state.data = data;
                LoadOutcome::Loaded
            }
            Err(err) => {
                warn!("{}: load failed, showing placeholder: {}", self.resource.name(), err);
                state.data = self.resource.placeholder();
                state.notice = Some(self.resource.load_failure_notice(&err));
                LoadOutcome::Fallback
            }
        }
    }

    /// Switch to edit mode; refused while a load is in flight
    pub fn begin_edit(&self) -> Result<(), EditorError> {
        if self.shutdown.is_cancelled() {
            return Err(EditorError::Closed);
        }

        let mut state = self.lock();
        if state.loading {
            return Err(EditorError::Loading);
        }
        if state.mode == EditMode::Edit {
            return Ok(());
        }
        if self.cancel_policy == CancelPolicy::RestoreSnapshot {
            let pristine = state.data.clone();
            state.pristine = Some(pristine);
        }
        state.mode = EditMode::Edit;
        debug!("{}: entered edit mode", self.resource.name());
        Ok(())
    }

    /// Replace the snapshot with `edit(&current)`; only allowed in edit mode and
    /// never while a load is about to overwrite the snapshot
    pub fn apply<F>(&self, edit: F) -> Result<(), EditorError>
    where
        F: FnOnce(&R::Data) -> R::Data,
    {
        if self.shutdown.is_cancelled() {
            return Err(EditorError::Closed);
        }

        let mut state = self.lock();
        if state.loading {
            return Err(EditorError::Loading);
        }
        if state.mode != EditMode::Edit {
            return Err(EditorError::NotEditing);
        }
        let next = edit(&state.data);
        state.data = next;
        Ok(())
    }

    /// Post the whole snapshot. On success the editor returns to view mode; on
    /// failure it stays in edit mode with the edits intact and an error notice.
    pub async fn save(&self) -> Result<(), EditorError> {
        if self.shutdown.is_cancelled() {
            return Err(EditorError::Closed);
        }

        let data = {
            let mut state = self.lock();
            if state.mode != EditMode::Edit {
                return Err(EditorError::NotEditing);
            }
            if state.loading {
                return Err(EditorError::Loading);
            }
            if state.saving {
                debug!("{}: save already in flight", self.resource.name());
                return Err(EditorError::SaveInFlight);
            }
            state.saving = true;
            state.notice = None;
            state.data.clone()
        };
        let mut flag = SavingFlag {
            state: &*self.state,
            armed: true,
        };

        let result = tokio::select! {
            _ = self.shutdown.cancelled() => {
                debug!("{}: editor closed during save", self.resource.name());
                return Err(EditorError::Closed);
            }
            result = self.resource.save(&data) => result,
        };

        let mut state = self.lock();
        state.saving = false;
        flag.disarm();

        match result {
            Ok(()) => {
                info!("{}: saved", self.resource.name());
                state.mode = EditMode::View;
                state.pristine = None;
                state.last_saved = Some(Utc::now());
                state.notice = Some(self.resource.saved_notice());
                Ok(())
            }
            Err(err) => {
                error!("{}: save failed: {}", self.resource.name(), err);
                state.notice = Some(Notice::error(err.to_string()));
                Err(EditorError::Save(err))
            }
        }
    }

    /// Leave edit mode discarding local edits
    pub async fn cancel(&self) -> Result<LoadOutcome, EditorError> {
        if self.shutdown.is_cancelled() {
            return Err(EditorError::Closed);
        }

        {
            let mut state = self.lock();
            if state.mode != EditMode::Edit {
                return Err(EditorError::NotEditing);
            }
            if state.saving {
                return Err(EditorError::SaveInFlight);
            }
            state.mode = EditMode::View;
            state.notice = None;

            if let Some(pristine) = state.pristine.take() {
                debug!("{}: restoring pre-edit snapshot", self.resource.name());
                state.data = pristine;
                return Ok(LoadOutcome::Restored);
            }
        }

        debug!("{}: discarding edits and reloading", self.resource.name());
        Ok(self.load().await)
    }

    /// Stop the editor; in-flight requests no longer update the state
    pub fn close(&self) {
        if !self.shutdown.is_cancelled() {
            info!("{}: closing editor", self.resource.name());
            self.shutdown.cancel();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}
