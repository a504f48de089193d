//! Reactive task store
//!
//! Holds the in-memory task list plus transient UI state (loading flag,
//! error and success messages). Presentation layers subscribe through a
//! watch channel and re-render on every state change, instead of relying
//! on implicit property interception.
//!
//! Each message slot owns a scheduled clear: errors expire after five
//! seconds, successes after three. Setting a new message cancels and
//! reschedules only its own slot's timer, so a stale timer can never wipe
//! a newer message.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::api::TaskApi;
use crate::error::ClientError;
use crate::types::{CreateTask, Task, TaskStatus, UpdateTask};

/// How long an error message stays visible
const ERROR_MESSAGE_TTL: Duration = Duration::from_secs(5);
/// How long a success message stays visible
const SUCCESS_MESSAGE_TTL: Duration = Duration::from_secs(3);

const FETCH_ERROR_FALLBACK: &str = "Error al traer las tareas";
const CREATE_ERROR_FALLBACK: &str = "Error al crear la tarea";
const UPDATE_ERROR_FALLBACK: &str = "Error al actualizar la tarea";
const DELETE_ERROR_FALLBACK: &str = "Error al borrar la tarea";

const CREATE_SUCCESS: &str = "Tarea creada exitosamente";
const UPDATE_SUCCESS: &str = "Tarea actualizada exitosamente";
const DELETE_SUCCESS: &str = "Tarea borrada exitosamente";

/// Observable state published to subscribers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    /// Incremented on every new error or success message so the
    /// presentation layer can distinguish repeated identical messages
    pub message_id: u64,
}

struct StoreInner {
    api: Arc<dyn TaskApi>,
    state: watch::Sender<StoreSnapshot>,
    error_timer: Mutex<Option<JoinHandle<()>>>,
    success_timer: Mutex<Option<JoinHandle<()>>>,
}

impl StoreInner {
    fn mutate(&self, f: impl FnOnce(&mut StoreSnapshot)) {
        self.state.send_modify(f);
    }
}

/// Task store with observable state
#[derive(Clone)]
pub struct TaskStore {
    inner: Arc<StoreInner>,
}

impl TaskStore {
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        let (state, _) = watch::channel(StoreSnapshot::default());
        Self {
            inner: Arc::new(StoreInner {
                api,
                state,
                error_timer: Mutex::new(None),
                success_timer: Mutex::new(None),
            }),
        }
    }

    /// Subscribe to state changes
    ///
    /// The receiver observes every published snapshot; the current state
    /// is available immediately via `borrow`.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.inner.state.subscribe()
    }

    /// Current state snapshot
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        self.inner.state.borrow().clone()
    }

    /// Active (non-completed) tasks, filtered on read
    #[must_use]
    pub fn pending_tasks(&self) -> Vec<Task> {
        self.inner
            .state
            .borrow()
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Pending)
            .cloned()
            .collect()
    }

    /// Completed tasks, filtered on read
    #[must_use]
    pub fn completed_tasks(&self) -> Vec<Task> {
        self.inner
            .state
            .borrow()
            .tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .cloned()
            .collect()
    }

    /// Set the error message and schedule its expiry
    pub fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.inner.mutate(|s| {
            s.error = Some(message);
            s.message_id += 1;
        });

        Self::reschedule(&self.inner, &self.inner.error_timer, ERROR_MESSAGE_TTL, |s| {
            s.error = None;
        });
    }

    /// Set the success message and schedule its expiry
    pub fn set_success(&self, message: impl Into<String>) {
        let message = message.into();
        self.inner.mutate(|s| {
            s.success = Some(message);
            s.message_id += 1;
        });

        Self::reschedule(
            &self.inner,
            &self.inner.success_timer,
            SUCCESS_MESSAGE_TTL,
            |s| {
                s.success = None;
            },
        );
    }

    /// Load the task list from the server
    pub async fn fetch_tasks(&self) {
        self.begin();

        match self.inner.api.fetch_tasks().await {
            Ok(tasks) => {
                self.inner.mutate(|s| s.tasks = tasks);
            }
            Err(e) => self.report_error(&e, FETCH_ERROR_FALLBACK),
        }

        self.finish();
    }

    /// Create a task and prepend the server's object to the local list
    pub async fn create_task(&self, data: CreateTask) {
        self.begin();

        match self.inner.api.create_task(&data).await {
            Ok(task) => {
                self.inner.mutate(|s| s.tasks.insert(0, task));
                self.set_success(CREATE_SUCCESS);
            }
            Err(e) => self.report_error(&e, CREATE_ERROR_FALLBACK),
        }

        self.finish();
    }

    /// Update a task, replacing the local copy in place
    ///
    /// If the id is not present locally the list is left untouched.
    pub async fn update_task(&self, id: Uuid, data: UpdateTask) {
        self.begin();

        match self.inner.api.update_task(id, &data).await {
            Ok(updated) => {
                self.inner.mutate(|s| {
                    if let Some(index) = s.tasks.iter().position(|task| task.id == id) {
                        s.tasks[index] = updated;
                    }
                });
                self.set_success(UPDATE_SUCCESS);
            }
            Err(e) => self.report_error(&e, UPDATE_ERROR_FALLBACK),
        }

        self.finish();
    }

    /// Delete a task and remove it from the local list
    pub async fn delete_task(&self, id: Uuid) {
        self.begin();

        match self.inner.api.delete_task(id).await {
            Ok(()) => {
                self.inner.mutate(|s| s.tasks.retain(|task| task.id != id));
                self.set_success(DELETE_SUCCESS);
            }
            Err(e) => self.report_error(&e, DELETE_ERROR_FALLBACK),
        }

        self.finish();
    }

    /// Mark the start of a remote call: raise the loading flag and clear
    /// any stale error without bumping the message counter
    fn begin(&self) {
        self.inner.mutate(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn finish(&self) {
        self.inner.mutate(|s| s.loading = false);
    }

    fn report_error(&self, error: &ClientError, fallback: &str) {
        tracing::warn!(%error, "Task operation failed");
        let message = error.server_message().unwrap_or(fallback).to_string();
        self.set_error(message);
    }

    /// Replace the slot's pending clear with a fresh one
    fn reschedule(
        inner: &Arc<StoreInner>,
        slot: &Mutex<Option<JoinHandle<()>>>,
        ttl: Duration,
        clear: impl FnOnce(&mut StoreSnapshot) + Send + 'static,
    ) {
        let handle = tokio::spawn({
            let inner = Arc::clone(inner);
            async move {
                tokio::time::sleep(ttl).await;
                inner.mutate(clear);
            }
        });

        let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = guard.replace(handle) {
            previous.abort();
        }
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        for slot in [&self.error_timer, &self.success_timer] {
            let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
    }
}
