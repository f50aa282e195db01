pub(crate) mod autosave;
pub(crate) mod effects;
pub(crate) mod note_sync;
pub(crate) mod workspace;

use crate::api::{ApiClient, EnvConfig};
use leptos::prelude::*;
use workspace::Workspace;

pub(crate) use note_sync::NoteSyncController;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    /// Debounce delay for note edits.
    pub autosave_ms: i32,

    /// Notebooks, notes of the selected notebook, the open note.
    /// Only `NoteSyncController` mutates it.
    pub workspace: RwSignal<Workspace>,
}

impl AppState {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::from_config(config)),
            autosave_ms: config.autosave_ms,
            workspace: RwSignal::new(Workspace::new()),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
