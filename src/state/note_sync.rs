use crate::models::{EntityId, NoteField};
use crate::state::autosave::SaveTicket;
use crate::state::effects::{command_label, run_command};
use crate::state::workspace::{Command, Workspace, WorkspaceError};
use crate::state::AppContext;
use crate::util::now_iso;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use wasm_bindgen::JsCast;

/// Bridges view gestures to the store.
///
/// Responsibilities:
/// - turn gestures into `Workspace` mutations
/// - issue the resulting requests and feed completions back
/// - per-note debounce autosave
/// - best-effort pagehide flush of unsaved edits
///
/// Failed requests are logged; the view keeps what it had.
#[derive(Clone, Copy)]
pub(crate) struct NoteSyncController {
    app_state: AppContext,
    autosave_ms: i32,

    /// Global listener (keep handle alive).
    _pagehide_handle: StoredValue<Option<WindowListenerHandle>>,
}

impl NoteSyncController {
    pub fn new(app_state: AppContext) -> Self {
        let s = Self {
            app_state,
            autosave_ms: app_state.0.autosave_ms,
            _pagehide_handle: StoredValue::new(None),
        };

        s.start_global_listeners();
        s
    }

    fn workspace(&self) -> RwSignal<Workspace> {
        self.app_state.0.workspace
    }

    pub fn initialize(&self) {
        self.dispatch(Workspace::initialize());
    }

    pub fn select_notebook(&self, index: usize) {
        let result = self.workspace().try_update(|ws| ws.select_notebook(index));
        self.dispatch_gesture("select notebook", result);
    }

    pub fn add_note(&self) {
        let datetime = now_iso();
        let result = self.workspace().with_untracked(|ws| ws.add_note(datetime));
        self.dispatch_gesture("add note", Some(result));
    }

    pub fn edit_note(&self, note_id: EntityId) {
        if let Some(cmd) = self.workspace().try_update(|ws| ws.edit_note(note_id)) {
            self.dispatch(cmd);
        }
    }

    pub fn delete_note(&self, note_id: EntityId) {
        if let Some(cmd) = self.workspace().try_update(|ws| ws.delete_note(note_id)) {
            self.dispatch(cmd);
        }
    }

    /// Called by the editor on each input.
    pub fn change_field(&self, field: NoteField, value: String) {
        match self.workspace().try_update(|ws| ws.change_field(field, value)) {
            Some(Ok(ticket)) => self.schedule_autosave(ticket),
            Some(Err(e)) => tracing::debug!(%field, error = %e, "edit ignored"),
            None => {}
        }
    }

    /// Send every pending edit now.
    pub fn flush(&self) {
        let cmds = self
            .workspace()
            .try_update(|ws| ws.flush_saves())
            .unwrap_or_default();
        self.dispatch_all(cmds);
    }

    fn dispatch_gesture(&self, gesture: &str, result: Option<Result<Command, WorkspaceError>>) {
        match result {
            Some(Ok(cmd)) => self.dispatch(cmd),
            Some(Err(e)) => tracing::debug!(gesture, error = %e, "gesture ignored"),
            None => {}
        }
    }

    fn dispatch_all(&self, cmds: Vec<Command>) {
        for cmd in cmds {
            self.dispatch(cmd);
        }
    }

    fn dispatch(&self, cmd: Command) {
        let api_client = self.app_state.0.api_client.get_untracked();
        let s2 = *self;
        spawn_local(async move {
            let label = command_label(&cmd);
            tracing::debug!(request = %label, "sending");

            let sent = cmd.clone();
            match run_command(&api_client, cmd).await {
                Ok(reply) => {
                    let next = s2
                        .workspace()
                        .try_update(|ws| ws.apply(reply))
                        .unwrap_or_default();
                    s2.dispatch_all(next);
                }
                Err(e) => {
                    tracing::warn!(request = %label, error = %e, "request failed");
                    let next = s2
                        .workspace()
                        .try_update(|ws| ws.request_failed(&sent))
                        .unwrap_or_default();
                    s2.dispatch_all(next);
                }
            }
        });
    }

    fn save_if_due(&self, ticket: SaveTicket) {
        if let Some(cmd) = self
            .workspace()
            .try_update(|ws| ws.take_due_save(&ticket))
            .flatten()
        {
            self.dispatch(cmd);
        }
    }

    fn schedule_autosave(&self, ticket: SaveTicket) {
        let Some(win) = web_sys::window() else {
            return;
        };

        let s2 = *self;
        let cb = wasm_bindgen::closure::Closure::once_into_js(move || {
            s2.save_if_due(ticket);
        });

        let scheduled = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            self.autosave_ms,
        );

        if scheduled.is_err() {
            tracing::warn!("autosave timer unavailable, saving immediately");
            self.flush();
        }
    }

    fn start_global_listeners(&self) {
        // pagehide -> flush edits still inside their debounce window
        let s2 = *self;
        let pagehide =
            window_event_listener(ev::pagehide, move |_ev: web_sys::PageTransitionEvent| {
                s2.flush();
            });
        self._pagehide_handle.set_value(Some(pagehide));
    }
}
