use crate::api::EnvConfig;
use crate::pages::NotesPage;
use crate::state::{AppContext, AppState, NoteSyncController};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub(crate) fn App(config: EnvConfig) -> impl IntoView {
    let app_state = AppContext(AppState::new(&config));
    provide_context(app_state);
    provide_context(NoteSyncController::new(app_state));

    tracing::info!(api_url = %config.api_url, autosave_ms = config.autosave_ms, "app started");

    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("") view=NotesPage />
            </Routes>
        </Router>
    }
}
