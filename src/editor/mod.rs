pub(crate) mod markdown;
pub(crate) mod tab;

use crate::components::ui::{Input, Textarea};
use crate::models::NoteField;
use crate::state::{AppContext, NoteSyncController};
use icons::Notebook;
use leptos::html;
use leptos::prelude::*;
use markdown::render_markdown;
use tab::insert_tab;

/// Title input, raw Markdown editor and rendered preview for the open note.
#[component]
pub fn NoteEditor() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let sync = expect_context::<NoteSyncController>();
    let workspace = app_state.0.workspace;

    let title = Signal::derive(move || {
        workspace.with(|ws| ws.current_note().map(|n| n.title.clone()).unwrap_or_default())
    });
    let body = Signal::derive(move || {
        workspace.with(|ws| ws.current_note().map(|n| n.body.clone()).unwrap_or_default())
    });
    let book_name = move || {
        workspace.with(|ws| ws.current_book().map(|b| b.name.clone()).unwrap_or_default())
    };
    let preview_html = Memo::new(move |_| render_markdown(&body.get()));

    let body_ref = NodeRef::<html::Textarea>::new();

    let on_title = Callback::new(move |v: String| sync.change_field(NoteField::Title, v));
    let on_body = Callback::new(move |v: String| sync.change_field(NoteField::Body, v));

    // Tab inserts a literal tab instead of moving focus.
    let on_body_keydown = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        let Some(el) = body_ref.get_untracked() else {
            return;
        };

        let value = el.value();
        let start = el.selection_start().ok().flatten().unwrap_or(0);
        let end = el.selection_end().ok().flatten().unwrap_or(start);
        let edit = insert_tab(&value, start, end);

        ev.prevent_default();
        el.set_value(&edit.value);
        let _ = el.set_selection_range(edit.cursor, edit.cursor);

        sync.change_field(NoteField::Body, edit.value);
    });

    view! {
        <section data-name="NoteEditor" class="note-panel flex min-w-0 flex-1 flex-col">
            <div class="header flex items-center gap-3 border-b px-4 py-2">
                <div class="category flex shrink-0 items-center gap-1.5 text-xs text-muted-foreground">
                    <Notebook class="size-3.5" />
                    {book_name}
                </div>
                <div class="title flex-1">
                    <Input
                        name=NoteField::Title.as_ref().to_string()
                        value=title
                        on_value=on_title
                        class="h-8 border-transparent text-base font-medium shadow-none"
                    />
                </div>
            </div>

            <div class="body grid min-h-0 flex-1 grid-cols-2">
                <div class="editor flex min-h-0 border-r">
                    <Textarea
                        name=NoteField::Body.as_ref().to_string()
                        value=body
                        on_value=on_body
                        on_keydown=on_body_keydown
                        node_ref=body_ref
                        class="h-full rounded-none border-0 font-mono shadow-none [tab-size:4]"
                    />
                </div>
                <div class="preview markdown-body min-h-0 overflow-auto px-4 py-3">
                    <div inner_html=move || preview_html.get()></div>
                </div>
            </div>
        </section>
    }
}
