use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardTitle,
};
use crate::editor::NoteEditor;
use crate::state::workspace::IndexField;
use crate::state::{AppContext, NoteSyncController};
use crate::util::{brief_body, format_datetime, now_local, BRIEF_BODY_CHARS};
use icons::{Book, Library, Plus, Trash2};
use leptos::prelude::*;

const NOTEBOOK_ITEM_CLASSES: [&str; 2] = [
    "notebook-item",
    "flex cursor-pointer items-center gap-2 rounded-md px-2 py-1.5 text-sm transition-colors hover:bg-accent [&.active]:bg-accent [&.active]:font-medium",
];

/// Three panes: notebooks, notes of the selected notebook, the open note.
#[component]
pub fn NotesPage() -> impl IntoView {
    let sync = expect_context::<NoteSyncController>();

    // Runs once after mount; reads nothing reactive.
    Effect::new(move |_| sync.initialize());

    view! {
        <div class="app flex h-screen w-full overflow-hidden bg-background text-foreground">
            <NotebookSidebar />
            <NoteListPanel />
            <OpenNotePanel />
        </div>
    }
}

#[component]
fn NotebookSidebar() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let sync = expect_context::<NoteSyncController>();
    let workspace = app_state.0.workspace;

    let notebooks = Memo::new(move |_| workspace.with(|ws| ws.notebooks().to_vec()));
    let no_notebook = move || workspace.with(|ws| ws.current_book().is_none());

    view! {
        <aside class="sidebar flex w-56 shrink-0 flex-col border-r bg-muted/30">
            <div class="header p-3">
                <Button
                    class="adder w-full"
                    size=ButtonSize::Sm
                    attr:disabled=no_notebook
                    on:click=move |_| sync.add_note()
                >
                    <Plus />
                    "新建笔记"
                </Button>
            </div>

            <div class="body flex min-h-0 flex-1 flex-col px-2 pb-3">
                <div class="header flex items-center gap-1.5 px-2 py-1 text-xs font-medium text-muted-foreground">
                    <Library class="size-3.5" />
                    "笔记本"
                </div>

                <Show
                    when=move || {
                        workspace.with(|ws| ws.notebooks_loaded()) && notebooks.with(|nbs| nbs.is_empty())
                    }
                    fallback=|| ().into_view()
                >
                    <div class="px-2 py-4 text-xs text-muted-foreground">"暂无笔记本"</div>
                </Show>

                <ul class="notebooks-list flex flex-col gap-0.5 overflow-auto">
                    {move || {
                        notebooks
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, notebook)| {
                                let class = move || {
                                    workspace.with(|ws| {
                                        ws.active_class(
                                            IndexField::CurrentBookIndex,
                                            &NOTEBOOK_ITEM_CLASSES,
                                            index,
                                        )
                                    })
                                };
                                view! {
                                    <li class=class on:click=move |_| sync.select_notebook(index)>
                                        <Book class="size-4 text-muted-foreground" />
                                        <span class="title truncate">{notebook.name}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </aside>
    }
}

#[component]
fn NoteListPanel() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let sync = expect_context::<NoteSyncController>();
    let workspace = app_state.0.workspace;

    let notes = Memo::new(move |_| workspace.with(|ws| ws.notes().to_vec()));
    let open_id = Memo::new(move |_| workspace.with(|ws| ws.current_note().map(|n| n.id.clone())));
    let header = move || {
        workspace.with(|ws| ws.current_book().map(|b| b.name.clone()).unwrap_or_default())
    };

    view! {
        <section class="notes-panel flex w-72 shrink-0 flex-col border-r">
            <div class="header truncate border-b px-4 py-2.5 text-sm font-medium">{header}</div>
            <div class="body min-h-0 flex-1 overflow-auto p-2">
                <Show
                    when=move || {
                        workspace.with(|ws| ws.current_book().is_some()) && notes.with(|ns| ns.is_empty())
                    }
                    fallback=|| ().into_view()
                >
                    <div class="px-2 py-4 text-xs text-muted-foreground">"还没有笔记"</div>
                </Show>

                <ul class="notes-list flex flex-col gap-2">
                    {move || {
                        let now = now_local();
                        let open_id = open_id.get();
                        notes
                            .get()
                            .into_iter()
                            .map(|note| {
                                let card_class = if open_id.as_ref() == Some(&note.id) {
                                    "note-brief active cursor-pointer ring-1 ring-primary"
                                } else {
                                    "note-brief cursor-pointer hover:bg-accent/50"
                                };
                                let brief = brief_body(&note.body, BRIEF_BODY_CHARS);
                                let datetime = format_datetime(&note.datetime, now);
                                let id_for_open = note.id.clone();
                                let id_for_delete = note.id;

                                view! {
                                    <li>
                                        <Card
                                            class=card_class
                                            on:click=move |_| sync.edit_note(id_for_open.clone())
                                        >
                                            <CardTitle>{note.title}</CardTitle>
                                            <CardContent>{brief}</CardContent>
                                            <CardFooter>
                                                <span class="datetime">{datetime}</span>
                                                <Button
                                                    variant=ButtonVariant::Ghost
                                                    size=ButtonSize::Icon
                                                    class="trash h-6 w-6 text-muted-foreground hover:text-destructive"
                                                    attr:title="删除"
                                                    on:click=move |ev: web_sys::MouseEvent| {
                                                        // Keep the click from opening the note.
                                                        ev.stop_propagation();
                                                        sync.delete_note(id_for_delete.clone());
                                                    }
                                                >
                                                    <Trash2 class="size-3.5" />
                                                </Button>
                                            </CardFooter>
                                        </Card>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn OpenNotePanel() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let workspace = app_state.0.workspace;

    view! {
        <Show
            when=move || workspace.with(|ws| ws.current_note().is_some())
            fallback=|| view! {
                <div class="flex flex-1 items-center justify-center text-sm text-muted-foreground">
                    "选择一篇笔记开始编辑"
                </div>
            }
        >
            <NoteEditor />
        </Show>
    }
}
