use crate::models::{EntityId, NewNote, Note, NoteField, Notebook};
use crate::state::autosave::{PendingSaves, SaveTicket};
use std::collections::BTreeSet;
use thiserror::Error;

pub(crate) const NEW_NOTE_TITLE: &str = "新建笔记";
pub(crate) const ACTIVE_CLASS: &str = "active";

/// A request the view wants issued against the store.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
    LoadNotebooks,
    /// `seq` numbers note-list requests; only the latest answer is used.
    LoadNotes { book_id: EntityId, seq: u64 },
    CreateNote(NewNote),
    OpenNote { note_id: EntityId },
    SaveNote(Note),
    DeleteNote { note_id: EntityId },
}

/// A completed request, fed back through [`Workspace::apply`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Reply {
    NotebooksLoaded(Vec<Notebook>),
    NotesLoaded {
        book_id: EntityId,
        seq: u64,
        notes: Vec<Note>,
    },
    NoteCreated,
    NoteOpened(Note),
    NoteSaved { note_id: EntityId },
    NoteDeleted { note_id: EntityId },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum WorkspaceError {
    #[error("no notebook is selected")]
    NoNotebookSelected,

    #[error("notebook index {index} out of range (have {len})")]
    NotebookOutOfRange { index: usize, len: usize },

    #[error("no note is open")]
    NoOpenNote,
}

/// Index-valued view state fields that rows can be highlighted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::AsRefStr)]
pub(crate) enum IndexField {
    #[strum(serialize = "currentBookIndex", serialize = "current_book_index")]
    CurrentBookIndex,
}

/// All view state of the notes page.
///
/// Every user gesture and every request completion goes through one method
/// here; the methods return the requests to issue next.
#[derive(Clone, Debug, Default)]
pub(crate) struct Workspace {
    notebooks: Vec<Notebook>,
    current_book_index: Option<usize>,
    notes: Vec<Note>,
    current_note: Option<Note>,
    pending: PendingSaves,

    /// False until the first notebook list arrives.
    notebooks_loaded: bool,
    /// Last issued note-list request.
    notes_seq: u64,
    /// Note last asked for by `edit_note`, until its reply lands.
    opening: Option<EntityId>,
    /// Notes with a DELETE in flight. Their edits stay pending but are not sent.
    deleting: BTreeSet<EntityId>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize() -> Command {
        Command::LoadNotebooks
    }

    pub fn notebooks(&self) -> &[Notebook] {
        &self.notebooks
    }

    pub fn notebooks_loaded(&self) -> bool {
        self.notebooks_loaded
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn current_book_index(&self) -> Option<usize> {
        self.current_book_index
    }

    pub fn current_book(&self) -> Option<&Notebook> {
        self.current_book_index.and_then(|i| self.notebooks.get(i))
    }

    pub fn current_book_id(&self) -> Option<&EntityId> {
        self.current_book().map(|b| &b.id)
    }

    pub fn current_note(&self) -> Option<&Note> {
        self.current_note.as_ref()
    }

    pub fn is_open(&self, note_id: &EntityId) -> bool {
        self.current_note.as_ref().is_some_and(|n| &n.id == note_id)
    }

    pub fn has_pending_saves(&self) -> bool {
        !self.pending.is_empty()
    }

    fn index_of(&self, field: IndexField) -> Option<usize> {
        match field {
            IndexField::CurrentBookIndex => self.current_book_index,
        }
    }

    /// `baseline` joined with spaces, plus `active` when `field` equals `index`.
    pub fn active_class(&self, field: IndexField, baseline: &[&str], index: usize) -> String {
        let mut classes: Vec<&str> = baseline.to_vec();
        if self.index_of(field) == Some(index) {
            classes.push(ACTIVE_CLASS);
        }
        classes.join(" ")
    }

    pub fn select_notebook(&mut self, index: usize) -> Result<Command, WorkspaceError> {
        let Some(book) = self.notebooks.get(index) else {
            return Err(WorkspaceError::NotebookOutOfRange {
                index,
                len: self.notebooks.len(),
            });
        };
        let book_id = book.id.clone();
        self.current_book_index = Some(index);
        self.opening = None;
        Ok(self.load_notes(book_id))
    }

    /// `datetime` is the creation timestamp, ISO-8601.
    pub fn add_note(&self, datetime: String) -> Result<Command, WorkspaceError> {
        let book_id = self
            .current_book_id()
            .cloned()
            .ok_or(WorkspaceError::NoNotebookSelected)?;

        Ok(Command::CreateNote(NewNote {
            title: NEW_NOTE_TITLE.to_string(),
            body: String::new(),
            datetime,
            book_id,
        }))
    }

    pub fn edit_note(&mut self, note_id: EntityId) -> Command {
        self.opening = Some(note_id.clone());
        Command::OpenNote { note_id }
    }

    /// Unsent edits of the note are dropped only once the delete succeeds.
    pub fn delete_note(&mut self, note_id: EntityId) -> Command {
        self.deleting.insert(note_id.clone());
        Command::DeleteNote { note_id }
    }

    /// Merge an edit into the open note and the list; the returned ticket
    /// redeems to a save once the debounce delay passes.
    pub fn change_field(
        &mut self,
        field: NoteField,
        value: String,
    ) -> Result<SaveTicket, WorkspaceError> {
        let note = self
            .current_note
            .as_ref()
            .ok_or(WorkspaceError::NoOpenNote)?
            .with_field(field, value);

        if let Some(entry) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *entry = note.clone();
        }
        self.current_note = Some(note.clone());

        Ok(self.pending.schedule(note))
    }

    pub fn take_due_save(&mut self, ticket: &SaveTicket) -> Option<Command> {
        if self.deleting.contains(&ticket.note_id) {
            return None;
        }
        self.pending.take(ticket).map(Command::SaveNote)
    }

    /// Every pending edit, except those of notes being deleted.
    pub fn flush_saves(&mut self) -> Vec<Command> {
        let ids: Vec<EntityId> = self
            .pending
            .ids()
            .filter(|id| !self.deleting.contains(*id))
            .cloned()
            .collect();

        ids.iter()
            .filter_map(|id| self.pending.remove(id))
            .map(Command::SaveNote)
            .collect()
    }

    /// A request failed. State stays as it was; a note whose delete failed
    /// gets its held-back edit sent.
    pub fn request_failed(&mut self, cmd: &Command) -> Vec<Command> {
        match cmd {
            Command::DeleteNote { note_id } => {
                self.deleting.remove(note_id);
                self.pending
                    .remove(note_id)
                    .map(Command::SaveNote)
                    .into_iter()
                    .collect()
            }
            Command::OpenNote { note_id } if self.opening.as_ref() == Some(note_id) => {
                self.opening = None;
                vec![]
            }
            _ => vec![],
        }
    }

    pub fn apply(&mut self, reply: Reply) -> Vec<Command> {
        match reply {
            Reply::NotebooksLoaded(notebooks) => self.on_notebooks_loaded(notebooks),
            Reply::NotesLoaded {
                book_id,
                seq,
                notes,
            } => {
                self.on_notes_loaded(book_id, seq, notes);
                vec![]
            }
            Reply::NoteCreated => self.reload_notes(),
            Reply::NoteOpened(note) => {
                self.on_note_opened(note);
                vec![]
            }
            Reply::NoteSaved { .. } => vec![],
            Reply::NoteDeleted { note_id } => {
                self.deleting.remove(&note_id);
                self.pending.remove(&note_id);
                if self.opening.as_ref() == Some(&note_id) {
                    self.opening = None;
                }
                if self.is_open(&note_id) {
                    self.current_note = None;
                }
                self.reload_notes()
            }
        }
    }

    fn load_notes(&mut self, book_id: EntityId) -> Command {
        self.notes_seq += 1;
        Command::LoadNotes {
            book_id,
            seq: self.notes_seq,
        }
    }

    fn reload_notes(&mut self) -> Vec<Command> {
        match self.current_book_id().cloned() {
            Some(book_id) => vec![self.load_notes(book_id)],
            None => vec![],
        }
    }

    fn on_notebooks_loaded(&mut self, notebooks: Vec<Notebook>) -> Vec<Command> {
        self.notebooks = notebooks;
        self.notebooks_loaded = true;

        if self.notebooks.is_empty() {
            self.current_book_index = None;
            self.notes.clear();
            self.current_note = None;
            return vec![];
        }

        let index = self
            .current_book_index
            .filter(|i| *i < self.notebooks.len())
            .unwrap_or(0);
        self.current_book_index = Some(index);
        self.reload_notes()
    }

    fn on_notes_loaded(&mut self, book_id: EntityId, seq: u64, notes: Vec<Note>) {
        // A newer list request went out while this one was in flight.
        if seq != self.notes_seq || self.current_book_id() != Some(&book_id) {
            tracing::debug!(%book_id, seq, latest = self.notes_seq, "dropping stale note list");
            return;
        }

        self.notes = notes
            .into_iter()
            .map(|n| self.pending.get(&n.id).cloned().unwrap_or(n))
            .collect();

        let still_listed = self
            .current_note
            .as_ref()
            .is_some_and(|open| self.notes.iter().any(|n| n.id == open.id));
        if !still_listed {
            self.current_note = None;
        }
    }

    /// Only the answer to the latest `edit_note` is shown, and only while the
    /// note is still listed for the selected notebook and not being deleted.
    fn on_note_opened(&mut self, note: Note) {
        let current = self.opening.as_ref() == Some(&note.id)
            && !self.deleting.contains(&note.id)
            && self.notes.iter().any(|n| n.id == note.id);
        if !current {
            tracing::debug!(note_id = %note.id, "dropping stale note");
            return;
        }

        self.opening = None;
        let note = self.pending.get(&note.id).cloned().unwrap_or(note);
        self.current_note = Some(note);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn notebook(id: i64, name: &str) -> Notebook {
        Notebook {
            id: EntityId::from(id),
            name: name.to_string(),
        }
    }

    pub(crate) fn note(id: i64, book: i64, title: &str, body: &str) -> Note {
        Note {
            id: EntityId::from(id),
            book_id: EntityId::from(book),
            title: title.to_string(),
            body: body.to_string(),
            datetime: "2024-01-01T00:00:00.000Z".to_string(),
            extra: Default::default(),
        }
    }

    /// The reply a store would send for a `LoadNotes` command.
    pub(crate) fn notes_reply(cmd: &Command, notes: Vec<Note>) -> Reply {
        let Command::LoadNotes { book_id, seq } = cmd else {
            panic!("expected a note list request, got {cmd:?}");
        };
        Reply::NotesLoaded {
            book_id: book_id.clone(),
            seq: *seq,
            notes,
        }
    }

    fn load_ids(cmds: &[Command]) -> Vec<EntityId> {
        cmds.iter()
            .map(|c| match c {
                Command::LoadNotes { book_id, .. } => book_id.clone(),
                other => panic!("expected a note list request, got {other:?}"),
            })
            .collect()
    }

    /// Click a note and answer with `n`.
    pub(crate) fn open(ws: &mut Workspace, n: Note) {
        ws.edit_note(n.id.clone());
        ws.apply(Reply::NoteOpened(n));
    }

    fn loaded() -> Workspace {
        let mut ws = Workspace::new();
        let next = ws.apply(Reply::NotebooksLoaded(vec![
            notebook(1, "读书笔记"),
            notebook(2, "工作"),
            notebook(3, "杂项"),
        ]));
        assert_eq!(load_ids(&next), vec![EntityId::from(1)]);
        ws.apply(notes_reply(
            &next[0],
            vec![note(10, 1, "a", "aa"), note(11, 1, "b", "bb"), note(12, 1, "c", "cc")],
        ));
        ws
    }

    #[test]
    fn test_initialize_loads_notebooks() {
        assert_eq!(Workspace::initialize(), Command::LoadNotebooks);
    }

    #[test]
    fn test_notebooks_loaded_selects_first() {
        let ws = loaded();
        assert!(ws.notebooks_loaded());
        assert_eq!(ws.current_book_index(), Some(0));
        assert_eq!(ws.current_book().map(|b| b.name.as_str()), Some("读书笔记"));
        assert_eq!(ws.notes().len(), 3);
    }

    #[test]
    fn test_empty_notebooks_is_an_empty_state() {
        let mut ws = Workspace::new();
        assert!(!ws.notebooks_loaded());

        let next = ws.apply(Reply::NotebooksLoaded(vec![]));
        assert!(next.is_empty());
        assert!(ws.notebooks_loaded());
        assert_eq!(ws.current_book_index(), None);
        assert!(ws.current_book().is_none());
        assert_eq!(
            ws.add_note("2024-01-01T00:00:00.000Z".to_string()),
            Err(WorkspaceError::NoNotebookSelected)
        );
    }

    #[test]
    fn test_select_notebook_issues_one_load_for_its_id() {
        let mut ws = loaded();
        let cmd = ws.select_notebook(2).expect("index 2 exists");
        assert_eq!(load_ids(&[cmd.clone()]), vec![EntityId::from(3)]);
        assert_eq!(ws.current_book_index(), Some(2));

        let response = vec![note(31, 3, "z", ""), note(30, 3, "y", ""), note(32, 3, "x", "")];
        let next = ws.apply(notes_reply(&cmd, response.clone()));
        assert!(next.is_empty());
        assert_eq!(ws.notes(), response.as_slice());
    }

    #[test]
    fn test_select_notebook_out_of_range() {
        let mut ws = loaded();
        assert_eq!(
            ws.select_notebook(3),
            Err(WorkspaceError::NotebookOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(ws.current_book_index(), Some(0));
    }

    #[test]
    fn test_stale_note_list_is_dropped() {
        let mut ws = loaded();
        let first = ws.select_notebook(0).expect("index 0 exists");
        let second = ws.select_notebook(1).expect("index 1 exists");
        ws.apply(notes_reply(&second, vec![note(20, 2, "work", "")]));
        // Late answer for the first notebook.
        ws.apply(notes_reply(&first, vec![note(10, 1, "a", "aa")]));
        assert_eq!(ws.notes().len(), 1);
        assert_eq!(ws.notes()[0].id, EntityId::from(20));
    }

    #[test]
    fn test_only_latest_list_of_the_same_notebook_is_used() {
        // A -> B -> A, answers arrive newest first.
        let mut ws = loaded();
        let a1 = ws.select_notebook(0).expect("index 0 exists");
        let _b = ws.select_notebook(1).expect("index 1 exists");
        let a2 = ws.select_notebook(0).expect("index 0 exists");

        ws.apply(notes_reply(&a2, vec![note(10, 1, "fresh", "")]));
        ws.apply(notes_reply(&a1, vec![note(10, 1, "old", ""), note(11, 1, "gone", "")]));

        assert_eq!(ws.notes(), &[note(10, 1, "fresh", "")]);
    }

    #[test]
    fn test_add_note_payload_and_reload() {
        let ws = loaded();
        let cmd = ws
            .add_note("2024-05-06T07:08:09.010Z".to_string())
            .expect("a notebook is selected");
        assert_eq!(
            cmd,
            Command::CreateNote(NewNote {
                title: "新建笔记".to_string(),
                body: String::new(),
                datetime: "2024-05-06T07:08:09.010Z".to_string(),
                book_id: EntityId::from(1),
            })
        );

        let mut ws = ws;
        assert_eq!(load_ids(&ws.apply(Reply::NoteCreated)), vec![EntityId::from(1)]);
        assert!(ws.current_note().is_none());
    }

    #[test]
    fn test_open_note_replaces_previous() {
        let mut ws = loaded();
        assert_eq!(
            ws.edit_note(EntityId::from(10)),
            Command::OpenNote {
                note_id: EntityId::from(10)
            }
        );
        ws.apply(Reply::NoteOpened(note(10, 1, "a", "aa")));
        open(&mut ws, note(11, 1, "b", "bb"));
        assert_eq!(ws.current_note().map(|n| n.id.clone()), Some(EntityId::from(11)));
    }

    #[test]
    fn test_only_the_last_clicked_note_opens() {
        let mut ws = loaded();
        ws.edit_note(EntityId::from(10));
        ws.edit_note(EntityId::from(11));

        ws.apply(Reply::NoteOpened(note(11, 1, "b", "bb")));
        ws.apply(Reply::NoteOpened(note(10, 1, "a", "aa")));
        assert_eq!(ws.current_note().map(|n| n.id.clone()), Some(EntityId::from(11)));
    }

    #[test]
    fn test_late_open_after_delete_is_ignored() {
        // Open answer arrives after the delete went through.
        let mut ws = loaded();
        ws.edit_note(EntityId::from(10));
        ws.delete_note(EntityId::from(10));
        let reload = ws.apply(Reply::NoteDeleted {
            note_id: EntityId::from(10),
        });
        ws.apply(notes_reply(&reload[0], vec![note(11, 1, "b", "bb")]));
        ws.apply(Reply::NoteOpened(note(10, 1, "a", "aa")));

        assert!(ws.current_note().is_none());
        assert_eq!(
            ws.change_field(NoteField::Body, "x".to_string()),
            Err(WorkspaceError::NoOpenNote)
        );
        assert!(ws.flush_saves().is_empty());
    }

    #[test]
    fn test_open_answer_during_delete_is_ignored() {
        // Open answer arrives while the delete is still in flight.
        let mut ws = loaded();
        ws.edit_note(EntityId::from(10));
        ws.delete_note(EntityId::from(10));
        ws.apply(Reply::NoteOpened(note(10, 1, "a", "aa")));
        assert!(ws.current_note().is_none());

        ws.apply(Reply::NoteDeleted {
            note_id: EntityId::from(10),
        });
        assert!(ws.current_note().is_none());
    }

    #[test]
    fn test_open_answer_after_switching_notebook_is_ignored() {
        let mut ws = loaded();
        ws.edit_note(EntityId::from(10));
        let load = ws.select_notebook(1).expect("index 1 exists");
        ws.apply(notes_reply(&load, vec![note(20, 2, "w", "ww")]));

        ws.apply(Reply::NoteOpened(note(10, 1, "a", "aa")));
        assert!(ws.current_note().is_none());
        assert_eq!(ws.current_book_id(), Some(&EntityId::from(2)));
    }

    #[test]
    fn test_title_edit_updates_open_note_and_list_in_place() {
        let mut ws = loaded();
        open(&mut ws, note(11, 1, "b", "bb"));

        let ticket = ws
            .change_field(NoteField::Title, "b2".to_string())
            .expect("a note is open");

        assert_eq!(ws.current_note().map(|n| n.title.as_str()), Some("b2"));
        let ids: Vec<_> = ws.notes().iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, vec![EntityId::from(10), EntityId::from(11), EntityId::from(12)]);
        assert_eq!(ws.notes()[1].title, "b2");

        let merged = note(11, 1, "b2", "bb");
        assert_eq!(ws.take_due_save(&ticket), Some(Command::SaveNote(merged)));
        assert!(ws.take_due_save(&ticket).is_none());
    }

    #[test]
    fn test_rapid_edits_persist_only_the_last_value() {
        let mut ws = loaded();
        open(&mut ws, note(10, 1, "a", ""));

        let tickets: Vec<_> = ["h", "he", "hel", "hell", "hello"]
            .iter()
            .map(|v| {
                ws.change_field(NoteField::Body, v.to_string())
                    .expect("a note is open")
            })
            .collect();

        let saves: Vec<_> = tickets.iter().filter_map(|t| ws.take_due_save(t)).collect();
        assert_eq!(saves, vec![Command::SaveNote(note(10, 1, "a", "hello"))]);
    }

    #[test]
    fn test_change_field_without_open_note() {
        let mut ws = loaded();
        assert_eq!(
            ws.change_field(NoteField::Body, "x".to_string()),
            Err(WorkspaceError::NoOpenNote)
        );
    }

    #[test]
    fn test_delete_open_note_clears_editor_and_reloads_once() {
        let mut ws = loaded();
        open(&mut ws, note(12, 1, "c", "cc"));
        let ticket = ws
            .change_field(NoteField::Body, "c!".to_string())
            .expect("a note is open");

        assert_eq!(
            ws.delete_note(EntityId::from(12)),
            Command::DeleteNote {
                note_id: EntityId::from(12)
            }
        );
        // Held back while the delete is in flight.
        assert!(ws.take_due_save(&ticket).is_none());
        assert!(ws.flush_saves().is_empty());
        assert!(ws.has_pending_saves());

        let next = ws.apply(Reply::NoteDeleted {
            note_id: EntityId::from(12),
        });
        assert_eq!(load_ids(&next), vec![EntityId::from(1)]);
        assert!(ws.current_note().is_none());
        assert!(!ws.has_pending_saves());
    }

    #[test]
    fn test_failed_delete_sends_held_back_edit() {
        let mut ws = loaded();
        open(&mut ws, note(10, 1, "a", "aa"));
        let ticket = ws
            .change_field(NoteField::Body, "typed".to_string())
            .expect("a note is open");
        let delete = ws.delete_note(EntityId::from(10));
        assert!(ws.take_due_save(&ticket).is_none());

        let next = ws.request_failed(&delete);
        assert_eq!(next, vec![Command::SaveNote(note(10, 1, "a", "typed"))]);
        assert_eq!(ws.current_note().map(|n| n.body.as_str()), Some("typed"));
        assert_eq!(ws.notes()[0].body, "typed");
    }

    #[test]
    fn test_failed_delete_without_edits_changes_nothing() {
        let mut ws = loaded();
        let delete = ws.delete_note(EntityId::from(11));
        assert!(ws.request_failed(&delete).is_empty());
        assert_eq!(ws.notes().len(), 3);

        // Later edits of that note save normally again.
        open(&mut ws, note(11, 1, "b", "bb"));
        let ticket = ws
            .change_field(NoteField::Title, "b2".to_string())
            .expect("a note is open");
        assert!(ws.take_due_save(&ticket).is_some());
    }

    #[test]
    fn test_reload_clears_open_note_that_disappeared() {
        let mut ws = loaded();
        open(&mut ws, note(11, 1, "b", "bb"));
        let reload = ws.apply(Reply::NoteCreated);
        ws.apply(notes_reply(&reload[0], vec![note(10, 1, "a", "aa")]));
        assert!(ws.current_note().is_none());
    }

    #[test]
    fn test_switching_notebook_closes_note_of_previous_one() {
        let mut ws = loaded();
        open(&mut ws, note(10, 1, "a", "aa"));
        let load = ws.select_notebook(1).expect("index 1 exists");
        ws.apply(notes_reply(&load, vec![]));
        assert!(ws.current_note().is_none());
    }

    #[test]
    fn test_reload_overlays_unsaved_edits() {
        let mut ws = loaded();
        open(&mut ws, note(10, 1, "a", "aa"));
        ws.change_field(NoteField::Body, "local".to_string())
            .expect("a note is open");

        // Server still has the old body.
        let reload = ws.apply(Reply::NoteCreated);
        ws.apply(notes_reply(
            &reload[0],
            vec![note(10, 1, "a", "aa"), note(11, 1, "b", "bb")],
        ));
        assert_eq!(ws.notes()[0].body, "local");
        assert_eq!(ws.current_note().map(|n| n.body.as_str()), Some("local"));

        open(&mut ws, note(10, 1, "a", "aa"));
        assert_eq!(ws.current_note().map(|n| n.body.as_str()), Some("local"));
    }

    #[test]
    fn test_flush_saves_drains_everything() {
        let mut ws = loaded();
        open(&mut ws, note(10, 1, "a", ""));
        ws.change_field(NoteField::Body, "one".to_string())
            .expect("a note is open");
        open(&mut ws, note(11, 1, "b", ""));
        ws.change_field(NoteField::Title, "two".to_string())
            .expect("a note is open");

        let flushed = ws.flush_saves();
        assert_eq!(flushed.len(), 2);
        assert!(!ws.has_pending_saves());
        assert!(ws.flush_saves().is_empty());
    }

    #[test]
    fn test_active_class_marks_selected_index() {
        let mut ws = loaded();
        ws.select_notebook(2).expect("index 2 exists");

        let field: IndexField = "currentBookIndex".parse().expect("known field");
        let hit = ws.active_class(field, &["notebook-item"], 2);
        let miss = ws.active_class(field, &["notebook-item"], 0);

        assert!(hit.split_whitespace().any(|c| c == "active"));
        assert!(hit.split_whitespace().any(|c| c == "notebook-item"));
        assert!(!miss.split_whitespace().any(|c| c == "active"));
        assert_eq!(miss, "notebook-item");
    }

    #[test]
    fn test_active_class_with_no_selection() {
        let ws = Workspace::new();
        assert_eq!(
            ws.active_class(IndexField::CurrentBookIndex, &["notebook-item", "row"], 0),
            "notebook-item row"
        );
    }
}
