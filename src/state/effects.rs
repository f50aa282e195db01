use crate::api::{ApiResult, NotesBackend};
use crate::state::workspace::{Command, Reply};

/// Issue one command against the store and describe how it completed.
pub(crate) async fn run_command<B: NotesBackend>(backend: &B, cmd: Command) -> ApiResult<Reply> {
    match cmd {
        Command::LoadNotebooks => Ok(Reply::NotebooksLoaded(backend.list_notebooks().await?)),
        Command::LoadNotes { book_id, seq } => {
            let notes = backend.list_notes(&book_id).await?;
            Ok(Reply::NotesLoaded {
                book_id,
                seq,
                notes,
            })
        }
        Command::CreateNote(note) => {
            backend.create_note(&note).await?;
            Ok(Reply::NoteCreated)
        }
        Command::OpenNote { note_id } => Ok(Reply::NoteOpened(backend.get_note(&note_id).await?)),
        Command::SaveNote(note) => {
            backend.update_note(&note).await?;
            Ok(Reply::NoteSaved { note_id: note.id })
        }
        Command::DeleteNote { note_id } => {
            backend.delete_note(&note_id).await?;
            Ok(Reply::NoteDeleted { note_id })
        }
    }
}

/// Short label for log lines; note bodies stay out of the logs.
pub(crate) fn command_label(cmd: &Command) -> String {
    match cmd {
        Command::LoadNotebooks => "GET /notebooks".to_string(),
        Command::LoadNotes { book_id, .. } => format!("GET /notes?bookId={book_id}"),
        Command::CreateNote(n) => format!("POST /notes (bookId={})", n.book_id),
        Command::OpenNote { note_id } => format!("GET /notes/{note_id}"),
        Command::SaveNote(n) => format!("PUT /notes/{}", n.id),
        Command::DeleteNote { note_id } => format!("DELETE /notes/{note_id}"),
    }
}
