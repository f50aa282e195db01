use crate::models::{EntityId, Note};
use std::collections::BTreeMap;

/// Handle returned for every edit; redeemed when its debounce timer fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SaveTicket {
    pub note_id: EntityId,
    pub generation: u64,
}

/// Latest unsaved copy of each edited note.
///
/// A newer edit of the same note bumps the generation, so tickets from earlier
/// keystrokes redeem to nothing and only the last one persists.
#[derive(Clone, Debug, Default)]
pub(crate) struct PendingSaves {
    next_generation: u64,
    entries: BTreeMap<EntityId, (u64, Note)>,
}

impl PendingSaves {
    pub fn schedule(&mut self, note: Note) -> SaveTicket {
        self.next_generation = self.next_generation.wrapping_add(1);
        let generation = self.next_generation;
        let note_id = note.id.clone();
        self.entries.insert(note_id.clone(), (generation, note));
        SaveTicket {
            note_id,
            generation,
        }
    }

    pub fn take(&mut self, ticket: &SaveTicket) -> Option<Note> {
        match self.entries.get(&ticket.note_id) {
            Some((g, _)) if *g == ticket.generation => {
                self.entries.remove(&ticket.note_id).map(|(_, n)| n)
            }
            _ => None,
        }
    }

    pub fn get(&self, note_id: &EntityId) -> Option<&Note> {
        self.entries.get(note_id).map(|(_, n)| n)
    }

    /// Drop the entry whatever its generation; outstanding tickets redeem to nothing.
    pub fn remove(&mut self, note_id: &EntityId) -> Option<Note> {
        self.entries.remove(note_id).map(|(_, n)| n)
    }

    pub fn ids(&self) -> impl Iterator<Item = &EntityId> {
        self.entries.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
