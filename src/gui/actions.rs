use crate::core::WordDraft;

// A simple ui action queue so the view functions don't need mutable access to
// the whole app while they are drawing it
#[derive(Debug, Clone)]
pub enum UiAction {
    // Card view
    Advance,
    Retreat,
    Reveal,
    PlaySpeech,

    // Word list
    AddWord(WordDraft),
    DeleteWord(u32),
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
