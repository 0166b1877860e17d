use crate::{
    core::models::{
        default_words,
        Word,
        WordDraft,
    },
    persistence,
};

const WORDS_FILE: &str = "words.json";

/// Ordered, mutable word collection. Insertion order is preserved; nothing
/// here ever reorders the list.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: Vec<Word>,
}

impl WordStore {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Loads the saved word list, seeding the default deck on first run.
    pub fn load() -> Self {
        if persistence::data_file_exists(WORDS_FILE) {
            Self::new(persistence::load_json_or_default::<Vec<Word>>(WORDS_FILE))
        } else {
            Self::new(default_words())
        }
    }

    pub fn save(&self) {
        if let Err(e) = persistence::save_json(&self.words, WORDS_FILE) {
            log::error!("Failed to save word list: {}", e);
        }
    }

    /// Appends a new word at the end and returns its assigned id: one greater
    /// than the current maximum, or 1 for an empty collection.
    pub fn append(&mut self, draft: WordDraft) -> u32 {
        let id = self.words.iter().map(|w| w.id).max().unwrap_or(0) + 1;
        self.words.push(Word {
            id,
            term: draft.term,
            meaning: draft.meaning,
            example: draft.example,
        });
        id
    }

    /// Removes the word with the given id. Returns false if no such word.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w.id != id);
        self.words.len() != before
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_assigns_max_plus_one() {
        let mut store = WordStore::default();
        assert_eq!(store.append(WordDraft::new("alpha", "첫째", None)), 1);
        assert_eq!(store.append(WordDraft::new("beta", "둘째", None)), 2);

        // Ids follow the current maximum, not the count.
        store.remove(1);
        assert_eq!(store.append(WordDraft::new("gamma", "셋째", None)), 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = WordStore::default();
        store.append(WordDraft::new("one", "하나", None));
        store.append(WordDraft::new("two", "둘", None));
        store.append(WordDraft::new("three", "셋", None));
        store.remove(2);

        let terms: Vec<&str> = store.words().iter().map(|w| w.term.as_str()).collect();
        assert_eq!(terms, vec!["one", "three"]);
    }

    #[test]
    fn test_remove_missing_id() {
        let mut store = WordStore::new(default_words());
        assert!(!store.remove(999));
        assert_eq!(store.len(), 8);
    }
}
