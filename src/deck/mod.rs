pub mod card;
pub mod cursor;
pub mod gesture;
pub mod store;

pub use card::{
    CardFace,
    SpeechRequest,
};
pub use cursor::DeckCursor;
pub use gesture::{
    classify_swipe,
    NavIntent,
    SwipeSample,
};
pub use store::WordStore;

use crate::core::{
    Word,
    WordDraft,
};

/// The deck state machine: the word collection, the cursor into it, and the
/// flip state of the displayed card. All the coupling rules live here so the
/// GUI only forwards events.
pub struct Deck {
    store: WordStore,
    cursor: DeckCursor,
    face: CardFace,
}

impl Deck {
    pub fn new(store: WordStore) -> Self {
        Self { store, cursor: DeckCursor::default(), face: CardFace::Front }
    }

    pub fn load() -> Self {
        Self::new(WordStore::load())
    }

    pub fn save(&self) {
        self.store.save();
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor.index()
    }

    /// The word under the cursor, or None when the deck is empty.
    pub fn current(&self) -> Option<&Word> {
        self.store.get(self.cursor.index())
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    /// Moves to the next card. The flip state resets to the front face
    /// whenever the cursor actually changes.
    pub fn advance(&mut self) {
        if self.cursor.advance(self.store.len()) {
            self.face = CardFace::Front;
        }
    }

    /// Moves to the previous card, same reset rule as `advance`.
    pub fn retreat(&mut self) {
        if self.cursor.retreat(self.store.len()) {
            self.face = CardFace::Front;
        }
    }

    /// Toggles the displayed face. No card, nothing to flip.
    pub fn reveal(&mut self) {
        if !self.store.is_empty() {
            self.face = self.face.toggled();
        }
    }

    /// Feeds one completed touch motion through classification and, when it is
    /// a swipe, through navigation. Swipe intents are dropped while the back
    /// face is showing so reading the revealed meaning can't accidentally
    /// navigate away; the explicit controls go through `advance`/`retreat`
    /// directly and are never suppressed. Returns the applied intent.
    pub fn handle_swipe(&mut self, sample: SwipeSample) -> Option<NavIntent> {
        let intent = classify_swipe(sample)?;
        if self.face == CardFace::Back {
            return None;
        }
        match intent {
            NavIntent::Advance => self.advance(),
            NavIntent::Retreat => self.retreat(),
        }
        Some(intent)
    }

    /// Appends a new word. The cursor stays where it is; the new entry lands
    /// at the end of the deck, not in focus.
    pub fn add_word(&mut self, draft: WordDraft) -> u32 {
        self.store.append(draft)
    }

    /// Removes a word by id, re-clamping the cursor and resetting the flip
    /// state (the displayed entry may have changed identity or position).
    pub fn remove_word(&mut self, id: u32) -> bool {
        if !self.store.remove(id) {
            return false;
        }
        self.cursor.clamp(self.store.len());
        self.face = CardFace::Front;
        true
    }

    /// Utterance for the currently visible face, or None on an empty deck.
    pub fn speech_request(
        &self,
        target_language: &str,
        native_language: &str,
    ) -> Option<SpeechRequest> {
        self.current().map(|word| card::speech_request(word, self.face, target_language, native_language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(terms: &[&str]) -> Deck {
        let mut store = WordStore::default();
        for term in terms {
            store.append(WordDraft::new(term, "뜻", None));
        }
        Deck::new(store)
    }

    fn left_swipe() -> SwipeSample {
        SwipeSample { dx: -100.0, elapsed_secs: 0.15 }
    }

    #[test]
    fn test_navigation_resets_flip_state() {
        let mut deck = deck_of(&["A", "B"]);
        deck.reveal();
        assert_eq!(deck.face(), CardFace::Back);

        deck.advance();
        assert_eq!(deck.face(), CardFace::Front);

        deck.reveal();
        deck.retreat();
        assert_eq!(deck.face(), CardFace::Front);
    }

    #[test]
    fn test_swipe_suppressed_while_revealed() {
        // Deck [A,B,C] at 0, front showing.
        let mut deck = deck_of(&["A", "B", "C"]);

        assert_eq!(deck.handle_swipe(left_swipe()), Some(NavIntent::Advance));
        assert_eq!(deck.cursor_index(), 1);
        assert_eq!(deck.face(), CardFace::Front);

        deck.reveal();
        assert_eq!(deck.face(), CardFace::Back);

        // The same swipe is dropped while flipped.
        assert_eq!(deck.handle_swipe(left_swipe()), None);
        assert_eq!(deck.cursor_index(), 1);
        assert_eq!(deck.face(), CardFace::Back);

        deck.reveal();
        assert_eq!(deck.face(), CardFace::Front);

        assert_eq!(deck.handle_swipe(left_swipe()), Some(NavIntent::Advance));
        assert_eq!(deck.cursor_index(), 2);
    }

    #[test]
    fn test_explicit_controls_work_while_revealed() {
        let mut deck = deck_of(&["A", "B", "C"]);
        deck.reveal();

        deck.advance();
        assert_eq!(deck.cursor_index(), 1);
        assert_eq!(deck.face(), CardFace::Front);
    }

    #[test]
    fn test_remove_last_word_then_append() {
        let mut deck = deck_of(&["A"]);
        let id = deck.current().unwrap().id;

        assert!(deck.remove_word(id));
        assert!(deck.is_empty());
        assert!(deck.current().is_none());

        // Navigation on the empty deck is a safe no-op.
        deck.advance();
        deck.retreat();
        deck.reveal();
        assert!(deck.current().is_none());
        assert_eq!(deck.face(), CardFace::Front);

        deck.add_word(WordDraft::new("B", "비", None));
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cursor_index(), 0);
        assert_eq!(deck.current().unwrap().term, "B");
        assert_eq!(deck.face(), CardFace::Front);
    }

    #[test]
    fn test_remove_before_cursor_keeps_current_word() {
        let mut deck = deck_of(&["A", "B", "C"]);
        deck.advance();
        deck.advance();
        assert_eq!(deck.current().unwrap().term, "C");

        let b_id = deck.store().words()[1].id;
        assert!(deck.remove_word(b_id));

        // C shifted down to index 1 and the cursor clamped onto it.
        assert_eq!(deck.cursor_index(), 1);
        assert_eq!(deck.current().unwrap().term, "C");
    }

    #[test]
    fn test_remove_at_cursor_clamps_and_resets() {
        let mut deck = deck_of(&["A", "B", "C"]);
        deck.advance();
        deck.advance();
        deck.reveal();

        let c_id = deck.current().unwrap().id;
        assert!(deck.remove_word(c_id));

        assert_eq!(deck.cursor_index(), 1);
        assert_eq!(deck.current().unwrap().term, "B");
        assert_eq!(deck.face(), CardFace::Front);
    }

    #[test]
    fn test_append_does_not_move_cursor_or_flip() {
        let mut deck = deck_of(&["A", "B"]);
        deck.advance();
        deck.reveal();

        deck.add_word(WordDraft::new("C", "씨", None));
        assert_eq!(deck.cursor_index(), 1);
        assert_eq!(deck.face(), CardFace::Back);
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_single_entry_swipe_keeps_face() {
        // A one-card deck: both directions stay in place, so the cursor never
        // changes and the face is left alone.
        let mut deck = deck_of(&["A"]);
        deck.reveal();
        deck.handle_swipe(left_swipe());
        assert_eq!(deck.cursor_index(), 0);
        assert_eq!(deck.face(), CardFace::Back);
    }

    #[test]
    fn test_speech_request_follows_face() {
        let mut deck = deck_of(&["A", "B"]);
        let request = deck.speech_request("en-US", "ko-KR").unwrap();
        assert_eq!(request.text, "A");
        assert_eq!(request.language, "en-US");

        deck.reveal();
        let request = deck.speech_request("en-US", "ko-KR").unwrap();
        assert_eq!(request.text, "뜻");
        assert_eq!(request.language, "ko-KR");

        deck.remove_word(deck.store().words()[0].id);
        deck.remove_word(deck.store().words()[0].id);
        assert!(deck.speech_request("en-US", "ko-KR").is_none());
    }
}
