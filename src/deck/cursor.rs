/// Index of the currently displayed word. Navigation wraps around in both
/// directions so the deck feels circular; every operation takes the current
/// collection length so the cursor itself stays a plain value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeckCursor {
    index: usize,
}

impl DeckCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves to the next entry, wrapping past the end. No-op on an empty deck.
    /// Returns true if the index changed.
    pub fn advance(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let before = self.index;
        self.index = (self.index + 1) % len;
        self.index != before
    }

    /// Moves to the previous entry, wrapping past the start. No-op on an
    /// empty deck. Returns true if the index changed.
    pub fn retreat(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let before = self.index;
        self.index = (self.index + len - 1) % len;
        self.index != before
    }

    /// Re-establishes `index < len` after the collection shrank. The cursor is
    /// inactive at zero length; it parks at 0 so a later append shows the
    /// first entry.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
        } else if self.index > len - 1 {
            self.index = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_cyclic() {
        for len in 1..=5 {
            let mut cursor = DeckCursor::default();
            for _ in 0..len {
                cursor.advance(len);
            }
            assert_eq!(cursor.index(), 0, "advance x{} should return to start", len);
        }
    }

    #[test]
    fn test_retreat_is_cyclic() {
        for len in 1..=5 {
            let mut cursor = DeckCursor::default();
            for _ in 0..len {
                cursor.retreat(len);
            }
            assert_eq!(cursor.index(), 0, "retreat x{} should return to start", len);
        }
    }

    #[test]
    fn test_single_entry_is_identity() {
        let mut cursor = DeckCursor::default();
        assert!(!cursor.advance(1));
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.retreat(1));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_empty_deck_is_noop() {
        let mut cursor = DeckCursor::default();
        assert!(!cursor.advance(0));
        assert!(!cursor.retreat(0));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_retreat_wraps_to_end() {
        let mut cursor = DeckCursor::default();
        cursor.retreat(3);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut cursor = DeckCursor::default();
        cursor.advance(3);
        cursor.advance(3);
        assert_eq!(cursor.index(), 2);

        cursor.clamp(2);
        assert_eq!(cursor.index(), 1);

        cursor.clamp(0);
        assert_eq!(cursor.index(), 0);
    }
}
