use crate::core::Word;

/// Phrase joining the meaning and the example sentence on the revealed face.
/// Spoken as part of the native-language utterance.
const EXAMPLE_SEPARATOR: &str = ". 예문: ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    pub fn toggled(self) -> Self {
        match self {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        }
    }
}

/// One utterance request: what to say and which language to say it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
    pub language: String,
}

/// Text and language tag for the face currently showing. The front face is the
/// term in the target language; the back face is the meaning (plus the example,
/// when present) in the learner's native language.
pub fn speech_request(
    word: &Word,
    face: CardFace,
    target_language: &str,
    native_language: &str,
) -> SpeechRequest {
    match face {
        CardFace::Front => SpeechRequest {
            text: word.term.clone(),
            language: target_language.to_string(),
        },
        CardFace::Back => SpeechRequest { text: back_text(word), language: native_language.to_string() },
    }
}

pub fn back_text(word: &Word) -> String {
    match &word.example {
        Some(example) => format!("{}{}{}", word.meaning, EXAMPLE_SEPARATOR, example),
        None => word.meaning.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_word() -> Word {
        Word {
            id: 1,
            term: "Serendipity".to_string(),
            meaning: "우연한 발견".to_string(),
            example: Some("Finding this cafe was pure serendipity.".to_string()),
        }
    }

    #[test]
    fn test_front_face_speaks_term_in_target_language() {
        let request = speech_request(&sample_word(), CardFace::Front, "en-US", "ko-KR");
        assert_eq!(request.text, "Serendipity");
        assert_eq!(request.language, "en-US");
    }

    #[test]
    fn test_back_face_joins_meaning_and_example() {
        let request = speech_request(&sample_word(), CardFace::Back, "en-US", "ko-KR");
        assert_eq!(request.text, "우연한 발견. 예문: Finding this cafe was pure serendipity.");
        assert_eq!(request.language, "ko-KR");
    }

    #[test]
    fn test_back_face_without_example() {
        let mut word = sample_word();
        word.example = None;
        assert_eq!(back_text(&word), "우연한 발견");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(CardFace::Front.toggled(), CardFace::Back);
        assert_eq!(CardFace::Back.toggled(), CardFace::Front);
    }
}
