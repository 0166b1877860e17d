use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: u32,                 // Unique identifier, immutable once assigned
    pub term: String,            // The word being studied, in the target language
    pub meaning: String,         // Meaning in the learner's native language
    pub example: Option<String>, // Optional example sentence using the term
}

/// A word as entered in the add form, before the store assigns an id.
#[derive(Debug, Clone, Default)]
pub struct WordDraft {
    pub term: String,
    pub meaning: String,
    pub example: Option<String>,
}

impl WordDraft {
    pub fn new(term: &str, meaning: &str, example: Option<&str>) -> Self {
        Self {
            term: term.to_string(),
            meaning: meaning.to_string(),
            example: example.map(|e| e.to_string()),
        }
    }
}

/// Starter deck for a fresh install, so the card view has something to show
/// before the user adds their own words.
pub fn default_words() -> Vec<Word> {
    let entries: [(&str, &str, &str); 8] = [
        ("Serendipity", "우연한 발견", "Finding this cafe was pure serendipity."),
        ("Ephemeral", "일시적인, 덧없는", "The beauty of cherry blossoms is ephemeral."),
        ("Ubiquitous", "어디에나 있는, 보편적인", "Smartphones have become ubiquitous."),
        ("Eloquent", "웅변적인, 설득력 있는", "She gave an eloquent speech."),
        ("Resilient", "탄력 있는, 회복력 있는", "Children are remarkably resilient."),
        ("Perseverance", "인내, 끈기", "Success comes through perseverance."),
        ("Authentic", "진정한, 진짜의", "This is an authentic Italian restaurant."),
        ("Innovative", "혁신적인", "The company is known for innovative products."),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (term, meaning, example))| Word {
            id: (i + 1) as u32,
            term: term.to_string(),
            meaning: meaning.to_string(),
            example: Some(example.to_string()),
        })
        .collect()
}
