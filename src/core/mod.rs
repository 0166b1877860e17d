pub mod errors;
pub mod models;

pub use errors::FlashdeckError;
pub use models::{ Word, WordDraft };
