pub mod actions;
pub mod app;
pub mod card_view;
pub mod theme;
pub mod top_bar;
pub mod word_list;

pub use app::FlashdeckApp;
