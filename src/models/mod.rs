pub mod card;
pub mod exercise;
pub mod loaders;
pub mod page;

pub use card::CardNote;
pub use exercise::{Answer, ExerciseRecord};
pub use loaders::load_pages;
pub use page::RawPage;
