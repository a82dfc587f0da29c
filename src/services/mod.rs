pub mod card_export;
pub mod normalizer;
pub mod paragraph;
pub mod rules;
pub mod segmenter;

pub use card_export::{to_cards, ExportOutcome};
pub use normalizer::Normalizer;
pub use paragraph::format_paragraphs;
pub use segmenter::Segmenter;
