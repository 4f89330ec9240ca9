//! Document text hook for the classifier: sources that turn documents into
//! text and the excerpt normalizer applied before classification.

pub mod excerpt;
pub mod text;
pub mod traits;

pub use excerpt::{excerpt_from_source, normalize_excerpt};
pub use text::PlainTextSource;
pub use traits::DocumentTextSource;
