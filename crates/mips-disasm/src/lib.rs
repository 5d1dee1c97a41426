pub mod model;

// Re-export commonly used types/functions for consumers
pub use model::{is_mapped, load_raw_bin, read_u8, read_word_at, Image};
