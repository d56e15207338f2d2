pub mod fetcher;
pub mod word_source;

pub use fetcher::{HttpWordFetcher, WordFetcher};
pub use word_source::WordSource;
