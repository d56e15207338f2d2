pub mod file;
pub mod memory;
pub mod solved_history;
pub mod traits;
pub mod word_cache;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use solved_history::SolvedHistoryRepository;
pub use traits::KeyValueStore;
pub use word_cache::WordCacheRepository;
