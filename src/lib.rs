pub mod dictionary;
pub mod error;
pub mod handlers;
pub mod index;
pub mod rank;
pub mod report;
pub mod stats;
pub mod text;
pub mod token;

pub use dictionary::{Dictionary, PREVIEW_LEN};
pub use error::StatsError;
pub use handlers::{AppState, router};
pub use index::{WordMap, WordMaps, build_word_maps};
pub use rank::{DEFAULT_TOP_N, RankedWord, top_frequent, try_top_frequent};
pub use stats::WordStats;
pub use text::reconstruct;
pub use token::{normalize_word, read_tokens, split_tokens};
