use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("cannot open {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dictionary has {available} words, at least {required} are required")]
    InsufficientDictionary { required: usize, available: usize },
    #[error("requested the top {requested} words but only {available} are available")]
    InsufficientData { requested: usize, available: usize },
}
