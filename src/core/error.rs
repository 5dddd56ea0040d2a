use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("thread {unique_id} appears more than once in the {list} list")]
    DuplicateThread { unique_id: String, list: &'static str },

    #[error("thread {0} is both pinned and unpinned")]
    ThreadInBothLists(String),

    #[error("unsupported snapshot format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
