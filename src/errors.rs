use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Invalid path character: '{0}'")]
    InvalidPathCharacter(char),

    #[error("Path {path:?} does not exist: missing '{step}' at intermediate step")]
    MissingIntermediateNode {
        path: String,
        step: char,
    },

    #[error("Failed to access tree document: {0}")]
    Resource(#[from] std::io::Error),

    #[error("Malformed tree mapping: {0}")]
    MalformedMapping(String),
}

impl From<serde_yaml::Error> for TreeError {
    fn from(err: serde_yaml::Error) -> Self {
        TreeError::MalformedMapping(err.to_string())
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
