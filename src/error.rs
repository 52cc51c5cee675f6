use thiserror::Error;

#[derive(Debug, Error)]
pub enum EchonError {
    #[error("OOPS!!! The description of a todo cannot be empty.")]
    EmptyDescription,

    #[error("OOPS!!! '{0}' is not a valid date. Please use the format yyyy-mm-dd.")]
    InvalidDate(String),

    #[error("OOPS!!! An event cannot end before it starts.")]
    EventEndsBeforeStart,

    #[error(
        "OOPS!!! Task {} does not exist. You have {size} tasks in the list.",
        .index + 1
    )]
    IndexOutOfRange { index: usize, size: usize },

    #[error("OOPS!!! '{0}' is not a valid task number.")]
    InvalidIndex(String),

    #[error("OOPS!!! The {keyword} command needs {what}.")]
    MissingArgument {
        keyword: &'static str,
        what: &'static str,
    },

    #[error("OOPS!!! I'm sorry, but I don't know what '{0}' means :-(")]
    UnknownCommand(String),

    #[error("OOPS!!! I couldn't access your saved tasks: {0}")]
    Storage(String),

    #[error("OOPS!!! I couldn't read your input: {0}")]
    Input(String),
}

impl From<std::io::Error> for EchonError {
    fn from(err: std::io::Error) -> Self {
        EchonError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for EchonError {
    fn from(err: serde_json::Error) -> Self {
        EchonError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EchonError>;
