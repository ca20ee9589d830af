use crate::models::mod_dto::ModId;
use derive_more::Display;

#[derive(Debug, Display)]
pub enum SError {
    #[display("not found: {_0}")]
    NotFound(String),
    #[display("unknown state key '{_0}'")]
    UnknownKey(String),
    #[display("I/O error: {_0}")]
    IOError(String),
    #[display("corrupt state file: {_0}")]
    Corrupt(String),
    #[display("parse error: {_0}")]
    ParseError(String),
    #[display("the game is running, close it first")]
    GameRunning,
    #[display("can't run the game: {_0}")]
    Launch(String),
    #[display("can't apply {_0}: {_1}")]
    ModFailed(ModId, Box<SError>),
    #[display("config applied but state was not saved: {_0}")]
    StateNotSaved(Box<SError>),
}

impl SError {
    /// True when a failed apply may have left config files out of step
    /// with the persisted state.
    pub fn may_be_inconsistent(&self) -> bool {
        matches!(self, SError::ModFailed(..) | SError::StateNotSaved(_))
    }
}

impl std::error::Error for SError {}

impl From<std::io::Error> for SError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => SError::NotFound(e.to_string()),
            _ => SError::IOError(e.to_string()),
        }
    }
}

impl From<walkdir::Error> for SError {
    fn from(e: walkdir::Error) -> Self {
        match e.into_io_error() {
            Some(io) => io.into(),
            None => SError::IOError("filesystem loop detected".to_string()),
        }
    }
}

impl From<std::path::StripPrefixError> for SError {
    fn from(e: std::path::StripPrefixError) -> Self {
        SError::ParseError(e.to_string())
    }
}

impl From<bincode::Error> for SError {
    fn from(e: bincode::Error) -> Self {
        SError::Corrupt(e.to_string())
    }
}

impl From<confy::ConfyError> for SError {
    fn from(e: confy::ConfyError) -> Self {
        SError::IOError(e.to_string())
    }
}
