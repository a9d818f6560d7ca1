use crate::msg::Msg;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed label declaration: `{0}`")]
    MalformedLabel(String),

    #[error("Missing computation: `{0}`")]
    EmptyComp(String),

    #[error("Malformed instruction: `{0}`")]
    MalformedInstruction(String),

    #[error("Unknown computation: `{0}`")]
    UnknownComp(String),

    #[error("Unknown destination: `{0}`")]
    UnknownDest(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Address does not fit in a word: `{0}`")]
    AddressOverflow(String),

    #[error("line {}: {}", .0 + 1, .1)]
    At(usize, Box<Error>),

    #[error(transparent)]
    Table(#[from] arch::TableError),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol map")]
    SymbolMap(#[source] serde_yaml::Error),
}

impl Error {
    /// Attach the 0-based source line index.
    pub fn at(self, line_idx: usize) -> Error {
        match self {
            Error::At(..) => self,
            _ => Error::At(line_idx, Box::new(self)),
        }
    }

    /// The error without its location.
    pub fn kind(&self) -> &Error {
        match self {
            Error::At(_, inner) => inner.kind(),
            _ => self,
        }
    }

    pub fn line_idx(&self) -> Option<usize> {
        match self {
            Error::At(idx, _) => Some(*idx),
            _ => None,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, source: &[String]) {
        let msg = Msg::Error(self.kind().to_string());
        match self.line_idx() {
            Some(idx) => {
                let raw = source.get(idx).map(|s| s.as_str()).unwrap_or("");
                msg.print((file, idx + 1, raw));
            }
            None => msg.print_bare(),
        }

        let mut cause = std::error::Error::source(self.kind());
        while let Some(err) = cause {
            Msg::Note(err.to_string()).print_bare();
            cause = std::error::Error::source(err);
        }
    }
}
