use highs::{HighsModelStatus, HighsStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: {source}")]
    Parse { line: usize, source: ParseError },

    #[error("machine {machine}: {source}")]
    Machine { machine: usize, source: Box<Error> },

    #[error("shape mismatch: A has {rows} rows but b has length {len}")]
    ShapeMismatch { rows: usize, len: usize },

    #[error("button {button} references counter {index}, but there are only {counters}")]
    IndexOutOfRange {
        button: usize,
        index: usize,
        counters: usize,
    },

    #[error("problem status: {0:?}")]
    NotOptimal(HighsModelStatus),

    #[error("solver failed: {0:?}")]
    Solver(HighsStatus),

    #[error("rounded solution does not satisfy Ax = b")]
    Inexact,

    #[error("light pattern {0} cannot be reached")]
    Unreachable(String),

    #[error("wrong answer (expected {expected}, had {actual})")]
    ChecksumMismatch { expected: u64, actual: u64 },

    #[error("no coordinates to plot")]
    Empty,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} but found `{token}`")]
    Delimiters { expected: &'static str, token: String },

    #[error("invalid number `{0}`")]
    Number(String),

    #[error("invalid light `{0}`, expected `.` or `#`")]
    Light(char),

    #[error("at most 64 lights are supported, found {0}")]
    TooManyLights(usize),

    #[error("button index {index} is outside {len} lights")]
    LightOutOfRange { index: usize, len: usize },

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("expected `POS` or `POS:COLOR`, found `{0}`")]
    ReferenceLine(String),
}

impl ParseError {
    pub fn at(self, line: usize) -> Error {
        Error::Parse { line, source: self }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
