use crate::{codec::CodecError, config::ConfigError, eval::EvalError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error for callers that mix config loading, JSON decoding,
/// and in-memory evaluation. The algebra combinators themselves are total
/// and never produce one.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    #[error("{0}")]
    Eval(#[from] EvalError),
}

impl Error {
    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::Config(_) => ErrorOrigin::Config,
            Self::Codec(_) => ErrorOrigin::Codec,
            Self::Eval(_) => ErrorOrigin::Eval,
        }
    }

    #[must_use]
    pub fn display_with_origin(&self) -> String {
        format!("{}: {self}", self.origin())
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Config,
    Codec,
    Eval,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::Codec => "codec",
            Self::Eval => "eval",
        };
        write!(f, "{label}")
    }
}
