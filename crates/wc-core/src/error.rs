use thiserror::Error;

pub type WcResult<T> = Result<T, WcError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WcError {
    #[error("Empty word has no transition letters")]
    EmptyWord,

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
