use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is full (limit: {capacity})")]
    Full { capacity: usize },

    #[error("queue is empty")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid piece kind {input:?}, expected one of I, O, T, L")]
pub struct ParseKindError {
    pub input: String,
}
