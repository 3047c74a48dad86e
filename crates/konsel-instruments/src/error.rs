use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("incomplete response: {answered} of {required} questions answered")]
    IncompleteResponse { answered: usize, required: usize },

    #[error("question {index} is out of range (instrument has {item_count} questions)")]
    QuestionOutOfRange { index: usize, item_count: usize },
}
