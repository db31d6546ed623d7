pub mod dto;
pub mod implementation;

pub use dto::{AnswerQuestionInput, FetchAndIndexInput};
pub use implementation::{
    pool_document, RecentPoolTools, ANSWER_QUESTION, FETCH_AND_INDEX_DATA, NO_INDEX_MESSAGE,
};
