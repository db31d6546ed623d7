use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FetchAndIndexInput {
    #[serde(default)]
    pub user_input: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerQuestionInput {
    pub question: String,
}
