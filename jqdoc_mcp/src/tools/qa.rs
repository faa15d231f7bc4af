//! FAQ question-answering tool.

use jqdoc_core::errors::internal_error;
use jqdoc_core::loader::DataDir;
use jqdoc_core::qa::answer_question;
use log::debug;
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::{error_result, require_non_blank, success_json};

/// Parameters for the answer_question tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnswerQuestionParams {
    /// A free-text usage question (e.g. "認証方法は?", "レート制限について").
    pub question: String,
}

/// Execute the answer_question tool.
pub fn execute(data: &DataDir, params: &AnswerQuestionParams) -> CallToolResult {
    debug!("Tool: answer_question, question='{}'", params.question);

    let question = match require_non_blank("question", &params.question) {
        Ok(question) => question,
        Err(payload) => return error_result(&payload),
    };

    let faqs = match data.load_faqs() {
        Ok(faqs) => faqs,
        Err(e) => {
            return error_result(&internal_error(
                "question answering",
                e.kind_name(),
                &e.to_string(),
            ));
        }
    };

    success_json(&answer_question(&faqs, &question))
}
