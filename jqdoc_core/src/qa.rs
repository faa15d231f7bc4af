//! FAQ matching for free-text questions.
//!
//! Two scoring tiers: an entry whose FAQ question appears verbatim inside
//! the asked question scores 100; otherwise each of the entry's keywords
//! found in the question contributes 10. Ties keep FAQ declaration order
//! (the sort is stable), and the top three entries are returned.

use log::debug;
use serde::Serialize;
use serde_json::Value;

/// How many answers a match returns at most.
const MAX_ANSWERS: usize = 3;

const EXACT_MATCH_SCORE: u32 = 100;
const KEYWORD_SCORE: u32 = 10;

const NO_MATCH_SUGGESTION: &str = "No matching FAQ entry was found. Pick a question from the \
     available categories, or ask again with more specific keywords.";
const NO_MATCH_HINT: &str = "Example questions: '認証方法は?', 'レート制限について', \
     'トークンの有効期限', 'ページネーションの方法'";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QaAnswer {
    pub category: Value,
    pub question: Value,
    pub answer: Value,
    pub related_endpoints: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_keywords: Option<Vec<String>>,
}

/// Outcome of a question: either ranked answers or the category fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QaResponse {
    Matched {
        matched: bool,
        count: usize,
        answers: Vec<QaAnswer>,
    },
    Unmatched {
        matched: bool,
        suggestion: String,
        available_categories: Vec<String>,
        hint: String,
    },
}

struct ScoredEntry<'a> {
    score: u32,
    matched_keywords: Option<Vec<String>>,
    faq: &'a Value,
}

/// Match a question against the FAQ document.
pub fn answer_question(faqs: &Value, question: &str) -> QaResponse {
    debug!("answer_question: question='{}'", question);

    let question_lower = question.to_lowercase();
    let entries = faqs
        .get("faqs")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut scored = Vec::new();
    for faq in entries {
        let faq_question = faq
            .get("question")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_lowercase();

        if !faq_question.is_empty() && question_lower.contains(&faq_question) {
            scored.push(ScoredEntry {
                score: EXACT_MATCH_SCORE,
                matched_keywords: None,
                faq,
            });
            continue;
        }

        let keywords = faq
            .get("keywords")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let matched_keywords: Vec<String> = keywords
            .iter()
            .filter_map(Value::as_str)
            .filter(|kw| question_lower.contains(&kw.to_lowercase()))
            .map(str::to_string)
            .collect();

        if !matched_keywords.is_empty() {
            scored.push(ScoredEntry {
                score: KEYWORD_SCORE * matched_keywords.len() as u32,
                matched_keywords: Some(matched_keywords),
                faq,
            });
        }
    }

    // stable sort: ties keep FAQ declaration order
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    if scored.is_empty() {
        return QaResponse::Unmatched {
            matched: false,
            suggestion: NO_MATCH_SUGGESTION.to_string(),
            available_categories: collect_categories(entries),
            hint: NO_MATCH_HINT.to_string(),
        };
    }

    let answers: Vec<QaAnswer> = scored
        .into_iter()
        .take(MAX_ANSWERS)
        .map(|entry| QaAnswer {
            category: entry.faq.get("category").cloned().unwrap_or(Value::Null),
            question: entry.faq.get("question").cloned().unwrap_or(Value::Null),
            answer: entry.faq.get("answer").cloned().unwrap_or(Value::Null),
            related_endpoints: entry
                .faq
                .get("related_endpoints")
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
            matched_keywords: entry.matched_keywords,
        })
        .collect();

    QaResponse::Matched {
        matched: true,
        count: answers.len(),
        answers,
    }
}

/// All distinct FAQ categories, deduplicated in declaration order so the
/// fallback list is deterministic across calls.
fn collect_categories(entries: &[Value]) -> Vec<String> {
    let mut categories = Vec::new();
    for faq in entries {
        let category = faq.get("category").and_then(Value::as_str).unwrap_or("");
        if !categories.iter().any(|existing| existing == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn faqs() -> Value {
        json!({
            "faqs": [
                {
                    "category": "認証",
                    "question": "認証方法は?",
                    "answer": "APIキーをx-api-keyヘッダに設定してください。",
                    "keywords": ["認証", "APIキー", "ログイン"],
                    "related_endpoints": ["auth-refresh"]
                },
                {
                    "category": "レート制限",
                    "question": "レート制限はありますか?",
                    "answer": "429が返ったらRetry-Afterに従って待機してください。",
                    "keywords": ["レート制限", "429", "リトライ"],
                    "related_endpoints": []
                },
                {
                    "category": "ページネーション",
                    "question": "ページネーションの方法は?",
                    "answer": "pagination_keyが返らなくなるまで繰り返し取得します。",
                    "keywords": ["ページネーション", "pagination_key", "全件"],
                    "related_endpoints": ["eq-bars-daily"]
                },
                {
                    "category": "認証",
                    "question": "トークンの有効期限は?",
                    "answer": "IDトークンは24時間で失効します。",
                    "keywords": ["トークン", "有効期限", "失効"],
                    "related_endpoints": ["auth-refresh"]
                }
            ]
        })
    }

    #[test]
    fn test_exact_match_scores_highest() {
        let response = answer_question(&faqs(), "教えてください、認証方法は?");

        match response {
            QaResponse::Matched { count, answers, .. } => {
                assert!(count >= 1);
                assert_eq!(answers[0].category, json!("認証"));
                // exact-tier answers never carry matched keywords
                assert!(answers[0].matched_keywords.is_none());
            }
            QaResponse::Unmatched { .. } => panic!("expected a match"),
        }
    }

    #[test]
    fn test_keyword_match_records_keywords() {
        let response = answer_question(&faqs(), "429が出たときのリトライは?");

        match response {
            QaResponse::Matched { answers, .. } => {
                assert_eq!(answers[0].category, json!("レート制限"));
                let keywords = answers[0].matched_keywords.as_ref().unwrap();
                assert_eq!(keywords, &["429", "リトライ"]);
            }
            QaResponse::Unmatched { .. } => panic!("expected a match"),
        }
    }

    #[test]
    fn test_at_most_three_answers() {
        // touches a keyword of every entry
        let response = answer_question(
            &faqs(),
            "認証とレート制限とページネーションとトークンについて",
        );

        match response {
            QaResponse::Matched { count, answers, .. } => {
                assert_eq!(count, 3);
                assert_eq!(answers.len(), 3);
            }
            QaResponse::Unmatched { .. } => panic!("expected a match"),
        }
    }

    #[test]
    fn test_ties_keep_declaration_order() {
        let response = answer_question(&faqs(), "認証とレート制限とページネーション");

        match response {
            QaResponse::Matched { answers, .. } => {
                let categories: Vec<&Value> = answers.iter().map(|a| &a.category).collect();
                assert_eq!(
                    categories,
                    [&json!("認証"), &json!("レート制限"), &json!("ページネーション")]
                );
            }
            QaResponse::Unmatched { .. } => panic!("expected a match"),
        }
    }

    #[test]
    fn test_no_match_returns_categories() {
        let response = answer_question(&faqs(), "全く関係ない質問");

        match response {
            QaResponse::Unmatched {
                matched,
                available_categories,
                suggestion,
                hint,
            } => {
                assert!(!matched);
                // deduplicated, declaration order
                assert_eq!(available_categories, ["認証", "レート制限", "ページネーション"]);
                assert!(!suggestion.is_empty());
                assert!(!hint.is_empty());
            }
            QaResponse::Matched { .. } => panic!("expected no match"),
        }
    }

    #[test]
    fn test_no_match_is_deterministic() {
        let first = answer_question(&faqs(), "全く関係ない質問");
        let second = answer_question(&faqs(), "全く関係ない質問");
        assert_eq!(first, second);
    }
}
