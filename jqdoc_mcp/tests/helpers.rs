//! Shared test helpers for jqdoc_mcp tests.

#![allow(dead_code)]

use std::fs;

use jqdoc_core::loader::DataDir;
use rmcp::model::{CallToolResult, RawContent};
use tempfile::TempDir;

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Parse the text content as JSON.
pub fn get_json(result: &CallToolResult) -> serde_json::Value {
    serde_json::from_str(&get_text(result)).expect("Expected JSON content")
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

const ENDPOINTS_FIXTURE: &str = r#"{
  "endpoints": [
    {
      "name": "eq-master",
      "name_ja": "株式マスタ",
      "name_en": "Equity Master",
      "path": "/equities/master",
      "method": "GET",
      "description": "上場銘柄の一覧を取得します。",
      "parameters": [
        {"name": "code", "type": "String", "required": false,
         "description": "銘柄コード", "location": "query"},
        {"name": "date", "type": "Date", "required": false,
         "description": "基準日付", "location": "query"},
        {"name": "pagination_key", "type": "String", "required": false,
         "description": "ページネーションキー", "location": "query"}
      ],
      "response": {
        "description": "銘柄一覧",
        "fields": [
          {"name": "Code", "type": "String", "description": "銘柄コード"},
          {"name": "Mkt", "type": "String", "description": "市場区分コード"}
        ]
      },
      "response_data_key": "master",
      "plan": ["standard"],
      "data_update": {"frequency": "日次", "time": "07:00"},
      "pagination": {"supported": true, "param": "pagination_key"}
    },
    {
      "name": "eq-bars-daily",
      "name_ja": "株価四本値",
      "name_en": "Daily Equity Bars",
      "path": "/equities/bars/daily",
      "path_old": "/prices/daily_quotes",
      "method": "GET",
      "description": "日次の株価四本値を取得します。",
      "parameters": [
        {"name": "code", "type": "String", "required": true,
         "description": "銘柄コード", "location": "query"},
        {"name": "from", "type": "Date", "required": false,
         "description": "取得開始日", "location": "query"},
        {"name": "to", "type": "Date", "required": false,
         "description": "取得終了日", "location": "query"},
        {"name": "pagination_key", "type": "String", "required": false,
         "description": "ページネーションキー", "location": "query"}
      ],
      "response": {
        "description": "四本値データ",
        "fields": [
          {"name": "Code", "type": "String", "description": "銘柄コード"},
          {"name": "Close", "type": "Number", "description": "終値"}
        ]
      },
      "response_data_key": "bars",
      "plan": ["standard"],
      "data_update": {"frequency": "日次", "time": "18:00"},
      "pagination": {"supported": true, "param": "pagination_key"}
    },
    {
      "name": "auth-user",
      "name_ja": "ユーザ認証",
      "name_en": "User Authentication",
      "path": "/auth/user",
      "method": "POST",
      "description": "リフレッシュトークンを取得します。",
      "auth_required": false,
      "parameters": [
        {"name": "mailaddress", "type": "String", "required": true,
         "description": "登録メールアドレス", "location": "body"},
        {"name": "password", "type": "String", "required": true,
         "description": "パスワード", "location": "body"}
      ],
      "response": {
        "description": "リフレッシュトークン",
        "fields": [
          {"name": "refreshToken", "type": "String", "description": "リフレッシュトークン"}
        ]
      },
      "response_data_key": "refreshToken",
      "plan": ["standard"],
      "data_update": {"frequency": "不定期", "time": "-"}
    }
  ]
}"#;

const REFERENCE_DATA_FIXTURE: &str = r#"{
  "reference_data": [
    {
      "name": "market_codes",
      "description": "市場区分コードの一覧",
      "fields": [
        {"name": "Code", "type": "String", "description": "市場区分コード"},
        {"name": "Name", "type": "String", "description": "市場区分名"}
      ],
      "related_properties": [
        {"property": "Mkt", "endpoint": "eq-master", "direction": "response"}
      ],
      "reference_data": [
        {"Code": "0111", "Name": "プライム"},
        {"Code": "0112", "Name": "スタンダード"}
      ]
    }
  ]
}"#;

const FAQ_FIXTURE: &str = r#"{
  "faqs": [
    {
      "category": "認証",
      "question": "認証方法は?",
      "answer": "x-api-keyヘッダにIDトークンを設定してください。",
      "keywords": ["認証", "APIキー", "IDトークン"],
      "related_endpoints": ["auth-user"]
    },
    {
      "category": "レート制限",
      "question": "レート制限はありますか?",
      "answer": "429が返ったらRetry-Afterに従って待機してください。",
      "keywords": ["レート制限", "429"],
      "related_endpoints": []
    }
  ]
}"#;

const PATTERNS_FIXTURE: &str = r#"{
  "patterns": [
    {
      "pattern_name": "pagination",
      "description": "全件取得のループ処理",
      "related_endpoints": ["eq-bars-daily"],
      "notes": ["レート制限に注意"],
      "sample_code_path": "patterns/pagination.py"
    },
    {
      "pattern_name": "broken",
      "description": "サンプルファイルが存在しないパターン",
      "sample_code_path": "patterns/missing.py"
    },
    {
      "pattern_name": "plain",
      "description": "サンプルコードなしのパターン"
    }
  ]
}"#;

const SAMPLE_CODE_FIXTURE: &str = "print('pagination sample')\n";

/// Create a data directory populated with the test catalog documents.
///
/// Returns the TempDir (must be kept alive) and a DataDir pointing at it.
pub fn fixture_data_dir() -> (TempDir, DataDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");

    fs::write(dir.path().join("endpoints.json"), ENDPOINTS_FIXTURE).unwrap();
    fs::write(dir.path().join("reference_data.json"), REFERENCE_DATA_FIXTURE).unwrap();
    fs::write(dir.path().join("faq.json"), FAQ_FIXTURE).unwrap();
    fs::write(dir.path().join("patterns.json"), PATTERNS_FIXTURE).unwrap();

    let templates = dir.path().join("templates");
    fs::create_dir_all(templates.join("patterns")).unwrap();
    fs::write(templates.join("patterns/pagination.py"), SAMPLE_CODE_FIXTURE).unwrap();

    let data_dir = DataDir::new(dir.path(), templates);
    (dir, data_dir)
}

/// A data directory pointing at an empty location, for load-failure tests.
pub fn empty_data_dir() -> (TempDir, DataDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let data_dir = DataDir::new(dir.path(), dir.path().join("templates"));
    (dir, data_dir)
}
