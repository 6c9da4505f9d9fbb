use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vecx_tools::{bridge::BridgeSession, config::BridgeConfig, tokenizer::TextTokenizer};

/// Fixed ids of the fixture vocabulary, BERT convention.
pub const PAD_ID: u32 = 0;
pub const UNK_ID: u32 = 1;
pub const CLS_ID: u32 = 101;
pub const SEP_ID: u32 = 102;
pub const HELLO_ID: u32 = 104;
pub const WORLD_ID: u32 = 105;

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// A small word-level tokenizer in HuggingFace tokenizer.json format,
/// hand-written so tests need no model download and no network.
pub fn fixture_tokenizer_json() -> serde_json::Value {
    json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0,   "content": "[PAD]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 1,   "content": "[UNK]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 101, "content": "[CLS]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 102, "content": "[SEP]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 103, "content": "[MASK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": {
            "type": "BertNormalizer",
            "clean_text": true,
            "handle_chinese_chars": true,
            "strip_accents": null,
            "lowercase": true
        },
        "pre_tokenizer": {
            "type": "Whitespace"
        },
        "post_processor": {
            "type": "BertProcessing",
            "sep": ["[SEP]", 102],
            "cls": ["[CLS]", 101]
        },
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": {
                "[PAD]":  0,
                "[UNK]":  1,
                "[CLS]":  101,
                "[SEP]":  102,
                "[MASK]": 103,
                "hello":     104,
                "world":     105,
                "tokenizer": 106,
                "bridge":    107,
                "line":      108,
                "protocol":  109,
                "rust":      110
            },
            "unk_token": "[UNK]"
        }
    })
}

/// Write the fixture tokenizer into `dir` and return the tokenizer.json path
pub fn write_fixture_tokenizer(dir: &Path) -> PathBuf {
    let path = dir.join("tokenizer.json");
    let pretty = serde_json::to_string_pretty(&fixture_tokenizer_json())
        .expect("fixture JSON should serialize");
    std::fs::write(&path, pretty).expect("Failed to write fixture tokenizer");
    path
}

/// Create a bridge configuration pointing at `model_path`
pub fn fixture_bridge_config(model_path: impl Into<String>) -> BridgeConfig {
    BridgeConfig {
        model_path: model_path.into(),
        max_length: 512,
        add_special_tokens: true,
    }
}

/// Create a ready session backed by the fixture tokenizer
pub fn fixture_session() -> BridgeSession {
    fixture_session_with_max_length(512)
}

/// Same, with a custom truncation ceiling
pub fn fixture_session_with_max_length(max_length: usize) -> BridgeSession {
    let dir = create_temp_dir();
    let json_path = write_fixture_tokenizer(dir.path());
    let mut config = fixture_bridge_config(json_path.to_string_lossy().to_string());
    config.max_length = max_length;
    let tokenizer = TextTokenizer::load(&config).expect("fixture tokenizer should load");
    BridgeSession::from_tokenizer(tokenizer).expect("fresh session should reach ready")
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
bridge:
  model_path: "models/mpnet"
  max_length: 256
  add_special_tokens: true

dump:
  output_path: "tree.txt"

logs:
  level: "debug"
"#;

/// Partial configuration YAML; everything omitted must fall back to defaults
pub const PARTIAL_CONFIG_YAML: &str = r#"
bridge:
  model_path: "somewhere/else"
"#;
