use crate::{config::BridgeConfig, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};
use tracing::debug;

/// One tokenized request, batch dimension of size one.
///
/// Serializes to the wire shape
/// `{"input_ids": [[...]], "attention_mask": [[...]]}`. Both fields always
/// have identical shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoded {
    pub input_ids: Vec<Vec<u32>>,
    pub attention_mask: Vec<Vec<u32>>,
}

/// Pretrained tokenizer loaded from local artifacts, configured for
/// pad-to-longest padding and silent truncation at the configured maximum
/// sequence length.
pub struct TextTokenizer {
    inner: Tokenizer,
    add_special_tokens: bool,
}

impl TextTokenizer {
    /// Load serialized tokenizer artifacts from `config.model_path`, either a
    /// directory containing `tokenizer.json` or the JSON file itself.
    pub fn load(config: &BridgeConfig) -> Result<Self> {
        let path = Path::new(&config.model_path);
        let file = if path.is_dir() {
            path.join("tokenizer.json")
        } else {
            path.to_path_buf()
        };

        debug!("Loading tokenizer from: {}", file.display());

        let inner = Tokenizer::from_file(&file).map_err(|e| {
            Error::model_load(format!(
                "cannot load tokenizer from '{}': {}",
                file.display(),
                e
            ))
        })?;

        Self::from_tokenizer(inner, config)
    }

    /// Wrap an already-constructed tokenizer, installing the padding and
    /// truncation behavior this crate guarantees.
    pub fn from_tokenizer(mut inner: Tokenizer, config: &BridgeConfig) -> Result<Self> {
        inner.with_padding(Some(PaddingParams {
            strategy: PaddingStrategy::BatchLongest,
            ..Default::default()
        }));
        inner
            .with_truncation(Some(TruncationParams {
                max_length: config.max_length,
                ..Default::default()
            }))
            .map_err(|e| Error::model_load(format!("invalid truncation parameters: {e}")))?;

        Ok(Self {
            inner,
            add_special_tokens: config.add_special_tokens,
        })
    }

    /// Tokenize one piece of text into a single-item batch.
    pub fn encode(&self, text: &str) -> Result<Encoded> {
        let encoding = self
            .inner
            .encode(text, self.add_special_tokens)
            .map_err(|e| Error::tokenization(e.to_string()))?;

        Ok(Encoded {
            input_ids: vec![encoding.get_ids().to_vec()],
            attention_mask: vec![encoding.get_attention_mask().to_vec()],
        })
    }
}
