use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bridge: BridgeConfig,
    #[serde(default)]
    pub dump: DumpConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Local tokenizer directory (or a tokenizer.json path). Never fetched
    /// over the network at runtime.
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_add_special_tokens")]
    pub add_special_tokens: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            max_length: default_max_length(),
            add_special_tokens: default_add_special_tokens(),
        }
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_model_path() -> String {
    "mpnet_onnx".to_string()
}

fn default_max_length() -> usize {
    512
}

fn default_add_special_tokens() -> bool {
    true
}

fn default_output_path() -> String {
    "output.txt".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
