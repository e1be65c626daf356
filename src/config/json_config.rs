use crate::utils::error::{DirectoryError, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Opaque configuration blob. The directory stores it without looking inside.
pub type ConfigMap = Map<String, Value>;

/// 從 JSON 檔案載入配置
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConfigMap> {
    let path = path.as_ref();
    tracing::debug!("Loading config from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(DirectoryError::IoError)?;
    parse_config(&content)
}

/// 從 JSON 字串解析配置；頂層必須是物件
pub fn parse_config(content: &str) -> Result<ConfigMap> {
    let config: ConfigMap = serde_json::from_str(content)?;
    Ok(config)
}
