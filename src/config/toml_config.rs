use crate::core::store::{DEFAULT_DATA_KEY, DEFAULT_DEMO_MODE_KEY};
use crate::core::ConfigProvider;
use crate::utils::error::{PawPlanError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: StorageConfig,
    pub share: Option<ShareConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
    pub data_key: Option<String>,
    pub demo_mode_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    pub origin: String,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PawPlanError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PAWPLAN_DATA_DIR})，找不到的變數保留原文
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let data_dir = validation::validate_required_field("storage.data_dir", &self.storage.data_dir)?;
        validation::validate_path("storage.data_dir", data_dir)?;
        validation::validate_storage_key("storage.data_key", self.data_key())?;
        validation::validate_storage_key("storage.demo_mode_key", self.demo_mode_key())?;

        if self.data_key() == self.demo_mode_key() {
            return Err(PawPlanError::InvalidConfigValueError {
                field: "storage.demo_mode_key".to_string(),
                value: self.demo_mode_key().to_string(),
                reason: "Must differ from storage.data_key".to_string(),
            });
        }

        validation::validate_url("share.origin", self.share_origin())?;
        Ok(())
    }

    pub fn data_key(&self) -> &str {
        self.storage.data_key.as_deref().unwrap_or(DEFAULT_DATA_KEY)
    }

    pub fn demo_mode_key(&self) -> &str {
        self.storage
            .demo_mode_key
            .as_deref()
            .unwrap_or(DEFAULT_DEMO_MODE_KEY)
    }

    pub fn share_origin(&self) -> &str {
        self.share
            .as_ref()
            .map(|s| s.origin.as_str())
            .unwrap_or(DEFAULT_SHARE_ORIGIN)
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &str {
        // validate_config rejects a missing data_dir
        self.storage.data_dir.as_deref().unwrap_or("")
    }

    fn data_key(&self) -> &str {
        self.data_key()
    }

    fn demo_mode_key(&self) -> &str {
        self.demo_mode_key()
    }

    fn share_origin(&self) -> &str {
        self.share_origin()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
