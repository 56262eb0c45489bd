use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{GeneratorError, RegionTable};

/// 文档生成器的初始化参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct GeneratorConfig {
    /// 写入根元素 `xml:lang` 的语言标签，允许为空。
    pub language: String,
    /// 每秒的 tick 数，例如 1000 表示以毫秒计时。
    pub time_scale: u32,
    /// 在头部声明的具名区域。
    pub regions: RegionTable,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            language: String::new(),
            time_scale: 1000,
            regions: RegionTable::new(),
        }
    }
}

impl GeneratorConfig {
    /// 从 TOML 文本读取配置，缺失的字段使用默认值。
    ///
    /// # Errors
    ///
    /// TOML 语法错误或字段类型不匹配时返回 `GeneratorError::Config`。
    pub fn from_toml_str(content: &str) -> Result<Self, GeneratorError> {
        let config: Self = toml::from_str(content)?;
        debug!(
            language = %config.language,
            time_scale = config.time_scale,
            regions = config.regions.len(),
            "已加载生成器配置"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TextNumber, TextUnit};

    #[test]
    fn test_parse_full_config() {
        let content = r#"
language = "en"
time_scale = 90000

[regions.bottom]
width = { value = 80.0, unit = "%" }
height = { value = 20.0, unit = "%" }
window_anchor_x = { value = 10.0, unit = "%" }
window_anchor_y = { value = 70.0, unit = "px" }
"#;
        let config = GeneratorConfig::from_toml_str(content).unwrap();
        assert_eq!(config.language, "en");
        assert_eq!(config.time_scale, 90000);
        let bottom = &config.regions["bottom"];
        assert_eq!(bottom.width, TextNumber::percent(80.0));
        assert_eq!(bottom.window_anchor_y.unit, TextUnit::Pixels);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = GeneratorConfig::from_toml_str("language = \"fr\"").unwrap();
        assert_eq!(config.time_scale, 1000);
        assert!(config.regions.is_empty());

        let config = GeneratorConfig::from_toml_str("[regions.top]").unwrap();
        assert_eq!(config.regions["top"].width, TextNumber::percent(100.0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = GeneratorConfig::from_toml_str("time_scale = \"fast\"").unwrap_err();
        assert!(matches!(err, GeneratorError::Config(_)));
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfigBuilder::default()
            .language("de")
            .build()
            .unwrap();
        assert_eq!(config.language, "de");
        assert_eq!(config.time_scale, 1000);
    }
}
