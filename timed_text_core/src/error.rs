use std::io;

use thiserror::Error;

/// 定义生成定时文本文档过程中可能发生的各种错误。
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// 写入缓冲区时的 IO 错误。
    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),
    /// 从字节序列转换为 UTF-8 字符串失败。
    #[error("UTF-8 转换错误: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
    /// 在调用 `initialize` 之前请求了文档输出。
    #[error("生成器尚未初始化")]
    NotInitialized,
    /// 时间刻度必须为正整数。
    #[error("无效的时间刻度: {0}")]
    InvalidTimeScale(u32),
    /// 提示内容的结构不一致，例如图像出现在嵌套片段中。
    #[error("无效的文本片段: {0}")]
    InvalidFragment(String),
    /// 配置文本解析失败。
    #[error("解析配置失败: {0}")]
    Config(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_failure() -> Result<(), GeneratorError> {
        let written: io::Result<()> = Err(io::Error::other("写入失败"));
        written?;
        Ok(())
    }

    #[test]
    fn test_writer_failures_map_to_io() {
        let err = write_failure().unwrap_err();
        assert!(matches!(err, GeneratorError::Io(_)));
        assert_eq!(err.to_string(), "IO 错误: 写入失败");
    }
}
