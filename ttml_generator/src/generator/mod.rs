//! # 定时文本文档生成器
//!
//! 调用方先用区域表、语言和时间刻度初始化生成器，然后逐条添加提示，
//! 最后一次性输出整篇文档。输出之后可以 `reset` 并开始下一篇文档。

mod body;
mod constants;
mod fragment;
mod head;
mod profile;
mod utils;
mod writer;


use std::num::NonZeroU32;

use timed_text_core::{Cue, GeneratorConfig, GeneratorError, RegionTable};
use tracing::{debug, trace};

use self::{constants::TAG_TT, profile::DocumentProfile, writer::DocumentWriter};

/// `initialize` 时固定下来的文档参数，`reset` 不会清除。
#[derive(Debug, Clone, PartialEq)]
struct DocumentContext {
    regions: RegionTable,
    language: String,
    time_scale: u32,
}

/// 渲染阶段共享的只读状态。
pub(super) struct RenderContext<'a> {
    regions: &'a RegionTable,
    language: &'a str,
    time_scale: NonZeroU32,
    profile: &'a DocumentProfile,
}

/// 累积提示并按需输出完整文档的生成器。
///
/// 生成器本身不做任何同步，多个生产者并发写入时由调用方负责加锁。
#[derive(Debug, Clone, Default)]
pub struct TtmlGenerator {
    context: Option<DocumentContext>,
    cues: Vec<Cue>,
}

impl TtmlGenerator {
    /// 创建一个尚未初始化的生成器。
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 按配置创建并初始化生成器。
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut generator = Self::new();
        generator.initialize_with_config(config);
        generator
    }

    /// 设置区域表、语言和时间刻度，并清空已累积的提示。
    ///
    /// 可以多次调用，每次调用都开始一个新的文档上下文。
    pub fn initialize(&mut self, regions: RegionTable, language: impl Into<String>, time_scale: u32) {
        let language = language.into();
        debug!(
            language = %language,
            time_scale,
            regions = regions.len(),
            "初始化文档生成器"
        );
        self.context = Some(DocumentContext {
            regions,
            language,
            time_scale,
        });
        self.cues.clear();
    }

    /// 按配置执行 `initialize`。
    pub fn initialize_with_config(&mut self, config: &GeneratorConfig) {
        self.initialize(
            config.regions.clone(),
            config.language.clone(),
            config.time_scale,
        );
    }

    /// 按调用顺序追加一条提示，不会按时间重新排序。
    pub fn add_cue(&mut self, cue: Cue) {
        trace!(id = %cue.id, start = cue.start, end = cue.end, "添加提示");
        self.cues.push(cue);
    }

    /// 清空已累积的提示，为下一篇文档做准备。
    ///
    /// 区域表、语言和时间刻度保持不变；自动生成的区域与图像编号在下一篇文档中从头开始。
    pub fn reset(&mut self) {
        debug!(discarded = self.cues.len(), "重置文档生成器");
        self.cues.clear();
    }

    /// 将当前累积的全部状态序列化为一篇完整的文档。
    ///
    /// 该方法不修改状态，重复调用得到完全相同的输出。
    ///
    /// # Errors
    ///
    /// * `GeneratorError::NotInitialized` - 尚未调用 `initialize`。
    /// * `GeneratorError::InvalidTimeScale` - 时间刻度为 0。
    /// * `GeneratorError::InvalidFragment` - 图像出现在嵌套片段中。
    /// * 写入 XML 或转换 UTF-8 失败时返回对应的错误。
    pub fn dump(&self) -> Result<String, GeneratorError> {
        let context = self.context.as_ref().ok_or(GeneratorError::NotInitialized)?;
        let time_scale = NonZeroU32::new(context.time_scale)
            .ok_or(GeneratorError::InvalidTimeScale(context.time_scale))?;

        let profile = DocumentProfile::scan(&self.cues)?;
        let ctx = RenderContext {
            regions: &context.regions,
            language: &context.language,
            time_scale,
            profile: &profile,
        };

        let mut writer = DocumentWriter::new();
        writer.declaration()?;
        head::write_root_start(&mut writer, &ctx)?;
        head::write_ttml_head(&mut writer, &self.cues, &ctx)?;
        body::write_ttml_body(&mut writer, &self.cues, &ctx)?;
        writer.close_line(0, TAG_TT)?;
        let document = writer.into_string()?;

        debug!(
            cues = self.cues.len(),
            broadcast = profile.broadcast,
            bytes = document.len(),
            "文档已生成"
        );
        Ok(document)
    }

    /// 已累积的提示，按添加顺序排列。
    #[must_use]
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    #[must_use]
    pub fn cue_count(&self) -> usize {
        self.cues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.context.is_some()
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.context.as_ref().map(|c| c.language.as_str())
    }

    #[must_use]
    pub fn time_scale(&self) -> Option<u32> {
        self.context.as_ref().map(|c| c.time_scale)
    }

    #[must_use]
    pub fn regions(&self) -> Option<&RegionTable> {
        self.context.as_ref().map(|c| &c.regions)
    }
}
