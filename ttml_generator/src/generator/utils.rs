//! # TTML 生成器 - 工具函数模块
//!
//! 该模块提供了 TTML 生成过程中所需的各种辅助函数。

use std::num::NonZeroU32;

use timed_text_core::TextNumber;

/// 按时间刻度把 tick 换算为毫秒，四舍五入到整数。
pub(super) fn ticks_to_ms(ticks: u64, time_scale: NonZeroU32) -> u64 {
    let scale = u128::from(time_scale.get());
    let ms = (u128::from(ticks) * 1000 + scale / 2) / scale;
    u64::try_from(ms).unwrap_or(u64::MAX)
}

/// 将毫秒时间戳格式化为定宽的时间字符串。
/// 例如：3723456ms -> "01:02:03.456"
pub(super) fn format_ttml_time(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let millis = ms % 1000;

    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

/// 把一对尺寸格式化为 `tts:origin` / `tts:extent` 的取值。
pub(super) fn format_size_pair(x: TextNumber, y: TextNumber) -> String {
    format!("{x} {y}")
}
