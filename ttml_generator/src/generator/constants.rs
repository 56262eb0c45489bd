//! # TTML 生成器 - 常量定义
//!
//! 该模块包含了生成文档时用到的命名空间、标签、属性以及广播规范下的固定取值。

pub(super) const NS_TT: &str = "http://www.w3.org/ns/ass";
pub(super) const NS_TTS: &str = "http://www.w3.org/ns/ass#styling";
pub(super) const NS_TTP: &str = "http://www.w3.org/ns/ass#parameter";
pub(super) const NS_TTM: &str = "http://www.w3.org/ns/ass#metadata";
pub(super) const NS_EBUTTM: &str = "urn:ebu:tt:metadata";
pub(super) const NS_EBUTTS: &str = "urn:ebu:tt:style";
pub(super) const NS_SMPTE: &str = "http://www.smpte-ra.org/schemas/2052-1/2010/smpte-tt";

pub(super) const TAG_TT: &str = "tt";
pub(super) const TAG_HEAD: &str = "head";
pub(super) const TAG_METADATA: &str = "metadata";
pub(super) const TAG_STYLING: &str = "styling";
pub(super) const TAG_STYLE: &str = "style";
pub(super) const TAG_LAYOUT: &str = "layout";
pub(super) const TAG_REGION: &str = "region";
pub(super) const TAG_IMAGE: &str = "smpte:image";
pub(super) const TAG_BODY: &str = "body";
pub(super) const TAG_DIV: &str = "div";
pub(super) const TAG_P: &str = "p";
pub(super) const TAG_SPAN: &str = "span";
pub(super) const TAG_BR: &str = "br";

pub(super) const ATTR_XML_ID: &str = "xml:id";
pub(super) const ATTR_XML_LANG: &str = "xml:lang";
pub(super) const ATTR_XML_SPACE: &str = "xml:space";
pub(super) const ATTR_BEGIN: &str = "begin";
pub(super) const ATTR_END: &str = "end";
pub(super) const ATTR_REGION: &str = "region";
pub(super) const ATTR_STYLE: &str = "style";
pub(super) const ATTR_ORIGIN: &str = "tts:origin";
pub(super) const ATTR_EXTENT: &str = "tts:extent";
pub(super) const ATTR_OVERFLOW: &str = "tts:overflow";
pub(super) const ATTR_WRITING_MODE: &str = "tts:writingMode";
pub(super) const ATTR_TEXT_ALIGN: &str = "tts:textAlign";
pub(super) const ATTR_FONT_WEIGHT: &str = "tts:fontWeight";
pub(super) const ATTR_FONT_STYLE: &str = "tts:fontStyle";
pub(super) const ATTR_TEXT_DECORATION: &str = "tts:textDecoration";
pub(super) const ATTR_COLOR: &str = "tts:color";
pub(super) const ATTR_BACKGROUND_COLOR: &str = "tts:backgroundColor";
pub(super) const ATTR_BACKGROUND_IMAGE: &str = "smpte:backgroundImage";

pub(super) const AUTO_REGION_PREFIX: &str = "_shaka_region_";
pub(super) const TELETEXT_REGION_PREFIX: &str = "ttx_";
pub(super) const IMAGE_ID_PREFIX: &str = "img_";
pub(super) const DEFAULT_STYLE_ID: &str = "default";

/// 广播规范根元素上追加的属性，按输出顺序排列。
pub(super) const BROADCAST_ROOT_ATTRS: [(&str, &str); 7] = [
    ("xmlns:ttp", NS_TTP),
    ("xmlns:ttm", NS_TTM),
    ("xmlns:ebuttm", NS_EBUTTM),
    ("xmlns:ebutts", NS_EBUTTS),
    (ATTR_XML_SPACE, "default"),
    ("ttp:timeBase", "media"),
    ("ttp:cellResolution", "32 15"),
];

/// 广播规范下 `default` 样式的固定属性。
pub(super) const DEFAULT_STYLE_ATTRS: [(&str, &str); 6] = [
    (ATTR_FONT_STYLE, "normal"),
    ("tts:fontFamily", "sansSerif"),
    ("tts:fontSize", "100%"),
    ("tts:lineHeight", "normal"),
    (ATTR_TEXT_ALIGN, "center"),
    ("ebutts:linePadding", "0.5c"),
];
