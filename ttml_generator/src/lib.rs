//! # TTML Generator: Timed-Text Cues to a Single XML Document
//!
//! This crate turns an ordered stream of caption cues (styled text, positioning and optional
//! embedded PNG images) into one TTML-style XML document. Documents render in one of two
//! profiles, chosen once per document:
//!
//! - **plain**: `xml:space="preserve"` paragraphs, inline `tts:*` styling and auto-generated
//!   `_shaka_region_<n>` regions for cues that carry raw geometry;
//! - **broadcast**: switched on as soon as any fragment sets a foreground or background color.
//!   It adds the EBU-TT-D namespaces and parameters, a deduplicated style table referenced by
//!   name, and `ttx_<line>` regions.
//!
//! The output is byte-exact: attribute order, indentation and escaping are part of the format.
//!
//! ## Examples
//!
//! ```rust
//! use timed_text_core::{Cue, RegionTable, TextFragment, TextSettings};
//! use ttml_generator::TtmlGenerator;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut generator = TtmlGenerator::new();
//!     generator.initialize(RegionTable::new(), "en", 1000);
//!
//!     generator.add_cue(Cue::new(
//!         "",
//!         5000,
//!         6000,
//!         TextSettings::default(),
//!         TextFragment::plain("payload"),
//!     ));
//!
//!     let document = generator.dump()?;
//!     assert!(document.contains(
//!         "<p xml:space=\"preserve\" begin=\"00:00:05.000\" end=\"00:00:06.000\">payload</p>"
//!     ));
//!
//!     // Persist `document`, then start over for the next output unit.
//!     generator.reset();
//!     assert!(generator.dump()?.contains("<div/>"));
//!
//!     Ok(())
//! }
//! ```

pub mod generator;
mod utils;

pub use generator::TtmlGenerator;
pub use utils::escape_xml;
