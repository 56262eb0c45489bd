pub mod cue;
pub mod fragment;
pub mod region;
