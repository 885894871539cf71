//! Word lists for offline play
//!
//! `ANSWERS` holds the words that can be drawn as the word of the day;
//! `ALLOWED` holds further words accepted only as guesses. Both are
//! generated by the build script from `data/` and stored uppercase.

pub mod loader;

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
