//! Utility Module
//!
//! Stateless helpers for files, JSON, CSV, Markdown, timestamps and random
//! strings.

pub mod csv;
pub mod fs;
pub mod json;
pub mod markdown;
pub mod misc;

pub use self::csv::{parse_csv, write_csv, CsvReader, CsvWriter};
pub use fs::{cur_dir, read_file, write_file};
pub use json::{load_json, save_json};
pub use markdown::{load_emojis, render_markdown, render_markdown_from_file, Emoji};
pub use misc::{random_hex, timestamp};
