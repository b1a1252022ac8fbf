//! JSON file helpers

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::error::Result;

/// Reads and parses `file` inside `dir`.
///
/// An empty `dir` means the working directory.
pub fn load_json<T: DeserializeOwned>(file: &str, dir: impl AsRef<Path>) -> Result<T> {
    let reader = BufReader::new(File::open(dir.as_ref().join(file))?);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes `data` as JSON, indented by four spaces, to `file` inside `dir`.
///
/// `dir` is created first when it does not exist yet.
pub fn save_json<T: Serialize + ?Sized>(file: &str, data: &T, dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let mut writer = BufWriter::new(File::create(dir.join(file))?);
    let mut serializer = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    data.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}
