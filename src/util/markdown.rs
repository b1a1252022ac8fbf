//! Markdown rendering with `:name:` emoji substitution

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use pulldown_cmark::{html::push_html, Event, Parser, TextMergeStream};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::util::{fs::read_file, json::load_json};

/// File holding the emoji list inside an emoji directory.
pub const EMOJI_FILE: &str = "emojis.json";

static EMOJI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(.*?):").expect("emoji pattern is valid"));

/// One emoji record as stored in `emojis.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub key: String,
    pub value: String,
}

/// Loads `emojis.json` from `dir` into a key to value map.
pub fn load_emojis(dir: impl AsRef<Path>) -> Result<HashMap<String, String>> {
    let emojis: Vec<Emoji> = load_json(EMOJI_FILE, dir)?;
    Ok(emojis.into_iter().map(|e| (e.key, e.value)).collect())
}

/// Replaces every `:name:` with its emoji; unknown names are dropped.
fn substitute_emojis(text: &str, emojis: &HashMap<String, String>) -> String {
    EMOJI_RE
        .replace_all(text, |caps: &Captures| {
            emojis.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// Renders Markdown to HTML, substituting emojis in text (not in code).
pub fn render_markdown(text: &str, emojis: &HashMap<String, String>) -> String {
    // Merged so a name split across text events still matches
    let events = TextMergeStream::new(Parser::new(text)).map(|event| match event {
        Event::Text(t) => Event::Text(substitute_emojis(&t, emojis).into()),
        other => other,
    });

    let mut html = String::new();
    push_html(&mut html, events);
    html
}

/// Reads a Markdown file and renders it to HTML.
pub fn render_markdown_from_file(
    path: impl AsRef<Path>,
    emojis: &HashMap<String, String>,
) -> Result<String> {
    Ok(render_markdown(&read_file(path)?, emojis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::util::json::save_json;

    fn emojis() -> HashMap<String, String> {
        HashMap::from([
            ("smile".to_string(), "😄".to_string()),
            ("heavy_check_mark".to_string(), "✔️".to_string()),
        ])
    }

    #[test]
    fn test_plain_markdown() {
        let html = render_markdown("# Title\n\nSome *text*.", &HashMap::new());
        assert_eq!(html, "<h1>Title</h1>\n<p>Some <em>text</em>.</p>\n");
    }

    #[test]
    fn test_known_emoji() {
        assert_eq!(render_markdown("Hi :smile:", &emojis()), "<p>Hi 😄</p>\n");
        assert_eq!(
            render_markdown("Done :heavy_check_mark:", &emojis()),
            "<p>Done ✔️</p>\n"
        );
    }

    #[test]
    fn test_unknown_emoji_is_dropped() {
        assert_eq!(render_markdown("a :nope: b", &emojis()), "<p>a  b</p>\n");
    }

    #[test]
    fn test_code_is_left_alone() {
        assert_eq!(
            render_markdown("`:smile:`", &emojis()),
            "<p><code>:smile:</code></p>\n"
        );
    }

    #[test]
    fn test_render_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readme.md");
        std::fs::write(&path, "**bold** :smile:").unwrap();

        let html = render_markdown_from_file(&path, &emojis()).unwrap();
        assert_eq!(html, "<p><strong>bold</strong> 😄</p>\n");
    }

    #[test]
    fn test_render_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = render_markdown_from_file(dir.path().join("absent.md"), &emojis());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_emojis() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![Emoji {
            key: "smile".to_string(),
            value: "😄".to_string(),
        }];
        save_json(EMOJI_FILE, &records, dir.path()).unwrap();

        let map = load_emojis(dir.path()).unwrap();
        assert_eq!(map.get("smile").map(String::as_str), Some("😄"));
        assert_eq!(map.len(), 1);
    }
}
