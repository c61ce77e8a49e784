use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// True when `word` occurs in `line` as a standalone token, with token
/// characters being alphanumerics and underscore.
pub fn contains_word(line: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut token = String::new();
    for ch in line.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            token.push(ch);
        } else if !token.is_empty() {
            if token == word {
                return true;
            }
            token.clear();
        }
    }
    token == word
}
