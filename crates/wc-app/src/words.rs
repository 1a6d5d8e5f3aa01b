//! Word-list input: console lines and plain-text files.

use std::path::Path;

use tracing::debug;

use crate::error::{AppError, AppResult};

/// Split a line of input into words on whitespace, commas and semicolons.
pub fn parse_line(line: &str) -> Vec<String> {
    line.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a whole word list. Lines starting with `#` are comments.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(parse_line)
        .collect()
}

/// Read a UTF-8 word-list file.
pub fn load_words(path: &Path) -> AppResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::WordListRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let words = parse_words(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_separators() {
        assert_eq!(
            parse_line("кот, топор;рак\tлес"),
            vec!["кот", "топор", "рак", "лес"]
        );
    }

    #[test]
    fn blank_line_has_no_words() {
        assert!(parse_line("  , ;  ").is_empty());
    }

    #[test]
    fn comments_are_skipped() {
        let text = "# animals\nкот топор\n  # more\nрак\n";
        assert_eq!(parse_words(text), vec!["кот", "топор", "рак"]);
    }

    #[test]
    fn missing_file_is_reported() {
        let result = load_words(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(AppError::WordListRead { .. })));
    }
}
