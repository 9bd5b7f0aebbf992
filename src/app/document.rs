//! The page being presented: a title plus pre-split text lines.

use std::path::Path;

use anyhow::Context;

const SAMPLE: &str = include_str!("sample_page.txt");

#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub lines: Vec<String>,
}

impl Document {
    /// Load a text file, or the built-in sample page when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::from_text("Elastic Pull", SAMPLE));
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_text(&title, &text))
    }

    pub fn from_text(title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            // Tabs would throw off column math in the renderer.
            lines: text.lines().map(|l| l.replace('\t', "    ")).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_page_is_long_enough_to_scroll() {
        let doc = Document::load(None).unwrap();
        assert_eq!(doc.title, "Elastic Pull");
        assert!(doc.len() > 60);
    }

    #[test]
    fn from_text_expands_tabs() {
        let doc = Document::from_text("t", "a\tb\nc");
        assert_eq!(doc.lines, vec!["a    b".to_string(), "c".to_string()]);
    }

    #[test]
    fn missing_file_is_an_error_with_context() {
        let err = Document::load(Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
