//! The text buffer edited by commands.

use super::error::EditorError;
use std::fmt;

/// A single mutable text buffer.
///
/// Positions and lengths are counted in characters, not bytes, so any position
/// in `0..=len()` is a valid place to split the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Splices `text` in at `position`.
    ///
    /// # Errors
    /// [`EditorError::OutOfRange`] if `position > len()`. The document is unchanged.
    pub fn insert(&mut self, text: &str, position: usize) -> Result<(), EditorError> {
        let len = self.len();
        if position > len {
            return Err(EditorError::OutOfRange {
                position,
                length: 0,
                len,
            });
        }

        let at = self.byte_offset(position);
        self.content.insert_str(at, text);
        Ok(())
    }

    /// Removes `length` characters starting at `position` and returns them.
    ///
    /// # Errors
    /// [`EditorError::OutOfRange`] if `position + length > len()`. The document is unchanged.
    pub fn delete(&mut self, position: usize, length: usize) -> Result<String, EditorError> {
        let len = self.len();
        let out_of_range = EditorError::OutOfRange {
            position,
            length,
            len,
        };
        match position.checked_add(length) {
            Some(end) if end <= len => {
                let start = self.byte_offset(position);
                let stop = self.byte_offset(end);
                Ok(self.content.drain(start..stop).collect())
            }
            _ => Err(out_of_range),
        }
    }

    /// Byte offset of the character at `position`. Caller checks `position <= len()`.
    fn byte_offset(&self, position: usize) -> usize {
        self.content
            .char_indices()
            .nth(position)
            .map(|(offset, _)| offset)
            .unwrap_or(self.content.len())
    }
}

impl From<&str> for Document {
    fn from(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

impl From<String> for Document {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_bounds() {
        let mut doc = Document::from("bc");
        doc.insert("a", 0).unwrap();
        doc.insert("d", 3).unwrap();
        assert_eq!(doc.as_str(), "abcd");
    }

    #[test]
    fn test_insert_past_end_is_rejected() {
        let mut doc = Document::from("abc");
        let err = doc.insert("x", 4).unwrap_err();
        assert_eq!(
            err,
            EditorError::OutOfRange {
                position: 4,
                length: 0,
                len: 3
            }
        );
        assert_eq!(doc.as_str(), "abc");
    }

    #[test]
    fn test_delete_returns_removed_text() {
        let mut doc = Document::from("Hello World");
        let removed = doc.delete(5, 6).unwrap();
        assert_eq!(removed, " World");
        assert_eq!(doc.as_str(), "Hello");
    }

    #[test]
    fn test_delete_overflow_is_rejected() {
        let mut doc = Document::from("abc");
        assert!(doc.delete(1, usize::MAX).is_err());
        assert!(doc.delete(2, 2).is_err());
        assert_eq!(doc.as_str(), "abc");
    }

    #[test]
    fn test_positions_count_characters() {
        let mut doc = Document::from("héllo");
        assert_eq!(doc.len(), 5);

        doc.insert("€", 2).unwrap();
        assert_eq!(doc.as_str(), "hé€llo");

        let removed = doc.delete(1, 2).unwrap();
        assert_eq!(removed, "é€");
        assert_eq!(doc.as_str(), "hllo");
    }

    #[test]
    fn test_zero_length_delete_at_end() {
        let mut doc = Document::from("abc");
        assert_eq!(doc.delete(3, 0).unwrap(), "");
        assert_eq!(doc.as_str(), "abc");
    }
}
