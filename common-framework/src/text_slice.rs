use std::borrow::Borrow;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Range};
use std::sync::Arc;

/// Raw text of a token, borrowed from a shared source buffer.
///
/// Every token produced from the same input shares one `Arc<str>`, so cloning
/// a token (which the parser does on `consume`) never copies text. Equality
/// and hashing look at the text only, not at where it came from.
#[derive(Clone, Debug)]
pub struct TextSlice {
    buffer: Arc<str>,
    range: Range<usize>,
}

impl TextSlice {
    /// Creates a slice of `buffer` covering the byte range `start..end`.
    pub fn new(buffer: Arc<str>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= buffer.len());
        Self {
            buffer,
            range: start..end,
        }
    }

    /// Creates a slice that covers the entire buffer.
    pub fn from_arc(buffer: Arc<str>) -> Self {
        let end = buffer.len();
        Self::new(buffer, 0, end)
    }

    /// An empty slice, used for tokens without text such as end of input.
    pub fn empty() -> Self {
        Self::from_arc(Arc::from(""))
    }

    pub fn as_str(&self) -> &str {
        &self.buffer[self.range.clone()]
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Byte offset of the slice start within the shared buffer.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Byte offset one past the slice end within the shared buffer.
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// Returns a slice covering `self` through the end of `other`.
    ///
    /// Both slices must come from the same buffer and `other` must not start
    /// before `self`.
    pub fn extend_to(&self, other: &TextSlice) -> TextSlice {
        debug_assert!(Arc::ptr_eq(&self.buffer, &other.buffer));
        TextSlice::new(self.buffer.clone(), self.range.start, other.range.end)
    }
}

impl From<&str> for TextSlice {
    fn from(value: &str) -> Self {
        Self::from_arc(Arc::from(value))
    }
}

impl From<String> for TextSlice {
    fn from(value: String) -> Self {
        Self::from_arc(Arc::from(value))
    }
}

impl std::fmt::Display for TextSlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Deref for TextSlice {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for TextSlice {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for TextSlice {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for TextSlice {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TextSlice {}

impl Hash for TextSlice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialEq<&str> for TextSlice {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<TextSlice> for &str {
    fn eq(&self, other: &TextSlice) -> bool {
        *self == other.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_views_shared_buffer() {
        let buffer: Arc<str> = Arc::from("alpha = 42");
        let name = TextSlice::new(buffer.clone(), 0, 5);
        let value = TextSlice::new(buffer, 8, 10);
        assert_eq!(name, "alpha");
        assert_eq!(value.as_str(), "42");
        assert_eq!(value.len(), 2);
        assert_eq!(value.start(), 8);
    }

    #[test]
    fn test_equality_ignores_origin() {
        let a = TextSlice::from("x1");
        let b = TextSlice::new(Arc::from("let x1"), 4, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_extend_to() {
        let buffer: Arc<str> = Arc::from("12.5");
        let head = TextSlice::new(buffer.clone(), 0, 2);
        let tail = TextSlice::new(buffer, 3, 4);
        assert_eq!(head.extend_to(&tail), "12.5");
    }

    #[test]
    fn test_empty() {
        let empty = TextSlice::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.to_string(), "");
    }
}
