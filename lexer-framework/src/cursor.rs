use common_framework::{Position, TextSlice};
use std::sync::Arc;

/// A cursor over shared source text.
///
/// Slices handed out by the cursor borrow the same `Arc<str>`, so tokens can
/// outlive the lexer without copying text.
#[derive(Debug, Clone)]
pub struct Cursor {
    buffer: Arc<str>,
    current: usize,
    position: Position,
}

impl Cursor {
    /// Creates a new cursor at the start of `input`.
    pub fn new<S: Into<String>>(input: S) -> Self {
        let owned = input.into();
        Self::with_arc(Arc::<str>::from(owned))
    }

    /// Creates a cursor from an existing shared buffer.
    pub fn with_arc(buffer: Arc<str>) -> Self {
        Self {
            buffer,
            current: 0,
            position: Position::new(),
        }
    }

    /// Position of the next character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Byte offset of the next character.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn is_eof(&self) -> bool {
        self.current >= self.buffer.len()
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.buffer[self.current..].chars().next()
    }

    /// Returns the character `n` places ahead (`peek_nth(0) == peek()`).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.buffer[self.current..].chars().nth(n)
    }

    /// Consumes the next character and updates the position.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        self.position.advance(ch);
        Some(ch)
    }

    /// Advances by up to `n` characters and returns how many were consumed.
    pub fn advance_by(&mut self, n: usize) -> usize {
        let mut count = 0;
        while count < n && self.advance().is_some() {
            count += 1;
        }
        count
    }

    pub fn consume_while<F>(&mut self, mut predicate: F) -> TextSlice
    where
        F: FnMut(char) -> bool,
    {
        let start = self.current;
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.advance();
        }
        TextSlice::new(self.buffer.clone(), start, self.current)
    }

    /// Text consumed since `checkpoint` was taken.
    pub fn text_since(&self, checkpoint: Checkpoint) -> TextSlice {
        TextSlice::new(self.buffer.clone(), checkpoint.current, self.current)
    }

    pub fn remaining(&self) -> TextSlice {
        TextSlice::new(self.buffer.clone(), self.current, self.buffer.len())
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            current: self.current,
            position: self.position,
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.current = checkpoint.current;
        self.position = checkpoint.position;
    }
}

/// A saved cursor location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    current: usize,
    position: Position,
}

impl Checkpoint {
    pub fn offset(&self) -> usize {
        self.current
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
