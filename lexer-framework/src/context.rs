use crate::cursor::{Checkpoint, Cursor};
use common_framework::{Position, TextSlice};

/// What a lexing rule sees of the lexer.
///
/// Rules are generic over the context so they can run against any
/// implementation that exposes a [`Cursor`]. Only `cursor` and `cursor_mut`
/// need to be provided.
pub trait LexContext {
    fn cursor(&self) -> &Cursor;

    fn cursor_mut(&mut self) -> &mut Cursor;

    fn position(&self) -> Position {
        self.cursor().position()
    }

    fn offset(&self) -> usize {
        self.cursor().offset()
    }

    fn is_eof(&self) -> bool {
        self.cursor().is_eof()
    }

    fn peek(&self) -> Option<char> {
        self.cursor().peek()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.cursor().peek_nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        self.cursor_mut().advance()
    }

    fn consume_while<F>(&mut self, predicate: F) -> TextSlice
    where
        F: FnMut(char) -> bool,
    {
        self.cursor_mut().consume_while(predicate)
    }

    fn text_since(&self, checkpoint: Checkpoint) -> TextSlice {
        self.cursor().text_since(checkpoint)
    }

    fn checkpoint(&self) -> Checkpoint {
        self.cursor().checkpoint()
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor_mut().restore(checkpoint);
    }
}

#[derive(Debug, Clone)]
pub struct DefaultContext {
    cursor: Cursor,
}

impl DefaultContext {
    pub fn new<S: Into<String>>(input: S) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }
}

impl LexContext for DefaultContext {
    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }
}
