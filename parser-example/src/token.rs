use common_framework::{Position, TextSlice, Token};
use lexer_framework::LexToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcTokenKind {
    Id,
    Number,
    Plus,
    Minus,
    Multiply,
    Divide,
    Equals,
    OpenParen,
    CloseParen,
    Semicolon,
    /// Text the lexer could not turn into a token.
    Error,
    /// Spaces and tabs. Dropped by the lexer.
    Whitespace,
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalcToken {
    pub kind: CalcTokenKind,
    pub text: TextSlice,
    pub position: Position,
}

impl CalcToken {
    pub fn new(kind: CalcTokenKind, text: TextSlice, position: Position) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }

    /// What to tell the user about an `Error` token.
    pub fn error_message(&self) -> Option<&'static str> {
        if self.kind != CalcTokenKind::Error {
            return None;
        }
        if self.text.starts_with(|c: char| c.is_ascii_digit()) {
            Some("Illegal number format - missing digits after '.'")
        } else {
            Some("Unknown character")
        }
    }
}

impl Token for CalcToken {
    type Kind = CalcTokenKind;

    fn kind(&self) -> CalcTokenKind {
        self.kind
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn position(&self) -> Position {
        self.position
    }

    fn is_eof(&self) -> bool {
        self.kind == CalcTokenKind::Eof
    }
}

impl LexToken for CalcToken {
    fn end_of_input(position: Position) -> Self {
        Self::new(CalcTokenKind::Eof, TextSlice::empty(), position)
    }

    fn invalid(text: TextSlice, position: Position) -> Self {
        Self::new(CalcTokenKind::Error, text, position)
    }

    fn is_trivia(&self) -> bool {
        self.kind == CalcTokenKind::Whitespace
    }
}
