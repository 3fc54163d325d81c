//! Token fixtures shared by the integration tests.
#![allow(dead_code)]

use parser_framework::{Position, Token, TokenSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Word,
    Number,
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestToken {
    pub kind: Kind,
    pub text: String,
    pub position: Position,
}

impl Token for TestToken {
    type Kind = Kind;

    fn kind(&self) -> Kind {
        self.kind
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn position(&self) -> Position {
        self.position
    }

    fn is_eof(&self) -> bool {
        self.kind == Kind::Eof
    }
}

/// Splits `input` on spaces. Runs of digits become `Number`, anything else
/// `Word`. Columns are 1-based, all on line 1.
pub fn tokenize(input: &str) -> Vec<TestToken> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    for piece in input.split(' ') {
        if !piece.is_empty() {
            let kind = if piece.chars().all(|c| c.is_ascii_digit()) {
                Kind::Number
            } else {
                Kind::Word
            };
            tokens.push(TestToken {
                kind,
                text: piece.to_string(),
                position: Position::at(1, offset + 1, offset),
            });
        }
        offset += piece.len() + 1;
    }
    tokens
}

pub fn eof_at(column: usize) -> TestToken {
    TestToken {
        kind: Kind::Eof,
        text: String::new(),
        position: Position::at(1, column, column - 1),
    }
}

/// A token source that counts how often it is asked for a token.
#[derive(Debug)]
pub struct CountingSource {
    tokens: Vec<TestToken>,
    next: usize,
    eof: TestToken,
    pub calls: usize,
}

impl CountingSource {
    pub fn new(input: &str) -> Self {
        Self {
            tokens: tokenize(input),
            next: 0,
            eof: eof_at(input.len() + 1),
            calls: 0,
        }
    }
}

impl TokenSource for CountingSource {
    type Token = TestToken;

    fn next_token(&mut self) -> TestToken {
        self.calls += 1;
        match self.tokens.get(self.next) {
            Some(token) => {
                self.next += 1;
                token.clone()
            }
            None => self.eof.clone(),
        }
    }
}

pub fn texts(tokens: &[TestToken]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
