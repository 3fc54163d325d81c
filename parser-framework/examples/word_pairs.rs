//! Minimal grammar example.
//!
//! Demonstrates the parser-framework workflow:
//! 1. Define a token type.
//! 2. Write the grammar as a state machine.
//! 3. Feed it tokens through a `TokenSource` and pull results.
//!
//! The input is a list of settings such as `width = 80 verbose depth = 3`.
//! A word followed by `=` and a number is a pair, a lone word is a flag.

use parser_framework::{
    Diagnostic, EngineError, Grammar, IterSource, ParseContext, Parser, Position, StateContext,
    Token, TokenSource, Transition,
};

// ============================================================================
// Tokens
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Word,
    Number,
    Equals,
    Eof,
}

#[derive(Debug, Clone)]
struct Tok {
    kind: Kind,
    text: String,
    position: Position,
}

impl Token for Tok {
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

/// Whitespace-separated tokenizer, good enough for the example.
fn tokenize(input: &str) -> (Vec<Tok>, Tok) {
    let mut tokens = Vec::new();
    let mut position = Position::new();
    let mut word = String::new();
    let mut start = position;
    for ch in input.chars().chain(std::iter::once(' ')) {
        if ch.is_whitespace() {
            if !word.is_empty() {
                let kind = if word == "=" {
                    Kind::Equals
                } else if word.chars().all(|c| c.is_ascii_digit()) {
                    Kind::Number
                } else {
                    Kind::Word
                };
                tokens.push(Tok {
                    kind,
                    text: std::mem::take(&mut word),
                    position: start,
                });
            }
        } else {
            if word.is_empty() {
                start = position;
            }
            word.push(ch);
        }
        position.advance(ch);
    }
    let eof = Tok {
        kind: Kind::Eof,
        text: String::new(),
        position,
    };
    (tokens, eof)
}

// ============================================================================
// Grammar
// ============================================================================

#[derive(Debug)]
enum Setting {
    Pair(String, u32),
    Flag(String),
}

#[derive(Debug, Clone, Copy)]
enum State {
    Setting,
}

struct Settings;

impl Grammar for Settings {
    type Token = Tok;
    type State = State;
    type Output = Setting;
    type Env = Vec<Diagnostic>;

    fn step<S>(
        &mut self,
        state: State,
        ctx: &mut StateContext<'_, S, Setting, Vec<Diagnostic>>,
    ) -> Result<Transition<State>, EngineError>
    where
        S: TokenSource<Token = Self::Token>,
    {
        if ctx.at_end() {
            return Ok(Transition::Done);
        }

        let name = ctx.consume();
        if name.kind() != Kind::Word {
            ctx.env()
                .push(Diagnostic::new(name.position(), "expecting a setting name"));
            ctx.compact();
            return Ok(Transition::Next(state));
        }

        // Speculatively read `= number`, back out if it is not there.
        let after_name = ctx.mark();
        let equals = ctx.consume();
        let value = ctx.consume();
        let setting = match (equals.kind(), value.text().parse::<u32>()) {
            (Kind::Equals, Ok(value)) => Setting::Pair(name.text, value),
            _ => {
                ctx.reset(after_name)?;
                Setting::Flag(name.text)
            }
        };

        ctx.compact();
        ctx.emit(setting)?;
        Ok(Transition::Next(state))
    }
}

// ============================================================================
// Driver
// ============================================================================

fn main() {
    let input = "width = 80 verbose depth = 3 = 7 color";
    let (tokens, eof) = tokenize(input);

    let source = IterSource::new(tokens, eof);
    let mut parser = match Parser::try_new(Settings, State::Setting, source, 1) {
        Ok(parser) => parser,
        Err(err) => {
            eprintln!("cannot build parser: {}", err);
            return;
        }
    };

    let mut diagnostics = Vec::new();
    for result in parser.iter_with(&mut diagnostics) {
        match result {
            Ok(Setting::Pair(name, value)) => println!("{} -> {}", name, value),
            Ok(Setting::Flag(name)) => println!("{} (flag)", name),
            Err(err) => eprintln!("engine error: {}", err),
        }
    }
    for diagnostic in &diagnostics {
        println!("{}", diagnostic);
    }
}
