//! Parser Framework
//!
//! A pull-based engine for hand-written recursive-descent parsers. The
//! grammar author writes a state machine ([`Grammar`]); the engine supplies
//! unlimited lookahead over a lazily-pulled [`TokenSource`], rewinding to any
//! consumed position ([`Marker`]), and a bounded [`Mailbox`] that turns
//! emitted values into a lazy sequence ([`Parser::try_next_with`]).
//!
//! ```
//! use parser_framework::{EngineError, Grammar, IterSource, ParseContext, Parser};
//! use parser_framework::{Position, StateContext, Token, TokenSource, Transition};
//!
//! #[derive(Debug, Clone)]
//! struct Word(&'static str);
//!
//! impl Token for Word {
//!     type Kind = bool;
//!     fn kind(&self) -> bool { self.is_eof() }
//!     fn text(&self) -> &str { self.0 }
//!     fn position(&self) -> Position { Position::new() }
//!     fn is_eof(&self) -> bool { self.0.is_empty() }
//! }
//!
//! /// Emits every word upper-cased.
//! struct Shout;
//!
//! impl Grammar for Shout {
//!     type Token = Word;
//!     type State = ();
//!     type Output = String;
//!     type Env = ();
//!
//!     fn step<S>(
//!         &mut self,
//!         _state: (),
//!         ctx: &mut StateContext<'_, S, String, ()>,
//!     ) -> Result<Transition<()>, EngineError>
//!     where
//!         S: TokenSource<Token = Self::Token>,
//!     {
//!         let word = ctx.consume();
//!         if word.is_eof() {
//!             return Ok(Transition::Done);
//!         }
//!         ctx.emit(word.text().to_uppercase())?;
//!         Ok(Transition::Next(()))
//!     }
//! }
//!
//! let source = IterSource::new(vec![Word("hello"), Word("world")], Word(""));
//! let mut parser = Parser::try_new(Shout, (), source, 1).unwrap();
//! assert_eq!(parser.try_next(), Ok(Some("HELLO".to_string())));
//! assert_eq!(parser.try_next(), Ok(Some("WORLD".to_string())));
//! assert_eq!(parser.try_next(), Ok(None));
//! assert_eq!(parser.try_next(), Err(EngineError::Terminated));
//! ```

pub mod buffer;
pub mod context;
pub mod error;
pub mod mailbox;
pub mod marker;
pub mod parser;
pub mod source;
pub mod traits;

pub use buffer::{BufferStats, TokenBuffer};
pub use common_framework::{Diagnostic, Position, Token, TokenSource};
pub use context::{ParseContext, StateContext};
pub use error::EngineError;
pub use mailbox::Mailbox;
pub use marker::Marker;
pub use parser::{ParseIter, Parser, ParserConfig, ParserStats};
pub use source::IterSource;
pub use traits::{Grammar, Transition};
