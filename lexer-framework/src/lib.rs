//! Rule-based lexing.
//!
//! A [`Lexer`] owns a [`LexContext`] and a list of [`LexingRule`]s tried in
//! priority order. It implements [`TokenSource`](common_framework::TokenSource),
//! so it can feed a parser directly.

pub mod context;
pub mod cursor;
pub mod lexer;
pub mod traits;

pub use common_framework::{Position, TextSlice, Token, TokenSource};
pub use context::{DefaultContext, LexContext};
pub use cursor::{Checkpoint, Cursor};
pub use lexer::Lexer;
pub use traits::{LexToken, LexingRule};
