//! Common Framework
//!
//! Types shared by `lexer-framework`, `parser-framework` and their clients:
//! source positions, token text, the token/token-source contract and
//! diagnostics.

pub mod diagnostic;
pub mod position;
pub mod text_slice;
pub mod token;

pub use diagnostic::Diagnostic;
pub use position::Position;
pub use text_slice::TextSlice;
pub use token::{Token, TokenSource};
