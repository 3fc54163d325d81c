//! A line calculator built on lexer-framework and parser-framework.
//!
//! ```
//! use parser_example::{evaluate, CalcEnv};
//!
//! let mut env = CalcEnv::new();
//! assert!(evaluate("x = 2 + 3", &mut env).unwrap().is_empty());
//! assert_eq!(evaluate("x * 2; (1 + 2) * 3", &mut env).unwrap(), vec![10.0, 9.0]);
//! ```

pub mod env;
pub mod grammar;
pub mod lexer;
pub mod token;

pub use env::CalcEnv;
pub use grammar::{CalcGrammar, State, MAX_NESTING};
pub use lexer::{lexer, CalcLexer};
pub use token::{CalcToken, CalcTokenKind};

use common_framework::Diagnostic;
use parser_framework::{EngineError, Parser, ParserConfig};

pub type CalcParser = Parser<CalcGrammar, CalcLexer>;

/// Builds a parser over `input`. Nothing is lexed until the first pull.
pub fn parser(input: &str, config: ParserConfig) -> Result<CalcParser, EngineError> {
    Parser::with_config(CalcGrammar::new(), State::Statement, lexer(input), config)
}

/// Runs every statement in `input` and returns the emitted values.
/// Diagnostics are left in `env`.
pub fn evaluate(input: &str, env: &mut CalcEnv) -> Result<Vec<f64>, EngineError> {
    let mut parser = parser(input, ParserConfig::default())?;
    parser.iter_with(env).collect()
}

/// Renders a diagnostic as a caret under the offending column of its line.
pub fn caret_line(diagnostic: &Diagnostic) -> String {
    format!(
        "{}^ {}",
        " ".repeat(diagnostic.column().saturating_sub(1)),
        diagnostic.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_framework::Position;

    #[test]
    fn test_caret_line() {
        let diagnostic = Diagnostic::new(Position::at(1, 5, 4), "Expecting operand");
        assert_eq!(caret_line(&diagnostic), "    ^ Expecting operand");
    }

    #[test]
    fn test_caret_line_first_column() {
        let diagnostic = Diagnostic::new(Position::new(), "id 'y' not defined");
        assert_eq!(caret_line(&diagnostic), "^ id 'y' not defined");
    }
}
