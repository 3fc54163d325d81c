use crate::context::{DefaultContext, LexContext};
use crate::traits::{LexToken, LexingRule};
use common_framework::{Token, TokenSource};
use std::cmp::Reverse;

/// A lexer that applies rules in priority order.
///
/// As a [`TokenSource`] it never fails: trivia is skipped, a character no
/// rule accepts becomes a one-character [`LexToken::invalid`] token, and the
/// end-of-stream token is returned for every call once the input is used up.
pub struct Lexer<Ctx, Tok>
where
    Ctx: LexContext,
{
    context: Ctx,
    rules: Vec<Box<dyn LexingRule<Ctx, Tok>>>,
}

impl<Ctx, Tok> Lexer<Ctx, Tok>
where
    Ctx: LexContext,
{
    pub fn new(context: Ctx, rules: Vec<Box<dyn LexingRule<Ctx, Tok>>>) -> Self {
        let mut sorted_rules = rules;
        sorted_rules.sort_by_key(|rule| Reverse(rule.priority()));

        Self {
            context,
            rules: sorted_rules,
        }
    }

    pub fn context(&self) -> &Ctx {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Ctx {
        &mut self.context
    }

    /// Runs the rules at the current position and returns the first match.
    ///
    /// Rules whose `quick_check` rules them out are skipped. A rule that
    /// fails, or matches without consuming anything, has the cursor restored.
    pub fn match_rule(&mut self) -> Option<Tok> {
        let first_char = self.context.peek();

        for rule in &mut self.rules {
            if let Some(false) = rule.quick_check(first_char) {
                continue;
            }

            let checkpoint = self.context.checkpoint();
            if let Some(token) = rule.try_match(&mut self.context) {
                if self.context.offset() > checkpoint.offset() {
                    return Some(token);
                }
                log::warn!(
                    "rule matched without consuming input at {}",
                    checkpoint.position()
                );
            }
            self.context.restore(checkpoint);
        }
        None
    }
}

impl<Ctx, Tok> Lexer<Ctx, Tok>
where
    Ctx: LexContext,
    Tok: LexToken,
{
    /// Collects every token up to, but not including, end of stream.
    pub fn tokenize(&mut self) -> Vec<Tok> {
        self.collect()
    }
}

impl<Tok> Lexer<DefaultContext, Tok> {
    pub fn from_str<S: Into<String>>(
        input: S,
        rules: Vec<Box<dyn LexingRule<DefaultContext, Tok>>>,
    ) -> Self {
        Self::new(DefaultContext::new(input), rules)
    }
}

impl<Ctx, Tok> TokenSource for Lexer<Ctx, Tok>
where
    Ctx: LexContext,
    Tok: LexToken,
{
    type Token = Tok;

    fn next_token(&mut self) -> Tok {
        loop {
            if self.context.is_eof() {
                return Tok::end_of_input(self.context.position());
            }

            if let Some(token) = self.match_rule() {
                if token.is_trivia() {
                    continue;
                }
                return token;
            }

            // No rule accepts this character: hand it to the parser as an
            // error token and carry on after it.
            let checkpoint = self.context.checkpoint();
            let ch = self.context.advance();
            log::warn!("no rule matched {:?} at {}", ch, checkpoint.position());
            let text = self.context.text_since(checkpoint);
            return Tok::invalid(text, checkpoint.position());
        }
    }
}

/// Yields tokens until end of stream. The end-of-stream token itself is not
/// yielded.
impl<Ctx, Tok> Iterator for Lexer<Ctx, Tok>
where
    Ctx: LexContext,
    Tok: LexToken,
{
    type Item = Tok;

    fn next(&mut self) -> Option<Tok> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
