mod common;

use common::{texts, tokenize, CountingSource, TestToken};
use parser_framework::{EngineError, Token, TokenBuffer};
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,4}|[0-9]{1,3}", 0..30).prop_map(|words| words.join(" "))
}

fn drain(buf: &mut TokenBuffer<CountingSource>) -> Vec<TestToken> {
    let mut out = Vec::new();
    loop {
        let token = buf.consume();
        if token.is_eof() {
            return out;
        }
        out.push(token);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn peek_agrees_with_consume(input in input_strategy(), offset in 0usize..40) {
        let expected = tokenize(&input);
        let mut buf = TokenBuffer::new(CountingSource::new(&input));

        let peeked = buf.peek(offset).clone();
        match expected.get(offset) {
            Some(token) => {
                prop_assert_eq!(&peeked, token);
            }
            None => {
                prop_assert!(peeked.is_eof());
            }
        }
        prop_assert_eq!(buf.cursor(), 0);

        let consumed = drain(&mut buf);
        prop_assert_eq!(texts(&consumed), texts(&expected));
    }

    #[test]
    fn rewind_replays_same_tokens(input in input_strategy(), take in 0usize..30, back in 0usize..30) {
        let mut buf = TokenBuffer::new(CountingSource::new(&input));
        let consumed: Vec<TestToken> = (0..take).map(|_| buf.consume()).collect();
        let cursor = buf.cursor();

        if back > cursor {
            let err = buf.rewind(back).unwrap_err();
            prop_assert_eq!(err, EngineError::RewindUnderflow { requested: back, available: cursor });
            prop_assert_eq!(buf.cursor(), cursor);
        } else {
            buf.rewind(back).unwrap();
            for token in &consumed[cursor - back..cursor] {
                prop_assert_eq!(&buf.consume(), token);
            }
            prop_assert_eq!(buf.cursor(), cursor);
        }
    }

    #[test]
    fn end_of_stream_is_sticky(input in input_strategy(), extra in 1usize..20) {
        let count = tokenize(&input).len();
        let mut buf = TokenBuffer::new(CountingSource::new(&input));
        for _ in 0..count {
            prop_assert!(!buf.consume().is_eof());
        }
        for _ in 0..extra {
            prop_assert!(buf.consume().is_eof());
        }
        prop_assert_eq!(buf.cursor(), count + 1);
        prop_assert_eq!(buf.source().calls, count + 1);
    }

    #[test]
    fn compaction_preserves_stream(input in input_strategy(), every in 1usize..5) {
        let expected = tokenize(&input);
        let mut buf = TokenBuffer::new(CountingSource::new(&input));
        let mut seen = Vec::new();
        loop {
            let marker = buf.mark();
            let token = buf.consume();
            if token.is_eof() {
                break;
            }
            seen.push(token);
            if seen.len() % every == 0 {
                buf.compact();
                prop_assert!(buf.reset(marker).is_err());
            }
        }
        prop_assert_eq!(texts(&seen), texts(&expected));
        prop_assert!(buf.len() <= every + 1);
    }
}
