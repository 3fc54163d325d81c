use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use parser_framework::{
    EngineError, Grammar, IterSource, ParseContext, Parser, Position, StateContext, Token,
    TokenBuffer, TokenSource, Transition,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Ident,
    Number,
    Comma,
    Eof,
}

#[derive(Debug, Clone)]
struct BenchToken {
    kind: Kind,
    text: &'static str,
}

impl Token for BenchToken {
    type Kind = Kind;

    fn kind(&self) -> Kind {
        self.kind
    }

    fn text(&self) -> &str {
        self.text
    }

    fn position(&self) -> Position {
        Position::new()
    }

    fn is_eof(&self) -> bool {
        self.kind == Kind::Eof
    }
}

const EOF: BenchToken = BenchToken {
    kind: Kind::Eof,
    text: "",
};

/// `ident number ,` repeated, with every third item missing its number.
fn generate_tokens(items: usize) -> Vec<BenchToken> {
    let mut tokens = Vec::with_capacity(items * 3);
    for i in 0..items {
        tokens.push(BenchToken {
            kind: Kind::Ident,
            text: "x",
        });
        if i % 3 != 0 {
            tokens.push(BenchToken {
                kind: Kind::Number,
                text: "42",
            });
        }
        tokens.push(BenchToken {
            kind: Kind::Comma,
            text: ",",
        });
    }
    tokens
}

#[derive(Debug, Clone, Copy)]
struct Item;

/// Tries `ident number ,` first and backtracks to `ident ,`.
struct Items;

impl Grammar for Items {
    type Token = BenchToken;
    type State = Item;
    type Output = usize;
    type Env = ();

    fn step<S>(
        &mut self,
        state: Item,
        ctx: &mut StateContext<'_, S, usize, ()>,
    ) -> Result<Transition<Item>, EngineError>
    where
        S: TokenSource<Token = Self::Token>,
    {
        if ctx.at_end() {
            return Ok(Transition::Done);
        }
        let start = ctx.mark();
        ctx.consume();
        let width = if ctx.peek_kind(0) == Kind::Number && ctx.peek_kind(1) == Kind::Comma {
            ctx.skip(2);
            3
        } else {
            ctx.reset(start)?;
            ctx.skip(2);
            2
        };
        ctx.compact();
        ctx.emit(width)?;
        Ok(Transition::Next(state))
    }
}

fn bench_lookahead(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookahead");

    let items = 10_000;
    let tokens = generate_tokens(items);

    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("peek_consume_compact", |b| {
        b.iter(|| {
            let mut buf = TokenBuffer::new(IterSource::new(tokens.clone(), EOF));
            let mut count = 0usize;
            while !buf.at_end() {
                black_box(buf.consume());
                count += 1;
                if count % 64 == 0 {
                    buf.compact();
                }
            }
            black_box(count)
        })
    });

    group.bench_function("backtracking_grammar", |b| {
        b.iter(|| {
            let source = IterSource::new(tokens.clone(), EOF);
            let parser = Parser::try_new(Items, Item, source, 1).expect("non-zero capacity");
            let total: usize = parser.map(|width| width.unwrap_or(0)).sum();
            black_box(total)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lookahead);
criterion_main!(benches);
