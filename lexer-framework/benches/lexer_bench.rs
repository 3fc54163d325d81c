use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lexer_framework::{
    DefaultContext, LexContext, LexToken, Lexer, LexingRule, Position, TextSlice, Token,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Word,
    Number,
    Symbol,
    Space,
    Invalid,
    Eof,
}

#[derive(Debug, Clone)]
struct BenchToken {
    kind: Kind,
    text: TextSlice,
    position: Position,
}

impl Token for BenchToken {
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

impl LexToken for BenchToken {
    fn end_of_input(position: Position) -> Self {
        Self {
            kind: Kind::Eof,
            text: TextSlice::empty(),
            position,
        }
    }

    fn invalid(text: TextSlice, position: Position) -> Self {
        Self {
            kind: Kind::Invalid,
            text,
            position,
        }
    }

    fn is_trivia(&self) -> bool {
        self.kind == Kind::Space
    }
}

struct Run(Kind, fn(char) -> bool);

impl<Ctx: LexContext> LexingRule<Ctx, BenchToken> for Run {
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<BenchToken> {
        let position = ctx.position();
        let text = ctx.consume_while(self.1);
        (!text.is_empty()).then_some(BenchToken {
            kind: self.0,
            text,
            position,
        })
    }

    fn quick_check(&self, first_char: Option<char>) -> Option<bool> {
        Some(first_char.is_some_and(self.1))
    }
}

struct Symbol;

impl<Ctx: LexContext> LexingRule<Ctx, BenchToken> for Symbol {
    fn try_match(&mut self, ctx: &mut Ctx) -> Option<BenchToken> {
        let start = ctx.checkpoint();
        match ctx.advance()? {
            '+' | '-' | '*' | '/' | '(' | ')' | '=' | ';' => Some(BenchToken {
                kind: Kind::Symbol,
                text: ctx.text_since(start),
                position: start.position(),
            }),
            _ => None,
        }
    }
}

fn rules() -> Vec<Box<dyn LexingRule<DefaultContext, BenchToken>>> {
    vec![
        Box::new(Run(Kind::Space, |c| c == ' ' || c == '\t')),
        Box::new(Run(Kind::Number, |c| c.is_ascii_digit())),
        Box::new(Run(Kind::Word, |c| c.is_ascii_alphanumeric())),
        Box::new(Symbol),
    ]
}

fn generate_input(statements: usize) -> String {
    let mut input = String::new();
    for i in 0..statements {
        input.push_str(&format!("v{} = (a{} + {}) * 7 - b / 3 ; ", i, i % 10, i));
    }
    input
}

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let input = generate_input(2_000);
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("tokenize_statements", |b| {
        b.iter(|| {
            let tokens = Lexer::from_str(input.as_str(), rules()).tokenize();
            black_box(tokens.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lexer);
criterion_main!(benches);
