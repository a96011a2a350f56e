use criterion::{black_box, criterion_group, criterion_main, Criterion};

use balicyk::catalog::BALINESE;
use balicyk::{reconstruct, Grammar};

fn parse(g: &Grammar, input: &str) -> bool {
  g.parse(input).accepted
}

fn criterion_benchmark(c: &mut Criterion) {
  let grammar = &*BALINESE;
  let simple_input = "jegeg sajan putu";
  let complex_input = "rajin pisan i made malajah ring sekolah dibi sanja";

  c.bench_function("parse simple", |b| {
    b.iter(|| parse(black_box(grammar), black_box(simple_input)))
  });

  c.bench_function("parse complex adverbial", |b| {
    b.iter(|| parse(black_box(grammar), black_box(complex_input)))
  });

  let accepted = grammar.parse("tegeh gati punyan kayu ento ring tegal");
  c.bench_function("reconstruct tree", |b| {
    b.iter(|| reconstruct(black_box(grammar), black_box(&accepted.chart), black_box(&accepted.tokens)))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
