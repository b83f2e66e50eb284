use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use winnower::analysis::normalizer::TextNormalizer;
use winnower::prune::DocumentFrequencyPruner;

fn bench_normalize(c: &mut Criterion) {
    let normalizer = TextNormalizer::new().unwrap();
    let raw = "배송이 빨라요! http://shop.kr/item?id=1 재구매 의사 있습니다 @seller cs@example.com 가격↓ 최고 "
        .repeat(16);

    c.bench_function("normalize", |b| {
        b.iter(|| normalizer.normalize(black_box(Some(raw.as_str()))))
    });
}

fn bench_prune(c: &mut Criterion) {
    // 500 documents, 40 tokens each, drawn from a 97-form vocabulary
    let docs: Vec<Vec<String>> = (0..500)
        .map(|i| (0..40).map(|j| format!("form{}", (i * 40 + j * 7) % 97)).collect())
        .collect();
    let pruner = DocumentFrequencyPruner::new(2, 0.8);

    c.bench_function("prune_500x40", |b| {
        b.iter(|| pruner.prune(black_box(docs.clone())))
    });
}

criterion_group!(benches, bench_normalize, bench_prune);
criterion_main!(benches);
