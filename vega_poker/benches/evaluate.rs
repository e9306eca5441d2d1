use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vega_poker::base::Card;
use vega_poker::deck::FullDeck;
use vega_poker::{eval, rank_five, rank_hand, Variant};

fn deals<const N: usize>(count: usize, seed: u64) -> Vec<[Card; N]> {
    let mut deck = FullDeck::with_seed(seed);
    (0..count)
        .map(|_| {
            deck.reset();
            deck.deal(N).unwrap().try_into().unwrap()
        })
        .collect()
}

fn bench_rank_five(c: &mut Criterion) {
    let hands = deals::<5>(1000, 42);
    c.bench_function("rank_five", |b| {
        b.iter(|| {
            hands
                .iter()
                .map(|h| rank_five(black_box(h)).0 as u32)
                .sum::<u32>()
        })
    });
}

fn bench_rank_seven(c: &mut Criterion) {
    let hands = deals::<7>(1000, 42);
    c.bench_function("rank_seven", |b| {
        b.iter(|| {
            hands
                .iter()
                .map(|h| rank_hand(black_box(h)).0 as u32)
                .sum::<u32>()
        })
    });
}

fn bench_holdem_eval(c: &mut Criterion) {
    let hands = deals::<7>(1000, 42);
    c.bench_function("holdem_eval", |b| {
        b.iter(|| {
            hands
                .iter()
                .map(|h| eval(Variant::Holdem, &h[..2], &h[2..]).hi_rank.0 as u32)
                .sum::<u32>()
        })
    });
}

criterion_group!(benches, bench_rank_five, bench_rank_seven, bench_holdem_eval);
criterion_main!(benches);
