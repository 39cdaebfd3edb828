//! Criterion benchmarks for the attribution hot path.
//!
//! The design target is sub-10ms per deal at 100 touchpoints; every model
//! here is a linear scan, so these mostly guard against regressions in the
//! allocation and normalization plumbing.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tally_attrib::calculate_attribution;
use tally_core::model::AttributionModel;
use tally_core::types::{Deal, DealId, PartnerId, Touchpoint, TouchpointId};

fn make_deal() -> Deal {
    Deal {
        id: DealId::from("d-bench"),
        value: 250_000.0,
        currency: "USD".to_owned(),
    }
}

fn make_touchpoints(n: usize) -> Vec<Touchpoint> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut secs = 0i64;
    (0..n)
        .map(|i| {
            secs += rng.gen_range(60..86_400);
            Touchpoint {
                id: TouchpointId::from(format!("tp-{i}")),
                partner_id: PartnerId::from(format!("p-{}", i % 7)),
                deal_id: DealId::from("d-bench"),
                occurred_at: DateTime::<Utc>::from_timestamp(secs, 0).unwrap(),
                channel: "referral".to_owned(),
                weight: Some(rng.gen_range(0.0..10.0)),
            }
        })
        .collect()
}

fn bench_linear(c: &mut Criterion) {
    let deal = make_deal();
    let tps = make_touchpoints(100);

    c.bench_function("linear_100_touchpoints", |b| {
        b.iter(|| {
            calculate_attribution(
                black_box(&deal),
                black_box(&tps),
                black_box(&AttributionModel::Linear),
            )
        })
    });
}

fn bench_time_decay(c: &mut Criterion) {
    let deal = make_deal();
    let tps = make_touchpoints(100);
    let model = AttributionModel::TimeDecay {
        half_life_secs: 7.0 * 86_400.0,
    };

    c.bench_function("time_decay_100_touchpoints", |b| {
        b.iter(|| calculate_attribution(black_box(&deal), black_box(&tps), black_box(&model)))
    });
}

fn bench_w_shaped(c: &mut Criterion) {
    let deal = make_deal();
    let tps = make_touchpoints(100);
    let model = AttributionModel::w_shaped();

    c.bench_function("w_shaped_100_touchpoints", |b| {
        b.iter(|| calculate_attribution(black_box(&deal), black_box(&tps), black_box(&model)))
    });
}

fn bench_custom_weighted(c: &mut Criterion) {
    let deal = make_deal();
    let tps = make_touchpoints(100);
    // Explicit weight map covering every touchpoint, the worst case for
    // the per-touchpoint lookup.
    let weights: BTreeMap<TouchpointId, f64> = tps
        .iter()
        .enumerate()
        .map(|(i, tp)| (tp.id.clone(), (i + 1) as f64))
        .collect();
    let model = AttributionModel::CustomWeighted { weights };

    c.bench_function("custom_weighted_100_touchpoints", |b| {
        b.iter(|| calculate_attribution(black_box(&deal), black_box(&tps), black_box(&model)))
    });
}

criterion_group!(
    benches,
    bench_linear,
    bench_time_decay,
    bench_w_shaped,
    bench_custom_weighted
);
criterion_main!(benches);
