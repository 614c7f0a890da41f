//! Statistical convergence and scenario tests over large batches.

use chrono::NaiveDate;

use orders_core::config::GeneratorConfig;
use orders_core::types::{AmountTier, OrderStatus, OrderType};
use orders_engine::{CategoricalSampler, OrderGenerator, OrderRng};

const BATCH: usize = 50_000;

/// Chi-square critical values at the 99% level. The fixed seed makes each
/// test a single draw, so the threshold sits above the usual 95% working
/// tolerance.
const CHI2_99_DF2: f64 = 9.210;
const CHI2_99_DF3: f64 = 11.345;

fn fixed_generator() -> OrderGenerator {
    let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    OrderGenerator::with_today(GeneratorConfig::default(), today).unwrap()
}

/// Pearson chi-square statistic for observed counts against weights.
fn chi_square(observed: &[usize], weights: &[f64]) -> f64 {
    let n: usize = observed.iter().sum();
    let total_weight: f64 = weights.iter().sum();
    observed
        .iter()
        .zip(weights)
        .map(|(&o, &w)| {
            let expected = n as f64 * w / total_weight;
            let d = o as f64 - expected;
            d * d / expected
        })
        .sum()
}

#[test]
fn order_type_frequencies_converge() {
    let generator = fixed_generator();
    let mut rng = OrderRng::from_seed(42);
    let records = generator.generate(BATCH, &mut rng);

    let observed: Vec<usize> = OrderType::ALL
        .iter()
        .map(|t| records.iter().filter(|r| r.order_type == *t).count())
        .collect();

    let chi2 = chi_square(&observed, &generator.config().order_type_weights);
    assert!(chi2 < CHI2_99_DF2, "chi2 = {chi2}, observed = {observed:?}");
}

#[test]
fn status_frequencies_converge() {
    let generator = fixed_generator();
    let mut rng = OrderRng::from_seed(42);
    let records = generator.generate(BATCH, &mut rng);

    let observed: Vec<usize> = OrderStatus::ALL
        .iter()
        .map(|s| records.iter().filter(|r| r.status == *s).count())
        .collect();

    let chi2 = chi_square(&observed, &generator.config().status_weights);
    assert!(chi2 < CHI2_99_DF2, "chi2 = {chi2}, observed = {observed:?}");
}

#[test]
fn amount_tier_frequencies_converge() {
    // Tier is not a record field, so test the tier sampler directly with
    // the reference weights.
    let weights = GeneratorConfig::default().amount_tier_weights;
    let sampler = CategoricalSampler::new(AmountTier::ALL.to_vec(), &weights).unwrap();
    let mut rng = OrderRng::from_seed(42);

    let mut observed = [0usize; 4];
    for _ in 0..BATCH {
        let tier = sampler.sample(&mut rng);
        let idx = AmountTier::ALL.iter().position(|t| *t == tier).unwrap();
        observed[idx] += 1;
    }

    let chi2 = chi_square(&observed, &weights);
    assert!(chi2 < CHI2_99_DF3, "chi2 = {chi2}, observed = {observed:?}");
}

#[test]
fn degenerate_order_type_weights_yield_only_forwards() {
    let config = GeneratorConfig {
        order_type_weights: vec![1.0, 0.0, 0.0],
        ..GeneratorConfig::default()
    };
    let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    let generator = OrderGenerator::with_today(config, today).unwrap();
    let mut rng = OrderRng::from_seed(42);

    for record in generator.generate(5_000, &mut rng) {
        assert_eq!(record.order_type, OrderType::Forward);
        assert!(record.reference.starts_with("K-"));
    }
}

#[test]
fn empty_batch_yields_no_records_and_no_errors() {
    let generator = fixed_generator();
    let mut rng = OrderRng::from_seed(42);
    assert!(generator.generate(0, &mut rng).is_empty());
    assert!(generator.generate_parallel(0, 42).is_empty());
}

#[test]
fn seeded_batch_is_reproducible_across_generators() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    let g1 = OrderGenerator::with_today(GeneratorConfig::default(), today).unwrap();
    let g2 = OrderGenerator::with_today(GeneratorConfig::default(), today).unwrap();

    let batch1 = g1.generate(1_000, &mut OrderRng::from_seed(7));
    let batch2 = g2.generate(1_000, &mut OrderRng::from_seed(7));
    assert_eq!(batch1, batch2);
}

#[test]
fn base_currency_concentration_holds_over_large_batch() {
    let generator = fixed_generator();
    let mut rng = OrderRng::from_seed(42);
    let records = generator.generate(BATCH, &mut rng);

    let with_base = records
        .iter()
        .filter(|r| {
            r.buy_currency == generator.config().base_currency
                || r.sell_currency == generator.config().base_currency
        })
        .count();
    let share = with_base as f64 / records.len() as f64;
    assert!((share - 0.7).abs() < 0.01, "share = {share}");
}
