//! Property tests of the attribution engine

use adsorb_rs::attribution::{AttributionEngine, AttributionFactor, Baseline, COMPETITION_CONTRIBUTION};
use adsorb_rs::models::SurrogateModel;
use adsorb_rs::physics::{round2, OperatingConditions, RemovalModel};

mod common;
use common::{all_pairs, grid, ConstantModel, PhRamp};

fn factors(items: &[adsorb_rs::attribution::AttributionItem]) -> Vec<AttributionFactor> {
    items.iter().map(|item| item.factor).collect()
}

// =================================================================================================
// Shape of the explanation
// =================================================================================================

#[test]
fn test_six_sorted_items_everywhere() {
    let model = SurrogateModel::builtin();
    let engine = AttributionEngine::new(&model);

    for (material, contaminant) in all_pairs(model.registry()) {
        for &ph in &grid(2.0, 8.0, 4) {
            for &time in &grid(0.0, 30.0, 4) {
                let items = engine.explain(&material, &contaminant, ph, 20.0, time);

                assert_eq!(items.len(), 6);
                let mut seen = factors(&items);
                seen.sort();
                assert_eq!(seen, AttributionFactor::ALL.to_vec());

                for window in items.windows(2) {
                    assert!(window[0].magnitude >= window[1].magnitude);
                    if window[0].magnitude == window[1].magnitude {
                        assert!(window[0].factor < window[1].factor, "tie order broken");
                    }
                }

                for item in &items {
                    assert_eq!(item.magnitude, item.contribution.abs());
                    assert_eq!(item.contribution, round2(item.contribution));
                    assert_eq!(item.name(), item.factor.label());
                }
            }
        }
    }
}

#[test]
fn test_competition_is_constant() {
    let model = SurrogateModel::builtin();
    let engine = AttributionEngine::new(&model);

    for (material, contaminant) in all_pairs(model.registry()) {
        let items = engine.explain(&material, &contaminant, 4.0, 30.0, 10.0);
        let competition = items
            .iter()
            .find(|item| item.factor == AttributionFactor::Competition)
            .unwrap();
        assert_eq!(competition.contribution, COMPETITION_CONTRIBUTION);
        assert_eq!(competition.magnitude, 3.2);
    }
}

// =================================================================================================
// Agreement with the model
// =================================================================================================

#[test]
fn test_type_factors_match_model() {
    let model = SurrogateModel::builtin();
    let engine = AttributionEngine::new(&model);
    let base = OperatingConditions::new(6.0, 10.0, 15.0);

    for (material, contaminant) in all_pairs(model.registry()) {
        let items = engine.explain(&material, &contaminant, 7.0, 12.0, 22.0);
        let at_baseline = model.predict(&material, &contaminant, &base).mean;

        for item in &items {
            match item.factor {
                AttributionFactor::AdsorbentType => {
                    let reference = model.predict("mof_biochar", &contaminant, &base).mean;
                    assert_eq!(item.contribution, round2(at_baseline - reference));
                }
                AttributionFactor::PollutantType => {
                    let reference = model.predict(&material, "pb", &base).mean;
                    assert_eq!(item.contribution, round2(at_baseline - reference));
                }
                AttributionFactor::ContactTime => {
                    let moved = model.predict(&material, &contaminant, &base.at_contact_time(22.0)).mean;
                    assert_eq!(item.contribution, round2(moved - engine.baseline_removal()));
                }
                _ => {}
            }
        }
    }
}

#[test]
fn test_explain_is_deterministic() {
    let model = SurrogateModel::builtin();
    let engine = AttributionEngine::new(&model);
    assert_eq!(
        engine.explain("zif8", "tetracycline", 5.0, 8.0, 12.0),
        engine.explain("zif8", "tetracycline", 5.0, 8.0, 12.0)
    );
}

// =================================================================================================
// Mock models
// =================================================================================================

#[test]
fn test_flat_model_only_competition() {
    let model = ConstantModel::new(42.0, 1.0);
    let items = AttributionEngine::new(&model).explain("a", "b", 3.0, 50.0, 5.0);

    assert_eq!(
        factors(&items),
        vec![
            AttributionFactor::Competition,
            AttributionFactor::ContactTime,
            AttributionFactor::InitialPh,
            AttributionFactor::Concentration,
            AttributionFactor::AdsorbentType,
            AttributionFactor::PollutantType,
        ]
    );
    assert!(items[1..].iter().all(|item| item.contribution == 0.0));
}

#[test]
fn test_ph_ramp_isolates_ph() {
    let model = PhRamp::new(10.0);
    let engine = AttributionEngine::new(&model);
    assert_eq!(engine.baseline_removal(), 60.0);

    let items = engine.explain("a", "b", 8.0, 25.0, 5.0);
    assert_eq!(items[0].factor, AttributionFactor::InitialPh);
    assert_eq!(items[0].contribution, 20.0);
    assert_eq!(items[1].factor, AttributionFactor::Competition);
    assert!(items[2..].iter().all(|item| item.contribution == 0.0));
}

#[test]
fn test_custom_baseline_shifts_reference() {
    let model = PhRamp::new(10.0);
    let engine = AttributionEngine::new(&model).with_baseline(Baseline {
        ph: 4.0,
        ..Baseline::default()
    });
    assert_eq!(engine.baseline_removal(), 40.0);

    let items = engine.explain("a", "b", 3.0, 10.0, 15.0);
    assert_eq!(items[0].factor, AttributionFactor::InitialPh);
    assert_eq!(items[0].contribution, -10.0);
}
