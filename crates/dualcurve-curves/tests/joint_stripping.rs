//! Joint projection / discounting strips, including input-order invariance.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use dualcurve_core::Date;
use dualcurve_curves::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

struct Scenario {
    base_date: Date,
    edf: EurodollarFuture,
    inputs: Vec<CalibrationInput>,
}

/// Deposit, future, two par swaps and three basis swaps.
fn seven_instruments() -> Scenario {
    let base_date = ymd(2018, 7, 16);
    let spot = ymd(2018, 7, 18);
    let notional = 1e6;

    let edf = EurodollarFuture::new(2019, 12).unwrap();
    let inputs = vec![
        LiborDeposit::new(notional, spot, 3, 0.0150).unwrap().into(),
        CalibrationInput::future(edf, 98.40),
        InterestRateSwap::new(notional, spot, 12, 0.0250).unwrap().into(),
        InterestRateSwap::new(notional, spot, 60, 0.0300).unwrap().into(),
        OisBasisSwap::new(notional, spot, 3, 0.0005).unwrap().into(),
        OisBasisSwap::new(notional, spot, 24, 0.0020).unwrap().into(),
        OisBasisSwap::new(notional, spot, 60, 0.0030).unwrap().into(),
    ];

    Scenario {
        base_date,
        edf,
        inputs,
    }
}

fn assert_same_curves(a: &CurvePair, b: &CurvePair) {
    assert_eq!(a.projection.dates(), b.projection.dates());
    assert_eq!(a.discounting.dates(), b.discounting.dates());
    for (x, y) in a.projection.discount_factors().iter().zip(b.projection.discount_factors()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-9);
    }
    for (x, y) in a.discounting.discount_factors().iter().zip(b.discounting.discount_factors()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-9);
    }
}

#[test]
fn test_seven_instrument_joint_strip() {
    let scenario = seven_instruments();
    let result = JointCurveStripper::default()
        .strip_joint_with_report(scenario.base_date, &scenario.inputs)
        .unwrap();
    let curves = &result.curve;

    assert_eq!(curves.projection.dates().len(), 4);
    assert_eq!(curves.discounting.dates().len(), 3);
    assert_eq!(
        curves.projection.dates(),
        &[ymd(2018, 10, 18), ymd(2019, 7, 18), ymd(2019, 12, 18), ymd(2023, 7, 18)]
    );
    assert_eq!(
        curves.discounting.dates(),
        &[ymd(2018, 10, 18), ymd(2020, 7, 20), ymd(2023, 7, 18)]
    );

    for input in &scenario.inputs {
        let residual = input.residual(&curves.projection, &curves.discounting).unwrap();
        assert!(residual.abs() < 1e-4, "{}: {residual}", input.label());
    }
    assert_abs_diff_eq!(scenario.edf.model_price(&curves.projection).unwrap(), 98.40, epsilon = 1e-9);

    assert!(result.is_valid(), "{}", result.repricing_report);
    assert_eq!(result.repricing_report.checks().len(), 7);
}

#[test]
fn test_permuted_inputs_give_same_curves() {
    let scenario = seven_instruments();
    let stripper = JointCurveStripper::default();
    let curves = stripper.strip_joint(scenario.base_date, &scenario.inputs).unwrap();

    // [b2y, s5y, b3m, dep, b5y, s1y, edf]
    let order = [5, 3, 4, 0, 6, 2, 1];
    let permuted: Vec<_> = order.iter().map(|&i| scenario.inputs[i].clone()).collect();
    let permuted_curves = stripper.strip_joint(scenario.base_date, &permuted).unwrap();

    assert_same_curves(&curves, &permuted_curves);
}

#[test]
fn test_single_curve_with_futures_matches_prices() {
    let base = ymd(2018, 7, 13);
    let spot = ymd(2018, 7, 17);
    let notional = 1e7;
    let futures = [
        (EurodollarFuture::new(2018, 9).unwrap(), 98.5),
        (EurodollarFuture::new(2018, 12).unwrap(), 98.3),
        (EurodollarFuture::new(2019, 6).unwrap(), 97.9),
    ];
    let mut inputs: Vec<CalibrationInput> =
        vec![LiborDeposit::new(notional, spot, 3, 0.0090).unwrap().into()];
    inputs.extend(futures.iter().map(|&(future, price)| CalibrationInput::future(future, price)));
    inputs.push(InterestRateSwap::new(notional, spot, 120, 0.0350).unwrap().into());

    let curve = CurveStripper::default().strip(base, &inputs).unwrap();

    for (future, price) in futures {
        assert_abs_diff_eq!(future.model_price(&curve).unwrap(), price, epsilon = 1e-9);
    }
    for input in &inputs {
        assert!(input.residual(&curve, &curve).unwrap().abs() < 1e-4);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_joint_strip_ignores_input_order(
        order in Just((0..7).collect::<Vec<usize>>()).prop_shuffle()
    ) {
        let scenario = seven_instruments();
        let stripper = JointCurveStripper::default();
        let reference = stripper.strip_joint(scenario.base_date, &scenario.inputs).unwrap();

        let shuffled: Vec<_> = order.iter().map(|&i| scenario.inputs[i].clone()).collect();
        let curves = stripper.strip_joint(scenario.base_date, &shuffled).unwrap();

        prop_assert_eq!(reference.projection.dates(), curves.projection.dates());
        prop_assert_eq!(reference.discounting.dates(), curves.discounting.dates());
        for (x, y) in reference
            .projection
            .discount_factors()
            .iter()
            .chain(reference.discounting.discount_factors())
            .zip(curves.projection.discount_factors().iter().chain(curves.discounting.discount_factors()))
        {
            prop_assert!((x - y).abs() < 1e-9, "{} vs {}", x, y);
        }
    }
}
