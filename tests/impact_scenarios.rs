use local_impact::api::{RetailerPayload, compute_impact, default_scenario};
use local_impact::config::DashboardConfig;
use local_impact::core::{
    ErrorKind, LocalImpactCalculator, RetailerInputs, local_impact_dollars, local_impact_share,
    retail_impact_base, summarize_retailer,
};

const EPS: f64 = 1e-6;

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn documented_scenarios_produce_expected_figures() {
    // (sales, taxes, shipping, local rate, multiplier, base, dollars, share)
    let cases = [
        (100_000.0, 8_000.0, 5_000.0, 0.70, 1.7, 91_000.0, 108_290.0, 1.0829),
        (50_000.0, 4_000.0, 2_500.0, 0.6, 1.6, 45_500.0, 43_680.0, 0.8736),
        (1_000.0, 0.0, 5_000.0, 0.5, 1.5, -4_000.0, 0.0, 0.0),
        (0.0, 0.0, 0.0, 0.5, 1.5, 0.0, 0.0, 0.0),
    ];

    for (ts, tx, sh, lr, m, base, dollars, share) in cases {
        assert_approx(retail_impact_base(ts, tx, sh), base);
        assert_approx(local_impact_dollars(ts, tx, sh, lr, m), dollars);
        assert_approx(local_impact_share(ts, tx, sh, lr, m), share);

        let inputs = RetailerInputs::new("Scenario", ts, tx, sh, lr, m).expect("valid inputs");
        let summary = summarize_retailer(&inputs);
        assert_eq!(summary.retail_impact_base, base);
        assert_eq!(summary.local_impact_dollars, dollars);
        assert_eq!(summary.local_impact_share, share);
    }
}

#[test]
fn out_of_bound_inputs_are_value_errors() {
    let bad = [
        RetailerInputs::new("A", 100.0, 0.0, 0.0, 1.5, 1.5),
        RetailerInputs::new("A", -1.0, 0.0, 0.0, 0.5, 1.5),
        RetailerInputs::new("A", 100.0, 0.0, 0.0, 0.5, 0.0),
    ];
    for result in bad {
        let err = result.expect_err("must reject");
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}

#[test]
fn default_dashboard_scenario_ranks_flx_goods_highest_share() {
    let config = DashboardConfig::default();
    let retailers = default_scenario(&config, "Target, Aldi");
    let response = compute_impact(&LocalImpactCalculator, &retailers).expect("defaults are valid");

    assert_eq!(response.summaries.len(), 6);
    let expected = [
        ("FLX Goods", 80_280.0, 1.338),
        ("Amazon", 21_760.0, 0.1451),
        ("Walmart", 43_300.0, 0.3608),
        ("Wegmans", 45_304.0, 0.5034),
        ("Target", 23_360.0, 0.292),
        ("Aldi", 23_360.0, 0.292),
    ];
    for (summary, (name, dollars, share)) in response.summaries.iter().zip(expected) {
        assert_eq!(summary.name, name);
        assert_approx(summary.local_impact_dollars, dollars);
        assert_approx(summary.local_impact_share, share);
    }
    assert_eq!(response.kpis[3].delta, "$45,304 local impact");
}

#[test]
fn one_invalid_retailer_rejects_the_whole_request() {
    let mut retailers = default_scenario(&DashboardConfig::default(), "");
    retailers.push(RetailerPayload {
        name: "Broken".to_string(),
        total_sales: Some(10.0),
        taxes: Some(0.0),
        shipping: Some(0.0),
        local_rate: Some(0.5),
        multiplier: Some(-1.0),
    });

    let err = compute_impact(&LocalImpactCalculator, &retailers).expect_err("negative multiplier");
    assert!(err.to_string().starts_with("Broken: multiplier must be > 0"));
}
