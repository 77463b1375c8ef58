use pretty_assertions::assert_eq;
use unit_economics::cohort::{
    format_payback_month, minimum_retention_for_payback, retention_sweep, simulate_batch,
    HealthColor, PaybackHealth, BEYOND_HORIZON_MONTH,
};
use unit_economics::config::SimulationConfig;
use unit_economics::{
    simulate_cac_payback, CohortMonth, CohortPaybackInput, CohortSimulator, LtvMethod,
    PaybackMonth, SimplePayback,
};

fn reference_input() -> CohortPaybackInput {
    CohortPaybackInput {
        revenue_per_customer: 100.0,
        marginal_costs: 30.0,
        cac: 200.0,
        monthly_retention: 90.0,
    }
}

#[test]
fn test_reference_cohort() {
    let results = simulate_cac_payback(&reference_input());

    assert_eq!(results.gross_profit, 70.0);
    assert_eq!(results.gross_margin_percent, 70.0);
    assert_eq!(results.simple_payback_months, SimplePayback::Months(2.9));
    assert_eq!(results.ltv, 630.0);
    assert_eq!(results.ltv_method, LtvMethod::GeometricSeries);
    assert_eq!(results.ltv_cac_ratio, 3.15);
    assert_eq!(results.actual_payback_month, PaybackMonth::Month(4));
    assert!(results.is_healthy);

    assert_eq!(
        results.cohort[3],
        CohortMonth {
            month: 4,
            retention_percent: 72.9,
            monthly_gross_profit: 51.03,
            cumulative_gross_profit: 240.73,
            cumulative_payback: 40.73,
        }
    );
    assert_eq!(results.cohort[2].cumulative_gross_profit, 189.7);
}

#[test]
fn test_half_retention_stops_at_decay_floor() {
    let results = simulate_cac_payback(&CohortPaybackInput {
        monthly_retention: 50.0,
        ..reference_input()
    });

    assert_eq!(results.cohort.len(), 7);
    assert_eq!(results.cohort.last().map(|m| m.month), Some(7));
    // 70 * (1 + 0.5 + ... + 0.5^6) never reaches 200
    assert_eq!(
        results.actual_payback_month,
        PaybackMonth::BeyondHorizon { horizon: 36 }
    );
    assert_eq!(results.actual_payback_month.month_number(), BEYOND_HORIZON_MONTH);
    assert!(!results.is_healthy);
}

#[test]
fn test_full_retention_uses_fixed_horizon_ltv() {
    let results = simulate_cac_payback(&CohortPaybackInput {
        monthly_retention: 100.0,
        ..reference_input()
    });

    assert_eq!(results.ltv, 70.0 * 24.0);
    assert_eq!(results.ltv_method, LtvMethod::FixedHorizon);
    assert_eq!(results.cohort.len(), 36);
    assert_eq!(results.actual_payback_month, PaybackMonth::Month(3));
}

#[test]
fn test_unprofitable_customer_never_pays_back() {
    let results = simulate_cac_payback(&CohortPaybackInput {
        revenue_per_customer: 50.0,
        marginal_costs: 80.0,
        ..reference_input()
    });

    assert_eq!(results.simple_payback_months, SimplePayback::Never);
    assert_eq!(results.simple_payback_months.as_months(), f64::INFINITY);
    assert_eq!(results.actual_payback_month.to_string(), "> 36 months");
    assert_eq!(results.actual_payback_month.health_color(), HealthColor::Red);
}

#[test]
fn test_extended_horizon_moves_sentinel() {
    let simulator = CohortSimulator::new(SimulationConfig::extended());
    let results = simulator.simulate(&CohortPaybackInput {
        revenue_per_customer: 10.0,
        marginal_costs: 0.0,
        cac: 1_000.0,
        monthly_retention: 100.0,
    });

    assert_eq!(results.cohort.len(), 60);
    assert_eq!(results.actual_payback_month.month_number(), 61);
    assert_eq!(results.actual_payback_month.to_string(), "> 60 months");
}

#[test]
fn test_health_labels() {
    assert_eq!(PaybackMonth::Month(3).health_label(), PaybackHealth::Excellent);
    assert_eq!(PaybackMonth::Month(3).health_label().label(), "Excellent");
    assert_eq!(format_payback_month(37), "> 36 months");
    assert_eq!(format_payback_month(1), "1 month");
}

#[test]
fn test_batch_preserves_input_order() {
    let simulator = CohortSimulator::default();
    let inputs = vec![
        reference_input(),
        CohortPaybackInput {
            cac: 50.0,
            ..reference_input()
        },
    ];

    let results = simulate_batch(&simulator, &inputs);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].actual_payback_month, PaybackMonth::Month(4));
    assert_eq!(results[1].actual_payback_month, PaybackMonth::Month(1));
}

#[test]
fn test_retention_sweep_and_minimum_retention() {
    let simulator = CohortSimulator::default();
    let sweep = retention_sweep(&simulator, &reference_input(), &[50.0, 90.0]);

    let months: Vec<u32> = sweep
        .iter()
        .map(|s| s.results.actual_payback_month.month_number())
        .collect();
    assert_eq!(months, vec![37, 4]);

    let minimum = minimum_retention_for_payback(&simulator, &reference_input(), 4);
    assert!(matches!(minimum, Some(r) if r <= 90.0));
}

#[test]
fn test_results_serialize_with_tagged_sentinels() {
    let results = simulate_cac_payback(&reference_input());
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json["ltvCacRatio"], serde_json::json!(3.15));
    assert_eq!(
        json["actualPaybackMonth"],
        serde_json::json!({"kind": "month", "value": 4})
    );
    assert_eq!(
        json["simplePaybackMonths"],
        serde_json::json!({"kind": "months", "value": 2.9})
    );
}
