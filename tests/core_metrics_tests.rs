use pretty_assertions::assert_eq;
use unit_economics::{
    calculate_business_metrics, calculate_cac, calculate_ltv, calculate_monthly_gross_profit,
    calculate_payback_period, calculate_ratio, get_rating_tier, BusinessMetricsInput,
    BusinessMetricsOutput, RatingTier,
};

fn sample_input() -> BusinessMetricsInput {
    BusinessMetricsInput {
        average_order_value: 100.0,
        purchase_frequency: 4.0,
        gross_margin_percent: 50.0,
        customer_lifespan: 3.0,
        monthly_marketing_spend: 3_000.0,
        monthly_sales_costs: 1_000.0,
        new_customers_per_month: 20.0,
    }
}

#[test]
fn test_ltv_from_annual_gross_profit() {
    // 100 * 4 * 0.5 * 3
    assert_eq!(calculate_ltv(&sample_input()), 600.0);
}

#[test]
fn test_full_metrics_bundle() {
    let output = calculate_business_metrics(&sample_input());

    assert_eq!(
        output,
        BusinessMetricsOutput {
            ltv: 600.0,
            cac: 200.0,
            ratio: 3.0,
            // 200 / 16.67
            payback_period: 12.0,
            monthly_gross_profit: 16.67,
        }
    );
    assert_eq!(output.rating_tier(), RatingTier::Ratio3To5);
}

#[test]
fn test_no_new_customers_means_zero_cac_and_ratio() {
    let input = BusinessMetricsInput {
        new_customers_per_month: 0.0,
        ..sample_input()
    };
    let output = calculate_business_metrics(&input);

    assert_eq!(calculate_cac(&input), 0.0);
    assert_eq!(output.cac, 0.0);
    assert_eq!(output.ratio, 0.0);
    assert_eq!(output.rating_tier(), RatingTier::Below1);
}

#[test]
fn test_zero_margin_payback_sentinel() {
    let input = BusinessMetricsInput {
        gross_margin_percent: 0.0,
        ..sample_input()
    };

    assert_eq!(calculate_monthly_gross_profit(&input), 0.0);
    assert_eq!(calculate_business_metrics(&input).payback_period, 0.0);
}

#[test]
fn test_ratio_and_payback_rounding() {
    assert_eq!(calculate_ratio(630.0, 200.0), 3.15);
    assert_eq!(calculate_ratio(100.0, 3.0), 33.33);
    assert_eq!(calculate_payback_period(200.0, 70.0), 2.9);
    assert_eq!(calculate_payback_period(200.0, 0.0), 0.0);
}

#[test]
fn test_rating_tier_boundaries() {
    assert_eq!(get_rating_tier(0.99), RatingTier::Below1);
    assert_eq!(get_rating_tier(1.0), RatingTier::Ratio1To2);
    assert_eq!(get_rating_tier(2.0), RatingTier::Ratio2To3);
    assert_eq!(get_rating_tier(3.0), RatingTier::Ratio3To5);
    assert_eq!(get_rating_tier(5.0), RatingTier::Ratio5To10);
    assert_eq!(get_rating_tier(10.0), RatingTier::Above10);
}

#[test]
fn test_input_deserializes_from_camel_case() {
    let json = r#"{
        "averageOrderValue": 100,
        "purchaseFrequency": 4,
        "grossMarginPercent": 50,
        "customerLifespan": 3,
        "monthlyMarketingSpend": 3000,
        "monthlySalesCosts": 1000,
        "newCustomersPerMonth": 20
    }"#;
    let input: BusinessMetricsInput = serde_json::from_str(json).unwrap();
    assert_eq!(input, sample_input());
}

#[test]
fn test_validate_rejects_margin_above_hundred() {
    let input = BusinessMetricsInput {
        gross_margin_percent: 120.0,
        ..sample_input()
    };
    let err = input.validate().unwrap_err();
    assert!(err.to_string().contains("grossMarginPercent"));
    assert!(sample_input().validate().is_ok());
}
