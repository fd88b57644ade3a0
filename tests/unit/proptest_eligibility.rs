//! Property-based tests for the eligibility rules
//!
//! Uses proptest to verify properties that should hold for all inputs.

use loanscreen::eligibility::evaluate;
use loanscreen::input::parse_credit_score;
use loanscreen::models::LoanCheckRequest;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn amount(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

proptest! {
    /// Loans under 100,000 are declined whatever the asset value and score
    #[test]
    fn small_loans_always_declined(
        loan in 0i64..10_000_000,
        asset in 0i64..1_000_000_000_000,
        score in 1u16..=999
    ) {
        prop_assert_eq!(evaluate(amount(loan), amount(asset), score), Ok(false));
    }

    /// Loans over 15,000,000 are declined whatever the asset value and score
    #[test]
    fn huge_loans_always_declined(
        loan in 1_500_000_001i64..1_000_000_000_000,
        asset in 0i64..1_000_000_000_000,
        score in 1u16..=999
    ) {
        prop_assert_eq!(evaluate(amount(loan), amount(asset), score), Ok(false));
    }

    /// Large loans are eligible exactly when LTV < 60 and score >= 950
    #[test]
    fn large_loans_follow_single_rule(
        loan in 100_000_000i64..=1_500_000_000,
        asset in 1i64..10_000_000_000,
        score in 1u16..=999
    ) {
        let request = LoanCheckRequest::new(amount(loan), amount(asset), score);
        let ltv = request.ltv().unwrap();
        let expected = ltv < dec!(60) && score >= 950;
        prop_assert_eq!(evaluate(amount(loan), amount(asset), score), Ok(expected));
    }

    /// No eligible application ever has a score under 750
    #[test]
    fn eligible_needs_at_least_750(
        loan in 10_000_000i64..=1_500_000_000,
        asset in 1i64..10_000_000_000,
        score in 1u16..750
    ) {
        prop_assert_eq!(evaluate(amount(loan), amount(asset), score), Ok(false));
    }

    /// Raising the score never turns an eligible application ineligible
    #[test]
    fn score_is_monotonic(
        loan in 10_000_000i64..=1_500_000_000,
        asset in 1i64..10_000_000_000,
        score in 1u16..999
    ) {
        let lower = evaluate(amount(loan), amount(asset), score).unwrap();
        let higher = evaluate(amount(loan), amount(asset), score + 1).unwrap();
        prop_assert!(!lower || higher);
    }

    /// Every in-range integer parses as a credit score
    #[test]
    fn credit_scores_in_range_parse(score in 1u16..=999) {
        prop_assert_eq!(parse_credit_score(&score.to_string()), Ok(score));
    }
}
