//! Per-lender offer statistics

use rust_decimal::Decimal;

use crate::models::{report::LenderDashboardStats, LoanOfferRecord};

/// Counts active offers and sums their amounts. Issued loans, returns and
/// active loans have no backing collection and report zero.
pub fn compute_lender_dashboard(offers: &[LoanOfferRecord]) -> LenderDashboardStats {
    let (count, amount) = offers
        .iter()
        .filter(|o| o.is_active())
        .fold((0_i64, Decimal::ZERO), |(count, amount), offer| {
            (count + 1, amount.saturating_add(offer.amount_or_zero()))
        });

    LenderDashboardStats {
        total_active_offers: count,
        total_amount_offered: amount,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(amount: Option<i64>, status: &str) -> LoanOfferRecord {
        LoanOfferRecord {
            id: "o".to_string(),
            lender_id: Some("lender123".to_string()),
            amount: amount.map(Decimal::from),
            interest_rate: None,
            tenure: None,
            min_credit_score: None,
            description: None,
            status: Some(status.to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_counts_only_active_offers() {
        let offers = vec![
            offer(Some(50000), "active"),
            offer(Some(75000), "active"),
            offer(Some(30000), "inactive"),
        ];

        let stats = compute_lender_dashboard(&offers);

        assert_eq!(stats.total_active_offers, 2);
        assert_eq!(stats.total_amount_offered, Decimal::from(125000));
        assert_eq!(stats.total_loans_issued, 0);
        assert_eq!(stats.total_returns, Decimal::ZERO);
        assert_eq!(stats.active_loans_count, 0);
    }

    #[test]
    fn test_missing_amount_counts_as_zero() {
        let stats = compute_lender_dashboard(&[offer(None, "active")]);
        assert_eq!(stats.total_active_offers, 1);
        assert_eq!(stats.total_amount_offered, Decimal::ZERO);
    }
}
