//! Loan portfolio report over loan ads

use rust_decimal::Decimal;

use super::average;
use crate::models::{
    report::{LoanReport, LoansByStatus},
    LoanAdRecord, LoanAdStatus,
};

/// Single pass over all loan ads. Closed ads count as completed loans;
/// defaults are not tracked and always report zero.
pub fn compute_loan_report(ads: &[LoanAdRecord]) -> LoanReport {
    let mut by_status = LoansByStatus::default();
    let mut total_loans = 0_i64;
    let mut total_amount = Decimal::ZERO;

    for ad in ads {
        total_loans += 1;

        match ad.status {
            Some(LoanAdStatus::Pending) => by_status.pending += 1,
            Some(LoanAdStatus::Approved) => by_status.approved += 1,
            Some(LoanAdStatus::Active) => by_status.active += 1,
            Some(LoanAdStatus::Rejected) => by_status.rejected += 1,
            Some(LoanAdStatus::Closed) => by_status.completed += 1,
            None => {}
        }

        total_amount = total_amount.saturating_add(ad.amount_or_zero());
    }

    LoanReport {
        total_loans,
        active_loans: by_status.active,
        completed_loans: by_status.completed,
        defaulted_loans: 0,
        total_loan_amount: total_amount,
        average_loan_amount: average(total_amount, total_loans),
        pending_approvals: by_status.pending,
        loans_by_status: by_status,
    }
}
