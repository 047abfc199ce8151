//! User demographics report

use chrono::{DateTime, FixedOffset};

use super::CalendarWindow;
use crate::models::{report::UserReport, UserRecord, UserRole, UserStatus};

/// Single pass over all users.
///
/// Users without a recognized role or status are counted in the total only.
pub fn compute_user_report(users: &[UserRecord], now: DateTime<FixedOffset>) -> UserReport {
    let window = CalendarWindow::new(now);
    let mut report = UserReport::default();

    for user in users {
        report.total_users += 1;

        match user.status {
            Some(UserStatus::Active) => report.users_by_status.active += 1,
            Some(UserStatus::Suspended) => report.users_by_status.suspended += 1,
            None => {}
        }

        match user.role {
            Some(UserRole::Admin) => report.users_by_role.admin += 1,
            Some(UserRole::Borrower) => report.users_by_role.borrower += 1,
            Some(UserRole::Lender) => report.users_by_role.lender += 1,
            None => {}
        }

        if user.created_at.is_some_and(|ts| window.is_current_month(&ts)) {
            report.new_users_this_month += 1;
        }
    }

    report.active_users = report.users_by_status.active;
    report.suspended_users = report.users_by_status.suspended;
    report.borrowers = report.users_by_role.borrower;
    report.lenders = report.users_by_role.lender;
    report
}
