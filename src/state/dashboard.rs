//! Display-only figures for the pay and invest dashboards

use crate::currency::{format_number, format_usd};

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveLoan {
    pub amount_due: f64,
    pub total: f64,
    pub days_left: u32,
}

impl ActiveLoan {
    /// Share of the loan still owed, rounded down.
    pub fn remaining_percent(&self) -> u32 {
        if self.total <= 0.0 {
            return 0;
        }
        ((self.amount_due * 100.0 / self.total).floor() as u32).min(100)
    }

    pub fn days_left_label(&self) -> String {
        match self.days_left {
            1 => "1 day left".to_string(),
            n => format!("{} days left", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PayDashboard {
    pub reputation_score: u32,
    pub max_score: u32,
    pub verified: bool,
    pub available_credit: f64,
    pub active_loan: Option<ActiveLoan>,
    pub bnpl_eligible: bool,
}

impl Default for PayDashboard {
    fn default() -> Self {
        Self {
            reputation_score: 82,
            max_score: 100,
            verified: true,
            available_credit: 320.0,
            active_loan: Some(ActiveLoan {
                amount_due: 50.0,
                total: 150.0,
                days_left: 3,
            }),
            bnpl_eligible: true,
        }
    }
}

impl PayDashboard {
    pub fn score_percent(&self) -> u32 {
        if self.max_score == 0 {
            return 0;
        }
        (self.reputation_score.min(self.max_score) * 100) / self.max_score
    }

    pub fn available_credit_label(&self) -> String {
        format_usd(self.available_credit)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvestOverview {
    pub total_invested: f64,
    pub earnings: f64,
    pub estimated_apy: f64,
    pub return_rate: f64,
    pub pool_size: f64,
    pub active_loans: u32,
    pub risk_level: &'static str,
}

impl Default for InvestOverview {
    fn default() -> Self {
        Self {
            total_invested: 1250.0,
            earnings: 42.3,
            estimated_apy: 5.2,
            return_rate: 3.4,
            pool_size: 48320.0,
            active_loans: 36,
            risk_level: "Low",
        }
    }
}

impl InvestOverview {
    pub fn earnings_label(&self) -> String {
        if self.earnings >= 0.0 {
            format!("+{}", format_usd(self.earnings))
        } else {
            format_usd(self.earnings)
        }
    }

    pub fn return_rate_label(&self) -> String {
        if self.return_rate >= 0.0 {
            format!("+{:.1}%", self.return_rate)
        } else {
            format!("{:.1}%", self.return_rate)
        }
    }

    pub fn pool_size_label(&self) -> String {
        format!("${}", format_number(self.pool_size, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_dashboard_defaults() {
        let pay = PayDashboard::default();
        assert_eq!(pay.score_percent(), 82);
        assert_eq!(pay.available_credit_label(), "$320.00");

        let loan = pay.active_loan.unwrap();
        assert_eq!(loan.remaining_percent(), 33);
        assert_eq!(loan.days_left_label(), "3 days left");
    }

    #[test]
    fn test_score_percent_is_clamped() {
        let pay = PayDashboard {
            reputation_score: 140,
            ..PayDashboard::default()
        };
        assert_eq!(pay.score_percent(), 100);

        let empty = PayDashboard {
            max_score: 0,
            ..PayDashboard::default()
        };
        assert_eq!(empty.score_percent(), 0);
    }

    #[test]
    fn test_invest_overview_labels() {
        let invest = InvestOverview::default();
        assert_eq!(format_usd(invest.total_invested), "$1,250.00");
        assert_eq!(invest.earnings_label(), "+$42.30");
        assert_eq!(invest.return_rate_label(), "+3.4%");
        assert_eq!(invest.pool_size_label(), "$48,320");
    }

    #[test]
    fn test_days_left_singular() {
        let loan = ActiveLoan {
            amount_due: 0.0,
            total: 10.0,
            days_left: 1,
        };
        assert_eq!(loan.days_left_label(), "1 day left");
        assert_eq!(loan.remaining_percent(), 0);
    }
}
