//! Deposit form state for the invest screen

use crate::currency::{filter_amount_input, format_currency, validate_deposit_amount};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositForm {
    deposit_amount: String,
}

impl DepositForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw amount as typed, without the `$` prefix.
    pub fn deposit_amount(&self) -> &str {
        &self.deposit_amount
    }

    pub fn handle_amount_change(&mut self, text: &str) {
        self.deposit_amount = filter_amount_input(text);
    }

    /// Input box contents. Empty so the placeholder shows.
    pub fn display_value(&self) -> String {
        if self.deposit_amount.is_empty() {
            String::new()
        } else {
            format!("${}", self.deposit_amount)
        }
    }

    pub fn is_deposit_valid(&self) -> bool {
        validate_deposit_amount(&self.deposit_amount)
    }

    /// Returns the canonical amount when the deposit may go ahead.
    pub fn handle_deposit(&self) -> Option<String> {
        if !self.is_deposit_valid() {
            log::debug!("Deposit ignored: {:?} is below the minimum", self.deposit_amount);
            return None;
        }
        let amount = format_currency(&self.deposit_amount);
        log::info!("Deposit initiated: ${}", amount);
        Some(amount)
    }
}
