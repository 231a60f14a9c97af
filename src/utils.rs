use wasm_bindgen::prelude::*;

use crate::{currency, validation};

#[wasm_bindgen(js_name = validateWalletAddress)]
pub fn validate_wallet_address(address: &str) -> bool {
    validation::validate_wallet_address(address)
}

#[wasm_bindgen(js_name = cleanUsername)]
pub fn clean_username(text: &str) -> String {
    validation::clean_username(text)
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(value: &str) -> String {
    currency::format_currency(value)
}

#[wasm_bindgen(js_name = validateDepositAmount)]
pub fn validate_deposit_amount(value: &str) -> bool {
    currency::validate_deposit_amount(value)
}

#[wasm_bindgen(js_name = handleAmountChange)]
pub fn handle_amount_change(text: &str) -> String {
    currency::filter_amount_input(text)
}

/// Shorten a wallet address to `GABC...WXYZ` for display.
pub fn format_wallet_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Blocking browser alert. Returns once the user dismisses it.
pub fn show_alert(title: &str, message: &str) {
    let text = format!("{}\n\n{}", title, message);
    if let Err(e) = gloo_utils::window().alert_with_message(&text) {
        log::error!("Failed to show alert: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_wallet_address() {
        let addr = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";
        assert_eq!(format_wallet_address(addr), "GBRPYH...C7OX2H");
        assert_eq!(format_wallet_address("GSHORT"), "GSHORT");
    }

    #[test]
    fn test_exports_delegate() {
        assert!(!validate_wallet_address("G"));
        assert_eq!(clean_username("a-b"), "ab");
        assert_eq!(format_currency("1"), "1.00");
        assert!(validate_deposit_amount("10"));
        assert_eq!(handle_amount_change("$5.555"), "5.55");
    }
}
