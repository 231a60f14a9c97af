use trustup::state::{CreateAccountForm, DepositForm, Field};
use trustup::{clean_username, format_currency, validate_deposit_amount, validate_wallet_address};

#[test]
fn format_currency_examples() {
    assert_eq!(format_currency(""), "0.00");
    assert_eq!(format_currency("abc"), "0.00");
    assert_eq!(format_currency("10"), "10.00");
    assert_eq!(format_currency("10.5"), "10.50");
    assert_eq!(format_currency("10.55"), "10.55");
    assert_eq!(format_currency("$10.50"), "10.50");
    assert_eq!(format_currency("10,000.50"), "10000.50");
}

#[test]
fn format_currency_rounds_like_fixed_point_display() {
    assert_eq!(format_currency("0.015"), "0.01");
    assert_eq!(format_currency("1.005"), "1.00");
    assert_eq!(format_currency("2.675"), "2.67");
    assert_eq!(format_currency("8.345"), "8.35");
    assert_eq!(format_currency("0.125"), "0.13");
}

#[test]
fn deposit_minimum_is_inclusive() {
    assert!(!validate_deposit_amount(""));
    assert!(!validate_deposit_amount("0"));
    assert!(!validate_deposit_amount("9.99"));
    assert!(validate_deposit_amount("10"));
    assert!(validate_deposit_amount("10.00"));
    assert!(validate_deposit_amount("100"));
}

#[test]
fn wallet_address_shape() {
    assert!(validate_wallet_address(&format!("G{}", "A".repeat(55))));
    assert!(!validate_wallet_address(&format!("g{}", "A".repeat(55))));
    assert!(!validate_wallet_address(&format!("G{}", "A".repeat(54))));
}

#[test]
fn clean_username_examples() {
    assert_eq!(clean_username("hello world!"), "helloworld");
    assert_eq!(clean_username("user_name_42"), "user_name_42");
}

#[test]
fn create_account_end_to_end() {
    let mut form = CreateAccountForm::new();
    form.handle_wallet_address_change("not-a-wallet");
    form.handle_username_change("al");
    form.handle_display_name_change("A");
    form.handle_terms_accepted_change(true);

    assert_eq!(
        form.errors().message(Field::WalletAddress),
        "Invalid Stellar wallet address format"
    );
    assert_eq!(
        form.errors().message(Field::Username),
        "Username must be at least 3 characters"
    );
    assert_eq!(
        form.errors().message(Field::DisplayName),
        "Display name must be at least 2 characters"
    );
    assert!(form.create_account().is_none());

    form.handle_wallet_address_change(&format!("G{}", "B2".repeat(27) + "C"));
    form.handle_username_change("alice");
    form.handle_display_name_change("Alice");

    assert!(form.errors().is_empty());
    let account = form.create_account().expect("form should be valid");
    assert_eq!(account.display_name, "Alice");
    assert!(form.is_submitting());
}

#[test]
fn deposit_flow() {
    let mut form = DepositForm::new();
    form.handle_amount_change("$9");
    assert!(form.handle_deposit().is_none());

    form.handle_amount_change("$19.999");
    assert_eq!(form.deposit_amount(), "19.99");
    assert_eq!(form.handle_deposit().as_deref(), Some("19.99"));
}
