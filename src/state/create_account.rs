//! Create-account form state

use serde::Serialize;

use crate::constants::{MIN_DISPLAY_NAME_LEN, MIN_USERNAME_LEN, WALLET_PREVIEW_LEN};
use crate::validation::{
    check_display_name, check_username, check_wallet_address, clean_username, display_name_len,
    validate_wallet_address, FieldError,
};

/// Fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WalletAddress,
    Username,
    DisplayName,
    ProfileImage,
}

/// Raw field values as entered in the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub profile_image: Option<String>,
    pub wallet_address: String,
    pub username: String,
    pub display_name: String,
    pub terms_accepted: bool,
}

/// Current error per field. `None` means no message is shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub wallet_address: Option<FieldError>,
    pub username: Option<FieldError>,
    pub display_name: Option<FieldError>,
    pub profile_image: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::WalletAddress => self.wallet_address,
            Field::Username => self.username,
            Field::DisplayName => self.display_name,
            Field::ProfileImage => self.profile_image,
        }
    }

    /// Message for `field`, empty when there is no error.
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.wallet_address.is_none()
            && self.username.is_none()
            && self.display_name.is_none()
            && self.profile_image.is_none()
    }
}

/// Snapshot handed off on a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    pub profile_image: Option<String>,
    pub wallet_address: String,
    pub username: String,
    pub display_name: String,
    pub terms_accepted: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateAccountForm {
    state: FormState,
    errors: FieldErrors,
    is_submitting: bool,
    show_success: bool,
}

impl CreateAccountForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn show_success(&self) -> bool {
        self.show_success
    }

    pub fn handle_wallet_address_change(&mut self, text: &str) {
        self.state.wallet_address = text.to_string();
        self.errors.wallet_address = check_wallet_address(text);
    }

    /// Stores the cleaned username, so the input drops rejected characters.
    pub fn handle_username_change(&mut self, text: &str) {
        let cleaned = clean_username(text);
        self.errors.username = check_username(&cleaned);
        self.state.username = cleaned;
    }

    pub fn handle_display_name_change(&mut self, text: &str) {
        self.state.display_name = text.to_string();
        self.errors.display_name = check_display_name(text);
    }

    pub fn handle_terms_accepted_change(&mut self, accepted: bool) {
        self.state.terms_accepted = accepted;
    }

    pub fn accept_profile_image(&mut self, uri: String) {
        log::debug!("Profile image accepted: {}", uri);
        self.errors.profile_image = None;
        self.state.profile_image = Some(uri);
    }

    /// Keeps any previously accepted image.
    pub fn reject_profile_image(&mut self, error: FieldError) {
        log::warn!("Profile image rejected: {}", error);
        self.errors.profile_image = Some(error);
    }

    pub fn is_form_valid(&self) -> bool {
        let state = &self.state;
        !state.wallet_address.trim().is_empty()
            && validate_wallet_address(&state.wallet_address)
            && state.username.len() >= MIN_USERNAME_LEN
            && display_name_len(&state.display_name) >= MIN_DISPLAY_NAME_LEN
            && state.terms_accepted
            && self.errors.is_empty()
    }

    /// Start submitting. Returns the account snapshot, or `None` without
    /// touching any state when the form is not valid.
    pub fn create_account(&mut self) -> Option<AccountData> {
        if !self.is_form_valid() {
            log::debug!("Create account ignored: form is not valid");
            return None;
        }

        self.is_submitting = true;
        self.show_success = true;

        let account = AccountData {
            profile_image: self.state.profile_image.clone(),
            wallet_address: self.state.wallet_address.clone(),
            username: self.state.username.clone(),
            display_name: self.state.display_name.clone(),
            terms_accepted: self.state.terms_accepted,
        };

        match serde_json::to_string(&account) {
            Ok(json) => log::info!("Account created: {}", json),
            Err(e) => log::warn!("Account created, but could not serialize it: {}", e),
        }

        Some(account)
    }

    pub fn finish_submission(&mut self) {
        self.is_submitting = false;
    }

    pub fn reset_success(&mut self) {
        self.show_success = false;
    }

    /// Title and body of the confirmation shown after submitting.
    pub fn success_alert(&self) -> (String, String) {
        let wallet_preview: String = self
            .state
            .wallet_address
            .chars()
            .take(WALLET_PREVIEW_LEN)
            .collect();
        let body = format!(
            "Welcome, {}!\n\nYour account has been created successfully.\n\nUsername: @{}\nWallet: {}...",
            self.state.display_name, self.state.username, wallet_preview
        );
        ("✅ Account Created!".to_string(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet() -> String {
        format!("G{}", "A".repeat(55))
    }

    fn filled_form() -> CreateAccountForm {
        let mut form = CreateAccountForm::new();
        form.handle_wallet_address_change(&wallet());
        form.handle_username_change("satoshi");
        form.handle_display_name_change("Satoshi N");
        form.handle_terms_accepted_change(true);
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = CreateAccountForm::new();
        assert_eq!(form.state(), &FormState::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
        assert!(!form.show_success());
        assert!(!form.is_form_valid());
    }

    #[test]
    fn test_wallet_error_tracks_current_value() {
        let mut form = CreateAccountForm::new();
        form.handle_wallet_address_change("GABC");
        assert_eq!(
            form.errors().message(Field::WalletAddress),
            "Invalid Stellar wallet address format"
        );

        form.handle_wallet_address_change("");
        assert_eq!(form.errors().message(Field::WalletAddress), "");

        form.handle_wallet_address_change(&wallet());
        assert_eq!(form.errors().get(Field::WalletAddress), None);
    }

    #[test]
    fn test_username_is_cleaned_before_validation() {
        let mut form = CreateAccountForm::new();
        form.handle_username_change("a!b");
        assert_eq!(form.state().username, "ab");
        assert_eq!(form.errors().get(Field::Username), Some(FieldError::UsernameTooShort));

        form.handle_username_change("a b_c");
        assert_eq!(form.state().username, "ab_c");
        assert_eq!(form.errors().get(Field::Username), None);
    }

    #[test]
    fn test_handlers_only_touch_their_own_field() {
        let mut form = CreateAccountForm::new();
        form.handle_wallet_address_change("bad");
        form.handle_display_name_change("X");
        form.handle_username_change("valid_name");

        assert!(form.errors().wallet_address.is_some());
        assert!(form.errors().display_name.is_some());
        assert!(form.errors().username.is_none());
    }

    #[test]
    fn test_form_validity() {
        let mut form = filled_form();
        assert!(form.is_form_valid());

        form.handle_terms_accepted_change(false);
        assert!(!form.is_form_valid());
        form.handle_terms_accepted_change(true);

        form.handle_display_name_change("S");
        assert!(!form.is_form_valid());
        form.handle_display_name_change("Sa");
        assert!(form.is_form_valid());
    }

    #[test]
    fn test_single_emoji_display_name_is_valid() {
        let mut form = filled_form();
        form.handle_display_name_change("😀");
        assert_eq!(form.errors().message(Field::DisplayName), "");
        assert!(form.is_form_valid());
    }

    #[test]
    fn test_image_error_blocks_submission() {
        let mut form = filled_form();
        form.accept_profile_image("blob:first".to_string());
        form.reject_profile_image(FieldError::ImageTooLarge);

        assert!(!form.is_form_valid());
        assert_eq!(form.state().profile_image.as_deref(), Some("blob:first"));
        assert_eq!(
            form.errors().message(Field::ProfileImage),
            "File size must be less than 2MB"
        );

        form.accept_profile_image("blob:second".to_string());
        assert!(form.is_form_valid());
        assert_eq!(form.state().profile_image.as_deref(), Some("blob:second"));
    }

    #[test]
    fn test_create_account_requires_valid_form() {
        let mut form = CreateAccountForm::new();
        form.handle_username_change("satoshi");
        let before = form.clone();

        assert_eq!(form.create_account(), None);
        assert_eq!(form, before);
    }

    #[test]
    fn test_create_account_lifecycle() {
        let mut form = filled_form();
        let account = form.create_account().unwrap();

        assert_eq!(account.username, "satoshi");
        assert_eq!(account.wallet_address, wallet());
        assert!(account.terms_accepted);
        assert!(form.is_submitting());
        assert!(form.show_success());

        form.finish_submission();
        assert!(!form.is_submitting());
        assert!(form.show_success());

        form.reset_success();
        assert!(!form.show_success());
    }

    #[test]
    fn test_account_data_json_uses_camel_case() {
        let account = filled_form().create_account().unwrap();
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["displayName"], "Satoshi N");
        assert_eq!(json["profileImage"], serde_json::Value::Null);
        assert_eq!(json["termsAccepted"], true);
    }

    #[test]
    fn test_success_alert() {
        let form = filled_form();
        let (title, body) = form.success_alert();
        assert_eq!(title, "✅ Account Created!");
        assert_eq!(
            body,
            "Welcome, Satoshi N!\n\nYour account has been created successfully.\n\nUsername: @satoshi\nWallet: GAAAAAAAAA..."
        );
    }
}
