//! # Account Validation
//!
//! Format rules for the create-account form: Stellar wallet addresses,
//! usernames, display names and profile images.
//!
//! The `check_*` helpers follow the form's "error only after typing" policy:
//! an empty field is not yet validated, so it never yields an error.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::constants::{
    ALLOWED_IMAGE_TYPES, MAX_PROFILE_IMAGE_BYTES, MIN_DISPLAY_NAME_LEN, MIN_USERNAME_LEN,
    WALLET_ADDRESS_LEN, WALLET_ADDRESS_PREFIX,
};

/// Stellar public keys: `G` followed by 55 upper-case base32 characters.
pub static STELLAR_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        "^{}[A-Z0-9]{{{}}}$",
        WALLET_ADDRESS_PREFIX,
        WALLET_ADDRESS_LEN - 1
    );
    Regex::new(&pattern).expect("Invalid Stellar address regex")
});

/// A user-facing validation message for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Invalid Stellar wallet address format")]
    InvalidWalletAddress,
    #[error("Username must be at least {min} characters", min = MIN_USERNAME_LEN)]
    UsernameTooShort,
    #[error("Display name must be at least {min} characters", min = MIN_DISPLAY_NAME_LEN)]
    DisplayNameTooShort,
    #[error("File size must be less than 2MB")]
    ImageTooLarge,
    #[error("Only JPG, PNG, and WebP formats are allowed")]
    UnsupportedImageType,
    #[error("Error processing image")]
    ImageProcessing,
}

/// Returns true iff `address` is a well-formed Stellar wallet address.
///
/// The check is case-sensitive and does not trim.
pub fn validate_wallet_address(address: &str) -> bool {
    STELLAR_ADDRESS_REGEX.is_match(address)
}

/// Drop every character outside `[a-zA-Z0-9_]`.
pub fn clean_username(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

pub fn check_wallet_address(address: &str) -> Option<FieldError> {
    if !address.is_empty() && !validate_wallet_address(address) {
        Some(FieldError::InvalidWalletAddress)
    } else {
        None
    }
}

/// Expects an already cleaned username.
pub fn check_username(username: &str) -> Option<FieldError> {
    let len = username.len();
    if len > 0 && len < MIN_USERNAME_LEN {
        Some(FieldError::UsernameTooShort)
    } else {
        None
    }
}

/// Length in UTF-16 code units, the unit text inputs report.
pub fn display_name_len(display_name: &str) -> usize {
    display_name.encode_utf16().count()
}

pub fn check_display_name(display_name: &str) -> Option<FieldError> {
    let len = display_name_len(display_name);
    if len > 0 && len < MIN_DISPLAY_NAME_LEN {
        Some(FieldError::DisplayNameTooShort)
    } else {
        None
    }
}

/// Validate a picked profile image from its size and MIME type.
///
/// Size is checked first, so an oversized GIF reports the size error.
pub fn validate_profile_image(size_bytes: u64, mime_type: &str) -> Result<(), FieldError> {
    if size_bytes > MAX_PROFILE_IMAGE_BYTES {
        return Err(FieldError::ImageTooLarge);
    }

    let mime_type = mime_type.to_ascii_lowercase();
    if !ALLOWED_IMAGE_TYPES.contains(&mime_type.as_str()) {
        return Err(FieldError::UnsupportedImageType);
    }

    Ok(())
}
