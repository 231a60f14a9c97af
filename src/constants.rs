//! Application constants

// Account form
pub const WALLET_ADDRESS_PREFIX: char = 'G';
pub const WALLET_ADDRESS_LEN: usize = 56;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_DISPLAY_NAME_LEN: usize = 2;

// Profile image limits
pub const MAX_PROFILE_IMAGE_BYTES: u64 = 2 * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

// Deposits (USD)
pub const MIN_DEPOSIT: f64 = 10.0;
pub const CURRENCY_DECIMALS: usize = 2;

// UI constants
pub const SUBMIT_DELAY_MS: u32 = 500;
pub const WALLET_PREVIEW_LEN: usize = 10;

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;
