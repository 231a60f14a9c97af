pub mod create_account;
pub mod invest;
pub mod layout;
pub mod pay;
pub mod sign_in;
