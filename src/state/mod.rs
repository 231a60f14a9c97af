//! Form and screen state, independent of the UI framework.

pub mod create_account;
pub mod dashboard;
pub mod deposit;
pub mod sign_in;

pub use create_account::{AccountData, CreateAccountForm, Field, FieldErrors, FormState};
pub use dashboard::{ActiveLoan, InvestOverview, PayDashboard};
pub use deposit::DepositForm;
pub use sign_in::SignInForm;
