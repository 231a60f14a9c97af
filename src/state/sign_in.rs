//! Sign-in form state

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInForm {
    username: String,
    password: String,
    secure_text: bool,
    is_valid: bool,
}

impl Default for SignInForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            secure_text: true,
            is_valid: false,
        }
    }
}

impl SignInForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether the password input masks its contents.
    pub fn secure_text(&self) -> bool {
        self.secure_text
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn set_username(&mut self, username: &str) {
        self.username = username.to_string();
        self.revalidate();
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = password.to_string();
        self.revalidate();
    }

    pub fn toggle_secure_text(&mut self) {
        self.secure_text = !self.secure_text;
    }

    /// Logs the attempt. The password never reaches the log.
    pub fn sign_in(&self) -> bool {
        if !self.is_valid {
            log::debug!("Sign in ignored: missing credentials");
            return false;
        }
        log::info!("Sign in requested for {:?}", self.username);
        true
    }

    fn revalidate(&mut self) {
        self.is_valid = !self.username.trim().is_empty() && !self.password.trim().is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = SignInForm::new();
        assert!(form.secure_text());
        assert!(!form.is_valid());
        assert!(!form.sign_in());
    }

    #[test]
    fn test_requires_both_fields() {
        let mut form = SignInForm::new();
        form.set_username("alice");
        assert!(!form.is_valid());

        form.set_password("hunter2");
        assert!(form.is_valid());
        assert!(form.sign_in());
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        let mut form = SignInForm::new();
        form.set_username("   ");
        form.set_password("secret");
        assert!(!form.is_valid());

        form.set_username(" bob ");
        assert!(form.is_valid());
        assert_eq!(form.username(), " bob ");
    }

    #[test]
    fn test_toggle_secure_text() {
        let mut form = SignInForm::new();
        form.toggle_secure_text();
        assert!(!form.secure_text());
        form.toggle_secure_text();
        assert!(form.secure_text());
    }
}
