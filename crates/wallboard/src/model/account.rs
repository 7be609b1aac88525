//! Login form state.

/// Header login form: credentials, pending flag, and the inline error
/// shown next to the triggering control.
#[derive(Debug, Default)]
pub struct LoginForm {
    /// Entered username.
    pub username: String,
    /// Entered password.
    pub password: String,
    /// True while a login request is outstanding.
    pub is_pending: bool,
    /// Last login failure, shown inline.
    pub error: Option<String>,
}

impl LoginForm {
    /// Clears the form after a successful login.
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.is_pending = false;
        self.error = None;
    }
}
