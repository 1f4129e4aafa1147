//! Form validation shared by the sign-in and sign-up dialogs.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

/// Minimum password length accepted by the auth service.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Trim the email and require both fields.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub fn validate_sign_up(email: &str, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((email.to_owned(), password.to_owned()))
}
