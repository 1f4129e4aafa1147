use super::*;

#[test]
fn sign_in_trims_email_and_keeps_password_verbatim() {
    assert_eq!(
        validate_sign_in("  shopper@example.com ", " pass word "),
        Ok(("shopper@example.com".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn sign_in_requires_both_fields() {
    assert_eq!(validate_sign_in("   ", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_sign_in("a@b.com", ""), Err("Enter your email and password."));
}

#[test]
fn sign_up_accepts_matching_passwords() {
    assert_eq!(
        validate_sign_up(" new@example.com ", "hunter22", "hunter22"),
        Ok(("new@example.com".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn sign_up_rejects_missing_at_sign() {
    assert_eq!(validate_sign_up("not-an-email", "hunter22", "hunter22"), Err("Enter a valid email address."));
    assert_eq!(validate_sign_up("", "hunter22", "hunter22"), Err("Enter a valid email address."));
}

#[test]
fn sign_up_rejects_short_password() {
    assert_eq!(validate_sign_up("a@b.com", "12345", "12345"), Err("Password must be at least 6 characters."));
    assert!(validate_sign_up("a@b.com", "123456", "123456").is_ok());
}

#[test]
fn sign_up_rejects_mismatched_confirmation() {
    assert_eq!(validate_sign_up("a@b.com", "hunter22", "hunter23"), Err("Passwords do not match."));
}
