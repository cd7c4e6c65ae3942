// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure validation helpers for registration and login input.

/// Special characters accepted by the password policy.
const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Check an email address for plausible shape: one-or-more non-whitespace,
/// non-`@` characters, then `@`, then the same on either side of a `.` in
/// the domain. No DNS or deliverability checking.
pub fn is_valid_email(value: &str) -> bool {
    fn plain(part: &str) -> bool {
        !part.is_empty() && !part.contains('@') && !part.chars().any(char::is_whitespace)
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    plain(local) && plain(host) && plain(tld)
}

/// Check a password against the strength policy.
///
/// Rules are evaluated in a fixed order and the first violation wins;
/// callers surface exactly one message for multi-violation inputs, so the
/// order here is part of the contract.
pub fn check_password_policy(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one number");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Err("Password must contain at least one special character (@$!%*?&)");
    }
    Ok(())
}
