//! Request validation performed before any provider is contacted.

use rust_decimal::Decimal;

use aurum_types::{AurumError, ChatQuery, PurchaseRequest};

/// Validate a chat query and return the trimmed message.
///
/// # Errors
/// `Validation { field: "message" }` when the trimmed message is empty or
/// longer than `max_chars` characters.
pub fn chat_query(query: &ChatQuery, max_chars: usize) -> Result<&str, AurumError> {
    let msg = query.message.trim();
    if msg.is_empty() {
        return Err(AurumError::validation("message", "must not be empty"));
    }
    let len = msg.chars().count();
    if len > max_chars {
        return Err(AurumError::validation(
            "message",
            format!("{len} characters exceeds the limit of {max_chars}"),
        ));
    }
    Ok(msg)
}

fn required(field: &'static str, value: &str) -> Result<(), AurumError> {
    if value.trim().is_empty() {
        Err(AurumError::validation(field, "is required"))
    } else {
        Ok(())
    }
}

fn email(value: &str) -> Result<(), AurumError> {
    let bad = || AurumError::validation("email", format!("'{value}' is not a valid address"));
    let v = value.trim();
    if v.chars().any(char::is_whitespace) {
        return Err(bad());
    }
    let (local, domain) = v.split_once('@').ok_or_else(bad)?;
    if local.is_empty() || domain.contains('@') {
        return Err(bad());
    }
    let (host, tld) = domain.rsplit_once('.').ok_or_else(bad)?;
    if host.is_empty() || tld.is_empty() {
        return Err(bad());
    }
    Ok(())
}

fn phone(value: &str) -> Result<(), AurumError> {
    let v = value.trim();
    if !v
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
    {
        return Err(AurumError::validation(
            "phone",
            "may only contain digits, spaces, '+', '-' and parentheses",
        ));
    }
    let digits = v.chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&digits) {
        return Err(AurumError::validation(
            "phone",
            format!("expected 7 to 15 digits, got {digits}"),
        ));
    }
    Ok(())
}

/// Validate a purchase request field by field, in declaration order.
///
/// # Errors
/// `Validation` naming the first offending field.
pub fn purchase(req: &PurchaseRequest) -> Result<(), AurumError> {
    required("user_name", &req.user_name)?;
    required("email", &req.email)?;
    email(&req.email)?;
    required("phone", &req.phone)?;
    phone(&req.phone)?;
    if req.quantity <= Decimal::ZERO {
        return Err(AurumError::validation("quantity", "must be positive"));
    }
    if matches!(req.budget, Some(b) if b < Decimal::ZERO) {
        return Err(AurumError::validation("budget", "must not be negative"));
    }
    required("delivery_address", &req.delivery_address)?;
    Ok(())
}
