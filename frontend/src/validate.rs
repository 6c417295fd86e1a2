//! Client-side field validation shared by every management page.
//!
//! A page declares an ordered slice of [`Rule`]s; [`validate`] walks it and
//! stops at the first failure, returning that rule's message for the error
//! banner. Nothing here touches the network: a draft that fails validation
//! is never submitted.

use regex::Regex;
use std::collections::HashMap;

/// Mutable staging object bound to an open modal: field name to raw input.
pub type FormDraft = HashMap<String, String>;

/// Symbols the password policy accepts; everything outside
/// `[A-Za-z0-9]` plus this set is rejected.
const PASSWORD_SYMBOLS: &str = "@$!%*?&";

const EMAIL_MESSAGE: &str = "El correo electrónico no tiene un formato válido.";
const PHONE_MESSAGE: &str = "El teléfono debe contener 10 dígitos numéricos.";
const PASSWORD_MESSAGE: &str = "La contraseña debe tener al menos 8 caracteres, incluir una letra mayúscula, una letra minúscula, un número y un carácter especial.";

/// One validation step over a named draft field. Evaluation order is the
/// slice order, so pages list identity fields first and credentials last.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Non-empty after trimming, with a field-specific message.
    Required {
        field: &'static str,
        message: &'static str,
    },
    /// `local@domain.tld` shape.
    Email { field: &'static str },
    /// Exactly 10 ASCII digits, no punctuation. Also covers the empty case.
    Phone { field: &'static str },
    /// Strength policy applied on create and transfer only.
    Password { field: &'static str },
}

/// Runs the rules in order, returning the first failing rule's message.
pub fn validate(draft: &FormDraft, rules: &[Rule]) -> Result<(), String> {
    for rule in rules {
        check(draft, rule)?;
    }
    Ok(())
}

fn check(draft: &FormDraft, rule: &Rule) -> Result<(), String> {
    let value_of = |field: &str| draft.get(field).map(String::as_str).unwrap_or("");
    match rule {
        Rule::Required { field, message } => {
            if value_of(field).trim().is_empty() {
                return Err((*message).to_string());
            }
        }
        Rule::Email { field } => {
            let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
            if !re.is_match(value_of(field)) {
                return Err(EMAIL_MESSAGE.to_string());
            }
        }
        Rule::Phone { field } => {
            let re = Regex::new(r"^[0-9]{10}$").unwrap();
            if !re.is_match(value_of(field)) {
                return Err(PHONE_MESSAGE.to_string());
            }
        }
        Rule::Password { field } => {
            if !password_is_strong(value_of(field)) {
                return Err(PASSWORD_MESSAGE.to_string());
            }
        }
    }
    Ok(())
}

/// ≥8 chars, at least one lowercase, one uppercase, one digit and one symbol
/// from the fixed set, with no characters outside the allowed class. The
/// regex crate has no lookahead, so the policy is spelled out per class.
fn password_is_strong(password: &str) -> bool {
    if password.chars().count() < 8 {
        return false;
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c);
    if !password.chars().all(allowed) {
        return false;
    }
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(pairs: &[(&str, &str)]) -> FormDraft {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn phone_accepts_exactly_ten_ascii_digits() {
        let rules = [Rule::Phone { field: "phone" }];
        assert!(validate(&draft(&[("phone", "5512345678")]), &rules).is_ok());
        assert!(validate(&draft(&[("phone", "55-1234567")]), &rules).is_err());
        assert!(validate(&draft(&[("phone", "123456789")]), &rules).is_err());
        assert!(validate(&draft(&[("phone", "55123456789")]), &rules).is_err());
        assert!(validate(&draft(&[]), &rules).is_err());
    }

    #[test]
    fn password_policy_matches_the_fixed_symbol_set() {
        assert!(password_is_strong("Abcdef1!"));
        assert!(password_is_strong("Xy9@aaaa"));
        assert!(!password_is_strong("abcdefgh"));
        assert!(!password_is_strong("ABCDEF1!"));
        assert!(!password_is_strong("Abcdefg!"));
        assert!(!password_is_strong("Abcdefg1"));
        assert!(!password_is_strong("Abcde1!"));
        // '#' is outside the fixed symbol set
        assert!(!password_is_strong("Abcdef1#"));
    }

    #[test]
    fn email_requires_local_domain_and_tld() {
        let rules = [Rule::Email { field: "email" }];
        assert!(validate(&draft(&[("email", "a@b.com")]), &rules).is_ok());
        assert!(validate(&draft(&[("email", "a@b")]), &rules).is_err());
        assert!(validate(&draft(&[("email", "a b@c.com")]), &rules).is_err());
    }

    #[test]
    fn first_failing_rule_wins() {
        let rules = [
            Rule::Required {
                field: "name",
                message: "El nombre del enlace es obligatorio.",
            },
            Rule::Email { field: "email" },
        ];
        let err = validate(&draft(&[("email", "bad")]), &rules).unwrap_err();
        assert_eq!(err, "El nombre del enlace es obligatorio.");
    }

    #[test]
    fn required_rejects_whitespace_only_values() {
        let rules = [Rule::Required {
            field: "name",
            message: "El nombre del enlace es obligatorio.",
        }];
        assert!(validate(&draft(&[("name", "   ")]), &rules).is_err());
        assert!(validate(&draft(&[("name", "Juan")]), &rules).is_ok());
    }
}
