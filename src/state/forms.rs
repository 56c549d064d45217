use thiserror::Error;

use crate::models::{SignInRequest, SignUpRequest};
use crate::utils::format_price;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BidError {
    #[error("Enter a bid amount in numbers")]
    NotANumber,
    #[error("Your bid must be higher than the current bid ({})", price_label(.0))]
    TooLow(u64),
    #[error("Bids at or above {} should use Buy now", price_label(.0))]
    UseBuyNow(u64),
}

fn price_label(price: &u64) -> String {
    format_price(*price)
}

/// A bid must beat the current price and stay under the buy-now price
pub fn validate_bid(input: &str, current_bid_price: u64, buy_now_price: u64) -> Result<u64, BidError> {
    let cleaned: String = input.chars().filter(|c| !matches!(c, ',' | ' ')).collect();
    let price: u64 = cleaned.parse().map_err(|_| BidError::NotANumber)?;

    if price <= current_bid_price {
        return Err(BidError::TooLow(current_bid_price));
    }
    if price >= buy_now_price {
        return Err(BidError::UseBuyNow(buy_now_price));
    }
    Ok(price)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Phone number may only contain digits")]
    InvalidPhone,
    #[error("Enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub nickname: String,
    pub phone_number: String,
    pub address: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<SignUpRequest, FormError> {
        let email = require("Email", &self.email)?;
        check_email(email)?;
        let password = require("Password", &self.password)?;
        if self.password != self.password_confirm {
            return Err(FormError::PasswordMismatch);
        }
        let nickname = require("Nickname", &self.nickname)?;
        let phone_number = require("Phone number", &self.phone_number)?;
        if !phone_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(FormError::InvalidPhone);
        }
        let address = require("Address", &self.address)?;

        Ok(SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            nickname: nickname.to_string(),
            phone_number: phone_number.to_string(),
            address: address.to_string(),
        })
    }
}

pub fn validate_sign_in(email: &str, password: &str) -> Result<SignInRequest, FormError> {
    let email = require("Email", email)?;
    check_email(email)?;
    // Passwords are taken verbatim
    if password.is_empty() {
        return Err(FormError::Required("Password"));
    }
    Ok(SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

fn require<'a>(label: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Required(label))
    } else {
        Ok(trimmed)
    }
}

fn check_email(email: &str) -> Result<(), FormError> {
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(FormError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bid_must_beat_current_price() {
        assert_eq!(validate_bid("1000", 1_000, 5_000), Err(BidError::TooLow(1_000)));
        assert_eq!(validate_bid("1,500", 1_000, 5_000), Ok(1_500));
    }

    #[test]
    fn bid_at_buy_now_price_is_redirected() {
        assert_eq!(validate_bid("5000", 1_000, 5_000), Err(BidError::UseBuyNow(5_000)));
        assert_eq!(
            BidError::UseBuyNow(5_000).to_string(),
            "Bids at or above 5,000 should use Buy now"
        );
    }

    #[test]
    fn bid_rejects_garbage() {
        assert_eq!(validate_bid("", 0, 10), Err(BidError::NotANumber));
        assert_eq!(validate_bid("-5", 0, 10), Err(BidError::NotANumber));
        assert_eq!(validate_bid("ten", 0, 10), Err(BidError::NotANumber));
    }

    fn filled() -> SignUpForm {
        SignUpForm {
            email: "kim@example.com".to_string(),
            password: "secret".to_string(),
            password_confirm: "secret".to_string(),
            nickname: "kim".to_string(),
            phone_number: "01012345678".to_string(),
            address: "Seoul".to_string(),
        }
    }

    #[test]
    fn complete_sign_up_form_validates() {
        let request = filled().validate().unwrap();
        assert_eq!(request.nickname, "kim");
    }

    #[test]
    fn sign_up_reports_first_problem() {
        let mut form = filled();
        form.password_confirm = "other".to_string();
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));

        let mut form = filled();
        form.phone_number = "010-1234-5678".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidPhone));

        let mut form = filled();
        form.nickname = "  ".to_string();
        assert_eq!(form.validate(), Err(FormError::Required("Nickname")));
    }

    #[test]
    fn sign_in_requires_email_shape() {
        assert_eq!(validate_sign_in("kim", "pw"), Err(FormError::InvalidEmail));
        assert_eq!(validate_sign_in("kim@example.com", ""), Err(FormError::Required("Password")));
        assert!(validate_sign_in(" kim@example.com ", "pw").is_ok());
    }
}
