use thiserror::Error;

use crate::domain::{AmountError, InvalidPhoneError, PhoneNumber, Points};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Phone number must be 10 digits")]
    InvalidPhone,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Points must be greater than 0")]
    InvalidPoints(Points),

    #[error("Not enough points available")]
    InsufficientPoints {
        phone: PhoneNumber,
        balance: Points,
        requested: Points,
    },

    #[error("Balance would overflow: current {balance}, adding {points}")]
    BalanceOverflow {
        phone: PhoneNumber,
        balance: Points,
        points: Points,
    },

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl AppError {
    /// Returns true for errors the caller can fix by correcting its input.
    /// Everything else is a storage failure.
    pub fn is_validation(&self) -> bool {
        !matches!(self, AppError::Database(_))
    }
}

impl From<InvalidPhoneError> for AppError {
    fn from(_: InvalidPhoneError) -> Self {
        AppError::InvalidPhone
    }
}

impl From<AmountError> for AppError {
    fn from(err: AmountError) -> Self {
        AppError::InvalidAmount(err.to_string())
    }
}
