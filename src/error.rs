use std::error::Error;

use bigdecimal::ParseBigDecimalError;
use rusoto_ce::GetCostAndUsageError;
use rusoto_core::RusotoError;
use rusoto_ssm::GetParameterError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum BillingNotifierError {
    NoneValue,
    MissingWebhookUrl,
    InvalidAmount(ParseBigDecimalError),
    InvalidDate(chrono::ParseError),
    GetCostAndUsageError(RusotoError<GetCostAndUsageError>),
    GetParameterError(RusotoError<GetParameterError>),
    PostMessageError(reqwest::Error),
    SerializeError(serde_json::Error),
}

impl Display for BillingNotifierError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            BillingNotifierError::NoneValue => write!(f, "Value is None"),
            BillingNotifierError::MissingWebhookUrl => {
                write!(f, "Webhook url is not registered in the parameter store")
            }
            BillingNotifierError::InvalidAmount(ref error) => std::fmt::Display::fmt(error, f),
            BillingNotifierError::InvalidDate(ref error) => std::fmt::Display::fmt(error, f),
            BillingNotifierError::GetCostAndUsageError(ref error) => {
                std::fmt::Display::fmt(error, f)
            }
            BillingNotifierError::GetParameterError(ref error) => std::fmt::Display::fmt(error, f),
            BillingNotifierError::PostMessageError(ref error) => std::fmt::Display::fmt(error, f),
            BillingNotifierError::SerializeError(ref error) => std::fmt::Display::fmt(error, f),
        }
    }
}

impl Error for BillingNotifierError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            BillingNotifierError::InvalidAmount(ref error) => Some(error),
            BillingNotifierError::InvalidDate(ref error) => Some(error),
            BillingNotifierError::GetCostAndUsageError(ref error) => Some(error),
            BillingNotifierError::GetParameterError(ref error) => Some(error),
            BillingNotifierError::PostMessageError(ref error) => Some(error),
            BillingNotifierError::SerializeError(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<ParseBigDecimalError> for BillingNotifierError {
    fn from(e: ParseBigDecimalError) -> BillingNotifierError {
        BillingNotifierError::InvalidAmount(e)
    }
}

impl From<chrono::ParseError> for BillingNotifierError {
    fn from(e: chrono::ParseError) -> BillingNotifierError {
        BillingNotifierError::InvalidDate(e)
    }
}

impl From<RusotoError<GetCostAndUsageError>> for BillingNotifierError {
    fn from(e: RusotoError<GetCostAndUsageError>) -> BillingNotifierError {
        BillingNotifierError::GetCostAndUsageError(e)
    }
}

impl From<RusotoError<GetParameterError>> for BillingNotifierError {
    fn from(e: RusotoError<GetParameterError>) -> BillingNotifierError {
        BillingNotifierError::GetParameterError(e)
    }
}

impl From<reqwest::Error> for BillingNotifierError {
    fn from(e: reqwest::Error) -> BillingNotifierError {
        BillingNotifierError::PostMessageError(e)
    }
}

impl From<serde_json::Error> for BillingNotifierError {
    fn from(e: serde_json::Error) -> BillingNotifierError {
        BillingNotifierError::SerializeError(e)
    }
}
