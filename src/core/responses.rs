use std::fmt::{Display, Formatter};

use validator::ValidationErrors;

use super::StorageError;

#[derive(Debug, Clone, PartialEq)]
pub enum AppErrorType {
    NotFoundError,
    AuthError,
    ForbiddenError,
    PayloadValidationError,
    StorageError,
    JsonSerializationError,
    JsonParseError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppError {
    pub error_type: AppErrorType,
    pub message: Option<String>,
    pub cause: Option<String>,
}

impl AppError {
    pub fn message(&self) -> String {
        match self {
            AppError {
                message: Some(message),
                ..
            } => message.clone(),

            AppError {
                message: None,
                error_type: AppErrorType::NotFoundError,
                ..
            } => "The requested item was not found".to_string(),
            AppError {
                message: None,
                error_type: AppErrorType::AuthError,
                ..
            } => INVALID_CREDENTIALS_MESSAGE.to_string(),
            _ => "An unexpected error has occurred".to_string(),
        }
    }

    pub fn validation_error(error: impl ToString) -> AppError {
        AppError {
            cause: Some(error.to_string()),
            error_type: AppErrorType::PayloadValidationError,
            message: Some(error.to_string()),
        }
    }

    pub fn not_found(what: impl ToString) -> AppError {
        AppError {
            cause: None,
            error_type: AppErrorType::NotFoundError,
            message: Some(format!("{} was not found", what.to_string())),
        }
    }

    pub fn forbidden_error(error: impl ToString) -> AppError {
        AppError {
            cause: Some(error.to_string()),
            error_type: AppErrorType::ForbiddenError,
            message: Some(error.to_string()),
        }
    }

    /// Credential mismatch. The message never says which half was wrong.
    pub fn unauthorized() -> AppError {
        AppError {
            cause: None,
            error_type: AppErrorType::AuthError,
            message: None,
        }
    }

    pub fn storage_error(error: impl ToString) -> AppError {
        AppError {
            cause: Some(error.to_string()),
            error_type: AppErrorType::StorageError,
            message: Some("Local storage is unavailable".to_string()),
        }
    }

    pub fn is_validation(&self) -> bool {
        self.error_type == AppErrorType::PayloadValidationError
    }
}

/// Shown to the user on any rejected login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "ভুল আইডি অথবা পাসওয়ার্ড। সঠিক তথ্য দিয়ে চেষ্টা করুন।";

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError {
            cause: Some(errors.to_string()),
            error_type: AppErrorType::PayloadValidationError,
            message: Some("Required fields are missing or invalid".to_string()),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        AppError::storage_error(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        let error_type = if error.is_data() || error.is_syntax() || error.is_eof() {
            AppErrorType::JsonParseError
        } else {
            AppErrorType::JsonSerializationError
        };
        AppError {
            cause: Some(error.to_string()),
            message: Some(format!("Failed to process stored data: {}", error)),
            error_type,
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}
