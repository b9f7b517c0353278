use thiserror::Error;

/// Machine-readable code attached to every validation failure.
///
/// These codes are part of the API contract: clients match on the string
/// form, so variants are append-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCode {
    MissingRequiredField,
    TypeMismatch,
    FieldTooLong,
    InvalidDate,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::FieldTooLong => "FIELD_TOO_LONG",
            Self::InvalidDate => "INVALID_DATE",
        }
    }
}

impl std::fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed on `{field}`: {code}")]
    Validation {
        code: ValidationCode,
        field: &'static str,
    },
    #[error("{0} not found")]
    NotFound(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    pub fn missing(field: &'static str) -> Self {
        Self::Validation {
            code: ValidationCode::MissingRequiredField,
            field,
        }
    }

    pub fn type_mismatch(field: &'static str) -> Self {
        Self::Validation {
            code: ValidationCode::TypeMismatch,
            field,
        }
    }

    pub fn too_long(field: &'static str) -> Self {
        Self::Validation {
            code: ValidationCode::FieldTooLong,
            field,
        }
    }

    pub fn invalid_date(field: &'static str) -> Self {
        Self::Validation {
            code: ValidationCode::InvalidDate,
            field,
        }
    }

    /// The validation code, if this is a validation failure.
    pub fn validation_code(&self) -> Option<ValidationCode> {
        match self {
            Self::Validation { code, .. } => Some(*code),
            _ => None,
        }
    }
}
