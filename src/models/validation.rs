use regex::Regex;

/// Common validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Required field is missing or empty
    #[error("Required field '{0}' is missing or empty")]
    RequiredField(String),

    /// Field format is invalid
    #[error("Invalid format for field '{field}': {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Field value is out of valid range
    #[error("Field '{field}' value {value} is out of range")]
    OutOfRange { field: String, value: f64 },

    /// Field length is invalid
    #[error("Field '{field}' length {actual} is invalid")]
    InvalidLength { field: String, actual: usize },
}

/// Result type for validation operations
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validation context for accumulating errors while walking a record
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    /// Current field path being validated
    pub field_path: Vec<String>,
    /// Accumulated errors
    pub errors: Vec<ValidationError>,
}

impl ValidationContext {
    /// Create a new validation context
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a field context
    pub fn enter_field(&mut self, field_name: &str) {
        self.field_path.push(field_name.to_string());
    }

    /// Exit current field context
    pub fn exit_field(&mut self) {
        self.field_path.pop();
    }

    /// Get current field path as string
    pub fn current_path(&self) -> String {
        self.field_path.join(".")
    }

    /// Add an error to the context
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Get validation result
    pub fn result(self) -> ValidationResult {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Trait for validatable entities.
///
/// Validation runs at the form boundary (the CLI) only; store and lifecycle
/// operations never re-validate.
pub trait Validatable {
    /// Validate the entity
    fn validate(&self) -> ValidationResult {
        let mut ctx = ValidationContext::new();
        self.validate_with_context(&mut ctx);
        ctx.result()
    }

    /// Validate with custom context
    fn validate_with_context(&self, ctx: &mut ValidationContext);
}

/// Common validation functions
pub struct Validators;

impl Validators {
    /// Validate that a string is not empty
    pub fn not_empty(value: &str, field_name: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::RequiredField(field_name.to_string()))
        } else {
            Ok(())
        }
    }

    /// Validate string length
    pub fn string_length(
        value: &str,
        field_name: &str,
        min: Option<usize>,
        max: Option<usize>,
    ) -> Result<(), ValidationError> {
        let len = value.len();

        if min.is_some_and(|m| len < m) || max.is_some_and(|m| len > m) {
            return Err(ValidationError::InvalidLength {
                field: field_name.to_string(),
                actual: len,
            });
        }

        Ok(())
    }

    /// Validate email format
    pub fn email(value: &str, field_name: &str) -> Result<(), ValidationError> {
        let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .map_err(|_| ValidationError::InvalidFormat {
                field: field_name.to_string(),
                reason: "invalid email regex".to_string(),
            })?;

        if !email_regex.is_match(value) {
            return Err(ValidationError::InvalidFormat {
                field: field_name.to_string(),
                reason: "not a valid email address".to_string(),
            });
        }

        Ok(())
    }

    /// Validate numeric range
    pub fn numeric_range(
        value: f64,
        field_name: &str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<(), ValidationError> {
        if min.is_some_and(|m| value < m) || max.is_some_and(|m| value > m) {
            return Err(ValidationError::OutOfRange {
                field: field_name.to_string(),
                value,
            });
        }

        Ok(())
    }
}
