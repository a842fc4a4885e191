use std::fmt;

/// Reasons a route cannot be registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Path template does not start with `/`
    MissingLeadingSlash { template: String },
    /// A `{` with no matching `}` in the same segment
    UnclosedBrace { template: String, position: usize },
    /// A `}` that does not close a placeholder
    UnexpectedClosingBrace { template: String, position: usize },
    /// Placeholder name is empty or contains characters other than ASCII alphanumerics and `_`
    InvalidParamName { template: String, name: String },
    /// Two placeholders with no literal text between them, as in `{a}{b}`
    AdjacentParams { template: String, position: usize },
    /// The same placeholder name appears twice
    DuplicateParam { template: String, name: String },
    /// Method is not a valid HTTP method token
    InvalidMethod { method: String },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MissingLeadingSlash { template } => {
                write!(f, "Path template '{}' must start with '/'", template)
            }
            TemplateError::UnclosedBrace { template, position } => {
                write!(
                    f,
                    "Unclosed '{{' at byte {} in path template '{}'",
                    position, template
                )
            }
            TemplateError::UnexpectedClosingBrace { template, position } => {
                write!(
                    f,
                    "Unexpected '}}' at byte {} in path template '{}'",
                    position, template
                )
            }
            TemplateError::InvalidParamName { template, name } => {
                write!(
                    f,
                    "Invalid parameter name '{}' in path template '{}'",
                    name, template
                )
            }
            TemplateError::AdjacentParams { template, position } => {
                write!(
                    f,
                    "Placeholder at byte {} directly follows another in path template '{}'",
                    position, template
                )
            }
            TemplateError::DuplicateParam { template, name } => {
                write!(
                    f,
                    "Parameter '{}' appears more than once in path template '{}'",
                    name, template
                )
            }
            TemplateError::InvalidMethod { method } => {
                write!(f, "Invalid HTTP method '{}'", method)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
