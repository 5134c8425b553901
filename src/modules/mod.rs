pub mod error;
pub mod request;
pub mod validation;

pub use error::{ConfigValidationError, RequestParseError, ValidationIssue};
pub use request::ModuleRequest;
pub use validation::{find_validation_issues, validate_config};
