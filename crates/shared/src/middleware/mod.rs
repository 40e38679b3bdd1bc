mod validate;

pub use self::validate::{SimpleValidatedJson, format_validation_errors};
