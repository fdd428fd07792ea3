//! Request extractors for generated controllers

mod validated;

pub use validated::{
    format_validation_errors, validation_errors_json, ValidatedJson, ValidatedQuery,
    ValidationError,
};
