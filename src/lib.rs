//! # form-validator
//!
//! Rule-based validation for storefront forms: single values, groups of fields
//! and passwords.
//!
//! ## Features
//!
//! - **Declarative rules**: required, input-type patterns, custom matchers,
//!   numeric or length ranges and file extensions, with per-rule messages
//! - **Group validation**: collects every field under a container, runs the
//!   fields' own validation and applies group-level rules on top
//! - **Password strength**: length bounds and character-class diversity
//! - **Localizable**: message templates and patterns can be replaced from JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use form_validator::*;
//!
//! let rule = ValidationRule::required().with_range(Range::new(3.0, 10.0));
//!
//! match validate("ab", &rule) {
//!     Validation::Valid => {}
//!     Validation::Invalid(output) => {
//!         assert_eq!(output.error_messages, vec!["Minimum 3 characters!"]);
//!     }
//! }
//!
//! let check = validate_password("abcDEF123", LengthRange::new(8, 64), 3);
//! assert!(check.is_valid());
//! ```

pub mod core;
pub mod error;
pub mod form;
pub mod types;
pub mod validation;

pub use crate::core::ValidatorConfig;
pub use error::{FormValidatorError, Result};
pub use form::{FieldContainer, FieldHandle, FieldSelector, FormNode, FormTree};
pub use types::*;
pub use validation::{
    MessageCatalog, MessageKey, PatternTable, Validator, number_of_character_classes, validate,
    validate_group, validate_password,
};
