pub mod field;
pub mod output;
pub mod rule;

pub use field::{FieldType, FieldValue};
pub use output::{LengthRange, PasswordCheck, Validation, ValidationDomOutput, ValidationOutput};
pub use rule::{
    CustomErrorMessages, FileExtension, GroupMatchFn, InputType, MatchOutcome, Matcher, Range,
    ValidationRule, ValueMatchFn,
};
