//! # Module Form
//!
//! Validation of raw module input before it reaches the store.
//!
//! The split of responsibilities is deliberate: the entity's predicates
//! define WHAT is valid (field length), while this layer owns the grade
//! range and number-parse checks and every user-facing message. The entity
//! stores a grade without re-checking its range; nothing gets past this form
//! without the range check having run.
//!
//! All failing fields are reported together, not just the first one.

use modulbuch_core::Module;
use modulbuch_core::primitives::{GRADE_MAX, GRADE_MIN, MIN_FIELD_LEN};
use std::fmt;

// =============================================================================
// VALIDATION MESSAGES
// =============================================================================

const MSG_NUMBER_MIN_LEN: &str = "Modulnummer muss mindestens 4 Zeichen haben";
const MSG_TITLE_MIN_LEN: &str = "Modultitel muss mindestens 4 Zeichen haben";
const MSG_GRADE_RANGE: &str = "Note muss zwischen 1.0 und 6.0 liegen";
const MSG_GRADE_NOT_A_NUMBER: &str = "Ungültige Zahl";

// =============================================================================
// FIELD ERRORS
// =============================================================================

/// The form fields a check can fail on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Number,
    Title,
    Grade1,
    Grade2,
}

impl Field {
    /// Label used when reporting an error for this field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::Number => "Modulnummer",
            Field::Title => "Modultitel",
            Field::Grade1 => "Note 1",
            Field::Grade2 => "Note 2",
        }
    }
}

/// One failed field-level check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Every failing field of one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub Vec<FieldError>);

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ungültige Eingabe: ")?;
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field.label(), error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// =============================================================================
// MODULE FORM
// =============================================================================

/// Raw module input, exactly as the user typed it.
///
/// Empty grade text means "no grade entered" — grades are optional.
#[derive(Debug, Clone, Default)]
pub struct ModuleForm {
    pub number: String,
    pub title: String,
    pub grade1: String,
    pub grade2: String,
}

impl ModuleForm {
    /// Run every field-level check and build a transient module.
    ///
    /// The returned module has no id; the store assigns one on first save.
    pub fn validate(&self) -> Result<Module, ValidationError> {
        let mut errors = Vec::new();

        let number = self.number.trim();
        if number.chars().count() < MIN_FIELD_LEN {
            errors.push(FieldError {
                field: Field::Number,
                message: MSG_NUMBER_MIN_LEN,
            });
        }

        let title = self.title.trim();
        if title.chars().count() < MIN_FIELD_LEN {
            errors.push(FieldError {
                field: Field::Title,
                message: MSG_TITLE_MIN_LEN,
            });
        }

        let grade1 = parse_grade(&self.grade1, Field::Grade1, &mut errors);
        let grade2 = parse_grade(&self.grade2, Field::Grade2, &mut errors);

        if !errors.is_empty() {
            return Err(ValidationError(errors));
        }

        let mut module = Module::new(number, title);
        module.grade1 = grade1;
        module.grade2 = grade2;
        Ok(module)
    }
}

/// Parse an optional grade field.
///
/// Empty input is a valid "no grade". Anything else must parse as a number
/// inside the grade scale; a failing field is recorded and treated as absent
/// so the remaining checks still run.
fn parse_grade(input: &str, field: Field, errors: &mut Vec<FieldError>) -> Option<f64> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }

    match text.parse::<f64>() {
        Ok(grade) if (GRADE_MIN..=GRADE_MAX).contains(&grade) => Some(grade),
        Ok(_) => {
            errors.push(FieldError {
                field,
                message: MSG_GRADE_RANGE,
            });
            None
        }
        Err(_) => {
            errors.push(FieldError {
                field,
                message: MSG_GRADE_NOT_A_NUMBER,
            });
            None
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn form(number: &str, title: &str, grade1: &str, grade2: &str) -> ModuleForm {
        ModuleForm {
            number: number.to_string(),
            title: title.to_string(),
            grade1: grade1.to_string(),
            grade2: grade2.to_string(),
        }
    }

    #[test]
    fn accepts_complete_input() {
        let module = form("M335", "Mobile Apps", "5.0", "4.5")
            .validate()
            .expect("valid form");

        assert!(module.id.is_none());
        assert_eq!(module.number, "M335");
        assert_eq!(module.average(), Some(4.75));
    }

    #[test]
    fn accepts_missing_grades() {
        let module = form("M335", "Mobile Apps", "", "")
            .validate()
            .expect("valid form");

        assert_eq!(module.grade1, None);
        assert_eq!(module.grade2, None);
        assert!(!module.has_complete_grades());
    }

    #[test]
    fn short_number_reports_its_field() {
        let error = form("M3", "Mobile Apps", "", "")
            .validate()
            .expect_err("short number");

        assert_eq!(error.0.len(), 1);
        assert_eq!(error.0[0].field, Field::Number);
        assert_eq!(error.0[0].message, MSG_NUMBER_MIN_LEN);
    }

    #[test]
    fn padding_does_not_rescue_short_fields() {
        let error = form("  M3  ", "Mobile Apps", "", "")
            .validate()
            .expect_err("short number");

        assert_eq!(error.0[0].field, Field::Number);
    }

    #[test]
    fn out_of_range_grade_rejected() {
        let error = form("M335", "Mobile Apps", "6.5", "")
            .validate()
            .expect_err("grade out of range");

        assert_eq!(error.0.len(), 1);
        assert_eq!(error.0[0].field, Field::Grade1);
        assert_eq!(error.0[0].message, MSG_GRADE_RANGE);
    }

    #[test]
    fn unparseable_grade_rejected() {
        let error = form("M335", "Mobile Apps", "", "gut")
            .validate()
            .expect_err("not a number");

        assert_eq!(error.0[0].field, Field::Grade2);
        assert_eq!(error.0[0].message, MSG_GRADE_NOT_A_NUMBER);
    }

    #[test]
    fn all_failing_fields_reported_together() {
        let error = form("M3", "App", "0.5", "sieben")
            .validate()
            .expect_err("everything wrong");

        let fields: Vec<Field> = error.0.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![Field::Number, Field::Title, Field::Grade1, Field::Grade2]
        );
    }

    #[test]
    fn boundary_grades_accepted() {
        let module = form("M335", "Mobile Apps", "1.0", "6.0")
            .validate()
            .expect("boundary grades");

        assert_eq!(module.average(), Some(3.5));
    }

    #[test]
    fn display_joins_all_messages() {
        let error = form("M3", "App", "", "").validate().expect_err("two fields");
        let text = error.to_string();

        assert!(text.starts_with("Ungültige Eingabe: "));
        assert!(text.contains("Modulnummer"));
        assert!(text.contains("Modultitel"));
    }
}
