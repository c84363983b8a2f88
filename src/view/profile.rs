use derive_more::Display;

use crate::model::employee::Employee;
use crate::utils::validators::{validate_department, validate_name, validate_phone};

/// Candidate values from the edit form. Applied as a unit: either every
/// field passes or the employee is left untouched.
#[derive(Debug, Clone)]
pub struct ProfileEdit {
    pub name: String,
    pub phone: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}: {}", field, message)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// One message per failing field; empty when the edit is acceptable.
pub fn validate_edit(edit: &ProfileEdit) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !validate_name(&edit.name) {
        errors.push(FieldError {
            field: "name",
            message: "Name is required",
        });
    }
    if !validate_phone(&edit.phone) {
        errors.push(FieldError {
            field: "phone",
            message: "Invalid phone number",
        });
    }
    if !validate_department(&edit.department) {
        errors.push(FieldError {
            field: "department",
            message: "Department is required",
        });
    }

    errors
}

pub fn apply_edit(employee: &mut Employee, edit: ProfileEdit) -> Result<(), Vec<FieldError>> {
    let errors = validate_edit(&edit);
    if !errors.is_empty() {
        return Err(errors);
    }

    employee.name = edit.name;
    employee.phone = edit.phone;
    employee.department = edit.department;
    Ok(())
}
