use crate::errors::AppError;
use crate::models::employee::Employee;

pub const INCOMPLETE_DETAILS: &str = "Please fill in all the employee details.";
pub const INVALID_EMAIL: &str = "Please enter a valid email.";

/// True when every business field carries a value. The birthday is only
/// checked for presence, not parsed as a timestamp.
pub fn validate_complete(employee: &Employee) -> bool {
    !employee.first_name.is_empty()
        && !employee.last_name.is_empty()
        && !employee.birthday_in_epoch.is_empty()
        && !employee.email.is_empty()
}

/// True when `email` is a mailbox address with a dotted domain.
pub fn validate_email(email: &str) -> bool {
    if !validator::validate_email(email) {
        return false;
    }

    match email.rsplit_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}

pub fn validate_employee(employee: &Employee) -> Result<(), AppError> {
    if !validate_complete(employee) {
        return Err(AppError::Validation(INCOMPLETE_DETAILS.to_string()));
    }
    if !validate_email(&employee.email) {
        return Err(AppError::Validation(INVALID_EMAIL.to_string()));
    }
    Ok(())
}
