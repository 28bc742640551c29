//! Creation-drawer form model and validation.
//!
//! The drawer component binds inputs to a `DrawerForm` signal; nothing is
//! sent to the backend until `validate` yields a `NewStudent`. Submission is
//! split into `begin_submit` and `settle_submit` so the drawer's transitions
//! stay plain data.

#[cfg(test)]
#[path = "student_form_test.rs"]
mod student_form_test;

use crate::net::api::ApiError;
use crate::net::types::{Gender, NewStudent};
use crate::state::notifications::{Notification, student_added};
use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Gender,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub gender: Option<Gender>,
}

impl StudentForm {
    /// Check every field and build the create body.
    ///
    /// # Errors
    ///
    /// Returns one `FieldError` per invalid field, in form order.
    pub fn validate(&self) -> Result<NewStudent, Vec<FieldError>> {
        let name = self.name.trim();
        let email = self.email.trim();
        let mut errors = Vec::new();

        if name.is_empty() {
            errors.push(FieldError { field: FormField::Name, message: "Please enter student name" });
        }
        if email.is_empty() {
            errors.push(FieldError { field: FormField::Email, message: "Please enter student email" });
        } else if !is_plausible_email(email) {
            errors.push(FieldError { field: FormField::Email, message: "Please enter a valid email" });
        }
        if self.gender.is_none() {
            errors.push(FieldError { field: FormField::Gender, message: "Please select a gender" });
        }

        match (errors.is_empty(), self.gender) {
            (true, Some(gender)) => Ok(NewStudent { name: name.to_owned(), email: email.to_owned(), gender }),
            _ => Err(errors),
        }
    }
}

/// Drawer state: field values, the last validation errors and the
/// in-flight flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawerForm {
    pub form: StudentForm,
    pub errors: Vec<FieldError>,
    pub submitting: bool,
}

impl DrawerForm {
    /// Start a submission and return the body to send.
    ///
    /// Returns `None` while a previous submit is still in flight, or when
    /// validation fails (the errors are kept for display).
    pub fn begin_submit(&mut self) -> Option<NewStudent> {
        if self.submitting {
            return None;
        }
        match self.form.validate() {
            Ok(body) => {
                self.errors.clear();
                self.submitting = true;
                Some(body)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Settle a create call and return the toast to show.
    ///
    /// Success clears the form and closes the drawer. Failure leaves both
    /// untouched so the user can retry.
    pub fn settle_submit(
        &mut self,
        ui: &mut UiState,
        body: &NewStudent,
        result: &Result<(), ApiError>,
    ) -> Notification {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.form = StudentForm::default();
                ui.drawer_open = false;
                student_added(&body.name)
            }
            Err(err) => Notification::api_failure(err),
        }
    }
}

/// First message for `field`, if it failed validation.
pub fn error_for(errors: &[FieldError], field: FormField) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}
