use super::*;

fn filled() -> StudentForm {
    StudentForm {
        name: "  Ada Lovelace ".to_owned(),
        email: " ada@example.com ".to_owned(),
        gender: Some(Gender::Female),
    }
}

#[test]
fn valid_form_trims_into_new_student() {
    let body = filled().validate().unwrap();
    assert_eq!(
        body,
        NewStudent {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            gender: Gender::Female,
        }
    );
}

#[test]
fn empty_form_reports_every_field_in_order() {
    let errors = StudentForm::default().validate().unwrap_err();
    let fields: Vec<FormField> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![FormField::Name, FormField::Email, FormField::Gender]);
    assert_eq!(error_for(&errors, FormField::Name), Some("Please enter student name"));
    assert_eq!(error_for(&errors, FormField::Email), Some("Please enter student email"));
    assert_eq!(error_for(&errors, FormField::Gender), Some("Please select a gender"));
}

#[test]
fn whitespace_name_is_missing() {
    let form = StudentForm { name: "   ".to_owned(), ..filled() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, FormField::Name);
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["ada", "ada@", "@example.com", "ada@example", "a@b@c.io", "ada @x.io", "ada@x..io"] {
        let form = StudentForm { email: email.to_owned(), ..filled() };
        let errors = form.validate().unwrap_err();
        assert_eq!(error_for(&errors, FormField::Email), Some("Please enter a valid email"), "{email}");
    }
}

#[test]
fn error_for_missing_field_is_none() {
    let errors = vec![FieldError { field: FormField::Name, message: "x" }];
    assert_eq!(error_for(&errors, FormField::Gender), None);
}

// =============================================================
// DrawerForm submission
// =============================================================

fn open_drawer() -> (DrawerForm, UiState) {
    let drawer = DrawerForm { form: filled(), ..DrawerForm::default() };
    let ui = UiState { drawer_open: true, ..UiState::default() };
    (drawer, ui)
}

#[test]
fn begin_submit_marks_in_flight_and_returns_body() {
    let (mut drawer, _) = open_drawer();
    let body = drawer.begin_submit().expect("valid form should submit");
    assert_eq!(body.name, "Ada Lovelace");
    assert!(drawer.submitting);
    assert!(drawer.errors.is_empty());
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let (mut drawer, _) = open_drawer();
    assert!(drawer.begin_submit().is_some());
    assert!(drawer.begin_submit().is_none());
    assert!(drawer.submitting);
}

#[test]
fn invalid_form_records_errors_without_submitting() {
    let mut drawer = DrawerForm::default();
    assert!(drawer.begin_submit().is_none());
    assert!(!drawer.submitting);
    assert_eq!(drawer.errors.len(), 3);
}

#[test]
fn successful_create_resets_form_and_closes_drawer() {
    let (mut drawer, mut ui) = open_drawer();
    let body = drawer.begin_submit().unwrap();

    let notice = drawer.settle_submit(&mut ui, &body, &Ok(()));

    assert_eq!(notice.title, "Student successfully added");
    assert_eq!(notice.message, "Ada Lovelace was added to the system");
    assert_eq!(drawer.form, StudentForm::default());
    assert!(!drawer.submitting);
    assert!(!ui.drawer_open);
}

#[test]
fn failed_create_keeps_input_and_drawer_open() {
    let (mut drawer, mut ui) = open_drawer();
    let body = drawer.begin_submit().unwrap();
    let err = crate::net::api::status_error(
        400,
        r#"{"message":"Email ada@example.com taken","status":400,"error":"Bad Request"}"#,
    );

    let notice = drawer.settle_submit(&mut ui, &body, &Err(err));

    assert_eq!(notice.title, "There was an issue");
    assert_eq!(notice.message, "Email ada@example.com taken [400] [Bad Request]");
    assert_eq!(drawer.form, filled());
    assert!(!drawer.submitting);
    assert!(ui.drawer_open);
    assert!(drawer.begin_submit().is_some());
}
