use super::*;

// =============================================================
// RegistrationForm serialization
// =============================================================

#[test]
fn registration_form_serializes_camel_case_keys() {
    let form = RegistrationForm {
        username: "alice01".to_owned(),
        age: "27".to_owned(),
        first_name: "Alice".to_owned(),
        date_of_birth: "1998-02-03".to_owned(),
        phone_number: "0600000000".to_owned(),
        is_private: true,
        ..RegistrationForm::default()
    };
    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(json["username"], "alice01");
    assert_eq!(json["age"], "27");
    assert_eq!(json["firstName"], "Alice");
    assert_eq!(json["dateOfBirth"], "1998-02-03");
    assert_eq!(json["phoneNumber"], "0600000000");
    assert_eq!(json["isPrivate"], true);
    assert_eq!(json.as_object().unwrap().len(), 13);
}

#[test]
fn registration_form_decodes_partial_payload_with_defaults() {
    let form: RegistrationForm = serde_json::from_str(r#"{"username":"bob123","email":"b@c.io"}"#).unwrap();
    assert_eq!(form.username, "bob123");
    assert_eq!(form.email, "b@c.io");
    assert!(form.password.is_empty());
    assert!(!form.is_private);
}

#[test]
fn default_form_is_empty() {
    assert!(RegistrationForm::default().is_empty());
}

// =============================================================
// RegistrationField
// =============================================================

#[test]
fn field_names_parse_back_to_fields() {
    for field in RegistrationField::ALL {
        assert_eq!(field.name().parse::<RegistrationField>(), Ok(field));
    }
}

#[test]
fn unknown_field_name_is_rejected() {
    assert!("nickname".parse::<RegistrationField>().is_err());
}

#[test]
fn only_is_private_is_a_checkbox() {
    let checkboxes: Vec<_> = RegistrationField::ALL.into_iter().filter(|f| f.is_checkbox()).collect();
    assert_eq!(checkboxes, vec![RegistrationField::IsPrivate]);
}

#[test]
fn set_text_field_updates_only_that_field() {
    let mut form = RegistrationForm::default();
    form.set(RegistrationField::Bio, FieldInput::Text("hello".to_owned()));
    assert_eq!(form.bio, "hello");
    assert_eq!(form.get(RegistrationField::Bio), "hello");
    form.bio.clear();
    assert!(form.is_empty());
}

#[test]
fn set_checkbox_takes_checked_state() {
    let mut form = RegistrationForm::default();
    form.set(RegistrationField::IsPrivate, FieldInput::Checked(true));
    assert!(form.is_private);
    form.set(RegistrationField::IsPrivate, FieldInput::Text("off".to_owned()));
    assert!(!form.is_private);
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_extracts_message_from_json() {
    assert_eq!(
        ErrorBody::message_from_raw(r#"{"message":"email already exists"}"#),
        Some("email already exists".to_owned())
    );
}

#[test]
fn error_body_ignores_plain_text_and_empty_messages() {
    assert_eq!(ErrorBody::message_from_raw("Invalid login credentials\n"), None);
    assert_eq!(ErrorBody::message_from_raw(r#"{"message":""}"#), None);
    assert_eq!(ErrorBody::message_from_raw("{}"), None);
}

#[test]
fn login_response_tolerates_missing_message() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert_eq!(resp.token, "abc");
    assert!(resp.message.is_none());
}

// =============================================================
// MessageBody
// =============================================================

#[test]
fn message_body_serializes_bare_message() {
    let body = MessageBody::new("User registered successfully");
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "User registered successfully" }));
}

#[test]
fn message_body_requires_message() {
    assert!(serde_json::from_str::<MessageBody>("{}").is_err());
}
