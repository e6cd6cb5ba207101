//! JSON bodies exchanged with the auth API.
//!
//! DESIGN
//! ======
//! Field names mirror what the browser form posts (camelCase, `age` as a
//! string) so the server can decode exactly what the client sends.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token to persist under `authToken`.
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Plain confirmation returned with 2xx statuses that carry no data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }

    /// Parse a raw response body, tolerating non-JSON payloads.
    ///
    /// Returns the message only when it is present and non-empty.
    #[must_use]
    pub fn message_from_raw(raw: &str) -> Option<String> {
        serde_json::from_str::<Self>(raw)
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty())
    }
}

/// Registration form state, posted verbatim to `POST /register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub username: String,
    pub age: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub avatar: String,
    pub bio: String,
    pub phone_number: String,
    pub address: String,
    pub is_private: bool,
}

/// One named input of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Username,
    Age,
    Email,
    Password,
    FirstName,
    LastName,
    Gender,
    DateOfBirth,
    Avatar,
    Bio,
    PhoneNumber,
    Address,
    IsPrivate,
}

impl RegistrationField {
    pub const ALL: [Self; 13] = [
        Self::Username,
        Self::Age,
        Self::Email,
        Self::Password,
        Self::FirstName,
        Self::LastName,
        Self::Gender,
        Self::DateOfBirth,
        Self::Avatar,
        Self::Bio,
        Self::PhoneNumber,
        Self::Address,
        Self::IsPrivate,
    ];

    /// The input `name` attribute, identical to the JSON key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Age => "age",
            Self::Email => "email",
            Self::Password => "password",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Gender => "gender",
            Self::DateOfBirth => "dateOfBirth",
            Self::Avatar => "avatar",
            Self::Bio => "bio",
            Self::PhoneNumber => "phoneNumber",
            Self::Address => "address",
            Self::IsPrivate => "isPrivate",
        }
    }

    #[must_use]
    pub fn is_checkbox(self) -> bool {
        matches!(self, Self::IsPrivate)
    }
}

impl FromStr for RegistrationField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("unknown registration field: {s}"))
    }
}

/// Value carried by an input change event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

impl RegistrationForm {
    /// Apply one change event. Checkbox fields take the checked state, text
    /// fields take the value; a mismatched input kind is coerced the same way
    /// a browser would report it.
    pub fn set(&mut self, field: RegistrationField, input: FieldInput) {
        if field.is_checkbox() {
            self.is_private = match input {
                FieldInput::Checked(on) => on,
                FieldInput::Text(raw) => matches!(raw.as_str(), "true" | "on"),
            };
            return;
        }

        let value = match input {
            FieldInput::Text(value) => value,
            FieldInput::Checked(on) => on.to_string(),
        };
        match field {
            RegistrationField::Username => self.username = value,
            RegistrationField::Age => self.age = value,
            RegistrationField::Email => self.email = value,
            RegistrationField::Password => self.password = value,
            RegistrationField::FirstName => self.first_name = value,
            RegistrationField::LastName => self.last_name = value,
            RegistrationField::Gender => self.gender = value,
            RegistrationField::DateOfBirth => self.date_of_birth = value,
            RegistrationField::Avatar => self.avatar = value,
            RegistrationField::Bio => self.bio = value,
            RegistrationField::PhoneNumber => self.phone_number = value,
            RegistrationField::Address => self.address = value,
            RegistrationField::IsPrivate => {}
        }
    }

    /// Current text value of a field (`"true"`/`"false"` for the checkbox).
    #[must_use]
    pub fn get(&self, field: RegistrationField) -> String {
        match field {
            RegistrationField::Username => self.username.clone(),
            RegistrationField::Age => self.age.clone(),
            RegistrationField::Email => self.email.clone(),
            RegistrationField::Password => self.password.clone(),
            RegistrationField::FirstName => self.first_name.clone(),
            RegistrationField::LastName => self.last_name.clone(),
            RegistrationField::Gender => self.gender.clone(),
            RegistrationField::DateOfBirth => self.date_of_birth.clone(),
            RegistrationField::Avatar => self.avatar.clone(),
            RegistrationField::Bio => self.bio.clone(),
            RegistrationField::PhoneNumber => self.phone_number.clone(),
            RegistrationField::Address => self.address.clone(),
            RegistrationField::IsPrivate => self.is_private.to_string(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
