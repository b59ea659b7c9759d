//! Wire types shared by the page, the service, and the CLI.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// =============================================================================
// INPUT
// =============================================================================

/// The four attendee fields collected by the form and POSTed as JSON.
///
/// Absent keys deserialize as empty strings so the service can answer with a
/// required-field error instead of a parse error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub company: String,
    /// Usually one of [`Role::label`], but any non-empty string is accepted.
    pub role: String,
}

impl RegistrationInput {
    /// Build an input from its four fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), email: email.into(), company: company.into(), role: role.into() }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Role => self.role = value,
        }
    }

    /// First empty field, in form order. Whitespace counts as a value.
    #[must_use]
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|field| self.get(*field).is_empty())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}

/// Names one of the [`RegistrationInput`] fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Role,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Company, Self::Role];

    /// JSON key and HTML `name` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Role => "role",
        }
    }
}

// =============================================================================
// ROLE
// =============================================================================

/// Role labels offered by the form's select control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    SoftwareEngineer,
    SeniorSoftwareEngineer,
    TechLead,
    EngineeringManager,
    ProductManager,
    DevOpsEngineer,
    DataEngineer,
    FrontendDeveloper,
    BackendDeveloper,
    FullStackDeveloper,
    Student,
    Other,
}

impl Role {
    pub const ALL: [Self; 12] = [
        Self::SoftwareEngineer,
        Self::SeniorSoftwareEngineer,
        Self::TechLead,
        Self::EngineeringManager,
        Self::ProductManager,
        Self::DevOpsEngineer,
        Self::DataEngineer,
        Self::FrontendDeveloper,
        Self::BackendDeveloper,
        Self::FullStackDeveloper,
        Self::Student,
        Self::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SoftwareEngineer => "Software Engineer",
            Self::SeniorSoftwareEngineer => "Senior Software Engineer",
            Self::TechLead => "Tech Lead",
            Self::EngineeringManager => "Engineering Manager",
            Self::ProductManager => "Product Manager",
            Self::DevOpsEngineer => "DevOps Engineer",
            Self::DataEngineer => "Data Engineer",
            Self::FrontendDeveloper => "Frontend Developer",
            Self::BackendDeveloper => "Backend Developer",
            Self::FullStackDeveloper => "Full Stack Developer",
            Self::Student => "Student",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive lookup by label.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|role| role.label().eq_ignore_ascii_case(raw))
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A confirmed registration: the submitted fields plus the service-issued ID.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResult {
    #[serde(flatten)]
    pub input: RegistrationInput,
    pub id: String,
}

/// Body of a `201 Created` reply from `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub id: String,
}

/// Body of any rejected request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Stored registration as listed by `GET /api/registrations`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Registration {
    /// Attach an ID and creation time to a submitted input.
    #[must_use]
    pub fn from_input(id: String, input: RegistrationInput, created_at: OffsetDateTime) -> Self {
        let RegistrationInput { name, email, company, role } = input;
        Self { id, name, email, company, role, created_at }
    }
}

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}
