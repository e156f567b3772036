//! Registration records and their building blocks.

use data_pool::models::{Category, Gender};
use serde::Serialize;
use time::Date;

/// Everything a signup form asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationData {
    pub first_name: String,
    pub last_name: String,
    pub email_local_part: String,
    pub email_domain: String,
    pub password: String,
    pub recovery_email: String,
    pub birthdate: Date,
    pub city: String,
    pub security_question: Category,
    pub security_answer: String,
}

impl RegistrationData {
    pub fn email_address(&self) -> String {
        format!("{}@{}", self.email_local_part, self.email_domain)
    }
}

/// Where identity fields come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Draw from the data pool, substituting synthetic values for empty pools.
    #[default]
    Pooled,
    /// Generate every field on the fly.
    Synthetic,
}

/// Name and birthdate of the person being registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Date,
    pub gender: Option<Gender>,
}
