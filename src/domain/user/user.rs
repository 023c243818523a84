//! User record and the validated inputs that create or change one.

use crate::domain::foundation::{DomainError, Timestamp, UserId, ValidationError};

use super::sanitize::{validate_age, validate_email, validate_name};

/// Exclusive upper bound for age when a user is created.
pub const CREATE_AGE_LIMIT: i32 = 99;

/// Exclusive upper bound for age when a user is updated.
pub const UPDATE_AGE_LIMIT: i32 = 120;

/// A registered person, as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created: Timestamp,
    pub modified: Timestamp,
    pub deleted: Option<Timestamp>,
}

impl User {
    /// Returns true while the record has not been soft-deleted.
    pub fn is_active(&self) -> bool {
        self.deleted.is_none()
    }
}

/// Sanitized, validated input for a user that has not been stored yet.
///
/// The identifier is assigned by the store on insert, so there is none here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
    age: i32,
    created: Timestamp,
}

impl NewUser {
    /// Sanitizes and validates every field, reporting all violations at once.
    pub fn new(name: &str, email: &str, age: i32) -> Result<Self, DomainError> {
        let mut errors = Vec::new();

        let name = validate_name(name).map_err(|e| errors.push(e)).ok();
        let email = validate_email(email).map_err(|e| errors.push(e)).ok();
        let age = validate_age(age, CREATE_AGE_LIMIT)
            .map_err(|e| errors.push(e))
            .ok();

        match (name, email, age) {
            (Some(name), Some(email), Some(age)) => Ok(Self {
                name,
                email,
                age,
                created: Timestamp::now(),
            }),
            _ => Err(DomainError::validation_failed(errors)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn created(&self) -> Timestamp {
        self.created
    }

    /// Attaches the store-assigned identifier.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            created: self.created,
            modified: self.created,
            deleted: None,
        }
    }
}

/// A validated partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    name: Option<String>,
    email: Option<String>,
    age: Option<i32>,
}

impl UserChanges {
    pub fn new(
        name: Option<&str>,
        email: Option<&str>,
        age: Option<i32>,
    ) -> Result<Self, DomainError> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let name = name.and_then(|n| validate_name(n).map_err(|e| errors.push(e)).ok());
        let email = email.and_then(|m| validate_email(m).map_err(|e| errors.push(e)).ok());
        let age = age.and_then(|a| {
            validate_age(a, UPDATE_AGE_LIMIT)
                .map_err(|e| errors.push(e))
                .ok()
        });

        if !errors.is_empty() {
            return Err(DomainError::validation_failed(errors));
        }
        Ok(Self { name, email, age })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }

    /// Applies the changes to `user` and refreshes its modified timestamp.
    pub fn apply_to(&self, user: &mut User, now: Timestamp) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(age) = self.age {
            user.age = age;
        }
        user.modified = now;
    }
}
