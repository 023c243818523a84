//! User records.
//!
//! - `user` - the stored record plus the validated create/update inputs
//! - `sanitize` - markup stripping and field rules shared by both inputs

mod sanitize;
mod user;

pub use sanitize::{sanitize_input, validate_age, validate_email, validate_name};
pub use user::{NewUser, User, UserChanges, CREATE_AGE_LIMIT, UPDATE_AGE_LIMIT};
