//! User and person value objects.

use serde::{Deserialize, Serialize};

/// Credentials handed to the authenticator.
///
/// Not owned by any component: callers build one ad hoc and pass it by reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Placeholder record the worker authenticates on every message.
    pub fn placeholder() -> Self {
        Self::new("mock@mock.com", "123456")
    }
}

impl Default for User {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the password.
        write!(f, "{}", self.email)
    }
}

/// Request payload accepted by the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new("Antonio", 25)
    }
}

impl From<&Person> for User {
    /// A person authenticates under their name with no password.
    fn from(person: &Person) -> Self {
        User::new(person.name.clone(), String::new())
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}
