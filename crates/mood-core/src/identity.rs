//! Owner identities under which sentiment records are filed.
//!
//! A record belongs either to a registered end user or to the reserved
//! external feed used by batch ingestion. The two live in separate enum
//! variants so a signup can never collide with the feed: [`Username::parse`]
//! refuses the reserved name outright.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Storage key of the synthetic batch-ingestion identity.
pub const EXTERNAL_FEED: &str = "external-feed";

/// A validated, non-reserved username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Trim and validate a raw username.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an empty name and
    /// `CoreError::ReservedIdentity` for the external feed name (compared
    /// case-insensitively).
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("username must not be empty".into()));
        }
        if name.eq_ignore_ascii_case(EXTERNAL_FEED) {
            return Err(CoreError::ReservedIdentity(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The principal a sentiment record is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Owner {
    RegisteredUser(Username),
    ExternalFeed,
}

impl Owner {
    /// Value written to the `owner` column.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        match self {
            Self::RegisteredUser(name) => name.as_str(),
            Self::ExternalFeed => EXTERNAL_FEED,
        }
    }

    /// Inverse of [`Owner::storage_key`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the key is empty.
    pub fn from_storage_key(key: &str) -> Result<Self, CoreError> {
        if key == EXTERNAL_FEED {
            return Ok(Self::ExternalFeed);
        }
        Username::parse(key).map(Self::RegisteredUser)
    }

    #[must_use]
    pub const fn is_external_feed(&self) -> bool {
        matches!(self, Self::ExternalFeed)
    }
}

impl From<Username> for Owner {
    fn from(value: Username) -> Self {
        Self::RegisteredUser(value)
    }
}

impl TryFrom<String> for Owner {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_storage_key(&value)
    }
}

impl From<Owner> for String {
    fn from(value: Owner) -> Self {
        value.storage_key().to_string()
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}
