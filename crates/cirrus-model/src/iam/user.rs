//! IAM user record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::constraints::{check_chars, check_length, check_path, is_user_name_char, is_word_char};
use crate::render::{Fields, Timestamp};

/// An IAM user.
///
/// The five creation-time fields are set together by [`UserRecord::new`].
/// `password_last_used_at` is populated only by user lookups and listings,
/// and is absent when the user has no password, has never signed in, or has
/// no sign-in data.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use cirrus_model::UserRecord;
///
/// let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
/// let user = UserRecord::new(
///     "/",
///     "alice",
///     "AIDACKCEVSQ6C2EXAMPLE",
///     "arn:aws:iam::123456789012:user/alice",
///     created,
/// );
///
/// assert_eq!(user.name(), Some("alice"));
/// assert!(user.password_last_used_at().is_none());
/// assert!(user.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "Path", default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,

    #[serde(rename = "UserName", default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(rename = "UserId", default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(rename = "Arn", default, skip_serializing_if = "Option::is_none")]
    arn: Option<String>,

    #[serde(rename = "CreateDate", default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,

    #[serde(rename = "PasswordLastUsed", default, skip_serializing_if = "Option::is_none")]
    password_last_used_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Create a user record with its creation-time fields set.
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
        arn: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            path: Some(path.into()),
            name: Some(name.into()),
            id: Some(id.into()),
            arn: Some(arn.into()),
            created_at: Some(created_at),
            password_last_used_at: None,
        }
    }

    /// The path to the user, e.g. `/division_abc/subdivision_xyz/`.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: Option<String>) {
        self.path = path;
    }

    pub fn with_path(mut self, path: Option<String>) -> Self {
        self.set_path(path);
        self
    }

    /// The friendly name identifying the user.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.set_name(name);
        self
    }

    /// The stable, unique identifier of the user.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.set_id(id);
        self
    }

    /// The Amazon Resource Name (ARN) of the user.
    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    pub fn set_arn(&mut self, arn: Option<String>) {
        self.arn = arn;
    }

    pub fn with_arn(mut self, arn: Option<String>) -> Self {
        self.set_arn(arn);
        self
    }

    /// When the user was created.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn set_created_at(&mut self, created_at: Option<DateTime<Utc>>) {
        self.created_at = created_at;
    }

    pub fn with_created_at(mut self, created_at: Option<DateTime<Utc>>) -> Self {
        self.set_created_at(created_at);
        self
    }

    /// When the user's password was last used to sign in.
    ///
    /// Only the first use within a five-minute span is recorded.
    pub fn password_last_used_at(&self) -> Option<DateTime<Utc>> {
        self.password_last_used_at
    }

    pub fn set_password_last_used_at(&mut self, at: Option<DateTime<Utc>>) {
        self.password_last_used_at = at;
    }

    pub fn with_password_last_used_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.set_password_last_used_at(at);
        self
    }

    /// Check present string fields against their documented constraints.
    ///
    /// Absent fields are skipped. The first violation found is returned, in
    /// field order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) naming the
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.path {
            check_path("Path", path)?;
        }
        if let Some(name) = &self.name {
            check_length("UserName", name, 1, 64)?;
            check_chars("UserName", name, is_user_name_char)?;
        }
        if let Some(id) = &self.id {
            check_length("UserId", id, 16, 32)?;
            check_chars("UserId", id, is_word_char)?;
        }
        if let Some(arn) = &self.arn {
            check_length("Arn", arn, 20, 2048)?;
        }
        Ok(())
    }

    /// Decode a user from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::Error::Decode) if the document is not
    /// valid JSON or does not match the shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let user: Self = serde_json::from_str(json)?;
        debug!(user = user.name().unwrap_or("<unnamed>"), "decoded user record");
        Ok(user)
    }

    /// Encode this user in its JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::new(f)?
            .field("Path", self.path.as_deref())?
            .field("UserName", self.name.as_deref())?
            .field("UserId", self.id.as_deref())?
            .field("Arn", self.arn.as_deref())?
            .field("CreateDate", self.created_at.as_ref().map(Timestamp))?
            .field("PasswordLastUsed", self.password_last_used_at.as_ref().map(Timestamp))?
            .finish()
    }
}
