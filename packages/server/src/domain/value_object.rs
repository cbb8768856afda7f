//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Nickname used when a comment is posted without one.
pub const ANONYMOUS_NICKNAME: &str = "Anonymous";

/// Room identifier value object.
///
/// Rooms created by this server carry a UUID, but any non-empty identifier is
/// accepted so comments can be addressed to rooms created elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Create a new RoomId.
    ///
    /// # Arguments
    ///
    /// * `id` - The room identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the RoomId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::RoomIdEmpty);
        }
        Ok(Self(id))
    }

    /// Create a RoomId from a generated UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host identifier value object.
///
/// Identifies the owner of a room. Only the host may close it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostId(String);

impl HostId {
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::HostIdEmpty);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HostId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room name value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomName(String);

impl RoomName {
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::RoomNameEmpty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Comment identifier value object.
///
/// Comments are stored and listed in ascending order of this identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CommentId(String);

impl CommentId {
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::CommentIdEmpty);
        }
        Ok(Self(id))
    }

    /// Create a CommentId from a generated UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Comment content value object.
///
/// Represents the body of a comment with validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentContent(String);

impl CommentContent {
    /// Create a new CommentContent.
    ///
    /// # Arguments
    ///
    /// * `content` - The comment body
    ///
    /// # Returns
    ///
    /// A Result containing the CommentContent or an error if validation fails
    pub fn new(content: String) -> Result<Self, ValueObjectError> {
        if content.is_empty() {
            return Err(ValueObjectError::CommentContentEmpty);
        }
        Ok(Self(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CommentContent {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display name attached to a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nickname(String);

impl Nickname {
    /// An empty nickname falls back to [`ANONYMOUS_NICKNAME`].
    pub fn new(nickname: String) -> Self {
        if nickname.is_empty() {
            return Self::anonymous();
        }
        Self(nickname)
    }

    pub fn from_optional(nickname: Option<String>) -> Self {
        nickname.map_or_else(Self::anonymous, Self::new)
    }

    pub fn anonymous() -> Self {
        Self(ANONYMOUS_NICKNAME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// WebSocket connection identifier value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::ConnectionIdEmpty);
        }
        Ok(Self(id))
    }

    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current time.
    pub fn now() -> Self {
        Self(live_comment_shared::time::get_utc_timestamp())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Format as RFC 3339 (UTC, millisecond precision).
    pub fn to_rfc3339(&self) -> String {
        live_comment_shared::time::timestamp_to_rfc3339(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
