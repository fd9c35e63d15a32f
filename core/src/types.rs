//! Data objects for the placeholder resources.
//!
//! # Design
//! These types mirror the placeholder service's JSON but are defined
//! independently of the mock-server crate; the integration tests catch schema
//! drift. Every field is optional so a partial body still parses and unset
//! fields stay off the wire.

use serde::{Deserialize, Serialize};

/// A comment on a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl CommentDto {
    pub fn new(post_id: u64, name: &str, email: &str, body: &str) -> Self {
        Self {
            id: None,
            post_id: Some(post_id),
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            body: Some(body.to_string()),
        }
    }
}

/// A user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl UserDto {
    pub fn new(name: &str, username: &str, email: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            ..Self::default()
        }
    }
}
