//! Typed CRUD operations bound to one placeholder resource.
//!
//! # Design
//! A `ResourceEndpoint<R>` owns its `RequestSpecification` and a `WebEndpoint`
//! and never inherits behavior from it. Every operation comes in two forms:
//! the `*_with_status` form asserts a caller-chosen status and returns the
//! `ValidatableResponse` (for negative tests), and the plain form asserts the
//! resource's success status and deserializes the body.

use std::fmt::Display;
use std::marker::PhantomData;

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::response::ValidatableResponse;
use crate::specification::RequestSpecification;
use crate::types::{CommentDto, UserDto};
use crate::web_endpoint::WebEndpoint;

/// A REST resource with a collection path and a single-item path.
pub trait Resource: Serialize + DeserializeOwned {
    /// Singular name used in log lines, e.g. `Comment`.
    const NAME: &'static str;
    const PLURAL: &'static str;
    const COLLECTION_PATH: &'static str;
    /// Item path with exactly one placeholder for the id.
    const ITEM_PATH: &'static str;
}

impl Resource for CommentDto {
    const NAME: &'static str = "Comment";
    const PLURAL: &'static str = "Comments";
    const COLLECTION_PATH: &'static str = "/comments";
    const ITEM_PATH: &'static str = "/comments/{commentID}";
}

impl Resource for UserDto {
    const NAME: &'static str = "User";
    const PLURAL: &'static str = "Users";
    const COLLECTION_PATH: &'static str = "/users";
    const ITEM_PATH: &'static str = "/users/{userID}";
}

pub type CommentEndpoint = ResourceEndpoint<CommentDto>;
pub type UserEndpoint = ResourceEndpoint<UserDto>;

#[derive(Debug, Clone)]
pub struct ResourceEndpoint<R> {
    spec: RequestSpecification,
    web: WebEndpoint,
    resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceEndpoint<R> {
    /// Endpoint that talks to the network through a default `ureq` agent.
    pub fn new(spec: RequestSpecification) -> Self {
        Self::with_web_endpoint(spec, WebEndpoint::new())
    }

    pub fn with_web_endpoint(spec: RequestSpecification, web: WebEndpoint) -> Self {
        Self {
            spec,
            web,
            resource: PhantomData,
        }
    }

    pub fn specification(&self) -> &RequestSpecification {
        &self.spec
    }

    pub fn create(&self, item: &R) -> Result<R, ApiError> {
        self.create_with_status(item, StatusCode::CREATED)?
            .extract()
            .as_json()
    }

    pub fn create_with_status(
        &self,
        item: &R,
        status: StatusCode,
    ) -> Result<ValidatableResponse, ApiError> {
        info!("Create new {}", R::NAME);
        self.web
            .post(&self.spec, R::COLLECTION_PATH, item, &[])?
            .status_code(status)
    }

    pub fn update(&self, id: impl Display, item: &R) -> Result<R, ApiError> {
        self.update_with_status(id, item, StatusCode::OK)?
            .extract()
            .as_json()
    }

    pub fn update_with_status(
        &self,
        id: impl Display,
        item: &R,
        status: StatusCode,
    ) -> Result<ValidatableResponse, ApiError> {
        info!("Update {} by id [{}]", R::NAME, id);
        self.web
            .put(&self.spec, R::ITEM_PATH, item, &[&id])?
            .status_code(status)
    }

    pub fn get_by_id(&self, id: impl Display) -> Result<R, ApiError> {
        self.get_by_id_with_status(id, StatusCode::OK)?
            .extract()
            .as_json()
    }

    pub fn get_by_id_with_status(
        &self,
        id: impl Display,
        status: StatusCode,
    ) -> Result<ValidatableResponse, ApiError> {
        info!("Get {} by id [{}]", R::NAME, id);
        self.web
            .get(&self.spec, R::ITEM_PATH, &[&id])?
            .status_code(status)
    }

    /// Every item of the collection, in the order the server returned them.
    pub fn get_all(&self) -> Result<Vec<R>, ApiError> {
        self.get_all_with_status(StatusCode::OK)?
            .extract()
            .as_json()
    }

    pub fn get_all_with_status(&self, status: StatusCode) -> Result<ValidatableResponse, ApiError> {
        info!("Get all {}", R::PLURAL);
        self.web
            .get(&self.spec, R::COLLECTION_PATH, &[])?
            .status_code(status)
    }

    /// Delete an item; the body of a successful delete is ignored.
    pub fn delete(&self, id: impl Display) -> Result<(), ApiError> {
        self.delete_with_status(id, StatusCode::OK)?;
        Ok(())
    }

    pub fn delete_with_status(
        &self,
        id: impl Display,
        status: StatusCode,
    ) -> Result<ValidatableResponse, ApiError> {
        info!("Delete {} by id [{}]", R::NAME, id);
        self.web
            .delete(&self.spec, R::ITEM_PATH, &[&id])?
            .status_code(status)
    }
}
