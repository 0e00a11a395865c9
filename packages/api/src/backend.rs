//! # The REST boundary
//!
//! The backend exposes plain JSON collections. Every call the client makes goes
//! through the [`Backend`] trait, so services run unchanged against the HTTP
//! client ([`crate::RestBackend`]) or the in-process one ([`crate::MemoryBackend`]).
//!
//! | Method | HTTP | Notes |
//! |--------|------|-------|
//! | [`Backend::list`] | `GET /<c>?field=value` | Query pairs are field-equality filters |
//! | [`Backend::create`] | `POST /<c>` | Echoes the record with its server id |
//! | [`Backend::replace`] | `PUT /<c>/<id>` | Full replacement |
//! | [`Backend::delete`] | `DELETE /<c>/<id>` | Any 2xx confirms |

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

pub const USERS: &str = "users";
pub const SHIPMENTS: &str = "shipments";

/// Field-equality filter for [`Backend::list`].
pub type Query<'a> = &'a [(&'a str, &'a str)];

pub trait Backend: Clone {
    fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: Query<'_>,
    ) -> impl Future<Output = Result<Vec<T>, ApiError>>;

    fn create<T: Serialize, R: DeserializeOwned>(
        &self,
        collection: &str,
        body: &T,
    ) -> impl Future<Output = Result<R, ApiError>>;

    fn replace<T: Serialize, R: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
        body: &T,
    ) -> impl Future<Output = Result<R, ApiError>>;

    fn delete(&self, collection: &str, id: &str) -> impl Future<Output = Result<(), ApiError>>;
}
