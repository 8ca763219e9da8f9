use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;

use crate::error::Error;

/// JSON body whose rejections render through [`Error`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

/// Path parameters whose rejections render through [`Error`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct AppPath<T>(pub T);

/// Positive decimal resource id taken from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i64")]
pub struct Id(pub i64);

impl TryFrom<i64> for Id {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value > 0 {
            Ok(Id(value))
        } else {
            Err(format!("id must be a positive integer, got {}", value))
        }
    }
}
