// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Status code classification
//!
//! The web app reports failures through plain HTTP statuses: a redirect to
//! the login page for a bad session, 404 for an id that does not belong to
//! the user, and so on.

use crate::error::{ErrorKind, RequestError};

pub const SUCCESS: u16 = 200;
pub const FOUND: u16 = 302;
pub const SEE_OTHER: u16 = 303;
pub const BAD_REQUEST: u16 = 400;
pub const FORBIDDEN: u16 = 403;
pub const NOT_FOUND: u16 = 404;

/// Map a status code to the error it signals, `None` when it is a success
pub fn classify(status: u16) -> Option<ErrorKind> {
    match status {
        SUCCESS | SEE_OTHER => None,
        FOUND => Some(ErrorKind::AuthToken),
        BAD_REQUEST => Some(ErrorKind::Missing),
        FORBIDDEN => Some(ErrorKind::Limit),
        NOT_FOUND => Some(ErrorKind::General),
        _ => Some(ErrorKind::Unknown),
    }
}

/// Like [`classify`], but builds the full error carrying the status
pub fn check(status: u16) -> Option<RequestError> {
    classify(status).map(|kind| RequestError::new(kind, status))
}
