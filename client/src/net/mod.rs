//! Networking modules for the external course REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `course_form` lays out the multipart
//! course payload, `types` defines the wire schema, and `error` the shared
//! failure type.

pub mod api;
pub mod course_form;
pub mod error;
pub mod types;
