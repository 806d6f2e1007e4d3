//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so views depend on small focused models.
//! `session` and `theme` are app-wide contexts initialised once at the
//! root; `courses` and `draft` are owned by the courses page.

pub mod courses;
pub mod draft;
pub mod session;
pub mod theme;
