//! Browser-facing helpers shared by pages and state.
//!
//! `storage` and `theme_dom` wrap `localStorage` and the `<html>` element,
//! `browser` wraps alerts and file pickers, and `pagination` is pure math.

pub mod browser;
pub mod pagination;
pub mod storage;
pub mod theme_dom;
