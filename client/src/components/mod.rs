//! Reusable Leptos UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render state handed to them as signals or plain values and
//! report user intent through callbacks; network calls stay in `pages`.

pub mod course_card;
pub mod course_detail_dialog;
pub mod course_form;
pub mod pagination_bar;
pub mod theme_toggle;
