//! Course list view state: load status, in-memory paging, detail dialog.
//!
//! DESIGN
//! ======
//! `Idle -> Loading -> Ready | Error`. The collection is always replaced
//! wholesale by a fresh fetch; there is no optimistic update and no
//! rollback. Paging only slices what was fetched.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::error::ApiError;
use crate::net::types::Course;
use crate::state::session::SessionState;
use crate::util::pagination;

pub const LOAD_ERROR_MESSAGE: &str = "Error fetching courses";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing requested yet (also the resting state without a token).
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CoursesState {
    pub status: ListStatus,
    pub courses: Vec<Course>,
    /// 1-based current page.
    pub page: usize,
    /// Course shown in the read-only detail dialog.
    pub detail: Option<Course>,
}

impl Default for CoursesState {
    fn default() -> Self {
        Self {
            status: ListStatus::Idle,
            courses: Vec::new(),
            page: 1,
            detail: None,
        }
    }
}

impl CoursesState {
    /// The list fetches on mount only when a token is present; otherwise it
    /// stays idle.
    pub fn should_fetch_on_mount(session: &SessionState) -> bool {
        session.has_token()
    }

    pub fn begin_load(&mut self) {
        self.status = ListStatus::Loading;
    }

    /// Settle a collection fetch.
    pub fn finish_load(&mut self, result: Result<Vec<Course>, ApiError>) {
        match result {
            Ok(courses) => {
                self.courses = courses;
                self.page = pagination::clamp_page(self.courses.len(), self.page);
                self.status = ListStatus::Ready;
            }
            Err(e) => {
                leptos::logging::error!("{LOAD_ERROR_MESSAGE}: {e}");
                self.status = ListStatus::Error(LOAD_ERROR_MESSAGE.to_owned());
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ListStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the grid and every course-editing surface are rendered.
    /// Loading and failure replace all of them with status text.
    pub fn shows_content(&self) -> bool {
        !self.is_loading() && self.error().is_none()
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.courses.len())
    }

    /// Courses on the current page.
    pub fn visible(&self) -> &[Course] {
        &self.courses[pagination::page_range(self.courses.len(), self.page)]
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = pagination::clamp_page(self.courses.len(), page);
    }

    pub fn open_detail(&mut self, course: Course) {
        self.detail = Some(course);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}

/// Per-card actions that hit the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseAction {
    Edit,
    Delete,
}

impl CourseAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    /// Text of the blocking alert shown when the action fails.
    pub fn failure_message(self) -> String {
        format!("Failed to {} course", self.verb())
    }
}

/// What the page does once a card action settles.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    /// Hand the fetched record to the form.
    Edit(Course),
    /// Re-fetch the whole collection.
    Refetch,
    /// Show a blocking alert; the list is left untouched.
    Alert(String),
}

fn failed(action: CourseAction, e: &ApiError) -> ActionOutcome {
    leptos::logging::error!("Error running {} on course: {e}", action.verb());
    ActionOutcome::Alert(action.failure_message())
}

/// Settle the single-record fetch behind "edit".
pub fn edit_outcome(result: Result<Course, ApiError>) -> ActionOutcome {
    match result {
        Ok(course) => ActionOutcome::Edit(course),
        Err(e) => failed(CourseAction::Edit, &e),
    }
}

/// Settle a delete call.
pub fn delete_outcome(result: Result<(), ApiError>) -> ActionOutcome {
    match result {
        Ok(()) => ActionOutcome::Refetch,
        Err(e) => failed(CourseAction::Delete, &e),
    }
}
