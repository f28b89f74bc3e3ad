use crate::model::{Course, CourseDetails, Domain};
use crate::mvi::{LoadStatus, SliceState};

/// Catalog tree and the detail view of one course.
///
/// `domains` and `current_course` are fetched independently; the current
/// course does not have to appear in the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursesState {
    pub domains: Vec<Domain>,
    pub current_course: Option<CourseDetails>,
    pub status: LoadStatus,
}

impl SliceState for CoursesState {}

impl CoursesState {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    /// Look a course up anywhere in the catalog.
    pub fn find_course(&self, id: u64) -> Option<(&Domain, &Course)> {
        self.domains.iter().find_map(|domain| {
            domain
                .courses
                .iter()
                .find(|course| course.id == id)
                .map(|course| (domain, course))
        })
    }

    pub fn course_count(&self) -> usize {
        self.domains.iter().map(|d| d.courses.len()).sum()
    }
}
