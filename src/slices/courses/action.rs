use crate::model::{CourseDetails, Domain};
use crate::mvi::{Action, ActionKind, Phase};

#[derive(Debug, Clone, PartialEq)]
pub enum CoursesAction {
    FetchDomains(Phase<(), Vec<Domain>>),
    /// Argument is the requested course id.
    FetchCourseDetails(Phase<u64, CourseDetails>),
    ClearCurrentCourse,
}

impl Action for CoursesAction {
    fn kind(&self) -> ActionKind {
        match self {
            Self::FetchDomains(phase) => {
                ActionKind::staged("courses", "fetchDomains", phase.stage())
            }
            Self::FetchCourseDetails(phase) => {
                ActionKind::staged("courses", "fetchCourseDetails", phase.stage())
            }
            Self::ClearCurrentCourse => ActionKind::new("courses", "clearCurrentCourse"),
        }
    }
}
