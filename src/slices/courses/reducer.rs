use crate::mvi::{Phase, Reducer};

use super::action::CoursesAction;
use super::state::CoursesState;

pub struct CoursesReducer;

impl Reducer for CoursesReducer {
    type State = CoursesState;
    type Action = CoursesAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CoursesAction::FetchDomains(phase) => match phase {
                Phase::Pending { .. } => CoursesState {
                    status: state.status.begin(),
                    ..state
                },
                Phase::Fulfilled { payload, .. } => CoursesState {
                    domains: payload,
                    status: state.status.succeed(),
                    ..state
                },
                Phase::Rejected { error, .. } => CoursesState {
                    status: state.status.fail(&error),
                    ..state
                },
            },

            CoursesAction::FetchCourseDetails(phase) => match phase {
                Phase::Pending { .. } => CoursesState {
                    status: state.status.begin(),
                    ..state
                },
                Phase::Fulfilled { payload, .. } => CoursesState {
                    current_course: Some(payload),
                    status: state.status.succeed(),
                    ..state
                },
                Phase::Rejected { error, .. } => CoursesState {
                    status: state.status.fail(&error),
                    ..state
                },
            },

            CoursesAction::ClearCurrentCourse => CoursesState {
                current_course: None,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, CourseDetails, Domain};

    fn domain(id: u64, course_ids: &[u64]) -> Domain {
        Domain {
            id,
            name: format!("Domain {}", id),
            description: String::new(),
            courses: course_ids
                .iter()
                .map(|&cid| Course {
                    id: cid,
                    title: format!("Course {}", cid),
                    description: String::new(),
                    thumbnail_url: None,
                })
                .collect(),
        }
    }

    fn details(id: u64) -> CourseDetails {
        CourseDetails {
            id,
            title: format!("Course {}", id),
            description: String::new(),
            chapters: Vec::new(),
            announcements: Vec::new(),
        }
    }

    #[test]
    fn fetch_domains_replaces_wholesale() {
        let state = CoursesReducer::reduce(
            CoursesState::default(),
            CoursesAction::FetchDomains(Phase::fulfilled(vec![
                domain(1, &[10, 11]),
                domain(2, &[20]),
            ])),
        );
        assert_eq!(state.course_count(), 3);

        let state = CoursesReducer::reduce(state, CoursesAction::FetchDomains(Phase::pending()));
        let state = CoursesReducer::reduce(
            state,
            CoursesAction::FetchDomains(Phase::fulfilled(vec![domain(3, &[30])])),
        );
        assert_eq!(state.domains.len(), 1);
        assert_eq!(state.domains[0].id, 3);
        assert!(state.find_course(10).is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn course_details_for_unknown_course_is_accepted() {
        let state = CoursesReducer::reduce(
            CoursesState::default(),
            CoursesAction::FetchCourseDetails(Phase::Pending { arg: 99 }),
        );
        let state = CoursesReducer::reduce(
            state,
            CoursesAction::FetchCourseDetails(Phase::Fulfilled {
                arg: 99,
                payload: details(99),
            }),
        );
        assert!(state.domains.is_empty());
        assert_eq!(state.current_course.as_ref().map(|c| c.id), Some(99));
    }

    #[test]
    fn rejected_details_keep_previous_course() {
        let state = CoursesReducer::reduce(
            CoursesState::default(),
            CoursesAction::FetchCourseDetails(Phase::Fulfilled {
                arg: 1,
                payload: details(1),
            }),
        );
        let state = CoursesReducer::reduce(
            state,
            CoursesAction::FetchCourseDetails(Phase::Pending { arg: 2 }),
        );
        let state = CoursesReducer::reduce(
            state,
            CoursesAction::FetchCourseDetails(Phase::Rejected {
                arg: 2,
                error: "Course not found".to_string(),
            }),
        );
        assert_eq!(state.current_course.as_ref().map(|c| c.id), Some(1));
        assert_eq!(state.error(), Some("Course not found"));
        assert!(!state.is_loading());
    }

    #[test]
    fn concurrent_catalog_and_detail_fetches_settle_loading() {
        let state = CoursesReducer::reduce(
            CoursesState::default(),
            CoursesAction::FetchDomains(Phase::pending()),
        );
        let state = CoursesReducer::reduce(
            state,
            CoursesAction::FetchCourseDetails(Phase::Pending { arg: 5 }),
        );
        let state = CoursesReducer::reduce(
            state,
            CoursesAction::FetchCourseDetails(Phase::Fulfilled {
                arg: 5,
                payload: details(5),
            }),
        );
        assert!(state.is_loading());
        let state = CoursesReducer::reduce(
            state,
            CoursesAction::FetchDomains(Phase::fulfilled(vec![domain(1, &[5])])),
        );
        assert!(!state.is_loading());
        assert!(state.find_course(5).is_some());
    }

    #[test]
    fn clear_current_course_keeps_catalog() {
        let state = CoursesReducer::reduce(
            CoursesState::default(),
            CoursesAction::FetchDomains(Phase::fulfilled(vec![domain(1, &[1])])),
        );
        let state = CoursesReducer::reduce(
            state,
            CoursesAction::FetchCourseDetails(Phase::Fulfilled {
                arg: 1,
                payload: details(1),
            }),
        );
        let state = CoursesReducer::reduce(state, CoursesAction::ClearCurrentCourse);
        assert!(state.current_course.is_none());
        assert_eq!(state.domains.len(), 1);
    }
}
