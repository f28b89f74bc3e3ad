//! Course catalog intents. The catalog is public; the session token is
//! attached when there is one.

use crate::api::RemoteApi;
use crate::model::{CourseDetails, Domain};
use crate::mvi::Phase;
use crate::slices::courses::CoursesAction;

use super::{EffectError, Effects};

impl<A: RemoteApi + ?Sized> Effects<A> {
    pub async fn fetch_domains(&self) -> Result<Vec<Domain>, EffectError> {
        self.store.dispatch(CoursesAction::FetchDomains(Phase::pending()));
        let token = self.token().ok();

        match self.api.fetch_domains(token.as_ref()).await {
            Ok(domains) => {
                tracing::debug!(count = domains.len(), "fetched domains");
                self.store.dispatch(CoursesAction::FetchDomains(Phase::fulfilled(domains.clone())));
                Ok(domains)
            }
            Err(e) => {
                let action = CoursesAction::FetchDomains(Phase::rejected(e.user_message()));
                self.reject(action, &e, token.is_some());
                Err(e.into())
            }
        }
    }

    /// Load one course. It does not have to be present in the fetched
    /// domains.
    pub async fn fetch_course_details(&self, course_id: u64) -> Result<CourseDetails, EffectError> {
        self.store.dispatch(CoursesAction::FetchCourseDetails(Phase::Pending { arg: course_id }));
        let token = self.token().ok();

        match self.api.fetch_course_details(token.as_ref(), course_id).await {
            Ok(details) => {
                self.store.dispatch(CoursesAction::FetchCourseDetails(Phase::Fulfilled {
                    arg: course_id,
                    payload: details.clone(),
                }));
                Ok(details)
            }
            Err(e) => {
                let action = CoursesAction::FetchCourseDetails(Phase::Rejected {
                    arg: course_id,
                    error: e.user_message(),
                });
                self.reject(action, &e, token.is_some());
                Err(e.into())
            }
        }
    }

    /// Leave the course screen.
    pub fn close_course(&self) {
        self.store.dispatch(CoursesAction::ClearCurrentCourse);
    }
}
