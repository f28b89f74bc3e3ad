//! Request/response contracts with the remote learning platform.
//!
//! [`RemoteApi`] is the seam the effect layer talks through; [`HttpApi`] is
//! the production implementation over HTTP/JSON.

mod error;
mod http;

use async_trait::async_trait;
use serde::Serialize;

use crate::model::{
    CourseDetails, Domain, Note, NoteDraft, NoteId, ProfileUpdate, Secret, Session, UserProfile,
};

pub use error::ApiError;
pub use http::HttpApi;

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: Secret,
}

/// Signup request body.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: Secret,
}

/// Operations offered by the remote source.
///
/// Calls made on behalf of a signed-in user take the token read from the
/// store at call time. Catalog calls accept an optional token because the
/// catalog is also browsable signed-out.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError>;

    async fn signup(&self, registration: &Registration) -> Result<Session, ApiError>;

    /// Exchange `token` for a fresh one.
    async fn refresh(&self, token: &Secret) -> Result<Secret, ApiError>;

    async fn fetch_profile(&self, token: &Secret) -> Result<UserProfile, ApiError>;

    async fn update_profile(
        &self,
        token: &Secret,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, ApiError>;

    async fn fetch_domains(&self, token: Option<&Secret>) -> Result<Vec<Domain>, ApiError>;

    async fn fetch_course_details(
        &self,
        token: Option<&Secret>,
        course_id: u64,
    ) -> Result<CourseDetails, ApiError>;

    async fn list_notes(&self, token: &Secret) -> Result<Vec<Note>, ApiError>;

    async fn create_note(&self, token: &Secret, draft: &NoteDraft) -> Result<Note, ApiError>;

    async fn update_note(
        &self,
        token: &Secret,
        id: NoteId,
        draft: &NoteDraft,
    ) -> Result<Note, ApiError>;

    async fn delete_note(&self, token: &Secret, id: NoteId) -> Result<(), ApiError>;
}
