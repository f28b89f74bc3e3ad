//! Scripted in-process `RemoteApi` for effect-layer tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use skillpath::api::{ApiError, Credentials, Registration, RemoteApi};
use skillpath::model::{
    CourseDetails, Domain, Note, NoteDraft, NoteId, ProfileUpdate, Secret, Session, UserProfile,
};
use tokio::sync::Notify;

/// Scripted outcome of one call.
pub enum Reply {
    Ok(Value),
    Status(u16, Option<String>),
    Timeout,
}

struct Scripted {
    reply: Reply,
    delay: Duration,
    gate: Option<Arc<Notify>>,
}

/// One recorded call: operation name and the token it carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub op: &'static str,
    pub token: Option<String>,
}

#[derive(Default)]
pub struct FakeApi {
    replies: Mutex<HashMap<&'static str, VecDeque<Scripted>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, op: &'static str, reply: Reply) {
        self.push(op, reply, Duration::ZERO, None);
    }

    pub fn ok(&self, op: &'static str, value: Value) {
        self.reply(op, Reply::Ok(value));
    }

    pub fn fail(&self, op: &'static str, status: u16, message: &str) {
        self.reply(op, Reply::Status(status, Some(message.to_string())));
    }

    pub fn reply_after(&self, op: &'static str, reply: Reply, delay: Duration) {
        self.push(op, reply, delay, None);
    }

    /// Script a reply that is only delivered once the returned gate is
    /// notified.
    pub fn reply_gated(&self, op: &'static str, reply: Reply) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.push(op, reply, Duration::ZERO, Some(Arc::clone(&gate)));
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn push(&self, op: &'static str, reply: Reply, delay: Duration, gate: Option<Arc<Notify>>) {
        self.replies
            .lock()
            .entry(op)
            .or_default()
            .push_back(Scripted { reply, delay, gate });
    }

    async fn answer<T: DeserializeOwned>(
        &self,
        op: &'static str,
        token: Option<&Secret>,
    ) -> Result<T, ApiError> {
        self.calls.lock().push(Call {
            op,
            token: token.map(|t| t.expose().to_string()),
        });
        let scripted = self
            .replies
            .lock()
            .get_mut(op)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("no reply scripted for {op}"));

        if let Some(gate) = scripted.gate {
            gate.notified().await;
        }
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        match scripted.reply {
            Reply::Ok(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
            }
            Reply::Status(status, message) => Err(ApiError::Status { status, message }),
            Reply::Timeout => Err(ApiError::Timeout { duration: 30 }),
        }
    }
}

#[async_trait]
impl RemoteApi for FakeApi {
    async fn login(&self, _credentials: &Credentials) -> Result<Session, ApiError> {
        self.answer("login", None).await
    }

    async fn signup(&self, _registration: &Registration) -> Result<Session, ApiError> {
        self.answer("signup", None).await
    }

    async fn refresh(&self, token: &Secret) -> Result<Secret, ApiError> {
        self.answer("refresh", Some(token)).await
    }

    async fn fetch_profile(&self, token: &Secret) -> Result<UserProfile, ApiError> {
        self.answer("fetch_profile", Some(token)).await
    }

    async fn update_profile(
        &self,
        token: &Secret,
        _update: &ProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        self.answer("update_profile", Some(token)).await
    }

    async fn fetch_domains(&self, token: Option<&Secret>) -> Result<Vec<Domain>, ApiError> {
        self.answer("fetch_domains", token).await
    }

    async fn fetch_course_details(
        &self,
        token: Option<&Secret>,
        _course_id: u64,
    ) -> Result<CourseDetails, ApiError> {
        self.answer("fetch_course_details", token).await
    }

    async fn list_notes(&self, token: &Secret) -> Result<Vec<Note>, ApiError> {
        self.answer("list_notes", Some(token)).await
    }

    async fn create_note(&self, token: &Secret, _draft: &NoteDraft) -> Result<Note, ApiError> {
        self.answer("create_note", Some(token)).await
    }

    async fn update_note(
        &self,
        token: &Secret,
        _id: NoteId,
        _draft: &NoteDraft,
    ) -> Result<Note, ApiError> {
        self.answer("update_note", Some(token)).await
    }

    async fn delete_note(&self, token: &Secret, _id: NoteId) -> Result<(), ApiError> {
        self.answer::<Value>("delete_note", Some(token)).await.map(|_| ())
    }
}
