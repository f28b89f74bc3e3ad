//! Plain serializable records exchanged with the remote source and held
//! in the store.

mod catalog;
mod note;
mod secret;
mod user;

pub use catalog::{Announcement, Chapter, Course, CourseDetails, Domain, SubTopic};
pub use note::{LocalId, Note, NoteDraft, NoteId};
pub use secret::Secret;
pub use user::{ProfileUpdate, Session, UserProfile, UserSummary};
