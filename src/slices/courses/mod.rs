//! Course catalog and the currently opened course.

mod action;
mod reducer;
mod state;

pub use action::CoursesAction;
pub use reducer::CoursesReducer;
pub use state::CoursesState;
