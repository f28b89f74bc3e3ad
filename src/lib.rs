//! Application state core of the SkillPath learning client.
//!
//! One [`Store`](store::Store) holds the session, profile, course catalog
//! and notes. Intents go through [`Effects`](effects::Effects), the auth
//! slice survives restarts through the
//! [`PersistenceGateway`](persist::PersistenceGateway), and the
//! [`NavigationGate`](navigation::NavigationGate) turns session state into
//! a route.

pub mod api;
pub mod config;
pub mod effects;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod navigation;
pub mod persist;
pub mod slices;
pub mod store;
pub mod validation;
