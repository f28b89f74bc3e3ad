//! Base trait for slice state.

/// Marker trait for slice state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data a consumer needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
