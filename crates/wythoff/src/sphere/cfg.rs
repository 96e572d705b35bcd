//! Tolerance defaults for spherical geometry (internal).
//!
//! Policy
//! - Each call site keeps its own epsilon; they trade merge correctness against
//!   numeric noise differently and are not unified.
//! - Tiling merge tolerances are overridable through `TilingCfg`; the rest are
//!   fixed constants.

/// Per-component tolerance for unit points on the 2-sphere; also the 2-sphere merge default.
pub const POINT_EPS: f64 = 1.0 / 8192.0;
/// Vertex merge tolerance for tilings of the 3-sphere.
pub const MERGE_EPS_4D: f64 = 1.0 / 1024.0;
/// Render-scale position dedup (e.g. counting distinct output vertices).
pub const RENDER_EPS: f64 = 1.0 / 256.0;
/// Coarse hit tolerance for picking a generating point.
pub const PICK_EPS: f64 = 1.0 / 32.0;
/// Closed-form cosines within this distance of 0 or ±1 are snapped.
pub(crate) const SNAP_EPS: f64 = 1e-5;
/// Minimum |det| of a fundamental simplex's vertex matrix.
pub(crate) const DEGENERATE_EPS: f64 = 1e-9;
