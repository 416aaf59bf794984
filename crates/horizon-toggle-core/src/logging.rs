//! Logging targets for Horizon Toggle.
//!
//! Horizon Toggle uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_toggle_core::dispatch=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_toggle_core";
    /// Document tree mutations.
    pub const DOM: &str = "horizon_toggle_core::dom";
    /// Event dispatch and default actions.
    pub const DISPATCH: &str = "horizon_toggle_core::dispatch";
    /// Render queue and render passes.
    pub const RENDER: &str = "horizon_toggle_core::render";
    /// Component lifecycle (connect/disconnect).
    pub const COMPONENT: &str = "horizon_toggle_core::component";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_toggle_core::signal";
}
