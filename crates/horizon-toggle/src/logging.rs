//! Logging targets for the toggle widget.
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_toggle=debug,horizon_toggle_core::dispatch=trace")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Widget state changes and interaction handling.
    pub const TOGGLE: &str = "horizon_toggle::toggle";
    /// Blueprint registration and instance creation.
    pub const REGISTRY: &str = "horizon_toggle::registry";
    /// Options loading.
    pub const OPTIONS: &str = "horizon_toggle::options";
}
