//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit detailed loading/deserialization logs.
    pub print_serde: bool,
    /// Emit UI interaction logs (e.g., brand switching, volume selection).
    pub print_ui_interactions: bool,
    /// Emit per-request aggregation summaries (row counts after each filter).
    pub print_aggregation_stats: bool,
    /// Emit details of UI state serialization/deserialization logs.
    pub print_state_serde: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_serde: false,
    print_ui_interactions: true,
    print_aggregation_stats: false,
    print_state_serde: false,
};
