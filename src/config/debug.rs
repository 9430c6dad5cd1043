//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` so normal
//! runs stay quiet.

pub struct DebugFlags {
    /// Emit UI interaction logs (e.g., ticker switching, sort toggles).
    pub print_ui_interactions: bool,
    /// Emit a per-symbol summary after the startup download completes.
    pub print_fetch_summary: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_fetch_summary: true,
    print_state_serde: false,
};
