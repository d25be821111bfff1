//! Capability traits implemented by the dissection engine
//!
//! The option layer never talks to the engine internals directly; it
//! drives these two seams. [`DissectionEngine`] covers the side effects
//! applied while options are still being interpreted.
//! [`ProtocolRegistry`] covers the deferred protocol toggles applied in
//! one pass after all options are in.

use crate::resolve::ResolvFlags;
use crate::timestamp::SecondsFormat;

/// Direct side effects applied during option interpretation.
pub trait DissectionEngine {
    /// Install one decode-as override rule. Returns `false` if the rule
    /// string was rejected; the rule parser reports its own diagnostics.
    fn add_decode_as_rule(&mut self, rule: &str) -> bool;

    /// Load a Kerberos keytab file. Fire-and-forget, no status.
    fn load_keytab(&mut self, path: &str);

    /// Turn off all name resolution.
    fn disable_name_resolution(&mut self);

    /// Replace the active name-resolution flag set.
    fn set_resolution_flags(&mut self, flags: ResolvFlags);

    /// Select how the seconds portion of timestamps is displayed.
    fn set_seconds_format(&mut self, format: SecondsFormat);
}

/// Protocol enable/disable surface of the dissection engine.
///
/// The two plain toggles tolerate unknown names; the heuristic toggle
/// reports them. Callers rely on the asymmetry.
pub trait ProtocolRegistry {
    /// Disable dissection of a protocol. Unknown names are the
    /// registry's business; no failure is reported here.
    fn disable_protocol(&mut self, name: &str);

    /// Enable dissection of a protocol that is disabled by default.
    /// Same tolerance as [`disable_protocol`](Self::disable_protocol).
    fn enable_protocol(&mut self, name: &str);

    /// Enable or disable a heuristic sub-dissector by name. Returns
    /// `false` when no heuristic dissector with this name exists.
    fn set_heuristic_enabled(&mut self, name: &str, enable: bool) -> bool;
}
