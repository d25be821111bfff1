//! Common test utilities for dissect-opts integration tests
//!
//! In-process stand-ins for the external collaborators: the dissection
//! engine, the protocol registry and the diagnostic sink. All of them
//! record the calls they receive so tests can assert on exactly what
//! the option layer asked for.

use std::collections::HashSet;

use dissect_opts::diag::DiagnosticSink;
use dissect_opts::engine::{DissectionEngine, ProtocolRegistry};
use dissect_opts::resolve::ResolvFlags;
use dissect_opts::timestamp::SecondsFormat;

/// Records every side effect the option interpreter asks for.
#[derive(Debug, Default)]
pub struct MockEngine {
    pub decode_as_rules: Vec<String>,
    /// When set, the decode-as rule parser rejects every rule.
    pub reject_decode_as: bool,
    pub keytabs: Vec<String>,
    pub name_resolution_disabled: bool,
    pub resolution_flags: Option<ResolvFlags>,
    pub seconds_format: Option<SecondsFormat>,
}

impl DissectionEngine for MockEngine {
    fn add_decode_as_rule(&mut self, rule: &str) -> bool {
        if self.reject_decode_as {
            return false;
        }
        self.decode_as_rules.push(rule.to_string());
        true
    }

    fn load_keytab(&mut self, path: &str) {
        self.keytabs.push(path.to_string());
    }

    fn disable_name_resolution(&mut self) {
        self.name_resolution_disabled = true;
    }

    fn set_resolution_flags(&mut self, flags: ResolvFlags) {
        self.resolution_flags = Some(flags);
    }

    fn set_seconds_format(&mut self, format: SecondsFormat) {
        self.seconds_format = Some(format);
    }
}

/// Protocol registry with a scripted set of known heuristic names.
///
/// Plain protocol toggles always succeed and are only recorded;
/// heuristic toggles succeed iff the name is in `known_heuristics`.
#[derive(Debug, Default)]
pub struct MockRegistry {
    pub known_heuristics: HashSet<String>,
    pub disabled: Vec<String>,
    pub enabled: Vec<String>,
    /// Every heuristic call in order, with the requested state.
    pub heuristic_calls: Vec<(String, bool)>,
}

impl MockRegistry {
    pub fn with_heuristics(names: &[&str]) -> Self {
        Self {
            known_heuristics: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl ProtocolRegistry for MockRegistry {
    fn disable_protocol(&mut self, name: &str) {
        self.disabled.push(name.to_string());
    }

    fn enable_protocol(&mut self, name: &str) {
        self.enabled.push(name.to_string());
    }

    fn set_heuristic_enabled(&mut self, name: &str, enable: bool) -> bool {
        self.heuristic_calls.push((name.to_string(), enable));
        self.known_heuristics.contains(name)
    }
}

/// Captures diagnostics instead of printing them.
#[derive(Debug, Default)]
pub struct CapturedSink {
    pub errors: Vec<String>,
    pub continuations: Vec<String>,
}

impl DiagnosticSink for CapturedSink {
    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn error_cont(&mut self, msg: &str) {
        self.continuations.push(msg.to_string());
    }
}
