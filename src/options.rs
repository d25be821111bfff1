//! Dissection option interpretation and application
//!
//! [`DissectOptions`] accumulates the dissection configuration for one
//! run. The caller tokenizes its command line and feeds each recognized
//! `(option, argument)` pair to [`handle_opt`]; once flag parsing is
//! done it calls [`apply_protocol_config`] exactly once to push the
//! accumulated protocol toggles into the registry.
//!
//! [`handle_opt`]: DissectOptions::handle_opt
//! [`apply_protocol_config`]: DissectOptions::apply_protocol_config

use tracing::debug;

use crate::diag::{report, DiagnosticSink};
use crate::engine::{DissectionEngine, ProtocolRegistry};
use crate::errors::{DissectError, HeuristicAction};
use crate::resolve::ResolvFlags;
use crate::timestamp::{parse_time_arg, SecondsFormat, TimeFormat, TimePrecision};

/// The dissection options, shared with the caller's flag-dispatch table.
///
/// This enumeration is closed: an option this unit does not handle
/// cannot be dispatched to it at all. [`from_short`] and [`from_long`]
/// map the command-line spellings; both return `None` for spellings
/// outside the table, which is the caller's problem to report.
///
/// [`from_short`]: DissectOpt::from_short
/// [`from_long`]: DissectOpt::from_long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DissectOpt {
    /// `-d`: install a decode-as override rule
    DecodeAs,
    /// `-K`: load a Kerberos keytab file
    Keytab,
    /// `-n`: disable all name resolution
    NoNameResolution,
    /// `-N`: select which address/port classes to resolve
    ResolutionFlags,
    /// `-t`: timestamp type and precision
    TimeFormat,
    /// `-u`: seconds display type
    SecondsFormat,
    /// `--disable-protocol`: disable dissection of a protocol
    DisableProtocol,
    /// `--enable-protocol`: enable a protocol disabled by default
    EnableProtocol,
    /// `--enable-heuristic`: enable a heuristic sub-dissector
    EnableHeuristic,
    /// `--disable-heuristic`: disable a heuristic sub-dissector
    DisableHeuristic,
}

impl DissectOpt {
    /// Map a short option character from the dispatch table.
    pub fn from_short(c: char) -> Option<Self> {
        match c {
            'd' => Some(DissectOpt::DecodeAs),
            'K' => Some(DissectOpt::Keytab),
            'n' => Some(DissectOpt::NoNameResolution),
            'N' => Some(DissectOpt::ResolutionFlags),
            't' => Some(DissectOpt::TimeFormat),
            'u' => Some(DissectOpt::SecondsFormat),
            _ => None,
        }
    }

    /// Map a long option name (without leading dashes) from the
    /// dispatch table.
    pub fn from_long(name: &str) -> Option<Self> {
        match name {
            "disable-protocol" => Some(DissectOpt::DisableProtocol),
            "enable-protocol" => Some(DissectOpt::EnableProtocol),
            "enable-heuristic" => Some(DissectOpt::EnableHeuristic),
            "disable-heuristic" => Some(DissectOpt::DisableHeuristic),
            _ => None,
        }
    }
}

/// Accumulated dissection configuration for one run.
///
/// Constructed once at startup, mutated only through [`handle_opt`]
/// while the caller walks its flags, then read-only for the application
/// pass. The name lists keep command-line order and duplicates; the
/// registry is the place where duplicates collapse, not this record.
///
/// [`handle_opt`]: DissectOptions::handle_opt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DissectOptions {
    /// Timestamp display format; last occurrence on the line wins.
    pub time_format: TimeFormat,
    /// Timestamp display precision; last occurrence on the line wins.
    pub time_precision: TimePrecision,
    /// Protocols to disable, in command-line order.
    pub disable_protocols: Vec<String>,
    /// Protocols to enable, in command-line order.
    pub enable_protocols: Vec<String>,
    /// Heuristic sub-dissectors to enable, in command-line order.
    pub enable_heuristics: Vec<String>,
    /// Heuristic sub-dissectors to disable, in command-line order.
    pub disable_heuristics: Vec<String>,
}

impl DissectOptions {
    /// Fresh all-defaults configuration. Build one before any option
    /// processing starts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything accumulated so far and return to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Interpret one `(option, argument)` pair.
    ///
    /// Returns `false` when the argument fails validation; by then the
    /// diagnostic has already been written to `sink` and nothing has
    /// been mutated or applied for this call. The caller decides
    /// whether to keep parsing or abort.
    pub fn handle_opt(
        &mut self,
        opt: DissectOpt,
        arg: &str,
        engine: &mut impl DissectionEngine,
        sink: &mut impl DiagnosticSink,
    ) -> bool {
        match opt {
            DissectOpt::DecodeAs => engine.add_decode_as_rule(arg),
            DissectOpt::Keytab => self.handle_keytab(arg, engine, sink),
            DissectOpt::NoNameResolution => {
                engine.disable_name_resolution();
                true
            }
            DissectOpt::ResolutionFlags => match ResolvFlags::from_letters(arg) {
                Ok(flags) => {
                    engine.set_resolution_flags(flags);
                    true
                }
                Err(bad) => {
                    report(sink, &DissectError::UnknownResolvFlag(bad));
                    false
                }
            },
            DissectOpt::TimeFormat => match parse_time_arg(arg) {
                Ok(parsed) => {
                    if let Some(format) = parsed.format {
                        self.time_format = format;
                    }
                    if let Some(precision) = parsed.precision {
                        self.time_precision = precision;
                    }
                    true
                }
                Err(err) => {
                    report(sink, &err);
                    false
                }
            },
            DissectOpt::SecondsFormat => match arg {
                "s" => {
                    engine.set_seconds_format(SecondsFormat::Seconds);
                    true
                }
                "hms" => {
                    engine.set_seconds_format(SecondsFormat::HourMinSec);
                    true
                }
                _ => {
                    report(sink, &DissectError::InvalidSecondsFormat(arg.to_string()));
                    false
                }
            },
            DissectOpt::DisableProtocol => {
                self.disable_protocols.push(arg.to_string());
                true
            }
            DissectOpt::EnableProtocol => {
                self.enable_protocols.push(arg.to_string());
                true
            }
            DissectOpt::EnableHeuristic => {
                self.enable_heuristics.push(arg.to_string());
                true
            }
            DissectOpt::DisableHeuristic => {
                self.disable_heuristics.push(arg.to_string());
                true
            }
        }
    }

    #[cfg(feature = "kerberos")]
    fn handle_keytab(
        &mut self,
        arg: &str,
        engine: &mut impl DissectionEngine,
        _sink: &mut impl DiagnosticSink,
    ) -> bool {
        debug!(path = arg, "loading Kerberos keytab");
        engine.load_keytab(arg);
        true
    }

    #[cfg(not(feature = "kerberos"))]
    fn handle_keytab(
        &mut self,
        _arg: &str,
        _engine: &mut impl DissectionEngine,
        sink: &mut impl DiagnosticSink,
    ) -> bool {
        report(sink, &DissectError::KeytabUnsupported);
        false
    }

    /// Push the accumulated protocol lists into the registry.
    ///
    /// Runs once, after all options are in. Plain protocol toggles
    /// never report failure here; heuristic toggles collect a per-name
    /// diagnostic and keep going. Returns `true` only if every
    /// heuristic name resolved. Nothing rolls back on failure.
    pub fn apply_protocol_config(
        &self,
        registry: &mut impl ProtocolRegistry,
        sink: &mut impl DiagnosticSink,
    ) -> bool {
        debug!(
            disable = self.disable_protocols.len(),
            enable = self.enable_protocols.len(),
            enable_heuristic = self.enable_heuristics.len(),
            disable_heuristic = self.disable_heuristics.len(),
            "applying protocol configuration"
        );

        let mut success = true;

        for name in &self.disable_protocols {
            registry.disable_protocol(name);
        }

        for name in &self.enable_protocols {
            registry.enable_protocol(name);
        }

        for name in &self.enable_heuristics {
            if !registry.set_heuristic_enabled(name, true) {
                report(
                    sink,
                    &DissectError::UnknownHeuristic {
                        name: name.clone(),
                        action: HeuristicAction::Enable,
                    },
                );
                success = false;
            }
        }

        for name in &self.disable_heuristics {
            if !registry.set_heuristic_enabled(name, false) {
                report(
                    sink,
                    &DissectError::UnknownHeuristic {
                        name: name.clone(),
                        action: HeuristicAction::Disable,
                    },
                );
                success = false;
            }
        }

        success
    }
}
