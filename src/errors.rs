//! Error types for dissection option handling

use std::fmt;

use thiserror::Error;

/// Valid `-t` type tokens, attached to [`DissectError::InvalidTimeFormat`].
const TIME_FORMAT_DETAIL: &str = "\t\"a\"    for absolute\n\
\t\"ad\"   for absolute with YYYY-MM-DD date\n\
\t\"adoy\" for absolute with YYYY/DOY date\n\
\t\"d\"    for delta\n\
\t\"dd\"   for delta displayed\n\
\t\"e\"    for epoch\n\
\t\"r\"    for relative\n\
\t\"u\"    for absolute UTC\n\
\t\"ud\"   for absolute UTC with YYYY-MM-DD date\n\
\t\"udoy\" for absolute UTC with YYYY/DOY date";

/// Valid `-u` tokens, attached to [`DissectError::InvalidSecondsFormat`].
const SECONDS_FORMAT_DETAIL: &str = "\t\"s\"   for seconds\n\
\t\"hms\" for hours, minutes and seconds";

/// Valid `-N` letters, attached to [`DissectError::UnknownResolvFlag`].
const RESOLV_FLAG_DETAIL: &str = "\t'd' to enable address resolution from captured DNS packets\n\
\t'm' to enable MAC address resolution\n\
\t'n' to enable network address resolution\n\
\t'N' to enable using external resolvers (e.g., DNS)\n\
\t    for network address resolution\n\
\t't' to enable transport-layer port number resolution\n\
\t'v' to enable VLAN IDs to names resolution";

/// Whether a heuristic toggle was trying to enable or disable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicAction {
    Enable,
    Disable,
}

impl fmt::Display for HeuristicAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicAction::Enable => write!(f, "enable"),
            HeuristicAction::Disable => write!(f, "disable"),
        }
    }
}

/// Validation failures produced while interpreting dissection options.
///
/// Display output is the first line of the user-facing diagnostic; where
/// the valid vocabulary is small enough to enumerate, [`detail`] carries
/// the continuation lines listing it.
///
/// [`detail`]: DissectError::detail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DissectError {
    /// The `.N` precision suffix of a `-t` argument was not a single
    /// digit from the fixed set. Carries the whole argument, not just
    /// the suffix.
    #[error("Invalid .N time stamp precision \"{0}\"; N must be 0, 1, 2, 3, 6, 9 or absent")]
    InvalidTimePrecision(String),

    /// The type part of a `-t` argument was outside the vocabulary.
    #[error("Invalid time stamp type \"{0}\"; it must be one of:")]
    InvalidTimeFormat(String),

    /// A `-u` argument other than `s` or `hms`.
    #[error("Invalid seconds type \"{0}\"; it must be one of:")]
    InvalidSecondsFormat(String),

    /// First letter of a `-N` argument outside the resolution-flag set.
    #[error("-N specifies unknown resolving option '{0}'; valid options are:")]
    UnknownResolvFlag(char),

    /// `-K` given but this build has no Kerberos support.
    #[error("-K specified, but Kerberos keytab file support isn't present")]
    KeytabUnsupported,

    /// The registry has no heuristic dissector with this name.
    #[error("No such protocol {name}, can't {action}")]
    UnknownHeuristic {
        name: String,
        action: HeuristicAction,
    },
}

impl DissectError {
    /// Multi-line continuation detail for the diagnostic, where one
    /// exists.
    pub fn detail(&self) -> Option<&'static str> {
        match self {
            DissectError::InvalidTimeFormat(_) => Some(TIME_FORMAT_DETAIL),
            DissectError::InvalidSecondsFormat(_) => Some(SECONDS_FORMAT_DETAIL),
            DissectError::UnknownResolvFlag(_) => Some(RESOLV_FLAG_DETAIL),
            _ => None,
        }
    }
}
