//! Timestamp display selection
//!
//! Parses the compound `type[.precision]` argument of the timestamp
//! option into strongly-typed display settings. The argument is sliced,
//! never mutated, and error messages echo it back verbatim.

use crate::errors::DissectError;

/// How packet timestamps are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeFormat {
    /// No explicit choice made on the command line.
    #[default]
    NotSet,
    /// Relative to the first packet.
    Relative,
    /// Absolute wall-clock time of day.
    Absolute,
    /// Absolute with YYYY-MM-DD date.
    AbsoluteYmd,
    /// Absolute with YYYY/DOY date.
    AbsoluteYdoy,
    /// Delta from the previous captured packet.
    Delta,
    /// Delta from the previous displayed packet.
    DeltaDisplayed,
    /// Seconds since the UNIX epoch.
    Epoch,
    /// Absolute UTC time of day.
    Utc,
    /// Absolute UTC with YYYY-MM-DD date.
    UtcYmd,
    /// Absolute UTC with YYYY/DOY date.
    UtcYdoy,
}

/// Digits shown after the decimal point of a timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimePrecision {
    /// No explicit choice made on the command line.
    #[default]
    NotSet,
    /// Whatever precision the capture file carries.
    Auto,
    /// Whole seconds.
    Sec,
    /// Tenths of a second.
    Dsec,
    /// Hundredths of a second.
    Csec,
    /// Milliseconds.
    Msec,
    /// Microseconds.
    Usec,
    /// Nanoseconds.
    Nsec,
}

/// How the seconds portion of a timestamp is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondsFormat {
    /// Plain seconds.
    Seconds,
    /// Hours, minutes and seconds.
    HourMinSec,
}

/// Outcome of parsing a timestamp argument.
///
/// A `None` field was not addressed by the argument and must be left at
/// its previous value; `.N` forms address only the precision, bare type
/// tokens address only the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeArg {
    pub format: Option<TimeFormat>,
    pub precision: Option<TimePrecision>,
}

/// Parse a `type[.precision]` timestamp argument.
///
/// The suffix is validated first: a dot followed by anything other than
/// nothing or a single digit from `0 1 2 3 6 9` invalidates the whole
/// argument, and the type part is never examined.
pub fn parse_time_arg(arg: &str) -> Result<TimeArg, DissectError> {
    let (type_part, precision) = match arg.find('.') {
        None => (arg, None),
        Some(dot) => {
            let precision = match &arg[dot + 1..] {
                "" => TimePrecision::Auto,
                "0" => TimePrecision::Sec,
                "1" => TimePrecision::Dsec,
                "2" => TimePrecision::Csec,
                "3" => TimePrecision::Msec,
                "6" => TimePrecision::Usec,
                "9" => TimePrecision::Nsec,
                _ => return Err(DissectError::InvalidTimePrecision(arg.to_string())),
            };
            (&arg[..dot], Some(precision))
        }
    };

    // A bare "." or ".N" sets only the precision and leaves the format
    // alone. An entirely empty argument is an invalid type.
    let format = if type_part.is_empty() && precision.is_some() {
        None
    } else {
        Some(match type_part {
            "r" => TimeFormat::Relative,
            "a" => TimeFormat::Absolute,
            "ad" => TimeFormat::AbsoluteYmd,
            "adoy" => TimeFormat::AbsoluteYdoy,
            "d" => TimeFormat::Delta,
            "dd" => TimeFormat::DeltaDisplayed,
            "e" => TimeFormat::Epoch,
            "u" => TimeFormat::Utc,
            "ud" => TimeFormat::UtcYmd,
            "udoy" => TimeFormat::UtcYdoy,
            _ => return Err(DissectError::InvalidTimeFormat(arg.to_string())),
        })
    };

    Ok(TimeArg { format, precision })
}
