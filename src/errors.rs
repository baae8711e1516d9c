//! Driver errors

/// RCG driver error
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Register access (bus/transport) failure. Aborts whatever
    /// multi-register sequence was in progress; hardware is left as
    /// last successfully written.
    Regmap,
    /// Requested rate exceeds every entry in the frequency table.
    NoMatchingFrequency,
    /// The hardware select field does not map to any known parent.
    NoMatchingParent,
}
