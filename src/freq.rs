//! Frequency table and rate calculations

/// One row of a per-variant frequency table.
///
/// Tables are static hardware-characterization data: rows are ordered by
/// strictly increasing `freq`, optionally terminated by a `freq == 0`
/// sentinel row (never selectable). A row requests fractional (dual-edge)
/// M/N scaling iff `n` is nonzero, in which case `m < n` must hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FreqEntry {
    /// Nominal output frequency, Hz
    pub freq: u64,
    /// Logical parent source index (key into the parent map)
    pub src: u8,
    /// Pre-divider value as encoded in hardware: output of the divider
    /// stage is `parent * 2 / (pre_div + 1)`
    pub pre_div: u8,
    /// M counter value
    pub m: u16,
    /// N counter value (0 disables the M/N stage for this row)
    pub n: u16,
}

impl FreqEntry {
    pub const fn new(freq: u64, src: u8, pre_div: u8, m: u16, n: u16) -> Self {
        FreqEntry { freq, src, pre_div, m, n }
    }
}

/// Finds the slowest table entry that can satisfy `rate`.
///
/// The table is scanned in ascending-frequency order; the first row with
/// `freq >= rate` wins. Returns `None` when the request exceeds every row
/// or the table is empty. The sentinel row terminates the scan.
pub fn find_freq(table: &[FreqEntry], rate: u64) -> Option<&FreqEntry> {
    table
        .iter()
        .take_while(|f| f.freq != 0)
        .find(|f| rate <= f.freq)
}

/// Output rate implied by a divider configuration.
///
/// ```text
///          parent_rate     m
///   rate = ----------- x  ---
///            hid_div       n
/// ```
///
/// `hid_div` is the raw register encoding (divide ratio `(hid_div + 1) / 2`);
/// the M/N stage applies only in dual-edge mode. The multiply-then-divide
/// step goes through a widened intermediate so large parent rates cannot
/// overflow. Integer arithmetic throughout, truncating.
pub fn calc_rate(parent_rate: u64, m: u32, n: u32, dual_edge: bool, hid_div: u32) -> u64 {
    let mut rate = parent_rate;

    if hid_div != 0 {
        rate = rate * 2 / (hid_div as u64 + 1);
    }

    if dual_edge {
        let tmp = rate as u128 * m as u128 / n as u128;
        rate = tmp as u64;
    }

    rate
}
