//! Register layout constants
//!
//! Offsets are relative to the RCG register block base (`cmd_rcgr`).
//! These are fixed hardware constants and must stay bit-exact.

/// Command register offset
pub const CMD_REG: u32 = 0x0;

/// Writing 1 latches the staged CFG/M/N/D values into the active
/// configuration; hardware acknowledges by clearing the bit.
pub const CMD_UPDATE: u32 = 1 << 0;

/// Root clock is gated off when set.
pub const CMD_ROOT_OFF: u32 = 1 << 31;

/// Configuration register offset
pub const CFG_REG: u32 = 0x4;

/// Source (pre-)divider field position; field width is per-device
/// (`hid_width`).
pub const CFG_SRC_DIV_SHIFT: u32 = 0;

/// Parent source select field
pub const CFG_SRC_SEL_SHIFT: u32 = 8;
pub const CFG_SRC_SEL_MASK: u32 = 0x7 << CFG_SRC_SEL_SHIFT;

/// M/N counter mode field. Dual-edge is the only fractional mode the
/// driver programs; mode 0 bypasses the M/N stage.
pub const CFG_MODE_SHIFT: u32 = 12;
pub const CFG_MODE_MASK: u32 = 0x3 << CFG_MODE_SHIFT;
pub const CFG_MODE_DUAL_EDGE: u32 = 0x2 << CFG_MODE_SHIFT;

/// M counter register offset
pub const M_REG: u32 = 0x8;

/// N counter register offset (programmed as `!(n - m)`)
pub const N_REG: u32 = 0xc;

/// D counter register offset (programmed as `!n`)
pub const D_REG: u32 = 0x10;

/// Update-latch poll bound. Hardware-characterized worst case commit
/// latency; exceeding it is logged, not fatal.
pub const UPDATE_RETRIES: u32 = 500;

/// Delay between update-latch polls, microseconds
pub const UPDATE_POLL_DELAY_US: u16 = 1;
