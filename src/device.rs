//! RCG device

use embedded_hal::blocking::delay::DelayUs;

use crate::constants::*;
use crate::errors::*;
use crate::freq::*;
use crate::provider::*;
use crate::regmap::RegisterAccess;

/// Static description of one RCG instance, fixed per hardware variant.
pub struct Rcg2Config<'a> {
    /// Clock name, used in diagnostics
    pub name: &'a str,
    /// Byte offset of the RCG register block within the register map
    pub cmd_rcgr: u32,
    /// M/N/D counter width, bits. 0 for RCGs without M/N counters.
    pub mnd_width: u8,
    /// Pre-divider field width, bits
    pub hid_width: u8,
    /// Logical parent index to hardware select-field encoding.
    /// `FreqEntry::src` values in `freq_tbl` must index into this map.
    pub parent_map: &'a [u8],
    /// Frequency table, ascending, sentinel-terminated
    pub freq_tbl: &'a [FreqEntry],
    /// Rate changes may propagate a rate request to the parent
    pub set_rate_parent: bool,
}

/// RCG device
pub struct Rcg2<'a, R, D> {
    regmap: R,
    delay: D,
    cfg: Rcg2Config<'a>,
}

impl<'a, R, D> Rcg2<'a, R, D>
where
    R: RegisterAccess,
    D: DelayUs<u16>,
{
    /// Creates the device around a register-access backend and a delay
    /// provider. No hardware access happens until an operation is invoked.
    pub fn new(regmap: R, delay: D, cfg: Rcg2Config<'a>) -> Self {
        Rcg2 { regmap, delay, cfg }
    }

    /// Releases the register-access backend and delay provider.
    pub fn release(self: Self) -> (R, D) {
        (self.regmap, self.delay)
    }

    #[inline]
    fn read(self: &mut Self, reg: u32) -> Result<u32, Error> {
        self.regmap
            .read(self.cfg.cmd_rcgr + reg)
            .map_err(|_| Error::Regmap)
    }

    #[inline]
    fn update_bits(self: &mut Self, reg: u32, mask: u32, value: u32) -> Result<(), Error> {
        self.regmap
            .update_bits(self.cfg.cmd_rcgr + reg, mask, value)
            .map_err(|_| Error::Regmap)
    }

    /// Triggers the update latch and waits for hardware to acknowledge.
    ///
    /// The staged CFG/M/N/D values only become the active configuration
    /// once the update bit self-clears. A poll-bound overrun is logged and
    /// reported as success: the block may still latch late, and there is
    /// no safe rollback at this layer.
    fn update_config(self: &mut Self) -> Result<(), Error> {
        self.update_bits(CMD_REG, CMD_UPDATE, CMD_UPDATE)?;

        // Wait for update to take effect
        for _ in 0..UPDATE_RETRIES {
            let cmd = self.read(CMD_REG)?;
            if cmd & CMD_UPDATE == 0 {
                return Ok(());
            }
            self.delay.delay_us(UPDATE_POLL_DELAY_US);
        }

        log::warn!("{}: rcg didn't update its configuration", self.cfg.name);
        Ok(())
    }

    /// Stages a frequency-table entry into the M/N/D and CFG registers,
    /// then commits. Any register failure aborts the sequence, leaving
    /// hardware as last written.
    fn program_rate(self: &mut Self, f: FreqEntry) -> Result<(), Error> {
        if self.cfg.mnd_width != 0 && f.n != 0 {
            let mask = (1u32 << self.cfg.mnd_width) - 1;
            self.update_bits(M_REG, mask, f.m as u32)?;
            self.update_bits(N_REG, mask, !(f.n as u32 - f.m as u32))?;
            self.update_bits(D_REG, mask, !(f.n as u32))?;
        }

        let mut mask = (1u32 << self.cfg.hid_width) - 1;
        mask |= CFG_SRC_SEL_MASK | CFG_MODE_MASK;

        let mut cfg = (f.pre_div as u32) << CFG_SRC_DIV_SHIFT;
        cfg |= (self.cfg.parent_map[f.src as usize] as u32) << CFG_SRC_SEL_SHIFT;
        if self.cfg.mnd_width != 0 && f.n != 0 {
            cfg |= CFG_MODE_DUAL_EDGE;
        }
        self.update_bits(CFG_REG, mask, cfg)?;

        self.update_config()
    }

    fn set_rate_from_table(self: &mut Self, rate: u64) -> Result<(), Error> {
        let f = *find_freq(self.cfg.freq_tbl, rate).ok_or(Error::NoMatchingFrequency)?;
        self.program_rate(f)
    }
}

impl<'a, R, D> ClockOps for Rcg2<'a, R, D>
where
    R: RegisterAccess,
    D: DelayUs<u16>,
{
    fn is_enabled(&mut self) -> Result<bool, Error> {
        let cmd = self.read(CMD_REG)?;
        Ok(cmd & CMD_ROOT_OFF == 0)
    }

    fn get_parent(&mut self) -> Result<usize, Error> {
        let cfg = self.read(CFG_REG)?;
        let sel = (cfg & CFG_SRC_SEL_MASK) >> CFG_SRC_SEL_SHIFT;

        self.cfg
            .parent_map
            .iter()
            .position(|&m| m as u32 == sel)
            .ok_or(Error::NoMatchingParent)
    }

    fn set_parent(&mut self, index: usize) -> Result<(), Error> {
        let sel = *self
            .cfg
            .parent_map
            .get(index)
            .ok_or(Error::NoMatchingParent)?;

        self.update_bits(
            CFG_REG,
            CFG_SRC_SEL_MASK,
            (sel as u32) << CFG_SRC_SEL_SHIFT,
        )?;

        self.update_config()
    }

    fn recalc_rate(&mut self, parent_rate: u64) -> Result<u64, Error> {
        let cfg = self.read(CFG_REG)?;

        let mut m = 0;
        let mut n = 0;
        let mut mode = 0;
        if self.cfg.mnd_width != 0 {
            let mask = (1u32 << self.cfg.mnd_width) - 1;
            m = self.read(M_REG)? & mask;
            n = (!self.read(N_REG)?) & mask;
            n += m;
            mode = (cfg & CFG_MODE_MASK) >> CFG_MODE_SHIFT;
        }

        let mask = (1u32 << self.cfg.hid_width) - 1;
        let hid_div = (cfg >> CFG_SRC_DIV_SHIFT) & mask;

        Ok(calc_rate(parent_rate, m, n, mode != 0, hid_div))
    }

    fn determine_rate(&mut self, rate: u64, parents: &dyn ParentRate) -> Result<RateRequest, Error> {
        let f = *find_freq(self.cfg.freq_tbl, rate).ok_or(Error::NoMatchingFrequency)?;
        let parent_index = f.src as usize;

        let parent_rate = if self.cfg.set_rate_parent {
            // Invert the divider chain to find the rate this entry
            // needs from its parent.
            let mut r = rate;
            if f.pre_div != 0 {
                r /= 2;
                r *= f.pre_div as u64 + 1;
            }
            if f.n != 0 {
                r = (r as u128 * f.n as u128 / f.m as u128) as u64;
            }
            r
        } else {
            parents.rate(parent_index)
        };

        Ok(RateRequest {
            rate: f.freq,
            parent_index,
            parent_rate,
        })
    }

    fn set_rate(&mut self, rate: u64, _parent_rate: u64) -> Result<(), Error> {
        self.set_rate_from_table(rate)
    }

    fn set_rate_and_parent(
        &mut self,
        rate: u64,
        _parent_rate: u64,
        _index: usize,
    ) -> Result<(), Error> {
        // The parent switch rides along in the same CFG write and update
        // latch; the table entry already names its source.
        self.set_rate_from_table(rate)
    }
}
