//! High-resolution timer.
//!
//! The subsystem is a row of fixed-size blocks: the master timer at the base,
//! the timing units A..E at 0x80-byte strides behind it, and the common
//! section at 0x380. Each sub-unit is registered under its own name.

use vcell::VolatileCell;

/// Master timer block, 0x80 bytes.
#[repr(C)]
pub struct Master {
    /// Control register.
    pub mcr: VolatileCell<u32>,
    /// Interrupt status register.
    pub misr: VolatileCell<u32>,
    /// Interrupt clear register.
    pub micr: VolatileCell<u32>,
    /// DMA and interrupt enable register.
    pub mdier: VolatileCell<u32>,
    /// Counter register.
    pub mcntr: VolatileCell<u32>,
    /// Period register.
    pub mper: VolatileCell<u32>,
    /// Repetition register.
    pub mrep: VolatileCell<u32>,
    /// Compare 1 register.
    pub mcmp1r: VolatileCell<u32>,
    _reserved0: u32,
    /// Compare 2 register.
    pub mcmp2r: VolatileCell<u32>,
    /// Compare 3 register.
    pub mcmp3r: VolatileCell<u32>,
    /// Compare 4 register.
    pub mcmp4r: VolatileCell<u32>,
    _reserved1: [u32; 20],
}

/// Timing unit block, 0x80 bytes, one per unit A..E.
#[repr(C)]
pub struct Timer {
    /// Control register.
    pub cr: VolatileCell<u32>,
    /// Interrupt status register.
    pub isr: VolatileCell<u32>,
    /// Interrupt clear register.
    pub icr: VolatileCell<u32>,
    /// DMA and interrupt enable register.
    pub dier: VolatileCell<u32>,
    /// Counter register.
    pub cntr: VolatileCell<u32>,
    /// Period register.
    pub perr: VolatileCell<u32>,
    /// Repetition register.
    pub repr: VolatileCell<u32>,
    /// Compare 1 register.
    pub cmp1r: VolatileCell<u32>,
    /// Compare 1 compound register.
    pub cmp1cr: VolatileCell<u32>,
    /// Compare 2 register.
    pub cmp2r: VolatileCell<u32>,
    /// Compare 3 register.
    pub cmp3r: VolatileCell<u32>,
    /// Compare 4 register.
    pub cmp4r: VolatileCell<u32>,
    /// Capture 1 register.
    pub cpt1r: VolatileCell<u32>,
    /// Capture 2 register.
    pub cpt2r: VolatileCell<u32>,
    /// Deadtime register.
    pub dtr: VolatileCell<u32>,
    /// Output 1 set register.
    pub set1r: VolatileCell<u32>,
    /// Output 1 reset register.
    pub rst1r: VolatileCell<u32>,
    /// Output 2 set register.
    pub set2r: VolatileCell<u32>,
    /// Output 2 reset register.
    pub rst2r: VolatileCell<u32>,
    /// External event filtering register 1.
    pub eefr1: VolatileCell<u32>,
    /// External event filtering register 2.
    pub eefr2: VolatileCell<u32>,
    /// Counter reset register.
    pub rstr: VolatileCell<u32>,
    /// Chopper register.
    pub chpr: VolatileCell<u32>,
    /// Capture 1 control register.
    pub cpt1cr: VolatileCell<u32>,
    /// Capture 2 control register.
    pub cpt2cr: VolatileCell<u32>,
    /// Output register.
    pub outr: VolatileCell<u32>,
    /// Fault register.
    pub fltr: VolatileCell<u32>,
    _reserved0: [u32; 5],
}

/// Common section.
#[repr(C)]
pub struct Common {
    /// Control register 1.
    pub cr1: VolatileCell<u32>,
    /// Control register 2.
    pub cr2: VolatileCell<u32>,
    /// Interrupt status register.
    pub isr: VolatileCell<u32>,
    /// Interrupt clear register.
    pub icr: VolatileCell<u32>,
    /// Interrupt enable register.
    pub ier: VolatileCell<u32>,
    /// Output enable register.
    pub oenr: VolatileCell<u32>,
    /// Output disable register.
    pub odisr: VolatileCell<u32>,
    /// Output disable status register.
    pub odsr: VolatileCell<u32>,
    /// Burst mode control register.
    pub bmcr: VolatileCell<u32>,
    /// Burst mode trigger register.
    pub bmtrgr: VolatileCell<u32>,
    /// Burst mode compare register.
    pub bmcmpr: VolatileCell<u32>,
    /// Burst mode period register.
    pub bmper: VolatileCell<u32>,
}
