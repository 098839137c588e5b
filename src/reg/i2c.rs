//! Inter-integrated circuit interface.

use vcell::VolatileCell;

#[repr(C)]
pub struct RegisterBlock {
    /// Control register 1.
    pub cr1: VolatileCell<u32>,
    /// Control register 2.
    pub cr2: VolatileCell<u32>,
    /// Own address register 1.
    pub oar1: VolatileCell<u32>,
    /// Own address register 2.
    pub oar2: VolatileCell<u32>,
    /// Timing register.
    pub timingr: VolatileCell<u32>,
    /// Timeout register.
    pub timeoutr: VolatileCell<u32>,
    /// Interrupt and status register.
    pub isr: VolatileCell<u32>,
    /// Interrupt clear register.
    pub icr: VolatileCell<u32>,
    /// PEC register.
    pub pecr: VolatileCell<u32>,
    /// Receive data register.
    pub rxdr: VolatileCell<u32>,
    /// Transmit data register.
    pub txdr: VolatileCell<u32>,
}
