//! General-purpose timer.

use vcell::VolatileCell;

#[repr(C)]
pub struct RegisterBlock {
    /// Control register 1.
    pub cr1: VolatileCell<u32>,
    /// Control register 2.
    pub cr2: VolatileCell<u32>,
    /// Slave mode control register.
    pub smcr: VolatileCell<u32>,
    /// DMA and interrupt enable register.
    pub dier: VolatileCell<u32>,
    /// Status register.
    pub sr: VolatileCell<u32>,
    /// Event generation register.
    pub egr: VolatileCell<u32>,
    /// Capture/compare mode register 1.
    pub ccmr1: VolatileCell<u32>,
    /// Capture/compare mode register 2.
    pub ccmr2: VolatileCell<u32>,
    /// Capture/compare enable register.
    pub ccer: VolatileCell<u32>,
    /// Counter.
    pub cnt: VolatileCell<u32>,
    /// Prescaler.
    pub psc: VolatileCell<u32>,
    /// Auto-reload register.
    pub arr: VolatileCell<u32>,
    _reserved0: u32,
    /// Capture/compare register 1.
    pub ccr1: VolatileCell<u32>,
    /// Capture/compare register 2.
    pub ccr2: VolatileCell<u32>,
    /// Capture/compare register 3.
    pub ccr3: VolatileCell<u32>,
    /// Capture/compare register 4.
    pub ccr4: VolatileCell<u32>,
}
