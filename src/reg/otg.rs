//! USB on-the-go controller, global register section.
//!
//! The same IP serves both the full-speed and the high-speed instances; only
//! the base address differs.

use vcell::VolatileCell;

#[repr(C)]
pub struct RegisterBlock {
    /// Control and status register.
    pub gotgctl: VolatileCell<u32>,
    /// Interrupt register.
    pub gotgint: VolatileCell<u32>,
    /// AHB configuration register.
    pub gahbcfg: VolatileCell<u32>,
    /// USB configuration register.
    pub gusbcfg: VolatileCell<u32>,
    /// Reset register.
    pub grstctl: VolatileCell<u32>,
    /// Core interrupt register.
    pub gintsts: VolatileCell<u32>,
    /// Interrupt mask register.
    pub gintmsk: VolatileCell<u32>,
    /// Receive status debug read register.
    pub grxstsr: VolatileCell<u32>,
    /// Receive status read and pop register.
    pub grxstsp: VolatileCell<u32>,
    /// Receive FIFO size register.
    pub grxfsiz: VolatileCell<u32>,
    /// Non-periodic transmit FIFO size register.
    pub gnptxfsiz: VolatileCell<u32>,
    /// Non-periodic transmit FIFO/queue status register.
    pub gnptxsts: VolatileCell<u32>,
}
