//! Universal synchronous/asynchronous receiver transmitter.

use vcell::VolatileCell;

#[repr(C)]
pub struct RegisterBlock {
    /// Control register 1.
    pub cr1: VolatileCell<u32>,
    /// Control register 2.
    pub cr2: VolatileCell<u32>,
    /// Control register 3.
    pub cr3: VolatileCell<u32>,
    /// Baud rate register.
    pub brr: VolatileCell<u32>,
    /// Guard time and prescaler register.
    pub gtpr: VolatileCell<u32>,
    /// Receiver timeout register.
    pub rtor: VolatileCell<u32>,
    /// Request register.
    pub rqr: VolatileCell<u32>,
    /// Interrupt and status register.
    pub isr: VolatileCell<u32>,
    /// Interrupt flag clear register.
    pub icr: VolatileCell<u32>,
    /// Receive data register.
    pub rdr: VolatileCell<u32>,
    /// Transmit data register.
    pub tdr: VolatileCell<u32>,
}
