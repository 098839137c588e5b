//! Serial peripheral interface.

use vcell::VolatileCell;

#[repr(C)]
pub struct RegisterBlock {
    /// Control register 1.
    pub cr1: VolatileCell<u32>,
    /// Control register 2.
    pub cr2: VolatileCell<u32>,
    /// Status register.
    pub sr: VolatileCell<u32>,
    /// Data register.
    pub dr: VolatileCell<u32>,
    /// CRC polynomial register.
    pub crcpr: VolatileCell<u32>,
    /// Receive CRC register.
    pub rxcrcr: VolatileCell<u32>,
    /// Transmit CRC register.
    pub txcrcr: VolatileCell<u32>,
}
