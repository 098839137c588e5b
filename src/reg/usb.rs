//! USB full-speed device controller.

use vcell::VolatileCell;

#[repr(C)]
pub struct RegisterBlock {
    /// Endpoint registers.
    pub epr: [VolatileCell<u32>; 8],
    _reserved0: [u32; 8],
    /// Control register.
    pub cntr: VolatileCell<u32>,
    /// Interrupt status register.
    pub istr: VolatileCell<u32>,
    /// Frame number register.
    pub fnr: VolatileCell<u32>,
    /// Device address register.
    pub daddr: VolatileCell<u32>,
    /// Buffer table address register.
    pub btable: VolatileCell<u32>,
}
