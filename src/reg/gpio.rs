//! General-purpose I/O port.

use vcell::VolatileCell;

#[repr(C)]
pub struct RegisterBlock {
    /// Mode register.
    pub moder: VolatileCell<u32>,
    /// Output type register.
    pub otyper: VolatileCell<u32>,
    /// Output speed register.
    pub ospeedr: VolatileCell<u32>,
    /// Pull-up/pull-down register.
    pub pupdr: VolatileCell<u32>,
    /// Input data register.
    pub idr: VolatileCell<u32>,
    /// Output data register.
    pub odr: VolatileCell<u32>,
    /// Bit set/reset register.
    pub bsrr: VolatileCell<u32>,
    /// Configuration lock register.
    pub lckr: VolatileCell<u32>,
    /// Alternate function low register.
    pub afrl: VolatileCell<u32>,
    /// Alternate function high register.
    pub afrh: VolatileCell<u32>,
    /// Bit reset register.
    pub brr: VolatileCell<u32>,
}
