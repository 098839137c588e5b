//! Extended interrupt and event controller.

use vcell::VolatileCell;

#[repr(C)]
pub struct RegisterBlock {
    /// Interrupt mask register.
    pub imr: VolatileCell<u32>,
    /// Event mask register.
    pub emr: VolatileCell<u32>,
    /// Rising trigger selection register.
    pub rtsr: VolatileCell<u32>,
    /// Falling trigger selection register.
    pub ftsr: VolatileCell<u32>,
    /// Software interrupt event register.
    pub swier: VolatileCell<u32>,
    /// Pending register.
    pub pr: VolatileCell<u32>,
}
