//! Per-core window of the reset and clock control block.
//!
//! Dual-core parts expose one of these windows per core so each core can
//! manage its own clock enables and read its own reset cause.

use vcell::VolatileCell;

#[repr(C)]
pub struct RegisterBlock {
    /// Reset status register.
    pub rsr: VolatileCell<u32>,
    /// AHB1 peripheral clock enable register.
    pub ahb1enr: VolatileCell<u32>,
    /// AHB2 peripheral clock enable register.
    pub ahb2enr: VolatileCell<u32>,
    /// AHB3 peripheral clock enable register.
    pub ahb3enr: VolatileCell<u32>,
    /// AHB4 peripheral clock enable register.
    pub ahb4enr: VolatileCell<u32>,
    /// APB1 peripheral clock enable register, low word.
    pub apb1lenr: VolatileCell<u32>,
    /// APB1 peripheral clock enable register, high word.
    pub apb1henr: VolatileCell<u32>,
    /// APB2 peripheral clock enable register.
    pub apb2enr: VolatileCell<u32>,
    /// APB3 peripheral clock enable register.
    pub apb3enr: VolatileCell<u32>,
    /// APB4 peripheral clock enable register.
    pub apb4enr: VolatileCell<u32>,
}
