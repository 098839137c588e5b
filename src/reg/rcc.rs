//! Reset and clock control.

use vcell::VolatileCell;

#[repr(C)]
pub struct RegisterBlock {
    /// Clock control register.
    pub cr: VolatileCell<u32>,
    /// Clock configuration register.
    pub cfgr: VolatileCell<u32>,
    /// PLL configuration register.
    pub pllcfgr: VolatileCell<u32>,
    /// Clock interrupt enable register.
    pub cier: VolatileCell<u32>,
    /// Clock interrupt flag register.
    pub cifr: VolatileCell<u32>,
    /// Clock interrupt clear register.
    pub cicr: VolatileCell<u32>,
    /// AHB peripheral clock enable register.
    pub ahbenr: VolatileCell<u32>,
    /// APB1 peripheral clock enable register.
    pub apb1enr: VolatileCell<u32>,
    /// APB2 peripheral clock enable register.
    pub apb2enr: VolatileCell<u32>,
    /// Backup domain control register.
    pub bdcr: VolatileCell<u32>,
    /// Control and status register.
    pub csr: VolatileCell<u32>,
}
