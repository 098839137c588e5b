//! Peripheral base address registry for a cross-subfamily STM32 selection.
//!
//! The supported devices share the register layouts of the common peripheral
//! IPs but place the blocks at different addresses, or omit them entirely.
//! Selecting exactly one device feature (`stm32f042` .. `stm32l476`) fixes
//! the whole map at build time: every peripheral present on that device is
//! exported as a zero-sized handle whose `BASE`/`PTR` consts carry the
//! documented address, and every other name does not exist on that build.
//! Referencing a name outside the device's map is a compile error, not a
//! runtime lookup failure.
//!
//! Drivers that want a readable build failure for an unsupported peripheral
//! can use the [`require_peripheral!`] guard; its message names both the
//! peripheral and the selected device:
//!
//! ```ignore
//! stm32xx_memmap::require_peripheral!(OTG_HS);
//! // error: peripheral OTG_HS is not present on stm32f042
//! ```
//!
//! Dual-core parts alias some USB controllers at a core-dependent address;
//! those names resolve through a [`CoreAliased`] token instead of a pointer,
//! see its documentation.

#![no_std]

pub(crate) mod feature;
mod periph;
pub mod peripherals;
pub mod reg;

pub use periph::CoreAliased;
pub use peripherals::*;

/// Expands to the selected device identifier as a string literal, usable in
/// `concat!` where [`DEVICE`] is not.
#[cfg(feature = "stm32f042")]
#[macro_export]
macro_rules! device_id {
    () => {
        "stm32f042"
    };
}
/// Expands to the selected device identifier as a string literal, usable in
/// `concat!` where [`DEVICE`] is not.
#[cfg(feature = "stm32f072")]
#[macro_export]
macro_rules! device_id {
    () => {
        "stm32f072"
    };
}
/// Expands to the selected device identifier as a string literal, usable in
/// `concat!` where [`DEVICE`] is not.
#[cfg(feature = "stm32f303")]
#[macro_export]
macro_rules! device_id {
    () => {
        "stm32f303"
    };
}
/// Expands to the selected device identifier as a string literal, usable in
/// `concat!` where [`DEVICE`] is not.
#[cfg(feature = "stm32f334")]
#[macro_export]
macro_rules! device_id {
    () => {
        "stm32f334"
    };
}
/// Expands to the selected device identifier as a string literal, usable in
/// `concat!` where [`DEVICE`] is not.
#[cfg(feature = "stm32f446")]
#[macro_export]
macro_rules! device_id {
    () => {
        "stm32f446"
    };
}
/// Expands to the selected device identifier as a string literal, usable in
/// `concat!` where [`DEVICE`] is not.
#[cfg(feature = "stm32h743")]
#[macro_export]
macro_rules! device_id {
    () => {
        "stm32h743"
    };
}
/// Expands to the selected device identifier as a string literal, usable in
/// `concat!` where [`DEVICE`] is not.
#[cfg(feature = "stm32h753")]
#[macro_export]
macro_rules! device_id {
    () => {
        "stm32h753"
    };
}
/// Expands to the selected device identifier as a string literal, usable in
/// `concat!` where [`DEVICE`] is not.
#[cfg(feature = "stm32h745")]
#[macro_export]
macro_rules! device_id {
    () => {
        "stm32h745"
    };
}
/// Expands to the selected device identifier as a string literal, usable in
/// `concat!` where [`DEVICE`] is not.
#[cfg(feature = "stm32h755")]
#[macro_export]
macro_rules! device_id {
    () => {
        "stm32h755"
    };
}
/// Expands to the selected device identifier as a string literal, usable in
/// `concat!` where [`DEVICE`] is not.
#[cfg(feature = "stm32l432")]
#[macro_export]
macro_rules! device_id {
    () => {
        "stm32l432"
    };
}
/// Expands to the selected device identifier as a string literal, usable in
/// `concat!` where [`DEVICE`] is not.
#[cfg(feature = "stm32l476")]
#[macro_export]
macro_rules! device_id {
    () => {
        "stm32l476"
    };
}

/// The device identifier selected for this build.
pub const DEVICE: &str = device_id!();

/// Fails the build when the named peripheral is not present on the selected
/// device, with a message naming both.
///
/// ```ignore
/// stm32xx_memmap::require_peripheral!(OTG_HS);
/// ```
#[macro_export]
macro_rules! require_peripheral {
    ($NAME:ident) => {
        const _: () = ::core::assert!(
            $crate::present::$NAME,
            concat!(
                "peripheral ",
                stringify!($NAME),
                " is not present on ",
                $crate::device_id!()
            )
        );
    };
}

/// The subfamily of the selected device.
#[cfg(condition = "family_f0")]
pub const FAMILY: &str = "f0";
#[cfg(condition = "family_f3")]
pub const FAMILY: &str = "f3";
#[cfg(condition = "family_f4")]
pub const FAMILY: &str = "f4";
#[cfg(condition = "family_h7")]
pub const FAMILY: &str = "h7";
#[cfg(condition = "family_l4")]
pub const FAMILY: &str = "l4";

/// Whether the selected device is a dual-core part.
pub const DUAL_CORE: bool = cfg!(condition = "family_h7_dualcore");

/// Presence of each registry name on the selected device.
///
/// A `false` entry means the handle type does not exist on this build; these
/// constants are the queryable form of that absence, for driver diagnostics
/// and for const assertions like the one in the crate docs.
pub mod present {
    pub const USB: bool = cfg!(condition = "peripheral_usb");
    pub const OTG_FS: bool = cfg!(condition = "peripheral_otg_fs");
    pub const OTG_HS: bool = cfg!(condition = "peripheral_otg_hs");
    pub const HRTIM: bool = cfg!(condition = "peripheral_hrtim_master");
    pub const RCC: bool = cfg!(condition = "peripheral_rcc");
    pub const RCC_C1: bool = cfg!(condition = "peripheral_rcc_c1");
    pub const RCC_C2: bool = cfg!(condition = "peripheral_rcc_c2");
    pub const GPIOA: bool = cfg!(condition = "peripheral_gpioa");
    pub const GPIOB: bool = cfg!(condition = "peripheral_gpiob");
    pub const TIM2: bool = cfg!(condition = "peripheral_tim2");
    pub const I2C1: bool = cfg!(condition = "peripheral_i2c1");
    pub const SPI1: bool = cfg!(condition = "peripheral_spi1");
    pub const USART1: bool = cfg!(condition = "peripheral_usart1");
    pub const EXTI: bool = cfg!(condition = "peripheral_exti");
}

#[cfg(test)]
mod tests {
    #[test]
    fn device_and_family_are_consistent() {
        assert!(super::DEVICE.starts_with("stm32"));
        assert!(super::DEVICE[5..].starts_with(super::FAMILY.chars().next().unwrap()));
        assert!(!super::DUAL_CORE || super::FAMILY == "h7");
    }

    #[test]
    fn universal_peripherals_are_always_present() {
        assert!(super::present::RCC);
        assert!(super::present::GPIOA);
        assert!(super::present::TIM2);
        assert!(super::present::EXTI);
    }
}
