//! Register block layouts of the common peripheral IPs.
//!
//! These types belong to the peripheral-definition layer generated from the
//! vendor description files; the registry only associates base addresses with
//! them. The layouts are shared across every supported device, which is what
//! makes a single cross-device registry possible. Field semantics, reset
//! values and access rules are out of scope here.

pub mod exti;
pub mod gpio;
pub mod hrtim;
pub mod i2c;
pub mod otg;
pub mod rcc;
pub mod rcc_core;
pub mod spi;
pub mod tim;
pub mod usart;
pub mod usb;
