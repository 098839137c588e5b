//! The peripheral address registry.
//!
//! One `periph!` block per registry name, listing its address rules. A rule
//! binds one base address to the set of devices that place the block there;
//! the sets of one name never overlap, which the build script enforces before
//! anything here is compiled (see `build/features/peripherals.rs`, the
//! authoritative copy of these tables). On any given build exactly the
//! handles applicable to the selected device exist; the rest are not merely
//! disabled, they are absent from the crate.

use crate::periph::periph;
use crate::reg;

periph! {
    /// USB full-speed device controller.
    USB: reg::usb::RegisterBlock {
        0x4000_5C00 => "stm32f042", "stm32f072", "stm32f303";
        0x4000_6800 => "stm32l432";
    }
}

periph! {
    /// USB on-the-go controller, full-speed instance.
    OTG_FS: reg::otg::RegisterBlock {
        0x5000_0000 => "stm32f446", "stm32l476";
        0x4008_0000 => "stm32h743", "stm32h753";
        aliased => "stm32h745", "stm32h755";
    }
}

periph! {
    /// USB on-the-go controller, high-speed instance.
    OTG_HS: reg::otg::RegisterBlock {
        0x4004_0000 => "stm32f446", "stm32h743", "stm32h753";
        aliased => "stm32h745", "stm32h755";
    }
}

periph! {
    /// High-resolution timer, master block.
    HRTIM_MASTER: reg::hrtim::Master {
        0x4001_7400 => "stm32f334", "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

periph! {
    /// High-resolution timer, timing unit A.
    HRTIM_TIMA: reg::hrtim::Timer {
        0x4001_7480 => "stm32f334", "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

periph! {
    /// High-resolution timer, timing unit B.
    HRTIM_TIMB: reg::hrtim::Timer {
        0x4001_7500 => "stm32f334", "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

periph! {
    /// High-resolution timer, timing unit C.
    HRTIM_TIMC: reg::hrtim::Timer {
        0x4001_7580 => "stm32f334", "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

periph! {
    /// High-resolution timer, timing unit D.
    HRTIM_TIMD: reg::hrtim::Timer {
        0x4001_7600 => "stm32f334", "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

periph! {
    /// High-resolution timer, timing unit E.
    HRTIM_TIME: reg::hrtim::Timer {
        0x4001_7680 => "stm32f334", "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

periph! {
    /// High-resolution timer, common section.
    HRTIM_COMMON: reg::hrtim::Common {
        0x4001_7780 => "stm32f334", "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

periph! {
    /// Reset and clock control.
    RCC: reg::rcc::RegisterBlock {
        0x4002_1000 => "stm32f042", "stm32f072", "stm32f303", "stm32f334", "stm32l432", "stm32l476";
        0x4002_3800 => "stm32f446";
        0x5802_4400 => "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

periph! {
    /// Clock control window of core 1.
    RCC_C1: reg::rcc_core::RegisterBlock {
        0x5802_4530 => "stm32h745", "stm32h755";
    }
}

periph! {
    /// Clock control window of core 2.
    RCC_C2: reg::rcc_core::RegisterBlock {
        0x5802_4590 => "stm32h745", "stm32h755";
    }
}

periph! {
    /// General-purpose I/O port A.
    GPIOA: reg::gpio::RegisterBlock {
        0x4800_0000 => "stm32f042", "stm32f072", "stm32f303", "stm32f334", "stm32l432", "stm32l476";
        0x4002_0000 => "stm32f446";
        0x5802_0000 => "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

periph! {
    /// General-purpose I/O port B.
    GPIOB: reg::gpio::RegisterBlock {
        0x4800_0400 => "stm32f042", "stm32f072", "stm32f303", "stm32f334", "stm32l432", "stm32l476";
        0x4002_0400 => "stm32f446";
        0x5802_0400 => "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

periph! {
    /// General-purpose timer 2.
    TIM2: reg::tim::RegisterBlock {
        0x4000_0000 => "stm32f042", "stm32f072", "stm32f303", "stm32f334", "stm32f446",
            "stm32h743", "stm32h753", "stm32h745", "stm32h755", "stm32l432", "stm32l476";
    }
}

periph! {
    /// I2C interface 1.
    I2C1: reg::i2c::RegisterBlock {
        0x4000_5400 => "stm32f042", "stm32f072", "stm32f303", "stm32f334", "stm32f446",
            "stm32h743", "stm32h753", "stm32h745", "stm32h755", "stm32l432", "stm32l476";
    }
}

periph! {
    /// SPI interface 1.
    SPI1: reg::spi::RegisterBlock {
        0x4001_3000 => "stm32f042", "stm32f072", "stm32f303", "stm32f334", "stm32f446",
            "stm32h743", "stm32h753", "stm32h745", "stm32h755", "stm32l432", "stm32l476";
    }
}

periph! {
    /// USART 1.
    USART1: reg::usart::RegisterBlock {
        0x4001_3800 => "stm32f042", "stm32f072", "stm32f303", "stm32f334", "stm32l432", "stm32l476";
        0x4001_1000 => "stm32f446", "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

periph! {
    /// Extended interrupt and event controller.
    EXTI: reg::exti::RegisterBlock {
        0x4001_0400 => "stm32f042", "stm32f072", "stm32f303", "stm32f334", "stm32l432", "stm32l476";
        0x4001_3C00 => "stm32f446";
        0x5800_0000 => "stm32h743", "stm32h753", "stm32h745", "stm32h755";
    }
}

#[cfg(test)]
mod tests {
    // Every binding is a const; resolving a name twice cannot yield two
    // different addresses. These tests pin the documented values per device
    // and the relationships the driver layer depends on.

    crate::require_peripheral!(RCC);
    crate::require_peripheral!(TIM2);

    #[test]
    fn resolution_is_const() {
        use crate::RCC;
        assert_eq!(RCC::ptr(), RCC::PTR);
        assert_eq!(RCC::PTR as usize, RCC::BASE);
    }

    // The presence flags come from the build script's copy of the address
    // tables (build/features/peripherals.rs); the handles come from the
    // `periph!` rules above. If the copies drift and a flagged name has no
    // handle on the selected device, this does not compile.
    #[test]
    fn flagged_names_have_handles() {
        #[cfg(condition = "peripheral_usb")]
        let _ = crate::USB::BASE;
        #[cfg(condition = "peripheral_otg_fs")]
        let _ = crate::OTG_FS::BASE;
        #[cfg(condition = "peripheral_otg_hs")]
        let _ = crate::OTG_HS::BASE;
        #[cfg(condition = "peripheral_hrtim_master")]
        let _ = crate::HRTIM_MASTER::BASE;
        #[cfg(condition = "peripheral_hrtim_tima")]
        let _ = crate::HRTIM_TIMA::BASE;
        #[cfg(condition = "peripheral_hrtim_timb")]
        let _ = crate::HRTIM_TIMB::BASE;
        #[cfg(condition = "peripheral_hrtim_timc")]
        let _ = crate::HRTIM_TIMC::BASE;
        #[cfg(condition = "peripheral_hrtim_timd")]
        let _ = crate::HRTIM_TIMD::BASE;
        #[cfg(condition = "peripheral_hrtim_time")]
        let _ = crate::HRTIM_TIME::BASE;
        #[cfg(condition = "peripheral_hrtim_common")]
        let _ = crate::HRTIM_COMMON::BASE;
        #[cfg(condition = "peripheral_rcc")]
        let _ = crate::RCC::BASE;
        #[cfg(condition = "peripheral_rcc_c1")]
        let _ = crate::RCC_C1::BASE;
        #[cfg(condition = "peripheral_rcc_c2")]
        let _ = crate::RCC_C2::BASE;
        #[cfg(condition = "peripheral_gpioa")]
        let _ = crate::GPIOA::BASE;
        #[cfg(condition = "peripheral_gpiob")]
        let _ = crate::GPIOB::BASE;
        #[cfg(condition = "peripheral_tim2")]
        let _ = crate::TIM2::BASE;
        #[cfg(condition = "peripheral_i2c1")]
        let _ = crate::I2C1::BASE;
        #[cfg(condition = "peripheral_spi1")]
        let _ = crate::SPI1::BASE;
        #[cfg(condition = "peripheral_usart1")]
        let _ = crate::USART1::BASE;
        #[cfg(condition = "peripheral_exti")]
        let _ = crate::EXTI::BASE;
    }

    #[cfg(any(feature = "stm32f042", feature = "stm32f072", feature = "stm32f303"))]
    mod device_usb_only {
        use crate::{present, USB};

        #[test]
        fn usb_resolves_to_documented_address() {
            assert_eq!(USB::BASE, 0x4000_5C00);
        }

        #[test]
        fn otg_instances_are_absent() {
            assert!(present::USB);
            assert!(!present::OTG_FS);
            assert!(!present::OTG_HS);
        }
    }

    #[cfg(feature = "stm32l432")]
    mod l432 {
        use crate::{present, USB};

        #[test]
        fn usb_moved_to_l4_placement() {
            assert_eq!(USB::BASE, 0x4000_6800);
            assert!(!present::OTG_FS);
        }
    }

    #[cfg(feature = "stm32f446")]
    mod dual_otg {
        use crate::{OTG_FS, OTG_HS};

        #[test]
        fn both_instances_resolve_distinct() {
            assert_eq!(OTG_FS::BASE, 0x5000_0000);
            assert_eq!(OTG_HS::BASE, 0x4004_0000);
            assert_ne!(OTG_FS::BASE, OTG_HS::BASE);
        }
    }

    #[cfg(any(feature = "stm32h743", feature = "stm32h753"))]
    mod h7_single_core {
        use crate::{present, OTG_FS, OTG_HS};

        #[test]
        fn both_otg_instances_resolve_distinct() {
            assert_eq!(OTG_FS::BASE, 0x4008_0000);
            assert_eq!(OTG_HS::BASE, 0x4004_0000);
        }

        #[test]
        fn device_usb_is_absent() {
            assert!(!present::USB);
            assert!(!present::RCC_C1);
        }
    }

    crate::feature::if_hrtim! {
        present:
        mod hrtim_layout {
            use core::mem::size_of;

            crate::require_peripheral!(HRTIM);

            use crate::reg::hrtim::{Master, Timer};
            use crate::{
                HRTIM_COMMON, HRTIM_MASTER, HRTIM_TIMA, HRTIM_TIMB, HRTIM_TIMC, HRTIM_TIMD,
                HRTIM_TIME,
            };

            #[test]
            fn timing_units_are_contiguous() {
                let units = [
                    HRTIM_TIMA::BASE,
                    HRTIM_TIMB::BASE,
                    HRTIM_TIMC::BASE,
                    HRTIM_TIMD::BASE,
                    HRTIM_TIME::BASE,
                ];
                assert_eq!(units[0], HRTIM_MASTER::BASE + size_of::<Master>());
                for pair in units.windows(2) {
                    assert_eq!(pair[1] - pair[0], size_of::<Timer>());
                }
            }

            #[test]
            fn units_are_distinct() {
                let units = [
                    HRTIM_MASTER::BASE,
                    HRTIM_TIMA::BASE,
                    HRTIM_TIMB::BASE,
                    HRTIM_TIMC::BASE,
                    HRTIM_TIMD::BASE,
                    HRTIM_TIME::BASE,
                    HRTIM_COMMON::BASE,
                ];
                for (i, a) in units.iter().enumerate() {
                    for b in &units[i + 1..] {
                        assert_ne!(a, b);
                    }
                }
            }

            #[test]
            fn common_section_offset() {
                assert_eq!(HRTIM_COMMON::BASE, HRTIM_MASTER::BASE + 0x380);
            }

            #[test]
            fn block_sizes_match_strides() {
                assert_eq!(size_of::<Master>(), 0x80);
                assert_eq!(size_of::<Timer>(), 0x80);
            }
        }
    }

    #[cfg(condition = "family_h7_dualcore")]
    mod core_aliased_usb {
        use crate::reg::otg;
        use crate::{CoreAliased, OTG_FS, OTG_HS, RCC_C1, RCC_C2};

        #[test]
        fn both_otg_names_carry_the_placeholder() {
            assert_eq!(OTG_FS::BASE, CoreAliased::<otg::RegisterBlock>::PLACEHOLDER);
            assert_eq!(OTG_HS::BASE, CoreAliased::<otg::RegisterBlock>::PLACEHOLDER);
        }

        #[test]
        fn aliased_binding_resolves_through_token() {
            let ptr = unsafe { OTG_FS::aliased().at(0x4008_0000) };
            assert_eq!(ptr as usize, 0x4008_0000);
        }

        #[test]
        fn core_clock_windows_resolve() {
            assert_eq!(RCC_C1::BASE, 0x5802_4530);
            assert_eq!(RCC_C2::BASE, 0x5802_4590);
            assert_eq!(RCC_C2::BASE - RCC_C1::BASE, 0x60);
        }
    }

    crate::feature::if_usb! {
        present:
        mod usb_present {
            use crate::{present, USB};

            #[test]
            fn usb_binding_matches_presence_flag() {
                assert!(present::USB);
                assert_ne!(USB::BASE, 0);
            }
        }
    }

    crate::feature::if_otg_fs! {
        present:
        mod otg_fs_present {
            #[test]
            fn full_speed_otg_flagged_present() {
                assert!(crate::present::OTG_FS);
            }
        }
    }

    crate::feature::if_otg_hs! {
        absent:
        mod no_hs_controller {
            use crate::present;

            #[test]
            fn high_speed_instance_is_absent() {
                assert!(!present::OTG_HS);
            }
        }
    }

    crate::feature::if_rcc_core! {
        absent:
        mod single_core {
            use crate::present;

            #[test]
            fn core_clock_windows_are_absent() {
                assert!(!present::RCC_C1);
                assert!(!present::RCC_C2);
            }
        }
    }
}
