//! Address rule tables for every peripheral in the registry.
//!
//! This is the authoritative applicability data the build script audits and
//! turns into internal cfgs. The `periph!` invocations in `src/peripherals.rs`
//! carry the same rules as literal `feature = ...` lists (cfg attributes
//! cannot be built from tables) and must be kept in sync with this file.

/// one address rule: the devices it applies to, and the base address bound
/// for them
///
/// `address` is `None` for core-aliased bindings on dual-core parts, where
/// the documented tables carry a zero placeholder and the real address is
/// only known once the firmware knows which core it runs on.
pub(crate) struct AddressRule {
    pub devices: &'static [&'static str],
    pub address: Option<usize>,
}

pub(crate) struct PeripheralMap {
    pub name: &'static str,
    pub rules: &'static [AddressRule],
}

const F042: &str = "stm32f042";
const F072: &str = "stm32f072";
const F303: &str = "stm32f303";
const F334: &str = "stm32f334";
const F446: &str = "stm32f446";
const H743: &str = "stm32h743";
const H753: &str = "stm32h753";
const H745: &str = "stm32h745";
const H755: &str = "stm32h755";
const L432: &str = "stm32l432";
const L476: &str = "stm32l476";

const ALL: &[&str] = &[F042, F072, F303, F334, F446, H743, H753, H745, H755, L432, L476];
const APB_AT_0X4002: &[&str] = &[F042, F072, F303, F334, L432, L476];
const H7_ALL: &[&str] = &[H743, H753, H745, H755];
const H7_DUAL: &[&str] = &[H745, H755];
const HRTIM_DEVICES: &[&str] = &[F334, H743, H753, H745, H755];

pub(crate) const PERIPHERAL_MAP: &[PeripheralMap] = &[
    PeripheralMap {
        name: "USB",
        rules: &[
            AddressRule { devices: &[F042, F072, F303], address: Some(0x4000_5C00) },
            AddressRule { devices: &[L432], address: Some(0x4000_6800) },
        ],
    },
    PeripheralMap {
        name: "OTG_FS",
        rules: &[
            AddressRule { devices: &[F446, L476], address: Some(0x5000_0000) },
            AddressRule { devices: &[H743, H753], address: Some(0x4008_0000) },
            AddressRule { devices: H7_DUAL, address: None },
        ],
    },
    PeripheralMap {
        name: "OTG_HS",
        rules: &[
            AddressRule { devices: &[F446, H743, H753], address: Some(0x4004_0000) },
            AddressRule { devices: H7_DUAL, address: None },
        ],
    },
    PeripheralMap {
        name: "HRTIM_MASTER",
        rules: &[AddressRule { devices: HRTIM_DEVICES, address: Some(0x4001_7400) }],
    },
    PeripheralMap {
        name: "HRTIM_TIMA",
        rules: &[AddressRule { devices: HRTIM_DEVICES, address: Some(0x4001_7480) }],
    },
    PeripheralMap {
        name: "HRTIM_TIMB",
        rules: &[AddressRule { devices: HRTIM_DEVICES, address: Some(0x4001_7500) }],
    },
    PeripheralMap {
        name: "HRTIM_TIMC",
        rules: &[AddressRule { devices: HRTIM_DEVICES, address: Some(0x4001_7580) }],
    },
    PeripheralMap {
        name: "HRTIM_TIMD",
        rules: &[AddressRule { devices: HRTIM_DEVICES, address: Some(0x4001_7600) }],
    },
    PeripheralMap {
        name: "HRTIM_TIME",
        rules: &[AddressRule { devices: HRTIM_DEVICES, address: Some(0x4001_7680) }],
    },
    PeripheralMap {
        name: "HRTIM_COMMON",
        rules: &[AddressRule { devices: HRTIM_DEVICES, address: Some(0x4001_7780) }],
    },
    PeripheralMap {
        name: "RCC",
        rules: &[
            AddressRule { devices: APB_AT_0X4002, address: Some(0x4002_1000) },
            AddressRule { devices: &[F446], address: Some(0x4002_3800) },
            AddressRule { devices: H7_ALL, address: Some(0x5802_4400) },
        ],
    },
    PeripheralMap {
        name: "RCC_C1",
        rules: &[AddressRule { devices: H7_DUAL, address: Some(0x5802_4530) }],
    },
    PeripheralMap {
        name: "RCC_C2",
        rules: &[AddressRule { devices: H7_DUAL, address: Some(0x5802_4590) }],
    },
    PeripheralMap {
        name: "GPIOA",
        rules: &[
            AddressRule { devices: APB_AT_0X4002, address: Some(0x4800_0000) },
            AddressRule { devices: &[F446], address: Some(0x4002_0000) },
            AddressRule { devices: H7_ALL, address: Some(0x5802_0000) },
        ],
    },
    PeripheralMap {
        name: "GPIOB",
        rules: &[
            AddressRule { devices: APB_AT_0X4002, address: Some(0x4800_0400) },
            AddressRule { devices: &[F446], address: Some(0x4002_0400) },
            AddressRule { devices: H7_ALL, address: Some(0x5802_0400) },
        ],
    },
    PeripheralMap {
        name: "TIM2",
        rules: &[AddressRule { devices: ALL, address: Some(0x4000_0000) }],
    },
    PeripheralMap {
        name: "I2C1",
        rules: &[AddressRule { devices: ALL, address: Some(0x4000_5400) }],
    },
    PeripheralMap {
        name: "SPI1",
        rules: &[AddressRule { devices: ALL, address: Some(0x4001_3000) }],
    },
    PeripheralMap {
        name: "USART1",
        rules: &[
            AddressRule { devices: APB_AT_0X4002, address: Some(0x4001_3800) },
            AddressRule { devices: &[F446, H743, H753, H745, H755], address: Some(0x4001_1000) },
        ],
    },
    PeripheralMap {
        name: "EXTI",
        rules: &[
            AddressRule { devices: APB_AT_0X4002, address: Some(0x4001_0400) },
            AddressRule { devices: &[F446], address: Some(0x4001_3C00) },
            AddressRule { devices: H7_ALL, address: Some(0x5800_0000) },
        ],
    },
];
