pub(crate) mod family;
pub(crate) mod peripherals;

/// check that a valid combination of externally visible features has been enabled by dependant crates
/// this check asserts:
/// * exactly one of the device selection features is enabled (e.g. stm32h743)
pub(crate) fn validate_selected_features() -> bool {
    let check_selected_device = SUPPORTED_DEVICES.iter().filter(|(_, b)| *b).count() == 1;

    check_selected_device
}

/// the device identifier whose feature is enabled for this build
pub(crate) fn active_device() -> &'static str {
    SUPPORTED_DEVICES
        .iter()
        .find(|(_, enabled)| *enabled)
        .map(|(name, _)| *name)
        .unwrap()
}

/// Audit the address rule tables before any cfg is emitted.
///
/// Defects fail the build here rather than being silently resolved:
/// * a device identifier matched by more than one address rule for the same
///   peripheral (declaration order must never pick an address)
/// * a device identifier in a rule that is not a supported device (typo guard)
/// * two rules of one peripheral carrying the same address (must be one rule)
/// * a literal zero address (zero is the core-aliased placeholder and must be
///   written as an aliased rule, never as a fixed address)
pub(crate) fn audit_address_rules() {
    for map in peripherals::PERIPHERAL_MAP {
        for rule in map.rules {
            assert!(
                rule.address != Some(0),
                "peripheral {}: zero is reserved for core-aliased rules",
                map.name
            );
            for dev in rule.devices {
                assert!(
                    SUPPORTED_DEVICES.iter().any(|(name, _)| name == dev),
                    "peripheral {}: unknown device identifier {:?} in address rule",
                    map.name,
                    dev
                );
            }
        }
        for (i, a) in map.rules.iter().enumerate() {
            for b in &map.rules[i + 1..] {
                assert!(
                    a.address.is_none() || a.address != b.address,
                    "peripheral {}: two rules share address {:#010x}",
                    map.name,
                    a.address.unwrap()
                );
                for dev in a.devices {
                    assert!(
                        !b.devices.contains(dev),
                        "peripheral {}: device {} is matched by more than one address rule",
                        map.name,
                        dev
                    );
                }
            }
        }
    }
}

pub(crate) fn generate_internal_features() {
    let mut values: Vec<String> = Vec::new();
    for map in peripherals::PERIPHERAL_MAP {
        values.push(format!("\"peripheral_{}\"", map.name.to_lowercase()));
    }
    for gate in family::DEVICE_FAMILY {
        values.push(format!("\"family_{}\"", gate.name));
    }
    println!("cargo:rustc-check-cfg=cfg(condition, values({}))", values.join(", "));

    let active = active_device();
    for map in peripherals::PERIPHERAL_MAP {
        if map.rules.iter().any(|rule| rule.devices.contains(&active)) {
            println!(r#"cargo:rustc-cfg=condition="peripheral_{}""#, map.name.to_lowercase());
        }
    }
    for gate in family::DEVICE_FAMILY {
        if gate.state {
            println!(r#"cargo:rustc-cfg=condition="family_{}""#, gate.name);
        }
    }
}

pub(crate) const IS_FEATURE_ENABLED_F042: bool = cfg!(feature = "stm32f042");
pub(crate) const IS_FEATURE_ENABLED_F072: bool = cfg!(feature = "stm32f072");
pub(crate) const IS_FEATURE_ENABLED_F303: bool = cfg!(feature = "stm32f303");
pub(crate) const IS_FEATURE_ENABLED_F334: bool = cfg!(feature = "stm32f334");
pub(crate) const IS_FEATURE_ENABLED_F446: bool = cfg!(feature = "stm32f446");
pub(crate) const IS_FEATURE_ENABLED_H743: bool = cfg!(feature = "stm32h743");
pub(crate) const IS_FEATURE_ENABLED_H753: bool = cfg!(feature = "stm32h753");
pub(crate) const IS_FEATURE_ENABLED_H745: bool = cfg!(feature = "stm32h745");
pub(crate) const IS_FEATURE_ENABLED_H755: bool = cfg!(feature = "stm32h755");
pub(crate) const IS_FEATURE_ENABLED_L432: bool = cfg!(feature = "stm32l432");
pub(crate) const IS_FEATURE_ENABLED_L476: bool = cfg!(feature = "stm32l476");

pub(crate) const SUPPORTED_DEVICES: &[(&str, bool)] = &[
    ("stm32f042", IS_FEATURE_ENABLED_F042),
    ("stm32f072", IS_FEATURE_ENABLED_F072),
    ("stm32f303", IS_FEATURE_ENABLED_F303),
    ("stm32f334", IS_FEATURE_ENABLED_F334),
    ("stm32f446", IS_FEATURE_ENABLED_F446),
    ("stm32h743", IS_FEATURE_ENABLED_H743),
    ("stm32h753", IS_FEATURE_ENABLED_H753),
    ("stm32h745", IS_FEATURE_ENABLED_H745),
    ("stm32h755", IS_FEATURE_ENABLED_H755),
    ("stm32l432", IS_FEATURE_ENABLED_L432),
    ("stm32l476", IS_FEATURE_ENABLED_L476),
];
