//! tool used to generate the feature macros for stm32xx-memmap
//! the macros are a whole lot of copy paste, change which MCUs are enabled. This is much easier to handle as a mini-program

use std::{fs, path::Path};

// the authoritative address rule tables the build script audits; the HAS_*
// tables below must stay in sync with them, checked by the tests
#[cfg(test)]
#[path = "../../../build/features/peripherals.rs"]
mod registry;

fn main() {
    let out_dir = "out";
    fs::create_dir(out_dir).ok();
    let dest_path = Path::new(&out_dir).join("peripherals.rs");
    write_peripherals(&dest_path);
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

const DEVICES: [&str; 11] = [
    F042, F072, F303, F334, F446, H743, H753, H745, H755, L432, L476,
];

const HAS_USB: [&str; 4] = [F042, F072, F303, L432];

const HAS_OTG_FS: [&str; 6] = [F446, H743, H753, H745, H755, L476];

const HAS_OTG_HS: [&str; 5] = [F446, H743, H753, H745, H755];

const HAS_HRTIM: [&str; 5] = [F334, H743, H753, H745, H755];

const HAS_RCC_CORE: [&str; 2] = [H745, H755];

fn write_peripherals(dest_file: &Path) {
    let mut out = String::new();
    out.push_str("// generated by tools/feature_tables -- do not edit by hand\n\n");
    write_macro(&mut out, "if_usb", &HAS_USB);
    write_macro(&mut out, "if_otg_fs", &HAS_OTG_FS);
    write_macro(&mut out, "if_otg_hs", &HAS_OTG_HS);
    write_macro(&mut out, "if_hrtim", &HAS_HRTIM);
    write_macro(&mut out, "if_rcc_core", &HAS_RCC_CORE);

    fs::write(dest_file, out).unwrap();
}

fn write_macro(append_to: &mut String, name: &str, features: &[&str]) {
    for feature in features {
        assert!(
            DEVICES.contains(feature),
            "{}: unknown device {:?}",
            name,
            feature
        );
    }

    let feature_list = features.iter().fold(String::new(), |mut curr, &s| {
        curr.push_str(&format!("feature = {:?},\n", s));
        curr
    });

    append_to.push_str(&format!("macro_rules! {} {{\n", name));

    for frag_spec in ["expr", "item"] {
        // present:
        append_to.push_str(&format!("(present: $ex:{}) => {{\n", frag_spec));
        append_to.push_str(&format!("#[cfg(any(\n{}))]\n", feature_list));
        if frag_spec == "expr" {
            // wrap expressions in a block to avoid multi-line issues
            append_to.push_str("{ $ex }\n");
        } else {
            append_to.push_str("$ex\n");
        }
        append_to.push_str("};\n");
        // absent:
        append_to.push_str(&format!("(absent: $ex:{}) => {{\n", frag_spec));
        append_to.push_str(&format!("#[cfg(not(any(\n{})))]\n", feature_list));
        if frag_spec == "expr" {
            // wrap expressions in a block to avoid multi-line issues
            append_to.push_str("{ $ex }\n");
        } else {
            append_to.push_str("$ex\n");
        }
        append_to.push_str("};\n");
    }
    // footer
    append_to.push_str("}\n");
    append_to.push_str(&format!("pub(crate) use {};\n\n", name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_only_name_supported_devices() {
        for table in [
            &HAS_USB[..],
            &HAS_OTG_FS[..],
            &HAS_OTG_HS[..],
            &HAS_HRTIM[..],
            &HAS_RCC_CORE[..],
        ] {
            for dev in table {
                assert!(DEVICES.contains(dev), "unknown device {:?}", dev);
            }
        }
    }

    #[test]
    fn tables_have_no_duplicate_devices() {
        for table in [
            &HAS_USB[..],
            &HAS_OTG_FS[..],
            &HAS_OTG_HS[..],
            &HAS_HRTIM[..],
            &HAS_RCC_CORE[..],
        ] {
            for (i, a) in table.iter().enumerate() {
                assert!(!table[i + 1..].contains(a), "duplicate device {:?}", a);
            }
        }
    }

    fn sorted(table: &[&'static str]) -> Vec<&'static str> {
        let mut devs = table.to_vec();
        devs.sort_unstable();
        devs
    }

    fn rule_devices(name: &str) -> Vec<&'static str> {
        let map = registry::PERIPHERAL_MAP
            .iter()
            .find(|m| m.name == name)
            .unwrap_or_else(|| panic!("no address rules for {}", name));
        let mut devs: Vec<_> = map
            .rules
            .iter()
            .flat_map(|rule| rule.devices.iter().copied())
            .collect();
        devs.sort_unstable();
        devs
    }

    #[test]
    fn gate_tables_match_address_rules() {
        assert_eq!(sorted(&HAS_USB), rule_devices("USB"));
        assert_eq!(sorted(&HAS_OTG_FS), rule_devices("OTG_FS"));
        assert_eq!(sorted(&HAS_OTG_HS), rule_devices("OTG_HS"));
        assert_eq!(sorted(&HAS_RCC_CORE), rule_devices("RCC_C1"));
        assert_eq!(sorted(&HAS_RCC_CORE), rule_devices("RCC_C2"));
    }

    #[test]
    fn hrtim_gate_covers_every_hrtim_block() {
        for name in [
            "HRTIM_MASTER",
            "HRTIM_TIMA",
            "HRTIM_TIMB",
            "HRTIM_TIMC",
            "HRTIM_TIMD",
            "HRTIM_TIME",
            "HRTIM_COMMON",
        ] {
            assert_eq!(sorted(&HAS_HRTIM), rule_devices(name), "{}", name);
        }
    }

    #[test]
    fn address_rules_only_name_known_devices() {
        for map in registry::PERIPHERAL_MAP {
            for rule in map.rules {
                for dev in rule.devices {
                    assert!(DEVICES.contains(dev), "{}: unknown device {:?}", map.name, dev);
                }
            }
        }
    }

    #[test]
    fn generated_macro_has_all_four_arms() {
        let mut out = String::new();
        write_macro(&mut out, "if_usb", &HAS_USB);
        assert_eq!(out.matches("(present: $ex:").count(), 2);
        assert_eq!(out.matches("(absent: $ex:").count(), 2);
        assert!(out.ends_with("pub(crate) use if_usb;\n\n"));
        for dev in HAS_USB {
            assert!(out.contains(&format!("feature = {:?}", dev)));
        }
    }
}
