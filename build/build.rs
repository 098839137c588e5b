pub(crate) mod features;

fn main() {
    assert!(
        features::validate_selected_features(),
        "
This crate requires exactly one of the following features to be enabled:
    stm32f042, stm32f072
    stm32f303, stm32f334
    stm32f446
    stm32h743, stm32h753
    stm32h745, stm32h755
    stm32l432, stm32l476
"
    );
    features::audit_address_rules();
    features::generate_internal_features();
}

pub(crate) struct FeatureGate<'a> {
    pub name: &'a str,
    pub state: bool,
}
