use crate::{features::*, FeatureGate};

/// subfamily gates for the selected device
/// see [crate::features::generate_internal_features()] for how to reference these
pub(crate) const DEVICE_FAMILY: &[FeatureGate] = &[
    FeatureGate {
        name: "f0",
        state: IS_FEATURE_ENABLED_F042 || IS_FEATURE_ENABLED_F072,
    },
    FeatureGate {
        name: "f3",
        state: IS_FEATURE_ENABLED_F303 || IS_FEATURE_ENABLED_F334,
    },
    FeatureGate {
        name: "f4",
        state: IS_FEATURE_ENABLED_F446,
    },
    FeatureGate {
        name: "h7",
        state: IS_FEATURE_ENABLED_H743
            || IS_FEATURE_ENABLED_H753
            || IS_FEATURE_ENABLED_H745
            || IS_FEATURE_ENABLED_H755,
    },
    FeatureGate {
        name: "h7_dualcore",
        state: IS_FEATURE_ENABLED_H745 || IS_FEATURE_ENABLED_H755,
    },
    FeatureGate {
        name: "l4",
        state: IS_FEATURE_ENABLED_L432 || IS_FEATURE_ENABLED_L476,
    },
];
