// generated by tools/feature_tables -- do not edit by hand

macro_rules! if_usb {
    (present: $ex:expr) => {
        #[cfg(any(
            feature = "stm32f042",
            feature = "stm32f072",
            feature = "stm32f303",
            feature = "stm32l432",
        ))]
        {
            $ex
        }
    };
    (absent: $ex:expr) => {
        #[cfg(not(any(
            feature = "stm32f042",
            feature = "stm32f072",
            feature = "stm32f303",
            feature = "stm32l432",
        )))]
        {
            $ex
        }
    };
    (present: $ex:item) => {
        #[cfg(any(
            feature = "stm32f042",
            feature = "stm32f072",
            feature = "stm32f303",
            feature = "stm32l432",
        ))]
        $ex
    };
    (absent: $ex:item) => {
        #[cfg(not(any(
            feature = "stm32f042",
            feature = "stm32f072",
            feature = "stm32f303",
            feature = "stm32l432",
        )))]
        $ex
    };
}
pub(crate) use if_usb;

macro_rules! if_otg_fs {
    (present: $ex:expr) => {
        #[cfg(any(
            feature = "stm32f446",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
            feature = "stm32l476",
        ))]
        {
            $ex
        }
    };
    (absent: $ex:expr) => {
        #[cfg(not(any(
            feature = "stm32f446",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
            feature = "stm32l476",
        )))]
        {
            $ex
        }
    };
    (present: $ex:item) => {
        #[cfg(any(
            feature = "stm32f446",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
            feature = "stm32l476",
        ))]
        $ex
    };
    (absent: $ex:item) => {
        #[cfg(not(any(
            feature = "stm32f446",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
            feature = "stm32l476",
        )))]
        $ex
    };
}
pub(crate) use if_otg_fs;

macro_rules! if_otg_hs {
    (present: $ex:expr) => {
        #[cfg(any(
            feature = "stm32f446",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
        ))]
        {
            $ex
        }
    };
    (absent: $ex:expr) => {
        #[cfg(not(any(
            feature = "stm32f446",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
        )))]
        {
            $ex
        }
    };
    (present: $ex:item) => {
        #[cfg(any(
            feature = "stm32f446",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
        ))]
        $ex
    };
    (absent: $ex:item) => {
        #[cfg(not(any(
            feature = "stm32f446",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
        )))]
        $ex
    };
}
pub(crate) use if_otg_hs;

macro_rules! if_hrtim {
    (present: $ex:expr) => {
        #[cfg(any(
            feature = "stm32f334",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
        ))]
        {
            $ex
        }
    };
    (absent: $ex:expr) => {
        #[cfg(not(any(
            feature = "stm32f334",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
        )))]
        {
            $ex
        }
    };
    (present: $ex:item) => {
        #[cfg(any(
            feature = "stm32f334",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
        ))]
        $ex
    };
    (absent: $ex:item) => {
        #[cfg(not(any(
            feature = "stm32f334",
            feature = "stm32h743",
            feature = "stm32h753",
            feature = "stm32h745",
            feature = "stm32h755",
        )))]
        $ex
    };
}
pub(crate) use if_hrtim;

macro_rules! if_rcc_core {
    (present: $ex:expr) => {
        #[cfg(any(feature = "stm32h745", feature = "stm32h755",))]
        {
            $ex
        }
    };
    (absent: $ex:expr) => {
        #[cfg(not(any(feature = "stm32h745", feature = "stm32h755",)))]
        {
            $ex
        }
    };
    (present: $ex:item) => {
        #[cfg(any(feature = "stm32h745", feature = "stm32h755",))]
        $ex
    };
    (absent: $ex:item) => {
        #[cfg(not(any(feature = "stm32h745", feature = "stm32h755",)))]
        $ex
    };
}
pub(crate) use if_rcc_core;
