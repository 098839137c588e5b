//! Peripheral handle machinery.
//!
//! [`periph!`] declares one registry name with its per-device address rules.
//! Every rule expands to a feature-gated singleton type, so for any build at
//! most one expansion survives: the address a name resolves to is fixed the
//! moment the device feature is chosen, and a name with no matching rule does
//! not exist at all on that build. If two rules of one name ever matched the
//! same device the expansions would collide in a duplicate-definition error;
//! the build script rejects such tables first with a clearer message.

use core::marker::PhantomData;

/// Binding whose final address depends on which core the firmware runs on.
///
/// Dual-core parts publish some peripherals through a core-dependent alias;
/// the vendor address tables carry a zero placeholder for them. Handles for
/// such bindings never expose a pointer. They hand out this token instead,
/// forcing the driver layer to supply the address established by its own
/// core-resolution step.
pub struct CoreAliased<RB> {
    _marker: PhantomData<*const RB>,
}

impl<RB> CoreAliased<RB> {
    /// Placeholder recorded in the address tables for core-aliased bindings.
    pub const PLACEHOLDER: usize = 0;

    pub(crate) const fn new() -> Self {
        CoreAliased { _marker: PhantomData }
    }

    /// Bind the register block to the address established by the secondary,
    /// core-dependent resolution step.
    ///
    /// # Safety
    ///
    /// `base` must be the documented base address of this register block for
    /// the core the caller runs on.
    pub const unsafe fn at(self, base: usize) -> *const RB {
        base as *const RB
    }
}

macro_rules! periph {
    (
        $(#[$doc:meta])*
        $NAME:ident: $rb:ty { $($rules:tt)+ }
    ) => {
        periph!(@rule [$(#[$doc])*] $NAME: $rb; $($rules)+);
    };

    (@rule [$($doc:tt)*] $NAME:ident: $rb:ty;
        $addr:literal => $($dev:literal),+; $($rest:tt)*) => {
        #[cfg(any($(feature = $dev),+))]
        $($doc)*
        #[allow(non_camel_case_types)]
        pub struct $NAME {
            _marker: ::core::marker::PhantomData<*const ()>,
        }

        #[cfg(any($(feature = $dev),+))]
        unsafe impl ::core::marker::Send for $NAME {}

        #[cfg(any($(feature = $dev),+))]
        impl $NAME {
            /// Base address of the register block on the selected device.
            pub const BASE: usize = $addr;

            /// Pointer to the register block.
            pub const PTR: *const $rb = $addr as *const $rb;

            #[inline(always)]
            pub const fn ptr() -> *const $rb {
                Self::PTR
            }

            /// Create a handle out of thin air.
            ///
            /// # Safety
            ///
            /// Aliases any other handle to this peripheral.
            #[inline]
            pub unsafe fn steal() -> Self {
                $NAME { _marker: ::core::marker::PhantomData }
            }
        }

        #[cfg(any($(feature = $dev),+))]
        impl ::core::ops::Deref for $NAME {
            type Target = $rb;

            #[inline(always)]
            fn deref(&self) -> &Self::Target {
                unsafe { &*Self::PTR }
            }
        }

        periph!(@rule [$($doc)*] $NAME: $rb; $($rest)*);
    };

    (@rule [$($doc:tt)*] $NAME:ident: $rb:ty;
        aliased => $($dev:literal),+; $($rest:tt)*) => {
        #[cfg(any($(feature = $dev),+))]
        $($doc)*
        ///
        /// On the selected device this binding is core-aliased: the address
        /// tables carry a zero placeholder and the block is only reachable
        /// through [`CoreAliased`](crate::CoreAliased).
        #[allow(non_camel_case_types)]
        pub struct $NAME {
            _marker: ::core::marker::PhantomData<*const ()>,
        }

        #[cfg(any($(feature = $dev),+))]
        unsafe impl ::core::marker::Send for $NAME {}

        #[cfg(any($(feature = $dev),+))]
        impl $NAME {
            /// Placeholder recorded in the address tables for this device.
            pub const BASE: usize = $crate::CoreAliased::<$rb>::PLACEHOLDER;

            /// Token for the secondary, core-dependent resolution step.
            #[inline(always)]
            pub const fn aliased() -> $crate::CoreAliased<$rb> {
                $crate::CoreAliased::new()
            }
        }

        periph!(@rule [$($doc)*] $NAME: $rb; $($rest)*);
    };

    (@rule [$($doc:tt)*] $NAME:ident: $rb:ty;) => {};
}
pub(crate) use periph;
