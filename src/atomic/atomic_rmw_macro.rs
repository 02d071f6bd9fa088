/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic RMW Macros
//!
//! Provides the macros that generate the location capability of the standard
//! integer atomics and the typed entry points of every scalar type.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to implement [`AtomicLocation`] for a standard library integer
/// atomic.
///
/// # Parameters
///
/// * `$inner_type` - The std atomic type (e.g., `AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
///
/// [`AtomicLocation`]: crate::atomic::traits::AtomicLocation
macro_rules! impl_integer_location {
    ($inner_type:ty, $value_type:ty) => {
        impl $crate::atomic::traits::AtomicLocation for $inner_type {
            type Value = $value_type;
            type Sameness = $crate::atomic::traits::BitwiseSameness;

            #[inline]
            fn load_relaxed(&self) -> $value_type {
                self.load(std::sync::atomic::Ordering::Relaxed)
            }

            #[inline]
            fn compare_exchange(
                &self,
                compare: $value_type,
                value: $value_type,
            ) -> $value_type {
                match <$inner_type>::compare_exchange(
                    self,
                    compare,
                    value,
                    std::sync::atomic::Ordering::AcqRel,
                    std::sync::atomic::Ordering::Acquire,
                ) {
                    Ok(prev) => prev,
                    Err(actual) => actual,
                }
            }

            #[inline]
            fn exchange(&self, value: $value_type) -> $value_type {
                self.swap(value, std::sync::atomic::Ordering::AcqRel)
            }
        }
    };
}

/// Macro to generate the typed entry points of one scalar type.
///
/// Every entry point `atomic_<op>_<type>` is generated together with its
/// intrinsic descriptor constant, and the module gets a `DESCRIPTORS` slice
/// listing them in declaration order.
///
/// # Parameters
///
/// * `$location` - The location type (e.g., `AtomicU32`)
/// * `$value_type` - The value type (e.g., `u32`)
/// * `$scalar` - The [`ScalarKind`] variant (e.g., `U32`)
///
/// Followed by one line per entry point, in one of these flavors:
///
/// * `native_add => fn, DESC;` - native `fetch_add`
/// * `exchange => fn, DESC;` - the location's exchange
/// * `compare_exchange => fn, DESC;` - the location's compare-exchange
/// * `cas [Op] => fn, DESC;` - the RMW engine with combine marker `Op`
///
/// [`ScalarKind`]: crate::atomic::intrinsic::ScalarKind
macro_rules! impl_entry_points {
    (@entry native_add, $location:ty, $value_type:ty, $scalar:ident, $fn_name:ident, $desc:ident) => {
        #[doc = concat!("Atomically adds `value` to a `", stringify!($value_type), "` location, returning the old value.")]
        ///
        /// Lowers to the native atomic add; wraps on overflow.
        #[doc = concat!("Intrinsic descriptor: [`", stringify!($desc), "`].")]
        #[inline]
        pub fn $fn_name(location: &$location, value: $value_type) -> $value_type {
            location.fetch_add(value, std::sync::atomic::Ordering::AcqRel)
        }

        impl_entry_points!(@descriptor $fn_name, $desc, Add, $scalar, Native);
    };

    (@entry exchange, $location:ty, $value_type:ty, $scalar:ident, $fn_name:ident, $desc:ident) => {
        #[doc = concat!("Atomically stores `value` into a `", stringify!($value_type), "` location, returning the old value.")]
        ///
        #[doc = concat!("Intrinsic descriptor: [`", stringify!($desc), "`].")]
        #[inline]
        pub fn $fn_name(location: &$location, value: $value_type) -> $value_type {
            $crate::atomic::traits::AtomicLocation::exchange(location, value)
        }

        impl_entry_points!(@descriptor $fn_name, $desc, Exchange, $scalar, Native);
    };

    (@entry compare_exchange, $location:ty, $value_type:ty, $scalar:ident, $fn_name:ident, $desc:ident) => {
        #[doc = concat!("Atomically replaces a `", stringify!($value_type), "` location with `value` if it holds `compare`.")]
        ///
        /// The comparison is on bit patterns. Returns the old value whether
        /// or not the exchange took place; the exchange happened if and only
        /// if the returned value has the bit pattern of `compare`.
        ///
        #[doc = concat!("Intrinsic descriptor: [`", stringify!($desc), "`].")]
        #[inline]
        pub fn $fn_name(
            location: &$location,
            compare: $value_type,
            value: $value_type,
        ) -> $value_type {
            $crate::atomic::traits::AtomicLocation::compare_exchange(location, compare, value)
        }

        impl_entry_points!(@descriptor $fn_name, $desc, CompareExchange, $scalar, Native);
    };

    (@entry cas [$op:ident], $location:ty, $value_type:ty, $scalar:ident, $fn_name:ident, $desc:ident) => {
        #[doc = concat!("Atomically applies [`", stringify!($op), "`] to a `", stringify!($value_type), "` location, returning the old value.")]
        ///
        /// Lowers to the compare-exchange retry loop of [`make_atomic`].
        ///
        #[doc = concat!("Intrinsic descriptor: [`", stringify!($desc), "`].")]
        ///
        #[doc = concat!("[`", stringify!($op), "`]: crate::atomic::combine::", stringify!($op))]
        /// [`make_atomic`]: crate::atomic::engine::make_atomic
        #[inline]
        pub fn $fn_name(location: &$location, value: $value_type) -> $value_type {
            $crate::atomic::engine::make_atomic(location, value, $crate::atomic::combine::$op)
        }

        #[doc = concat!("Intrinsic descriptor of [`", stringify!($fn_name), "`].")]
        pub const $desc: $crate::atomic::intrinsic::IntrinsicDescriptor =
            $crate::atomic::intrinsic::IntrinsicDescriptor::new(
                stringify!($fn_name),
                <$crate::atomic::combine::$op as $crate::atomic::traits::Combine<$value_type>>::KIND,
                $crate::atomic::intrinsic::ScalarKind::$scalar,
                $crate::atomic::intrinsic::Lowering::CasLoop,
            );
    };

    (@descriptor $fn_name:ident, $desc:ident, $kind:ident, $scalar:ident, $lowering:ident) => {
        #[doc = concat!("Intrinsic descriptor of [`", stringify!($fn_name), "`].")]
        pub const $desc: $crate::atomic::intrinsic::IntrinsicDescriptor =
            $crate::atomic::intrinsic::IntrinsicDescriptor::new(
                stringify!($fn_name),
                $crate::atomic::intrinsic::OperationKind::$kind,
                $crate::atomic::intrinsic::ScalarKind::$scalar,
                $crate::atomic::intrinsic::Lowering::$lowering,
            );
    };

    (
        $location:ty, $value_type:ty, $scalar:ident;
        $($flavor:ident $([$op:ident])? => $fn_name:ident, $desc:ident;)+
    ) => {
        $(
            impl_entry_points!(
                @entry $flavor $([$op])?, $location, $value_type, $scalar, $fn_name, $desc
            );
        )+

        /// Descriptors of every entry point of this scalar type.
        pub(crate) const DESCRIPTORS: &[$crate::atomic::intrinsic::IntrinsicDescriptor] =
            &[$($desc),+];
    };
}
