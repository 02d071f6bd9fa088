/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Intrinsic Metadata
//!
//! Static descriptors attached to every typed entry point. A kernel compiler
//! uses them to recognize a call to an entry point and, when its backend has
//! a native atomic instruction for the same operation, type and signedness,
//! to emit that instruction instead of the portable lowering.
//!
//! The descriptors are never consulted by the entry points at run time.
//!
//! # Example
//!
//! ```rust
//! use prism3_rmw::atomic::intrinsic;
//! use prism3_rmw::{Lowering, OperationKind, ScalarKind};
//!
//! let descriptor = intrinsic::find(OperationKind::Max, ScalarKind::U32).unwrap();
//! assert_eq!(descriptor.name, "atomic_max_u32");
//! assert!(descriptor.tag.unsigned);
//! assert_eq!(descriptor.lowering, Lowering::CasLoop);
//! ```
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::atomic::error::IntrinsicError;

/// Kind of an atomic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OperationKind {
    /// Addition (wrapping for integers).
    Add,
    /// Maximum.
    Max,
    /// Minimum.
    Min,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Unconditional exchange.
    Exchange,
    /// Compare-and-exchange.
    CompareExchange,
}

impl OperationKind {
    /// All operation kinds, in declaration order.
    pub const ALL: [OperationKind; 8] = [
        OperationKind::Add,
        OperationKind::Max,
        OperationKind::Min,
        OperationKind::And,
        OperationKind::Or,
        OperationKind::Xor,
        OperationKind::Exchange,
        OperationKind::CompareExchange,
    ];

    /// Returns the lowercase name used in entry point symbols.
    pub const fn name(self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Max => "max",
            OperationKind::Min => "min",
            OperationKind::And => "and",
            OperationKind::Or => "or",
            OperationKind::Xor => "xor",
            OperationKind::Exchange => "exchange",
            OperationKind::CompareExchange => "compare_exchange",
        }
    }

    /// Returns `true` for `And`, `Or` and `Xor`.
    pub const fn is_bitwise(self) -> bool {
        matches!(
            self,
            OperationKind::And | OperationKind::Or | OperationKind::Xor
        )
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = IntrinsicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| IntrinsicError::UnknownOperation(s.to_owned()))
    }
}

/// Scalar type of an atomic location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScalarKind {
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
    /// IEEE-754 single precision float.
    F32,
    /// IEEE-754 double precision float.
    F64,
}

impl ScalarKind {
    /// All scalar kinds, in declaration order.
    pub const ALL: [ScalarKind; 6] = [
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::F32,
        ScalarKind::F64,
    ];

    /// Returns the Rust name of the scalar type.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
        }
    }

    /// Returns `true` for unsigned integer types.
    pub const fn is_unsigned(self) -> bool {
        matches!(self, ScalarKind::U32 | ScalarKind::U64)
    }

    /// Returns `true` for floating point types.
    pub const fn is_float(self) -> bool {
        matches!(self, ScalarKind::F32 | ScalarKind::F64)
    }

    /// Returns the width of the type in bits.
    pub const fn bit_width(self) -> u32 {
        match self {
            ScalarKind::I32 | ScalarKind::U32 | ScalarKind::F32 => 32,
            ScalarKind::I64 | ScalarKind::U64 | ScalarKind::F64 => 64,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarKind {
    type Err = IntrinsicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarKind::ALL
            .into_iter()
            .find(|scalar| scalar.name() == s)
            .ok_or_else(|| IntrinsicError::UnknownScalar(s.to_owned()))
    }
}

/// The (operation kind, signedness) pair a compiler matches on.
///
/// Unsigned addition is tagged separately from signed addition because it
/// needs wraparound semantics that some backends only offer for one of the
/// two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntrinsicTag {
    /// The operation kind.
    pub kind: OperationKind,
    /// Whether the operands are unsigned integers.
    pub unsigned: bool,
}

impl IntrinsicTag {
    /// Creates a new tag.
    #[inline]
    pub const fn new(kind: OperationKind, unsigned: bool) -> Self {
        Self { kind, unsigned }
    }
}

impl fmt::Display for IntrinsicTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unsigned {
            write!(f, "{}.unsigned", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// How the portable entry point is lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Lowering {
    /// A single native atomic instruction.
    Native,
    /// The compare-exchange retry loop of the RMW engine.
    CasLoop,
}

/// Static descriptor of one typed entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntrinsicDescriptor {
    /// The symbol name of the entry point, e.g. `atomic_add_u32`.
    pub name: &'static str,
    /// The intrinsic tag.
    pub tag: IntrinsicTag,
    /// The scalar type of the location.
    pub scalar: ScalarKind,
    /// How the entry point is implemented in this crate.
    pub lowering: Lowering,
}

impl IntrinsicDescriptor {
    /// Creates a descriptor; the tag's signedness follows `scalar`.
    pub const fn new(
        name: &'static str,
        kind: OperationKind,
        scalar: ScalarKind,
        lowering: Lowering,
    ) -> Self {
        Self {
            name,
            tag: IntrinsicTag::new(kind, scalar.is_unsigned()),
            scalar,
            lowering,
        }
    }

    /// Returns the operation kind.
    #[inline]
    pub const fn kind(&self) -> OperationKind {
        self.tag.kind
    }

    /// Returns `true` if the entry point runs the RMW engine.
    #[inline]
    pub const fn uses_engine(&self) -> bool {
        matches!(self.lowering, Lowering::CasLoop)
    }
}

impl fmt::Display for IntrinsicDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {}]", self.name, self.tag, self.scalar)
    }
}

/// Iterates the descriptors of every typed entry point.
pub fn descriptors() -> impl Iterator<Item = &'static IntrinsicDescriptor> {
    super::atomic_i32::DESCRIPTORS
        .iter()
        .chain(super::atomic_i64::DESCRIPTORS)
        .chain(super::atomic_u32::DESCRIPTORS)
        .chain(super::atomic_u64::DESCRIPTORS)
        .chain(super::atomic_f32::DESCRIPTORS)
        .chain(super::atomic_f64::DESCRIPTORS)
}

/// Resolves an entry point by symbol name.
///
/// # Errors
///
/// Returns [`IntrinsicError::UnknownIntrinsic`] if no entry point has that
/// name.
pub fn lookup(name: &str) -> Result<&'static IntrinsicDescriptor, IntrinsicError> {
    descriptors()
        .find(|descriptor| descriptor.name == name)
        .ok_or_else(|| {
            debug!("No atomic intrinsic registered as `{}`", name);
            IntrinsicError::UnknownIntrinsic(name.to_owned())
        })
}

/// Resolves the entry point implementing `kind` for `scalar`.
///
/// # Errors
///
/// Returns [`IntrinsicError::Unsupported`] if the operation is not defined
/// for the scalar type, e.g. bitwise operations on floats.
pub fn find(
    kind: OperationKind,
    scalar: ScalarKind,
) -> Result<&'static IntrinsicDescriptor, IntrinsicError> {
    descriptors()
        .find(|descriptor| descriptor.kind() == kind && descriptor.scalar == scalar)
        .ok_or_else(|| {
            debug!("Atomic {} has no entry point for {}", kind, scalar);
            IntrinsicError::Unsupported { kind, scalar }
        })
}
