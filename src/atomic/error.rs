/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Intrinsic Errors
//!
//! Errors raised by the intrinsic metadata layer. The RMW operations
//! themselves cannot fail.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

use crate::atomic::intrinsic::{
    OperationKind,
    ScalarKind,
};

/// Errors returned when resolving intrinsic metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntrinsicError {
    /// No entry point is registered under the given symbol name.
    #[error("unknown atomic intrinsic `{0}`")]
    UnknownIntrinsic(String),

    /// The text does not name an operation kind.
    #[error("unknown atomic operation `{0}`")]
    UnknownOperation(String),

    /// The text does not name a supported scalar type.
    #[error("unknown atomic scalar type `{0}`")]
    UnknownScalar(String),

    /// The operation is not defined for the scalar type.
    #[error("atomic {kind} is not supported for {scalar}")]
    Unsupported {
        /// The requested operation.
        kind: OperationKind,
        /// The requested scalar type.
        scalar: ScalarKind,
    },
}
