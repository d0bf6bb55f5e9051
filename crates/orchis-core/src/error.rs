// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

use orchis_types::SubsystemName;
use thiserror::Error;

/// Errors raised by local dashboard state transitions.
///
/// The core otherwise works only with well-formed data from the supplier;
/// these cover the cases where a user action targets something that is not in
/// the current state, which should surface loudly rather than render wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The control collection has no entry for this subsystem
    #[error("no '{0}' entry in the control collection")]
    UnknownSubsystem(SubsystemName),
}
