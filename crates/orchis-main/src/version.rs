// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

/// Crate version, taken from Cargo.toml at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
