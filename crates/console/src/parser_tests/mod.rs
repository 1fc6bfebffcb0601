// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod helpers;

mod chains;
mod errors;
mod flags;
mod properties;
mod segments;
