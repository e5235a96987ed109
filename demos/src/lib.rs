// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Corbel crates. See `examples/`.
