// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request builder, the scripted provider, and router builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
pub mod scripted_provider;
pub mod test_utils;
