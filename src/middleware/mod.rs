// ABOUTME: HTTP middleware for CORS, request IDs, and request spans
// ABOUTME: Layers applied to the whole router by the server module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and correlation
pub use self::tracing::{
    make_request_span, propagate_request_id_layer, set_request_id_layer, REQUEST_ID_HEADER,
};
