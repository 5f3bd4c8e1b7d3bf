//! Unit tests for workspace discovery, pooling and resolution.

mod support;
