//! Property-based tests for exact scalar arithmetic.
