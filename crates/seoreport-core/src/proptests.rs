//! Property-based tests for period, rows, and rendering.
