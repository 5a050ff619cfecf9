//! Property-based tests for carousel, truncation and avatar arithmetic.
