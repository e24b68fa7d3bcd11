//! Tests for the input deck model and writer.
