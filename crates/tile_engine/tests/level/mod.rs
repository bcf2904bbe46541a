//! Tests for the grid store, the level format, resize and flips
