//! Property test suites

mod drag_drop_tests;
mod strategies;
mod tree_store_tests;
