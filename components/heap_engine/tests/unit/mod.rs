//! Unit tests for heap_engine

mod allocation_test;
mod collection_test;
