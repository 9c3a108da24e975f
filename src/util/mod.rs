//! Browser utilities that are not state or network concerns.

pub mod storage;
