//! Parsers shared by the `parse-int` and `parse-env` binaries.

pub mod parse;
