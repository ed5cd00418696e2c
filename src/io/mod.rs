//! CSV boundary: load series import, hourly record and load export.

pub mod export;
pub mod import;
