//! Constant values for the pqlat library
//!
//! Raw parameter catalogs only. Validation and derived quantities live with
//! the schemes in `pqlat-pke`.

pub mod pqc;
