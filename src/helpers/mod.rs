//! Helper functions shared across rendering
//!
//! `date` backs both the `formatDate` template helper and the
//! timestamp-string wire encoding of post dates.

pub mod date;
