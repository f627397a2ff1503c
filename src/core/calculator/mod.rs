//! Attendance statistics per subject.
//!
//! All threshold math is done on integers: the threshold is kept as basis
//! points so ceiling and floor never suffer from float rounding.

pub mod tally;
pub mod threshold;

pub use tally::{Tally, percentage};
pub use threshold::{
    COMPLIANCE_THRESHOLD, Threshold, classes_missable, classes_missable_with, classes_needed,
    classes_needed_with, is_compliant, missable_for, needed_for,
};
