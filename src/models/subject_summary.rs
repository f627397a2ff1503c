use serde::Serialize;

/// Per-subject statistics shown by `view summary`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub present: u32,
    pub total: u32,
    pub percentage: f64,
    pub needed: u32,
    pub missable: u32,
    pub compliant: bool,
}
