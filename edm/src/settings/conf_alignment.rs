/// What to do when the gold and test corpora don't have the same length
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MisalignmentPolicy {
    /// Score the aligned prefix and report the surplus as a warning
    Truncate,
    /// Report the surplus as an error
    Strict
}

impl Default for MisalignmentPolicy {
    fn default() -> MisalignmentPolicy {
        MisalignmentPolicy::Truncate
    }
}
