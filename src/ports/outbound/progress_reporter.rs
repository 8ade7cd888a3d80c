/// ProgressReporter port for user-facing progress output
///
/// Keeps console output out of the domain services; the importer reports
/// skipped sections and per-entry progress through it.
pub trait ProgressReporter {
    /// Reports a progress milestone
    fn report(&self, message: &str);

    /// Reports position within a counted step
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Items in the step
    /// * `message` - Optional label for the step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or non-fatal problem (e.g. a missing manifest section)
    fn report_error(&self, message: &str);

    /// Reports the end of an operation
    fn report_completion(&self, message: &str);
}
