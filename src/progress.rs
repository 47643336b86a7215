//! For tracking conversion progress and aborting early

use std::path::Path;

/// A trait that is used to report progress to some consumer.
pub trait ProgressReporter: Send {
    /// Called after each frame has been written.
    ///
    /// This method may return `false` to abort processing.
    fn increase(&mut self) -> bool;

    /// Called before a frame file is decoded
    fn processing(&mut self, _frame_path: &Path) {}

    /// Log an incorrect use of the library, such as two frames sharing a frame number
    #[cold]
    fn error(&mut self, _message: String) {}

    /// Called once the whole file has been written
    fn done(&mut self, _msg: &str) {}
}

/// No-op progress reporter
pub struct NoProgress {}

impl ProgressReporter for NoProgress {
    fn increase(&mut self) -> bool {
        true
    }

    fn done(&mut self, _msg: &str) {}
}
