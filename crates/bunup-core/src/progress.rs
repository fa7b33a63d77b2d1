/// Progress of a scaffold run.
///
/// The pipeline emits these in order; the binary turns them into spinner
/// updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A step began.
    StepStarted {
        step: usize,
        total: usize,
        message: String,
    },
    /// Overall result; always the last event of a run.
    Finished { success: bool, message: String },
}

impl ProgressEvent {
    pub fn message(&self) -> &str {
        match self {
            ProgressEvent::StepStarted { message, .. } | ProgressEvent::Finished { message, .. } => {
                message
            }
        }
    }
}

/// Plain-text rendering for non-interactive output.
pub fn format_progress(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::StepStarted {
            step,
            total,
            message,
        } => format!("[{step}/{total}] {message}"),
        ProgressEvent::Finished { success: true, message } => format!("\u{2713} {message}"),
        ProgressEvent::Finished {
            success: false,
            message,
        } => format!("\u{2717} {message}"),
    }
}
