//! PDF export of the current view
//!
//! Export never blocks the frame loop: the capture happens on the render
//! thread, encoding and writing on a worker. [`ExportQueue`] keeps the
//! workers until they finish and logs how each one went.

pub mod pdf;

pub use pdf::{file_name, ExportJob, PageSize, PdfExporter};

/// Export workers that have not been reaped yet.
#[derive(Default)]
pub struct ExportQueue {
    jobs: Vec<ExportJob>,
}

impl ExportQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, job: ExportJob) {
        self.jobs.push(job);
    }

    pub fn pending(&self) -> usize {
        self.jobs.len()
    }

    /// Logs and drops every finished job. Returns how many were reaped.
    pub fn reap(&mut self) -> usize {
        let (finished, running): (Vec<_>, Vec<_>) = self.jobs.drain(..).partition(ExportJob::is_finished);
        self.jobs = running;

        let count = finished.len();
        finished.into_iter().for_each(log_outcome);
        count
    }

    /// Blocks until every job has finished.
    pub fn wait_all(&mut self) {
        self.jobs.drain(..).for_each(log_outcome);
    }
}

fn log_outcome(job: ExportJob) {
    let path = job.path().to_path_buf();
    match job.join() {
        Ok(written) => log::info!("Exported {}", written.display()),
        Err(e) => log::error!("Export of {} failed: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::rendering::CapturedFrame;

    #[test]
    fn test_queue_drains_finished_jobs() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = PdfExporter::new(dir.path());
        let mut queue = ExportQueue::new();

        let frame = CapturedFrame {
            width: 2,
            height: 2,
            pixels: vec![255; 16],
        };
        for name in ["a.pdf", "b.pdf"] {
            if let Some(job) = exporter.spawn(name, Some(frame.clone())) {
                queue.push(job);
            }
        }
        assert_eq!(queue.pending(), 2);

        queue.wait_all();
        assert_eq!(queue.pending(), 0);
        assert_eq!(queue.reap(), 0);
        assert!(dir.path().join("a.pdf").exists());
        assert!(dir.path().join("b.pdf").exists());
    }
}
