use super::client::FilmSubmitter;
use super::error::TriggerError;
use super::models::{FilmEntry, TriggerRequest};
use anyhow::Result;
use tracing::{info, warn};

#[derive(Debug, Default, PartialEq)]
pub struct RetryReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

/// Films staged locally before being sent as one batch. Entries whose
/// submission failed are kept for a manual retry.
pub struct SubmissionQueue<S: FilmSubmitter> {
    submitter: S,
    staged: Vec<FilmEntry>,
    failed: Vec<FilmEntry>,
}

impl<S: FilmSubmitter> SubmissionQueue<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            submitter,
            staged: vec![],
            failed: vec![],
        }
    }

    /// Only the slug is checked here, the server validates the rest.
    pub fn stage(&mut self, slug: &str, rating_i: f64, rating_v: f64) -> Result<(), TriggerError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(TriggerError::MissingSlug);
        }
        self.staged.push(FilmEntry::new(slug, rating_i, rating_v));
        Ok(())
    }

    pub fn unstage(&mut self, slug: &str) -> Option<FilmEntry> {
        let position = self.staged.iter().position(|e| e.slug == slug)?;
        Some(self.staged.remove(position))
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn staged(&self) -> &[FilmEntry] {
        &self.staged
    }

    pub fn failed(&self) -> &[FilmEntry] {
        &self.failed
    }

    /// Sends every staged film in one call. On failure the staged films move
    /// to the failed list.
    pub async fn submit_all(&mut self) -> Result<usize> {
        if self.staged.is_empty() {
            return Ok(0);
        }
        let request = TriggerRequest::Batch {
            films: std::mem::take(&mut self.staged),
        };
        match self.submitter.submit(&request).await {
            Ok(response) => {
                info!(
                    "Submitted {} films: {}",
                    request.entries().len(),
                    response.message.unwrap_or_default()
                );
                Ok(request.entries().len())
            }
            Err(err) => {
                warn!("Submission of {} films failed: {:#}", request.entries().len(), err);
                if let TriggerRequest::Batch { films } = request {
                    self.failed.extend(films);
                }
                Err(err)
            }
        }
    }

    /// Resends each failed film on its own, one after the other.
    pub async fn retry_failed(&mut self) -> RetryReport {
        let mut report = RetryReport::default();
        let mut still_failing = vec![];
        for entry in std::mem::take(&mut self.failed) {
            let request = TriggerRequest::Single(entry);
            let slug = request.entries()[0].slug.clone();
            match self.submitter.submit(&request).await {
                Ok(_) => report.succeeded.push(slug),
                Err(err) => {
                    warn!("Retry of {} failed: {:#}", slug, err);
                    report.failed.push(slug);
                    if let TriggerRequest::Single(entry) = request {
                        still_failing.push(entry);
                    }
                }
            }
        }
        self.failed = still_failing;
        report
    }
}
