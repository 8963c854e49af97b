//! In-memory job feed backing the listing screen

use std::collections::HashSet;

use jobmatch_domain::{Job, JobSearchParams};

/// Jobs loaded so far plus the latest search results
#[derive(Debug, Clone, Default)]
pub struct JobFeed {
    jobs: Vec<Job>,
    search_results: Vec<Job>,
}

impl JobFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the feed, or append to it for infinite scrolling.
    ///
    /// Appended jobs whose id is already in the feed are dropped, and a batch
    /// that repeats an id keeps only its first occurrence. Returns the number
    /// of jobs added.
    pub fn apply(&mut self, jobs: Vec<Job>, append: bool) -> usize {
        if !append {
            self.jobs = jobs;
            return self.jobs.len();
        }

        let mut seen: HashSet<String> = self.jobs.iter().map(|job| job.id.clone()).collect();
        let before = self.jobs.len();
        self.jobs.extend(jobs.into_iter().filter(|job| seen.insert(job.id.clone())));
        self.jobs.len() - before
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    /// Parameters for the page after the jobs already loaded.
    pub fn next_page(&self, page_size: u32) -> JobSearchParams {
        JobSearchParams {
            q: None,
            limit: Some(page_size),
            offset: Some(u32::try_from(self.jobs.len()).unwrap_or(u32::MAX)),
        }
    }

    pub fn set_search_results(&mut self, results: Vec<Job>) {
        self.search_results = results;
    }

    pub fn search_results(&self) -> &[Job] {
        &self.search_results
    }

    pub fn clear_search_results(&mut self) {
        self.search_results.clear();
    }
}
