//! Client-side filtering of the loaded feed

use jobmatch_domain::Job;

/// Location choices offered by the listing screen
pub const LOCATION_OPTIONS: [&str; 4] = ["Remote", "Colombo", "London", "New York"];

/// Salary choices offered by the listing screen
pub const SALARY_OPTIONS: [&str; 3] = ["<$80k", "$80k-$120k", ">$120k"];

/// Filter criteria for the job feed
///
/// - `query` matches title or company, ignoring case
/// - `location` must appear in the job location as typed
/// - `salary` is a selected label; its first `$` is dropped and the rest
///   must appear in the job salary
///
/// Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub query: String,
    pub location: Option<String>,
    pub salary: Option<String>,
}

impl JobFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    /// Select a location, or clear it when the same one is selected again.
    pub fn toggle_location(&mut self, location: &str) {
        toggle(&mut self.location, location);
    }

    /// Select a salary label, or clear it when the same one is selected
    /// again.
    pub fn toggle_salary(&mut self, salary: &str) {
        toggle(&mut self.salary, salary);
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && active(&self.location).is_none() && active(&self.salary).is_none()
    }

    pub fn matches(&self, job: &Job) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = job.title.to_lowercase().contains(&query)
            || job.company.to_lowercase().contains(&query);

        let matches_location = active(&self.location).map_or(true, |wanted| {
            job.location.as_deref().is_some_and(|location| location.contains(wanted))
        });

        let matches_salary = active(&self.salary).map_or(true, |label| {
            let needle = label.replacen('$', "", 1);
            job.salary.as_deref().is_some_and(|salary| salary.contains(&needle))
        });

        matches_search && matches_location && matches_salary
    }

    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn toggle(slot: &mut Option<String>, value: &str) {
    if slot.as_deref() == Some(value) {
        *slot = None;
    } else {
        *slot = Some(value.to_string());
    }
}
