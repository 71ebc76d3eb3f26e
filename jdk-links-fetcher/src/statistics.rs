#[derive(Debug)]
pub struct Statistics {
    pub resolved_packages: usize,
    pub unavailable: Vec<String>,
    pub failures: Vec<ErrorReport>,
}

/// Tallies the outcome of every package lookup of a run.
#[derive(Debug, Default)]
pub struct StatisticsCollector {
    resolved_packages: usize,
    unavailable: Vec<String>,
    failures: Vec<ErrorReport>,
}

impl StatisticsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_resolved(&mut self) {
        self.resolved_packages += 1;
    }

    /// The catalog answered but had no package for the lookup.
    pub fn record_unavailable(&mut self, task_name: impl Into<String>) {
        let task_name = task_name.into();
        tracing::warn!("No package found for {}", task_name);

        self.unavailable.push(task_name);
    }

    pub fn record_failed(
        &mut self,
        task_name: impl Into<String>,
        error: Box<dyn std::error::Error + Send + 'static>,
    ) {
        let task_name = task_name.into();
        tracing::warn!("Failed to fetch {}: {}", task_name, error);

        let mut src = error.source();
        while let Some(err) = src {
            tracing::warn!("-> Caused by: {}", err);
            src = err.source();
        }

        self.failures.push(ErrorReport { task_name, error });
    }

    pub fn finish(self) -> Statistics {
        Statistics {
            resolved_packages: self.resolved_packages,
            unavailable: self.unavailable,
            failures: self.failures,
        }
    }
}

#[derive(Debug)]
pub struct ErrorReport {
    pub task_name: String,
    pub error: Box<dyn std::error::Error + Send + 'static>,
}
