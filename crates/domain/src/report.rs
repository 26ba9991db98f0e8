use crate::notification::SinkOutcome;

/// Counters for one completed pipeline run against one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainCheck {
    /// Names not previously in the baseline, resolved or not.
    pub new_subdomains: usize,
    pub resolved: usize,
    pub notified: usize,
    pub sink_failures: usize,
    /// Set when the new names could not be appended to the baseline.
    pub persist_error: Option<String>,
}

impl DomainCheck {
    pub fn new(new_subdomains: usize) -> Self {
        Self {
            new_subdomains,
            ..Self::default()
        }
    }

    pub fn record_delivery(&mut self, outcomes: &[SinkOutcome]) {
        self.notified += 1;
        self.sink_failures += outcomes.iter().filter(|o| !o.is_success()).count();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainOutcome {
    Completed { domain: String, check: DomainCheck },
    Failed { domain: String, reason: String },
}

impl DomainOutcome {
    pub fn domain(&self) -> &str {
        match self {
            Self::Completed { domain, .. } | Self::Failed { domain, .. } => domain,
        }
    }

    /// Failed outright, or completed without persisting its new names.
    pub fn is_failure(&self) -> bool {
        match self {
            Self::Completed { check, .. } => check.persist_error.is_some(),
            Self::Failed { .. } => true,
        }
    }

    pub fn new_subdomains(&self) -> Option<usize> {
        match self {
            Self::Completed { check, .. } => Some(check.new_subdomains),
            Self::Failed { .. } => None,
        }
    }

    /// Human-readable line written to the run summary.
    pub fn summary_line(&self) -> String {
        match self {
            Self::Completed { domain, check } => {
                format!("Found {} new subdomains for {}", check.new_subdomains, domain)
            }
            Self::Failed { domain, reason } => format!("Failed to check {}: {}", domain, reason),
        }
    }
}

/// Per-domain outcomes of one invocation, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchReport {
    pub outcomes: Vec<DomainOutcome>,
}

impl WatchReport {
    pub fn push(&mut self, outcome: DomainOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn total_new(&self) -> usize {
        self.outcomes.iter().filter_map(DomainOutcome::new_subdomains).sum()
    }

    pub fn failed(&self) -> impl Iterator<Item = &DomainOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}
