//! Sequential execution of the cases and the run summary

use std::fmt;
use std::time::{Duration, Instant};

use crate::cases::{Case, Outcome};
use crate::client::AuthClient;
use crate::config::SuiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Passed,
    Skipped,
    /// An assertion did not hold
    Failed,
    /// The case could not be carried out (transport, malformed body)
    Error,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Passed => "ok",
            Verdict::Skipped => "skipped",
            Verdict::Failed => "FAILED",
            Verdict::Error => "ERROR",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct CaseReport {
    pub case: Case,
    pub verdict: Verdict,
    /// Skip reason or failure message
    pub message: Option<String>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub reports: Vec<CaseReport>,
    pub elapsed: Duration,
}

impl Summary {
    pub fn count(&self, verdict: Verdict) -> usize {
        self.reports
            .iter()
            .filter(|report| report.verdict == verdict)
            .count()
    }

    /// Skipped cases do not break a run
    pub fn success(&self) -> bool {
        self.count(Verdict::Failed) == 0 && self.count(Verdict::Error) == 0
    }

    pub fn get(&self, case: Case) -> Option<&CaseReport> {
        self.reports.iter().find(|report| report.case == case)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "test result: {}. {} passed; {} failed; {} errored; {} skipped; finished in {:.2}s",
            if self.success() { "ok" } else { "FAILED" },
            self.count(Verdict::Passed),
            self.count(Verdict::Failed),
            self.count(Verdict::Error),
            self.count(Verdict::Skipped),
            self.elapsed.as_secs_f64()
        )
    }
}

pub struct Runner {
    client: AuthClient,
    verbose: bool,
}

impl Runner {
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            client: AuthClient::new(config),
            verbose: true,
        }
    }

    /// Do not print per-case lines; results are only returned
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }

    pub fn client(&self) -> &AuthClient {
        &self.client
    }

    pub async fn run_all(&self) -> Summary {
        self.run(&Case::ALL).await
    }

    pub async fn run(&self, cases: &[Case]) -> Summary {
        let start = Instant::now();
        let mut reports = Vec::with_capacity(cases.len());

        tracing::info!(
            "Running {} cases against {}",
            cases.len(),
            self.client.config().base_url
        );

        if self.verbose {
            println!("\nrunning {} cases", cases.len());
        }

        for &case in cases {
            let report = self.run_case(case).await;

            if self.verbose {
                println!("case {} ... {}", case, report.verdict);
            }

            reports.push(report);
        }

        let summary = Summary {
            reports,
            elapsed: start.elapsed(),
        };

        if self.verbose {
            print_failures(&summary);
            println!("\n{}\n", summary);
        }

        summary
    }

    pub async fn run_case(&self, case: Case) -> CaseReport {
        let start = Instant::now();
        let result = case.run(&self.client).await;
        let elapsed = start.elapsed();

        let (verdict, message) = match result {
            Ok(Outcome::Passed) => {
                tracing::info!("{} passed in {:?}", case, elapsed);
                (Verdict::Passed, None)
            }
            Ok(Outcome::Skipped(reason)) => {
                tracing::warn!("{} skipped: {}", case, reason);
                (Verdict::Skipped, Some(reason))
            }
            Err(e) if e.is_assertion() => {
                tracing::error!("{} failed: {}", case, e);
                (Verdict::Failed, Some(e.to_string()))
            }
            Err(e) => {
                tracing::error!("{} errored: {}", case, e);
                (Verdict::Error, Some(e.to_string()))
            }
        };

        CaseReport {
            case,
            verdict,
            message,
            elapsed,
        }
    }
}

fn print_failures(summary: &Summary) {
    let failures: Vec<_> = summary
        .reports
        .iter()
        .filter(|report| matches!(report.verdict, Verdict::Failed | Verdict::Error))
        .collect();

    if failures.is_empty() {
        return;
    }

    println!("\nfailures:\n");
    for report in failures {
        println!("---- {} ({}) ----", report.case, report.case.description());
        if let Some(message) = &report.message {
            println!("{}\n", message);
        }
    }
}
