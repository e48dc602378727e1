use crate::error::Result;
use crate::extract::{
    ExtractRule, default_name_rules, default_price_rules, extract_record,
};
use crate::page::{Selector, SnapshotSource};
use crate::report::identity::{identity, SeenSet};
use crate::report::sink::{LogSink, ReportSink};
use crate::report::visibility::is_sufficiently_visible;
use std::time::{Duration, Instant};

/// Events that request a check pass
///
/// All three map to the same action; the distinction only matters for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The page finished loading (fires once)
    PageReady,
    /// The user scrolled
    Scroll,
    /// The viewport changed size
    Resize,
}

/// Where the reporter is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    /// No pass scheduled or running; the next signal schedules one
    Idle,
    /// A pass is scheduled or running; further signals are dropped
    Checking,
}

/// What one completed pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// Candidate cards found by the structural selector
    pub candidates: usize,
    /// Cards reported for the first time this pass
    pub reported: usize,
}

/// Configuration for a [`Reporter`]
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Structural selector that finds product cards
    pub card_selector: Selector,

    /// Ordered name lookup rules, highest priority first
    pub name_rules: Vec<ExtractRule>,

    /// Ordered price lookup rules, highest priority first
    pub price_rules: Vec<ExtractRule>,

    /// Delay between a signal and the pass it schedules, coalescing bursts
    /// of scroll events into a single pass
    pub check_delay: Duration,
}

impl ReporterConfig {
    /// Configuration with the default rule lists and a custom card selector
    pub fn for_selector(card_selector: Selector) -> Self {
        Self {
            card_selector,
            ..Self::default()
        }
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            // `Selector::parse` only fails on malformed literals
            card_selector: Selector::parse(".product-card")
                .unwrap_or_else(|e| panic!("{e}")),
            name_rules: default_name_rules(),
            price_rules: default_price_rules(),
            check_delay: Duration::from_millis(120),
        }
    }
}

/// The visibility-triggered extraction-and-dedup loop
///
/// Owns the only mutable state in the system: the seen-set and the
/// Idle/Checking flag. Signals schedule a pass after a short coalescing
/// delay; signals arriving while a pass is scheduled or running are dropped,
/// not queued. Passes never overlap and each one consumes a fresh snapshot.
pub struct Reporter {
    config: ReporterConfig,
    sink: Box<dyn ReportSink>,
    seen: SeenSet,
    state: CheckState,
    due_at: Option<Instant>,
}

impl Reporter {
    /// Create a reporter that writes through the `log` facade
    pub fn new(config: ReporterConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink))
    }

    /// Create a reporter writing to a custom sink
    pub fn with_sink(config: ReporterConfig, sink: Box<dyn ReportSink>) -> Self {
        Self {
            config,
            sink,
            seen: SeenSet::new(),
            state: CheckState::Idle,
            due_at: None,
        }
    }

    /// Current cycle state
    pub fn state(&self) -> CheckState {
        self.state
    }

    /// Number of distinct products reported so far this session
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Handle a trigger signal
    ///
    /// Schedules a pass and returns true if the reporter was idle; drops the
    /// signal and returns false otherwise. Dropped signals produce no pass of
    /// their own once the scheduled one finishes.
    pub fn handle(&mut self, signal: Signal) -> bool {
        match self.state {
            CheckState::Idle => {
                self.state = CheckState::Checking;
                self.due_at = Some(Instant::now() + self.config.check_delay);
                log::debug!("{:?} scheduled a check pass", signal);
                true
            }
            CheckState::Checking => {
                log::debug!("{:?} dropped, a check pass is already pending", signal);
                false
            }
        }
    }

    /// Run the scheduled pass if its coalescing delay has elapsed
    ///
    /// Returns `Ok(None)` when no pass is due yet. When a pass runs, the
    /// reporter transitions back to Idle unconditionally, whether the pass
    /// reported anything, found zero candidates, or the snapshot failed.
    pub fn poll<S: SnapshotSource>(
        &mut self,
        source: &mut S,
        now: Instant,
    ) -> Result<Option<PassOutcome>> {
        match self.due_at {
            Some(due) if now >= due => {}
            _ => return Ok(None),
        }

        let result = self.run_pass(source);
        self.state = CheckState::Idle;
        self.due_at = None;
        result.map(Some)
    }

    /// One full pass: enumerate, filter, extract, identify, report, mark seen
    fn run_pass<S: SnapshotSource>(&mut self, source: &mut S) -> Result<PassOutcome> {
        let snapshot = source.snapshot()?;
        let candidates = snapshot.candidates(&self.config.card_selector);

        if candidates.is_empty() {
            self.sink.diagnostic("no product cards found on the page");
            return Ok(PassOutcome {
                candidates: 0,
                reported: 0,
            });
        }

        let mut reported = 0;
        for (position, card) in candidates.iter().enumerate() {
            // Position is the index within the full candidate list, counted
            // before the visibility filter
            let Some(bbox) = &card.bounding_box else {
                continue;
            };
            if !is_sufficiently_visible(bbox, snapshot.viewport_height) {
                continue;
            }
            let Some(record) =
                extract_record(card, &self.config.name_rules, &self.config.price_rules)
            else {
                continue;
            };

            let key = identity(&record.name, &record.price, position);
            if self.seen.mark(key) {
                self.sink.product(&record.name, &record.price);
                reported += 1;
            }
        }

        log::debug!(
            "check pass finished: {} candidates, {} newly reported",
            candidates.len(),
            reported
        );

        Ok(PassOutcome {
            candidates: candidates.len(),
            reported,
        })
    }
}
