use crate::browser::session::PageSession;
use crate::error::Result;
use crate::report::{Reporter, Signal};
use std::time::{Duration, Instant};

/// Drives a [`Reporter`] against a live page
///
/// Chrome does not push scroll events over CDP, so the watcher polls the
/// scroll offset and viewport height on a short tick and synthesizes the
/// `Scroll`/`Resize` signals the reporter expects. Everything runs on the
/// calling thread; the reporter's coalescing delay is the only thing that
/// separates a signal from its pass.
pub struct PageWatcher {
    session: PageSession,
    reporter: Reporter,
    tick: Duration,
}

impl PageWatcher {
    /// Pair a session with a reporter
    pub fn new(session: PageSession, reporter: Reporter) -> Self {
        Self {
            session,
            reporter,
            tick: Duration::from_millis(50),
        }
    }

    /// Builder method: set the poll interval
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// The reporter, for inspecting state between runs
    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// The session, for navigation and scrolling
    pub fn session(&self) -> &PageSession {
        &self.session
    }

    /// Watch the page for a bounded duration
    ///
    /// Emits the startup and readiness lines, runs the initial page-ready
    /// pass, then keeps polling for scroll and viewport changes until the
    /// duration elapses. Returns the number of products reported so far this
    /// session.
    pub fn watch(&mut self, duration: Duration) -> Result<usize> {
        log::info!("product watch starting");

        self.reporter.handle(Signal::PageReady);
        self.drain_pending()?;

        log::info!("product watch ready, watching for scroll");

        let mut last_scroll = self.session.scroll_top()?;
        let mut last_viewport = self.session.viewport_height()?;

        let deadline = Instant::now() + duration;
        while Instant::now() < deadline {
            let scroll = self.session.scroll_top()?;
            let viewport = self.session.viewport_height()?;

            if viewport != last_viewport {
                self.reporter.handle(Signal::Resize);
                last_viewport = viewport;
            } else if scroll != last_scroll {
                self.reporter.handle(Signal::Scroll);
                last_scroll = scroll;
            }

            self.reporter.poll(&mut self.session, Instant::now())?;
            std::thread::sleep(self.tick);
        }

        // One last poll so a pass scheduled near the deadline still runs
        self.drain_pending()?;

        Ok(self.reporter.seen_count())
    }

    /// Block until the currently scheduled pass (if any) has run
    fn drain_pending(&mut self) -> Result<()> {
        loop {
            match self.reporter.state() {
                crate::report::CheckState::Idle => return Ok(()),
                crate::report::CheckState::Checking => {
                    if self.reporter.poll(&mut self.session, Instant::now())?.is_some() {
                        return Ok(());
                    }
                    std::thread::sleep(Duration::from_millis(10));
                }
            }
        }
    }
}
