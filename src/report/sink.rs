/// Destination for the watcher's human-readable output
///
/// One product line per newly seen card, plus a diagnostic line when a pass
/// finds no candidate cards at all. There is deliberately no structured
/// output format here.
pub trait ReportSink {
    /// A card was seen for the first time this session
    fn product(&mut self, name: &str, price: &str);

    /// A pass-level diagnostic (currently only the zero-candidates case)
    fn diagnostic(&mut self, message: &str);
}

/// Sink that writes through the `log` facade
#[derive(Debug, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn product(&mut self, name: &str, price: &str) {
        log::info!("Product visible: {} ({})", name, price);
    }

    fn diagnostic(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Sink that collects lines in memory, for tests and embedding consumers
#[derive(Debug, Default)]
pub struct MemorySink {
    /// (name, price) pairs in report order
    pub products: Vec<(String, String)>,

    /// Diagnostic messages in emit order
    pub diagnostics: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for MemorySink {
    fn product(&mut self, name: &str, price: &str) {
        self.products.push((name.to_string(), price.to_string()));
    }

    fn diagnostic(&mut self, message: &str) {
        self.diagnostics.push(message.to_string());
    }
}

/// Shared handle so callers can keep reading a sink after handing it to a
/// reporter
impl<S: ReportSink> ReportSink for std::rc::Rc<std::cell::RefCell<S>> {
    fn product(&mut self, name: &str, price: &str) {
        self.borrow_mut().product(name, price);
    }

    fn diagnostic(&mut self, message: &str) {
        self.borrow_mut().diagnostic(message);
    }
}
