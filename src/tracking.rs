// External link tracking - pluggable sink for outbound resource clicks

use tracing::info;

/// Sink for outbound resource destinations. One call per click, best effort,
/// no batching or retry.
pub trait LinkTracker {
    fn record(&self, destination: &str);
}

/// Default tracker: a single diagnostic log line per destination.
pub struct LogTracker;

impl LinkTracker for LogTracker {
    fn record(&self, destination: &str) {
        info!(destination, "external resource opened");
    }
}

#[cfg(test)]
pub mod test_support {
    use super::LinkTracker;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Test tracker that remembers every recorded destination. The `recorded`
    /// handle stays usable after the tracker is handed to a controller.
    pub struct RecordingTracker {
        pub recorded: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingTracker {
        pub fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
            let recorded = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    recorded: recorded.clone(),
                },
                recorded,
            )
        }
    }

    impl LinkTracker for RecordingTracker {
        fn record(&self, destination: &str) {
            self.recorded.borrow_mut().push(destination.to_string());
        }
    }
}
