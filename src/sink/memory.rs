use super::{Channel, Console};
use parking_lot::Mutex;
use serde_json::Value;

/// One recorded channel call.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleWrite {
    pub channel: Channel,
    pub header: String,
    pub extras: Vec<Value>,
}

/// Records every write instead of printing it.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    writes: Mutex<Vec<ConsoleWrite>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all writes so far, oldest first.
    pub fn writes(&self) -> Vec<ConsoleWrite> {
        self.writes.lock().clone()
    }

    pub fn writes_on(&self, channel: Channel) -> Vec<ConsoleWrite> {
        self.writes
            .lock()
            .iter()
            .filter(|write| write.channel == channel)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.writes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.writes.lock().clear();
    }

    fn record(&self, channel: Channel, header: &str, extras: &[Value]) {
        self.writes.lock().push(ConsoleWrite {
            channel,
            header: header.to_string(),
            extras: extras.to_vec(),
        });
    }
}

impl Console for MemoryConsole {
    fn debug(&self, header: &str, extras: &[Value]) {
        self.record(Channel::Debug, header, extras);
    }

    fn log(&self, header: &str, extras: &[Value]) {
        self.record(Channel::Log, header, extras);
    }

    fn warn(&self, header: &str, extras: &[Value]) {
        self.record(Channel::Warn, header, extras);
    }

    fn error(&self, header: &str, extras: &[Value]) {
        self.record(Channel::Error, header, extras);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_records_in_order() {
        let console = MemoryConsole::new();
        console.log("first", &[]);
        console.error("second", &[json!("extra")]);

        let writes = console.writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].channel, Channel::Log);
        assert_eq!(writes[0].header, "first");
        assert_eq!(writes[1].channel, Channel::Error);
        assert_eq!(writes[1].extras, vec![json!("extra")]);
    }

    #[test]
    fn test_writes_on_filters_by_channel() {
        let console = MemoryConsole::new();
        console.debug("a", &[]);
        console.warn("b", &[]);
        console.debug("c", &[]);

        let debug_writes = console.writes_on(Channel::Debug);
        assert_eq!(debug_writes.len(), 2);
        assert!(console.writes_on(Channel::Error).is_empty());
    }

    #[test]
    fn test_clear() {
        let console = MemoryConsole::new();
        console.log("a", &[]);
        assert!(!console.is_empty());
        console.clear();
        assert!(console.is_empty());
    }

    #[test]
    fn test_concurrent_writes() {
        let console = Arc::new(MemoryConsole::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let console = console.clone();
                thread::spawn(move || {
                    for j in 0..50 {
                        console.log(&format!("thread {i} write {j}"), &[]);
                    }
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().is_ok());
        }

        assert_eq!(console.len(), 400);
    }
}
