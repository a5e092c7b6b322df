use crate::library::logger::interface::{join_namespace, Logger};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub level: Level,
    pub namespace: Option<String>,
    pub message: String,
}

/// Keeps every line in memory so tests can assert on diagnostics.
#[derive(Debug, Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    lines: Arc<Mutex<Vec<LogLine>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.level == Level::Error)
            .map(|line| line.message)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        let line = LogLine {
            level,
            namespace: self.namespace.clone(),
            message: message.to_string(),
        };
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}

impl Logger for LoggerFake {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerFake {
            namespace: Some(join_namespace(self.namespace.as_deref(), namespace)),
            lines: self.lines.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaces_nest_and_share_lines() {
        let logger = LoggerFake::new();
        let child = logger.with_namespace("classifier").with_namespace("http");

        child.error("connection refused");
        logger.info("started");

        let lines = logger.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].namespace.as_deref(), Some("classifier:http"));
        assert_eq!(lines[0].level, Level::Error);
        assert_eq!(lines[1].namespace, None);
        assert_eq!(logger.errors(), vec!["connection refused".to_string()]);
    }
}
