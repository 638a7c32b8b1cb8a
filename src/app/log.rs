use std::collections::VecDeque;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// oldest messages are dropped once the log holds this many
pub const LOG_LIMIT: usize = 200;

/// message log shown at the bottom of the screen
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Log {
    messages: VecDeque<(String, Color)>,
}

impl Log {
    pub fn new() -> Self {
        Self {
            messages: VecDeque::new(),
        }
    }

    pub fn add<T: Into<String>>(&mut self, message: T, color: Color) {
        if self.messages.len() >= LOG_LIMIT {
            self.messages.pop_front();
        }
        self.messages.push_back((message.into(), color));
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &(String, Color)> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_messages_are_dropped() {
        let mut log = Log::new();
        for i in 0..LOG_LIMIT + 5 {
            log.add(format!("message {i}"), Color::White);
        }

        assert_eq!(log.len(), LOG_LIMIT);
        assert_eq!(log.iter().next().map(|(m, _)| m.as_str()), Some("message 5"));
        let newest = format!("message {}", LOG_LIMIT + 4);
        assert_eq!(log.iter().last().map(|(m, _)| m.as_str()), Some(newest.as_str()));
    }

    #[test]
    fn capped_log_survives_json() {
        let mut log = Log::new();
        for i in 0..LOG_LIMIT * 2 {
            log.add(format!("message {i}"), Color::Gray);
        }
        let json = serde_json::to_string(&log).unwrap();
        let loaded = serde_json::from_str::<Log>(&json).unwrap();
        assert_eq!(loaded.len(), LOG_LIMIT);
    }
}
