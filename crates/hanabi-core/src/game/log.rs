/// Fire-and-forget message sink for game narration.
pub trait GameLog {
    fn record(&mut self, message: &str);
}

/// Discards every message. A valid substitute wherever a log is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl GameLog for NullLog {
    fn record(&mut self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::{GameLog, NullLog};

    #[test]
    fn null_log_accepts_messages() {
        let mut log = NullLog;
        log.record("nothing happens");
    }
}
