// pn532/src/transport/mock.rs

use std::collections::VecDeque;
use std::time::Duration;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Scripted transport for tests. Records written frames and plays back
/// queued read chunks and readiness answers in order.
#[derive(Debug)]
pub struct MockTransport {
    /// Every frame passed to `write`, including failed attempts
    pub written: Vec<Vec<u8>>,
    /// Chunks returned by successive `read` calls
    pub reads: VecDeque<Vec<u8>>,
    /// `count` argument of every `read` call
    pub read_requests: Vec<usize>,
    /// Answers for successive `wait_ready` calls
    pub ready: VecDeque<bool>,
    /// Answer once `ready` is empty
    pub ready_default: bool,
    /// Number of upcoming writes that fail with a transient transport error
    pub write_failures: usize,
    /// Number of upcoming wake pulses that fail the same way
    pub wakeup_failures: usize,
    /// Wake pulses requested, including failed ones
    pub wakeups: usize,
    /// Pins passed to `reset`
    pub resets: Vec<u8>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Empty script, always ready.
    pub fn new() -> Self {
        Self {
            written: Vec::new(),
            reads: VecDeque::new(),
            read_requests: Vec::new(),
            ready: VecDeque::new(),
            ready_default: true,
            write_failures: 0,
            wakeup_failures: 0,
            wakeups: 0,
            resets: Vec::new(),
        }
    }

    /// Queue the next `read` result.
    pub fn push_read(&mut self, chunk: Vec<u8>) {
        self.reads.push_back(chunk);
    }

    /// Queue the next `wait_ready` answer.
    pub fn push_ready(&mut self, ready: bool) {
        self.ready.push_back(ready);
    }

    /// Set how many subsequent writes should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Set how many subsequent wake pulses should fail.
    pub fn set_wakeup_failures(&mut self, n: usize) {
        self.wakeup_failures = n;
    }

    /// Number of transport calls of any kind that touched the bus.
    pub fn bus_activity(&self) -> usize {
        self.written.len() + self.read_requests.len() + self.wakeups + self.resets.len()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, frame: &[u8]) -> Result<()> {
        self.written.push(frame.to_vec());
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Transport("simulated bus NAK".into()));
        }
        Ok(())
    }

    fn read(&mut self, count: usize) -> Result<Vec<u8>> {
        self.read_requests.push(count);
        let mut chunk = self
            .reads
            .pop_front()
            .ok_or_else(|| Error::Transport("no scripted read left".into()))?;
        chunk.truncate(count);
        Ok(chunk)
    }

    fn wait_ready(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(self.ready.pop_front().unwrap_or(self.ready_default))
    }

    fn wakeup(&mut self) -> Result<()> {
        self.wakeups += 1;
        if self.wakeup_failures > 0 {
            self.wakeup_failures -= 1;
            return Err(Error::Transport("simulated wake NAK".into()));
        }
        Ok(())
    }

    fn reset(&mut self, pin: u8) -> Result<()> {
        self.resets.push(pin);
        Ok(())
    }
}
