// libultralight/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;

use crate::transport::traits::Transport;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<Vec<u8>>,
    max_lens: Vec<usize>,
    responses: VecDeque<Vec<u8>>,
    transceive_failures: usize,
    fail_open: bool,
    fail_close: bool,
    open_calls: usize,
    close_calls: usize,
}

/// Mock transport for tests. It records sent frames and returns queued
/// responses. Clones share state, so a test can keep one clone for
/// inspection after handing another to a handle.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    /// Empty queue, no failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next answer.
    pub fn push_response(&self, resp: Vec<u8>) {
        self.state.borrow_mut().responses.push_back(resp);
    }

    /// Testing hook: number of upcoming transceive calls that fail.
    pub fn set_transceive_failures(&self, n: usize) {
        self.state.borrow_mut().transceive_failures = n;
    }

    /// Make `open` fail with `ContactlessInit`.
    pub fn set_fail_open(&self, fail: bool) {
        self.state.borrow_mut().fail_open = fail;
    }

    /// Make `close` fail with `ContactlessDeinit`.
    pub fn set_fail_close(&self, fail: bool) {
        self.state.borrow_mut().fail_close = fail;
    }

    /// Every frame handed to `transceive`, oldest first.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent.clone()
    }

    /// Most recent frame, if any.
    pub fn last_sent(&self) -> Option<Vec<u8>> {
        self.state.borrow().sent.last().cloned()
    }

    /// Number of `transceive` calls.
    pub fn sent_count(&self) -> usize {
        self.state.borrow().sent.len()
    }

    /// `max_len` passed with each frame.
    pub fn max_lens(&self) -> Vec<usize> {
        self.state.borrow().max_lens.clone()
    }

    /// Answers still queued.
    pub fn remaining_responses(&self) -> usize {
        self.state.borrow().responses.len()
    }

    /// Number of `open` calls.
    pub fn open_calls(&self) -> usize {
        self.state.borrow().open_calls
    }

    /// Number of `close` calls.
    pub fn close_calls(&self) -> usize {
        self.state.borrow().close_calls
    }
}

impl Transport for MockTransport {
    fn open(&mut self) -> Result<()> {
        let mut s = self.state.borrow_mut();
        s.open_calls += 1;
        if s.fail_open {
            return Err(Error::ContactlessInit("mock open failure".into()));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let mut s = self.state.borrow_mut();
        s.close_calls += 1;
        if s.fail_close {
            return Err(Error::ContactlessDeinit("mock close failure".into()));
        }
        Ok(())
    }

    fn transceive(&mut self, data: &[u8], max_len: usize) -> Result<Vec<u8>> {
        let mut s = self.state.borrow_mut();
        s.sent.push(data.to_vec());
        s.max_lens.push(max_len);
        if s.transceive_failures > 0 {
            s.transceive_failures -= 1;
            return Err(Error::Transceiver("mock transceive failure".into()));
        }
        s.responses
            .pop_front()
            .ok_or_else(|| Error::Transceiver("no response queued".into()))
    }
}

/// Delay that records requested durations instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    calls_ns: Rc<RefCell<Vec<u64>>>,
}

impl MockDelay {
    /// No delays recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested delays in nanoseconds, one entry per call.
    pub fn calls_ns(&self) -> Vec<u64> {
        self.calls_ns.borrow().clone()
    }

    /// Sum of all delays in whole milliseconds.
    pub fn total_ms(&self) -> u64 {
        self.calls_ns.borrow().iter().sum::<u64>() / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls_ns.borrow_mut().push(u64::from(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls_ns.borrow_mut().push(u64::from(ms) * 1_000_000);
    }
}
