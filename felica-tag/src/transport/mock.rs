// felica-tag/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transceiver;
use crate::{Error, Result};

/// One scripted outcome of a `transceive` call.
#[derive(Debug)]
pub enum Scripted {
    Reply(Vec<u8>),
    Fail(Error),
}

/// Mock transceiver for unit tests. It records sent packets and returns
/// scripted replies or failures in order.
#[derive(Debug, Default)]
pub struct MockTransceiver {
    pub sent: Vec<Vec<u8>>,
    pub script: VecDeque<Scripted>,
    pub connects: usize,
    pub closes: usize,
    /// Testing hook: number of connect calls that should fail with Timeout
    pub connect_failures: usize,
}

impl MockTransceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock pre-seeded with the given replies.
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut m = Self::new();
        for resp in responses {
            m.push_response(resp);
        }
        m
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.script.push_back(Scripted::Reply(resp));
    }

    pub fn push_error(&mut self, err: Error) {
        self.script.push_back(Scripted::Fail(err));
    }

    /// Set how many subsequent connect calls should fail (for tests).
    pub fn set_connect_failures(&mut self, n: usize) {
        self.connect_failures = n;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Number of scripted outcomes not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Transceiver for MockTransceiver {
    fn connect(&mut self) -> Result<()> {
        if self.connect_failures > 0 {
            self.connect_failures -= 1;
            return Err(Error::Timeout);
        }
        self.connects += 1;
        Ok(())
    }

    fn transceive(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(data.to_vec());
        match self.script.pop_front() {
            Some(Scripted::Reply(resp)) => Ok(resp),
            Some(Scripted::Fail(err)) => Err(err),
            None => Err(Error::Timeout),
        }
    }

    fn close(&mut self) -> Result<()> {
        self.closes += 1;
        Ok(())
    }
}
