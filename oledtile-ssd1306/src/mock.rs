//! Recording transceiver for unit tests

use std::vec::Vec;

use oledtile_hal::Transceiver;

use crate::command::control;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Stores every frame it is asked to transmit
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub frames: Vec<Vec<u8>>,
    /// Transactions attempted, including the failed one
    pub attempts: usize,
    /// Index of the transaction that fails
    pub fail_at: Option<usize>,
}

impl RecordingBus {
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Default::default()
        }
    }

    /// Command bytes in the order they were sent
    pub fn commands(&self) -> Vec<u8> {
        self.frames
            .iter()
            .filter(|f| f[1] == control::COMMAND)
            .map(|f| f[2])
            .collect()
    }

    /// Data frames in the order they were sent
    pub fn data_frames(&self) -> Vec<&[u8]> {
        self.frames
            .iter()
            .filter(|f| f[1] == control::DATA)
            .map(|f| &f[2..])
            .collect()
    }

    /// All data payload bytes concatenated
    pub fn data(&self) -> Vec<u8> {
        self.data_frames().concat()
    }
}

impl Transceiver for RecordingBus {
    type Error = BusFault;

    fn transmit(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        let index = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(index) {
            return Err(BusFault);
        }
        self.frames.push(frame.to_vec());
        Ok(())
    }
}
