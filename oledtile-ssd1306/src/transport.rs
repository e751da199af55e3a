//! Transport framer
//!
//! Every request to the controller becomes exactly one bus transaction:
//!
//! ```text
//! ┌──────────────┬─────────┬──────────────────────┐
//! │ ADDRESS (8b) │ CONTROL │ PAYLOAD              │
//! │ 1B           │ 1B      │ 1B cmd / 1..255B data│
//! └──────────────┴─────────┴──────────────────────┘
//! ```
//!
//! CONTROL is 0x00 for a command and 0x40 for display RAM data. The frame is
//! assembled on the stack for each call and dropped once the transceiver
//! returns; nothing is kept between calls.

use heapless::Vec;
use oledtile_hal::{address_byte, Transceiver};

use crate::command::control;
use crate::error::Error;
use crate::geometry::MAX_BLOCK_LEN;
use crate::window::Cursor;

/// Maximum frame size (ADDRESS + CONTROL + MAX_BLOCK_LEN)
pub const MAX_FRAME_SIZE: usize = 2 + MAX_BLOCK_LEN;

/// Frames commands and data for one SSD1306 and hands them to a transceiver
pub struct Framer<T> {
    xcvr: T,
    /// On-wire address byte, already shifted
    address: u8,
    /// Controller write pointer, known once a window has been programmed
    pub(crate) cursor: Option<Cursor>,
}

impl<T> Framer<T>
where
    T: Transceiver,
{
    /// Create a framer for the device at the 7-bit `address`
    pub fn new(xcvr: T, address: u8) -> Self {
        Self {
            xcvr,
            address: address_byte(address),
            cursor: None,
        }
    }

    /// On-wire address byte leading every frame
    pub fn address_byte(&self) -> u8 {
        self.address
    }

    /// Send one command byte: `[address, 0x00, cmd]`
    pub fn send_command(&mut self, cmd: u8) -> Result<(), Error<T::Error>> {
        self.transmit(&[self.address, control::COMMAND, cmd])
    }

    /// Send each byte as its own command transaction, stopping at the first failure
    pub fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Error<T::Error>> {
        for &c in cmds {
            self.send_command(c)?;
        }
        Ok(())
    }

    /// Send one display RAM byte: `[address, 0x40, byte]`
    pub fn send_data(&mut self, byte: u8) -> Result<(), Error<T::Error>> {
        self.transmit(&[self.address, control::DATA, byte])?;
        self.advance_cursor(1);
        Ok(())
    }

    /// Send a run of display RAM bytes in one transaction: `[address, 0x40, bytes...]`
    ///
    /// The bytes go out in order and are never split; chunking is up to the
    /// caller. Blocks longer than [`MAX_BLOCK_LEN`] are rejected before
    /// anything reaches the bus.
    pub fn send_data_block(&mut self, bytes: &[u8]) -> Result<(), Error<T::Error>> {
        if bytes.len() > MAX_BLOCK_LEN {
            return Err(Error::PayloadTooLarge);
        }

        let mut frame: Vec<u8, MAX_FRAME_SIZE> = Vec::new();
        frame
            .extend_from_slice(&[self.address, control::DATA])
            .map_err(|_| Error::PayloadTooLarge)?;
        frame
            .extend_from_slice(bytes)
            .map_err(|_| Error::PayloadTooLarge)?;

        self.transmit(&frame)?;
        self.advance_cursor(bytes.len());
        Ok(())
    }

    /// Give back the transceiver
    pub fn release(self) -> T {
        self.xcvr
    }

    #[cfg(test)]
    pub(crate) fn xcvr_mut(&mut self) -> &mut T {
        &mut self.xcvr
    }

    fn transmit(&mut self, frame: &[u8]) -> Result<(), Error<T::Error>> {
        self.xcvr.transmit(frame).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "ssd1306: transaction failed (control {=u8:#x}, {} bytes)",
                frame[1],
                frame.len()
            );
            Error::Transport(e)
        })
    }

    fn advance_cursor(&mut self, written: usize) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.advance(written);
        }
    }
}
