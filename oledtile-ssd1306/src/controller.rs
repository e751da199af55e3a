//! SSD1306 controller lifecycle and drawing operations
//!
//! [`Ssd1306`] owns the framer and walks the controller through
//! `Uninitialized -> Initializing -> Ready`. There is no teardown state;
//! powering the panel down is left to the board.
//!
//! # Usage
//!
//! ```ignore
//! let xcvr = I2cTransceiver::new(HalI2c::new(i2c));
//! let mut display = Ssd1306::new(xcvr, Ssd1306Config::default());
//!
//! display.initialize()?;                  // panel on and cleared
//! display.draw_tile(3, 16, &SMILEY)?;     // page 3, columns 16..=23
//! display.fill(0xFF)?;                    // every pixel lit
//! ```

use oledtile_hal::Transceiver;

use crate::command::{cmd, INIT_SEQUENCE};
use crate::error::Error;
use crate::geometry::{Ssd1306Config, Tile, BUFFER_SIZE, FILL_CHUNK_SIZE, TILE_SIZE, WIDTH};
use crate::transport::Framer;
use crate::window::{Cursor, Window};

/// Tiles that fit side by side on one page
pub const TILES_PER_PAGE: usize = WIDTH / TILE_SIZE;

/// Controller lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Constructed, nothing sent yet
    Uninitialized,
    /// Configuration sequence in progress, or aborted by a bus failure
    Initializing,
    /// Configured, switched on and cleared
    Ready,
}

/// Blocking SSD1306 128x64 driver
pub struct Ssd1306<T> {
    framer: Framer<T>,
    state: State,
}

impl<T> Ssd1306<T>
where
    T: Transceiver,
{
    /// Construct an uninitialised driver. No bus traffic is generated.
    pub fn new(xcvr: T, config: Ssd1306Config) -> Self {
        Self {
            framer: Framer::new(xcvr, config.address),
            state: State::Uninitialized,
        }
    }

    /// Configure the controller and clear display RAM
    ///
    /// Sends [`INIT_SEQUENCE`] one command byte per transaction, then fills
    /// the panel with `0x00` so it never shows power-on garbage. May be
    /// called again from any state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] at the first failed transaction. The
    /// controller is then partially configured and the driver stays in
    /// [`State::Initializing`].
    pub fn initialize(&mut self) -> Result<(), Error<T::Error>> {
        self.state = State::Initializing;

        #[cfg(feature = "defmt")]
        defmt::debug!("ssd1306: sending {} init commands", INIT_SEQUENCE.len());

        for entry in INIT_SEQUENCE {
            self.framer.send_commands(entry)?;
        }
        self.write_fill(0x00)?;

        self.state = State::Ready;

        #[cfg(feature = "defmt")]
        defmt::info!("ssd1306: ready");

        Ok(())
    }

    /// Set every byte of display RAM to `value`
    ///
    /// Programs the full-panel window, then streams exactly [`BUFFER_SIZE`]
    /// bytes in [`FILL_CHUNK_SIZE`] byte data blocks.
    pub fn fill(&mut self, value: u8) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        self.write_fill(value)
    }

    /// Blit one 8x8 tile at `page` (0-7), `column` (0-120)
    ///
    /// Six window commands followed by one 8-byte data block. The tile must
    /// fit on the panel; this is not checked.
    pub fn draw_tile(&mut self, page: u8, column: u8, tile: &Tile) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        self.framer.apply_window(Window::tile(page, column))?;
        self.framer.send_data_block(tile)
    }

    /// Blit a row of adjacent tiles on one page starting at `column`
    ///
    /// One window covers the whole run; each tile goes out as its own data
    /// block. More than [`TILES_PER_PAGE`] tiles is rejected up front.
    pub fn draw_tiles(
        &mut self,
        page: u8,
        column: u8,
        tiles: &[Tile],
    ) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        if tiles.is_empty() {
            return Ok(());
        }
        if tiles.len() > TILES_PER_PAGE {
            return Err(Error::PayloadTooLarge);
        }

        self.framer
            .apply_window(Window::tiles(page, column, tiles.len() as u8))?;
        for tile in tiles {
            self.framer.send_data_block(tile)?;
        }
        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        self.framer.send_commands(&[cmd::SET_CONTRAST, contrast])
    }

    /// Turn display on/off. Display RAM is kept while off.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        if on {
            self.framer.send_command(cmd::DISPLAY_ON)
        } else {
            self.framer.send_command(cmd::DISPLAY_OFF)
        }
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        if inverted {
            self.framer.send_command(cmd::SET_INVERSE)
        } else {
            self.framer.send_command(cmd::SET_NORMAL)
        }
    }

    /// Light every pixel regardless of RAM contents, or go back to rendering RAM
    pub fn set_all_on(&mut self, all_on: bool) -> Result<(), Error<T::Error>> {
        self.ensure_ready()?;
        if all_on {
            self.framer.send_command(cmd::DISPLAY_ALL_ON)
        } else {
            self.framer.send_command(cmd::DISPLAY_ALL_ON_RESUME)
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    /// Where the next data byte will land, if a window has been programmed
    pub fn cursor(&self) -> Option<Cursor> {
        self.framer.cursor()
    }

    /// Raw framer access for custom command sequences
    pub fn framer_mut(&mut self) -> &mut Framer<T> {
        &mut self.framer
    }

    /// Give back the transceiver
    pub fn release(self) -> T {
        self.framer.release()
    }

    fn ensure_ready(&self) -> Result<(), Error<T::Error>> {
        if self.state == State::Ready {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn write_fill(&mut self, value: u8) -> Result<(), Error<T::Error>> {
        let chunk = [value; FILL_CHUNK_SIZE];

        self.framer.apply_window(Window::FULL)?;
        for _ in 0..BUFFER_SIZE / FILL_CHUNK_SIZE {
            self.framer.send_data_block(&chunk)?;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("ssd1306: filled {} bytes with {=u8:#x}", BUFFER_SIZE, value);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::init_bytes;
    use crate::mock::{BusFault, RecordingBus};
    use std::vec::Vec;

    const INIT_TRANSACTIONS: usize = 26 + 6 + 128;

    fn ready_display() -> Ssd1306<RecordingBus> {
        let mut display = Ssd1306::new(RecordingBus::default(), Ssd1306Config::default());
        display.initialize().unwrap();
        // Start every test from an empty recording
        *display.framer_mut().xcvr_mut() = RecordingBus::default();
        display
    }

    #[test]
    fn test_initial_state() {
        let display = Ssd1306::new(RecordingBus::default(), Ssd1306Config::default());

        assert_eq!(display.state(), State::Uninitialized);
        assert!(!display.is_ready());
        assert_eq!(display.cursor(), None);
        assert!(display.release().frames.is_empty());
    }

    #[test]
    fn test_initialize_sequence() {
        let mut display = Ssd1306::new(RecordingBus::default(), Ssd1306Config::default());
        display.initialize().unwrap();
        assert_eq!(display.state(), State::Ready);

        let bus = display.release();
        assert_eq!(bus.frames.len(), INIT_TRANSACTIONS);

        let commands = bus.commands();
        let expected: Vec<u8> = init_bytes().collect();
        assert_eq!(&commands[..expected.len()], &expected[..]);
        assert_eq!(commands[0], 0xAE);
        assert_eq!(commands[expected.len() - 1], 0xAF);

        // Clear follows display-on: full window, then 1024 zero bytes
        assert_eq!(&commands[expected.len()..], &[0x21, 0, 127, 0x22, 0, 7]);
        let data = bus.data();
        assert_eq!(data.len(), 1024);
        assert!(data.iter().all(|&b| b == 0x00));

        let first_data = bus.frames.iter().position(|f| f[1] == 0x40).unwrap();
        assert_eq!(first_data, expected.len() + 6);
    }

    #[test]
    fn test_initialize_failure_leaves_initializing() {
        let mut display = Ssd1306::new(RecordingBus::failing_at(5), Ssd1306Config::default());

        assert_eq!(display.initialize(), Err(Error::Transport(BusFault)));
        assert_eq!(display.state(), State::Initializing);

        // Nothing after the failed transaction went out
        let bus = display.release();
        assert_eq!(bus.attempts, 6);
        assert_eq!(bus.frames.len(), 5);
    }

    #[test]
    fn test_reinitialize_after_failure() {
        let mut display = Ssd1306::new(RecordingBus::failing_at(0), Ssd1306Config::default());

        assert!(display.initialize().is_err());
        display.initialize().unwrap();
        assert!(display.is_ready());
    }

    #[test]
    fn test_fill_writes_exactly_buffer_size() {
        let mut display = ready_display();
        display.fill(0xFF).unwrap();

        let bus = display.release();
        assert_eq!(bus.commands(), [0x21, 0, 127, 0x22, 0, 7]);
        let frames = bus.data_frames();
        assert_eq!(frames.len(), 128);
        assert!(frames.iter().all(|f| f.len() == FILL_CHUNK_SIZE));

        let data = bus.data();
        assert_eq!(data.len(), 1024);
        assert!(data.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_fill_leaves_cursor_at_capacity() {
        let mut display = ready_display();
        display.fill(0xAA).unwrap();

        let cursor = display.cursor().unwrap();
        assert_eq!(cursor.written(), BUFFER_SIZE);
        assert_eq!(cursor.remaining(), 0);
        assert!(!cursor.overrun());
        assert_eq!(cursor.position(), (0, 0));
    }

    #[test]
    fn test_draw_tile() {
        let mut display = ready_display();
        let tile = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        display.draw_tile(3, 16, &tile).unwrap();

        let bus = display.release();
        assert_eq!(bus.frames.len(), 7);
        assert_eq!(bus.commands(), [0x21, 16, 23, 0x22, 3, 3]);
        assert_eq!(bus.data_frames(), [&tile[..]]);
        assert_eq!(bus.frames[6], [0x78, 0x40, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_draw_tiles_run() {
        let mut display = ready_display();
        let tiles = [[0x11; 8], [0x22; 8], [0x33; 8]];
        display.draw_tiles(5, 40, &tiles).unwrap();

        let cursor = display.cursor().unwrap();
        assert_eq!(cursor.remaining(), 0);

        let bus = display.release();
        assert_eq!(bus.commands(), [0x21, 40, 63, 0x22, 5, 5]);
        assert_eq!(bus.data_frames().len(), 3);
        assert_eq!(bus.data()[8..16], [0x22; 8]);
    }

    #[test]
    fn test_draw_tiles_limits() {
        let mut display = ready_display();

        display.draw_tiles(0, 0, &[]).unwrap();
        let too_many = [[0u8; 8]; TILES_PER_PAGE + 1];
        assert_eq!(display.draw_tiles(0, 0, &too_many), Err(Error::PayloadTooLarge));

        assert!(display.release().frames.is_empty());
    }

    #[test]
    fn test_operations_require_ready() {
        let mut display = Ssd1306::new(RecordingBus::default(), Ssd1306Config::default());

        assert_eq!(display.fill(0xFF), Err(Error::NotInitialized));
        assert_eq!(display.draw_tile(0, 0, &[0; 8]), Err(Error::NotInitialized));
        assert_eq!(display.set_contrast(0x10), Err(Error::NotInitialized));
        assert_eq!(display.set_display_on(false), Err(Error::NotInitialized));
        assert_eq!(display.set_inverted(true), Err(Error::NotInitialized));
        assert_eq!(display.set_all_on(true), Err(Error::NotInitialized));

        assert!(display.release().frames.is_empty());
    }

    #[test]
    fn test_display_controls() {
        let mut display = ready_display();

        display.set_contrast(0x7F).unwrap();
        display.set_display_on(false).unwrap();
        display.set_display_on(true).unwrap();
        display.set_inverted(true).unwrap();
        display.set_inverted(false).unwrap();
        display.set_all_on(true).unwrap();
        display.set_all_on(false).unwrap();

        assert_eq!(
            display.release().commands(),
            [0x81, 0x7F, 0xAE, 0xAF, 0xA7, 0xA6, 0xA5, 0xA4]
        );
    }

    #[test]
    fn test_fill_failure_propagates() {
        let mut display = Ssd1306::new(
            RecordingBus::failing_at(INIT_TRANSACTIONS + 10),
            Ssd1306Config::default(),
        );
        display.initialize().unwrap();

        assert_eq!(display.fill(0x55), Err(Error::Transport(BusFault)));
        assert!(display.is_ready());
        assert_eq!(display.cursor().unwrap().written(), 4 * FILL_CHUNK_SIZE);
    }
}
