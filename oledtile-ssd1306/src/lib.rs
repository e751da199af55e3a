//! Blocking driver for SSD1306 128x64 monochrome OLED panels
//!
//! The driver is split in three layers, each building on the one below:
//!
//! - [`transport`] - frames every command or data run as one
//!   `[address, control, payload...]` bus transaction
//! - [`window`] - programs the controller's column/page addressing window
//!   and models the resulting write cursor
//! - [`controller`] - power-on configuration, full-panel fill and 8x8
//!   tile blits
//!
//! Bus access goes through [`oledtile_hal::Transceiver`]; nothing here
//! reads from the bus or keeps display RAM in memory.
//!
//! # Quick start
//!
//! ```ignore
//! use oledtile_hal::{HalI2c, I2cTransceiver};
//! use oledtile_ssd1306::{Ssd1306, Ssd1306Config};
//!
//! let xcvr = I2cTransceiver::new(HalI2c::new(i2c));
//! let mut display = Ssd1306::new(xcvr, Ssd1306Config::default());
//! display.initialize()?;
//! display.draw_tile(0, 0, &[0xFF; 8])?;
//! ```
//!
//! # Features
//!
//! - **`defmt`** - [`defmt::Format`] on public types plus driver logging

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod transport;
pub mod window;

#[cfg(test)]
mod mock;

pub use controller::{Ssd1306, State, TILES_PER_PAGE};
pub use error::Error;
pub use geometry::{
    Ssd1306Config, Tile, BUFFER_SIZE, DEFAULT_ADDRESS, HEIGHT, MAX_BLOCK_LEN, PAGES, TILE_SIZE,
    WIDTH,
};
pub use transport::Framer;
pub use window::{Cursor, Window};
