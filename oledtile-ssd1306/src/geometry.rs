//! Panel geometry and driver configuration
//!
//! The panel is fixed at 128x64. Display RAM is organised as [`PAGES`]
//! horizontal stripes, each 8 pixels tall and [`WIDTH`] columns wide; one
//! byte holds the 8 vertically stacked pixels of a column within a page.

/// Panel width in pixels (columns)
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Size of the full display RAM in bytes
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT / 8;

/// Bytes per 8x8 tile (one byte per column)
pub const TILE_SIZE: usize = 8;

/// Bytes per data transaction while filling the panel
///
/// Only bounds the per-transaction payload; any divisor of [`BUFFER_SIZE`]
/// produces the same panel contents.
pub const FILL_CHUNK_SIZE: usize = TILE_SIZE;

/// Largest payload accepted by a single data block
pub const MAX_BLOCK_LEN: usize = 255;

/// Default 7-bit I2C address of SSD1306 modules (0x3D with SA0 high)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// One 8x8 tile, column 0 first, bit 0 the top pixel of each column
pub type Tile = [u8; TILE_SIZE];

const _: () = assert!(HEIGHT % 8 == 0, "panel height must be a whole number of pages");
const _: () = assert!(BUFFER_SIZE % FILL_CHUNK_SIZE == 0);
const _: () = assert!(FILL_CHUNK_SIZE <= MAX_BLOCK_LEN);

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ssd1306Config {
    /// 7-bit I2C device address
    pub address: u8,
}

impl Default for Ssd1306Config {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl Ssd1306Config {
    /// Module with SA0 tied low (0x3C)
    pub const PRIMARY: Self = Self {
        address: DEFAULT_ADDRESS,
    };

    /// Module with SA0 tied high (0x3D)
    pub const SECONDARY: Self = Self { address: 0x3D };

    /// Config for a custom address
    pub const fn with_address(address: u8) -> Self {
        Self { address }
    }
}
