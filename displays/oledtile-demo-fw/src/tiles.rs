//! 8x8 tiles used by the demo
//!
//! Column-major: byte 0 is the leftmost column, bit 0 its top pixel.

use oledtile_ssd1306::Tile;

pub const BLANK: Tile = [0x00; 8];

pub const CHECKER: Tile = [0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA];

pub const FRAME: Tile = [0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF];

pub const SMILEY: Tile = [0x3C, 0x42, 0xA5, 0x91, 0x91, 0xA5, 0x42, 0x3C];
