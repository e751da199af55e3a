//! SSD1306 command bytes and the power-on configuration table
//!
//! Every entry of [`INIT_SEQUENCE`] is one command opcode followed by its
//! parameter bytes. The driver sends each byte as its own command
//! transaction, walking the table front to back; the order is load-bearing
//! (the charge pump must be configured before the panel is switched on).

use crate::geometry::HEIGHT;

/// Control bytes following the address byte of each transaction
pub mod control {
    /// The rest of the transaction is a command stream
    pub const COMMAND: u8 = 0x00;
    /// The rest of the transaction is written to display RAM
    pub const DATA: u8 = 0x40;
}

/// SSD1306 commands
pub mod cmd {
    pub const MEMORY_MODE: u8 = 0x20;
    pub const COLUMN_ADDR: u8 = 0x21;
    pub const PAGE_ADDR: u8 = 0x22;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA0;
    pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// Memory addressing mode parameter: horizontal
pub const ADDR_MODE_HORIZONTAL: u8 = 0x00;

/// Charge pump parameter: enable, panel powered from internal VCC
pub const CHARGE_PUMP_INTERNAL_VCC: u8 = 0x14;

/// Contrast written during initialization
pub const DEFAULT_CONTRAST: u8 = 0xCF;

/// Power-on configuration, one `[opcode, params...]` entry per command
pub static INIT_SEQUENCE: &[&[u8]] = &[
    &[cmd::DISPLAY_OFF],
    &[cmd::SET_CLOCK_DIV, 0x80], // suggested ratio
    &[cmd::SET_MUX_RATIO, (HEIGHT - 1) as u8],
    &[cmd::SET_DISPLAY_OFFSET, 0x00],
    &[cmd::SET_START_LINE | 0x00],
    &[cmd::SET_CHARGE_PUMP, CHARGE_PUMP_INTERNAL_VCC],
    &[cmd::MEMORY_MODE, ADDR_MODE_HORIZONTAL],
    // Remap + reverse COM scan: panel rotated 180 degrees
    &[cmd::SET_SEG_REMAP | 0x01],
    &[cmd::SET_COM_SCAN_DEC],
    &[cmd::SET_COM_PINS, 0x12], // alternative COM config
    &[cmd::SET_CONTRAST, DEFAULT_CONTRAST],
    &[cmd::SET_PRECHARGE, 0xF1],
    &[cmd::SET_VCOM_DETECT, 0x40],
    &[cmd::DISPLAY_ALL_ON_RESUME],
    &[cmd::SET_NORMAL],
    &[cmd::DEACTIVATE_SCROLL],
    &[cmd::DISPLAY_ON],
];

/// Iterate the init table as the flat byte stream sent on the bus
pub fn init_bytes() -> impl Iterator<Item = u8> {
    INIT_SEQUENCE.iter().flat_map(|entry| entry.iter().copied())
}
