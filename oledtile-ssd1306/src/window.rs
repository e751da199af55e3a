//! Addressing window protocol
//!
//! In horizontal addressing mode the controller writes each data byte at
//! its internal cursor, then moves one column right. Past the window's last
//! column it returns to the first column of the next page, and past the last
//! page it returns to the window origin. Programming a window therefore
//! makes the placement of every following data byte deterministic.
//!
//! The controller's cursor cannot be read back, so [`Cursor`] tracks it on
//! our side from the window and the number of bytes written since.

use oledtile_hal::Transceiver;

use crate::command::cmd;
use crate::error::Error;
use crate::geometry::{PAGES, TILE_SIZE, WIDTH};
use crate::transport::Framer;

/// Column range x page range, both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub col_start: u8,
    pub col_end: u8,
    pub page_start: u8,
    pub page_end: u8,
}

impl Window {
    /// The whole panel
    pub const FULL: Self = Self::new(0, (WIDTH - 1) as u8, 0, (PAGES - 1) as u8);

    pub const fn new(col_start: u8, col_end: u8, page_start: u8, page_end: u8) -> Self {
        Self {
            col_start,
            col_end,
            page_start,
            page_end,
        }
    }

    /// Single-page window covering one 8x8 tile
    pub const fn tile(page: u8, column: u8) -> Self {
        Self::tiles(page, column, 1)
    }

    /// Single-page window covering `count` adjacent tiles
    ///
    /// Column arithmetic wraps instead of panicking; a run that leaves the
    /// panel produces a window the controller will not honour as intended.
    pub const fn tiles(page: u8, column: u8, count: u8) -> Self {
        let width = (count as usize * TILE_SIZE) as u8;
        Self::new(column, column.wrapping_add(width).wrapping_sub(1), page, page)
    }

    /// Start <= end on both axes
    pub fn is_ordered(&self) -> bool {
        self.col_start <= self.col_end && self.page_start <= self.page_end
    }

    /// Every column and page lies on the panel
    pub fn within_panel(&self) -> bool {
        (self.col_end as usize) < WIDTH
            && (self.col_start as usize) < WIDTH
            && (self.page_end as usize) < PAGES
            && (self.page_start as usize) < PAGES
    }

    /// Columns per page (0 if the column range is reversed)
    pub fn columns(&self) -> usize {
        if self.col_start <= self.col_end {
            (self.col_end - self.col_start) as usize + 1
        } else {
            0
        }
    }

    /// Pages covered (0 if the page range is reversed)
    pub fn pages(&self) -> usize {
        if self.page_start <= self.page_end {
            (self.page_end - self.page_start) as usize + 1
        } else {
            0
        }
    }

    /// Data bytes that fit before the cursor wraps back to the origin
    pub fn capacity(&self) -> usize {
        self.columns() * self.pages()
    }

    /// Command stream that programs this window
    pub fn commands(&self) -> [u8; 6] {
        [
            cmd::COLUMN_ADDR,
            self.col_start,
            self.col_end,
            cmd::PAGE_ADDR,
            self.page_start,
            self.page_end,
        ]
    }
}

/// Model of the controller's write pointer inside the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    window: Window,
    written: usize,
}

impl Cursor {
    /// Cursor at the origin of a freshly programmed window
    pub const fn new(window: Window) -> Self {
        Self { window, written: 0 }
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Data bytes written since the window was programmed
    pub fn written(&self) -> usize {
        self.written
    }

    /// Bytes left before the cursor wraps back to the window origin
    pub fn remaining(&self) -> usize {
        self.window.capacity().saturating_sub(self.written)
    }

    /// More bytes were written than the window holds
    pub fn overrun(&self) -> bool {
        self.written > self.window.capacity()
    }

    /// `(column, page)` the next data byte lands on
    pub fn position(&self) -> (u8, u8) {
        let columns = self.window.columns();
        let capacity = self.window.capacity();
        if capacity == 0 {
            return (self.window.col_start, self.window.page_start);
        }

        let offset = self.written % capacity;
        let column = self.window.col_start as usize + offset % columns;
        let page = self.window.page_start as usize + offset / columns;
        (column as u8, page as u8)
    }

    pub(crate) fn advance(&mut self, bytes: usize) {
        self.written = self.written.saturating_add(bytes);
    }
}

impl<T> Framer<T>
where
    T: Transceiver,
{
    /// Program the addressing window
    ///
    /// Sends `0x21, col_start, col_end, 0x22, page_start, page_end` as six
    /// command transactions. Ranges are sent as given; keeping them on the
    /// panel and not writing past the window is the caller's job.
    pub fn set_window(
        &mut self,
        col_start: u8,
        col_end: u8,
        page_start: u8,
        page_end: u8,
    ) -> Result<Cursor, Error<T::Error>> {
        self.apply_window(Window::new(col_start, col_end, page_start, page_end))
    }

    /// Program the addressing window from a [`Window`]
    pub fn apply_window(&mut self, window: Window) -> Result<Cursor, Error<T::Error>> {
        if !window.is_ordered() || !window.within_panel() {
            #[cfg(feature = "defmt")]
            defmt::warn!("ssd1306: window {} is reversed or off-panel", window);
        }

        // A partially programmed window leaves the controller cursor unknown.
        self.cursor = None;
        self.send_commands(&window.commands())?;

        let cursor = Cursor::new(window);
        self.cursor = Some(cursor);
        Ok(cursor)
    }

    /// Cursor model after the last window and data writes, if known
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }
}
