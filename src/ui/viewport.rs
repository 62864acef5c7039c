//! Cursor position within the terminal grid.
//!
//! The [`ViewportState`] struct tracks the terminal dimensions and the
//! cursor cell, and handles all cursor movement.

/// Terminal dimensions and a cursor that always lies inside them.
///
/// Coordinates are zero-based: `cursor_x` is in `0..width` and `cursor_y`
/// is in `0..height`. Every move is clamped, so no sequence of calls can
/// push the cursor off the grid.
///
/// # Example
///
/// ```
/// use tilde::ui::viewport::ViewportState;
///
/// let mut vp = ViewportState::new(80, 24);
/// vp.move_right();
/// vp.move_down();
/// assert_eq!(vp.cursor(), (1, 1));
///
/// vp.page_down();
/// assert_eq!(vp.cursor(), (1, 23));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    width: u16,
    height: u16,
    cursor_x: u16,
    cursor_y: u16,
}

impl ViewportState {
    /// Create a viewport with the cursor at the top-left cell.
    ///
    /// A zero dimension is raised to 1 so the cursor always has a cell.
    ///
    /// # Arguments
    ///
    /// * `width` - Terminal width in columns
    /// * `height` - Terminal height in rows
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    /// Place the cursor at `(x, y)`, clamped to the grid.
    pub fn with_cursor(mut self, x: u16, y: u16) -> Self {
        self.cursor_x = x.min(self.width - 1);
        self.cursor_y = y.min(self.height - 1);
        self
    }

    /// Get the viewport width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the viewport height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn cursor_x(&self) -> u16 {
        self.cursor_x
    }

    pub const fn cursor_y(&self) -> u16 {
        self.cursor_y
    }

    /// Cursor position as `(x, y)`.
    pub const fn cursor(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    /// Move one column left, stopping at column 0.
    pub const fn move_left(&mut self) {
        if self.cursor_x > 0 {
            self.cursor_x -= 1;
        }
    }

    /// Move one column right, stopping at the last column.
    pub const fn move_right(&mut self) {
        if self.cursor_x < self.width - 1 {
            self.cursor_x += 1;
        }
    }

    /// Move one row up, stopping at row 0.
    pub const fn move_up(&mut self) {
        if self.cursor_y > 0 {
            self.cursor_y -= 1;
        }
    }

    /// Move one row down, stopping at the last row.
    pub const fn move_down(&mut self) {
        if self.cursor_y < self.height - 1 {
            self.cursor_y += 1;
        }
    }

    /// Move up `height + 1` single rows.
    pub fn page_up(&mut self) {
        for _ in 0..=self.height {
            self.move_up();
        }
    }

    /// Move down `height + 1` single rows.
    pub fn page_down(&mut self) {
        for _ in 0..=self.height {
            self.move_down();
        }
    }
}
