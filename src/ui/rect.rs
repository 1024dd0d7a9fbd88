//! Rectangle type for UI layout

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Whole window
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check if point is inside (right and bottom edges exclusive)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// A `w` x `h` rect centred inside this one
    pub fn centered(&self, w: f32, h: f32) -> Self {
        Self::new(
            (self.x + (self.w - w) * 0.5).round(),
            (self.y + (self.h - h) * 0.5).round(),
            w,
            h,
        )
    }

    /// Horizontal strip along the top (menu bars)
    pub fn slice_top(&self, height: f32) -> Self {
        Self::new(self.x, self.y, self.w, height.min(self.h))
    }

    pub fn remaining_after_top(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y + h, self.w, self.h - h)
    }

    /// Horizontal strip along the bottom (status bars)
    pub fn slice_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.bottom() - h, self.w, h)
    }

    pub fn remaining_after_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y, self.w, self.h - h)
    }
}
