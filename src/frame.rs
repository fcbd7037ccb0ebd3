#[derive(Copy, Clone, Debug)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
}

impl Frame {
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Center of pixel `(x, y)` on the image plane, `[-1, 1]` on both axes with
    /// `y` pointing up. Pixel `(0, 0)` is the top left one.
    pub fn screen_coord(&self, x: usize, y: usize) -> (f64, f64) {
        let sx = (2.0 * (x as f64 + 0.5)) / self.width as f64 - 1.0;
        let sy = 1.0 - (2.0 * (y as f64 + 0.5)) / self.height as f64;

        (sx, sy)
    }
}
