// Braille canvas for high-resolution terminal rendering.
// Each terminal cell holds a 2×4 grid of Braille dots, giving 2×
// horizontal and 4× vertical resolution over plain cells.

/// Bit for each dot position, indexed by [dot_x][dot_y].
/// Braille Unicode packs the fourth row into the high bits.
const DOT_BITS: [[u8; 4]; 2] = [
    [0x01, 0x02, 0x04, 0x40],
    [0x08, 0x10, 0x20, 0x80],
];

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    cells: Vec<u8>,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Set a dot at pixel coordinates. Out-of-range pixels are dropped
    /// silently so callers can draw partially visible shapes.
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;
        if cell_x >= self.width || cell_y >= self.height {
            return;
        }
        self.cells[cell_y * self.width + cell_x] |= DOT_BITS[pixel_x % 2][pixel_y % 4];
    }

    /// Fill a rectangle of pixels
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..y + height {
            for px in x..x + width {
                self.set_pixel(px, py);
            }
        }
    }

    /// Draw a full-width horizontal line at the given pixel row
    pub fn draw_horizontal_line(&mut self, pixel_y: usize) {
        for px in 0..self.pixel_width() {
            self.set_pixel(px, pixel_y);
        }
    }

    /// Convert one cell's dot pattern to its Braille character
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }
        let pattern = self.cells[cell_y * self.width + cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    /// Render one cell row as a string
    pub fn row_string(&self, cell_y: usize) -> String {
        (0..self.width).map(|x| self.to_char(x, cell_y)).collect()
    }

    pub fn rows(&self) -> usize {
        self.height
    }

    /// Width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Height in pixels (4 per cell)
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dot() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set_pixel(0, 0);
        assert_eq!(canvas.to_char(0, 0), '⠁'); // dot 1
        assert_eq!(canvas.to_char(1, 0), '⠀'); // blank braille
    }

    #[test]
    fn test_fill_rect_saturates_cell() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.fill_rect(0, 0, 2, 4);
        assert_eq!(canvas.to_char(0, 0), '⣿'); // all eight dots
        assert_eq!(canvas.to_char(1, 0), '⠀');
    }

    #[test]
    fn test_out_of_range_pixels_ignored() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set_pixel(100, 100);
        canvas.fill_rect(3, 7, 10, 10);
        assert_eq!(canvas.to_char(0, 0), '⠀');
    }

    #[test]
    fn test_horizontal_line_spans_row() {
        let mut canvas = BrailleCanvas::new(3, 1);
        canvas.draw_horizontal_line(0);
        assert_eq!(canvas.row_string(0), "⠉⠉⠉");
    }
}
