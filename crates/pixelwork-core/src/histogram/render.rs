//! Histogram chart rendering.
//!
//! The chart is a 256x256 white canvas with gray gridlines every 10 pixels.
//! Each channel is drawn as a polyline, red then green then blue, where point
//! `i` sits at `(i, 256 - count[i] * 256 / max)` and `max` is the largest
//! count over all three channels. Segments join consecutive points; pixels
//! that fall off the canvas are dropped.

use super::{compute_histogram, Channel};
use crate::{Histogram, Raster};

/// Side length of the rendered chart.
pub const HISTOGRAM_SIZE: u32 = 256;

const GRID_SPACING: usize = 10;
const BACKGROUND: [u8; 3] = [255, 255, 255];
const GRIDLINE: [u8; 3] = [128, 128, 128];

/// Render the histogram chart of `image`.
pub fn render_histogram(image: &Raster) -> Raster {
    render_frequencies(&compute_histogram(image))
}

/// Render a chart from precomputed counts.
///
/// A histogram with no counts yields the blank gridded canvas.
pub fn render_frequencies(hist: &Histogram) -> Raster {
    let mut canvas = Canvas::gridded();
    let max = hist.max_value();
    if max == 0 {
        return canvas.into_raster();
    }

    for channel in Channel::ALL {
        let mut color = [0u8; 3];
        color[channel.index()] = 255;

        let counts = hist.channel(channel);
        let mut prev = (0i64, HISTOGRAM_SIZE as i64);
        for (i, &count) in counts.iter().enumerate() {
            let y = HISTOGRAM_SIZE as i64 - count as i64 * HISTOGRAM_SIZE as i64 / max as i64;
            let point = (i as i64, y);
            if i > 0 {
                canvas.line(prev, point, color);
            }
            prev = point;
        }
    }

    canvas.into_raster()
}

/// Mutable drawing surface used only while building a chart.
struct Canvas {
    pixels: Vec<u8>,
}

impl Canvas {
    fn gridded() -> Self {
        let size = HISTOGRAM_SIZE as usize;
        let mut canvas = Self {
            pixels: BACKGROUND.repeat(size * size),
        };
        for i in (0..size).step_by(GRID_SPACING) {
            for j in 0..size {
                canvas.plot(i as i64, j as i64, GRIDLINE);
                canvas.plot(j as i64, i as i64, GRIDLINE);
            }
        }
        canvas
    }

    #[inline]
    fn plot(&mut self, x: i64, y: i64, color: [u8; 3]) {
        let size = HISTOGRAM_SIZE as i64;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            let idx = ((y * size + x) * 3) as usize;
            self.pixels[idx..idx + 3].copy_from_slice(&color);
        }
    }

    /// Bresenham line between two points, inclusive of both ends.
    fn line(&mut self, from: (i64, i64), to: (i64, i64), color: [u8; 3]) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn into_raster(self) -> Raster {
        Raster::from_parts(HISTOGRAM_SIZE, HISTOGRAM_SIZE, self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_chart_grid() {
        let chart = render_frequencies(&Histogram::new());
        assert_eq!(chart.dimensions(), (256, 256));
        assert_eq!(chart.pixel(0, 0), GRIDLINE);
        assert_eq!(chart.pixel(10, 5), GRIDLINE);
        assert_eq!(chart.pixel(5, 250), GRIDLINE);
        assert_eq!(chart.pixel(5, 5), BACKGROUND);
        assert_eq!(chart.pixel(255, 255), BACKGROUND);
    }

    #[test]
    fn test_uniform_image_spikes() {
        // Every channel has all counts at one value
        let img = Raster::filled(3, 3, [50, 50, 50]).unwrap();
        let chart = render_histogram(&img);
        // Peak at x=50 reaches y=0; blue is drawn last
        assert_eq!(chart.pixel(50, 0), [0, 0, 255]);
        // Baseline elsewhere lies just off the canvas (y = 256)
        assert_eq!(chart.pixel(101, 255), BACKGROUND);
        // Rising segment from (49, 256) to (50, 0) passes through column 49 or 50
        assert_eq!(chart.pixel(50, 128), [0, 0, 255]);
    }

    #[test]
    fn test_distinct_channel_colors() {
        let img = Raster::filled(2, 2, [20, 120, 220]).unwrap();
        let chart = render_histogram(&img);
        assert_eq!(chart.pixel(20, 0), [255, 0, 0]);
        assert_eq!(chart.pixel(120, 0), [0, 255, 0]);
        assert_eq!(chart.pixel(220, 0), [0, 0, 255]);
    }

    #[test]
    fn test_half_height_point() {
        let mut hist = Histogram::new();
        hist.red[100] = 4;
        hist.red[200] = 2;
        let chart = render_frequencies(&hist);
        assert_eq!(chart.pixel(100, 0), [255, 0, 0]);
        assert_eq!(chart.pixel(200, 128), [255, 0, 0]);
    }

    #[test]
    fn test_line_endpoints_and_diagonal() {
        let mut canvas = Canvas {
            pixels: BACKGROUND.repeat(256 * 256),
        };
        canvas.line((0, 0), (3, 3), [1, 2, 3]);
        let raster = canvas.into_raster();
        for i in 0..4 {
            assert_eq!(raster.pixel(i, i), [1, 2, 3]);
        }
        assert_eq!(raster.pixel(1, 0), BACKGROUND);
    }

    #[test]
    fn test_line_clips_off_canvas() {
        let mut canvas = Canvas {
            pixels: BACKGROUND.repeat(256 * 256),
        };
        canvas.line((250, 256), (255, 256), [9, 9, 9]);
        canvas.line((-5, 10), (2, 10), [9, 9, 9]);
        let raster = canvas.into_raster();
        assert_eq!(raster.pixel(0, 10), [9, 9, 9]);
        assert_eq!(raster.pixel(2, 10), [9, 9, 9]);
        assert_eq!(raster.pixel(3, 10), BACKGROUND);
    }
}
