use cgmath::Vector3;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

use crate::tracer::clamp_color;

pub struct FrameBuffer {
    width: usize,
    height: usize,
    buffer: Vec<Pixel>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![Pixel::black(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn buffer(&self) -> &[Pixel] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut Vec<Pixel> {
        &mut self.buffer
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.buffer[x + y * self.width])
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(&mut self.buffer[x + y * self.width])
    }

    /// Writes one pixel, origin top left. Out of range coordinates are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        if let Some(p) = self.pixel_mut(x, y) {
            *p = pixel;
        }
    }

    /// Encodes the buffer as an 8-bit RGB PNG.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), OutputError> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, self.width as u32, self.height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let data = self
            .buffer
            .iter()
            .flat_map(|p| [p.r, p.g, p.b])
            .collect::<Vec<_>>();

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()?;

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("cannot write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode image: {0}")]
    Encoding(#[from] png::EncodingError),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self { r: 0, g: 0, b: 0 }
    }
}

/// Quantizes a linear color, channels outside `[0, 1]` are clamped first.
impl From<Vector3<f64>> for Pixel {
    fn from(v: Vector3<f64>) -> Self {
        let v = clamp_color(v) * 255.0;

        Self::new(v.x.round() as u8, v.y.round() as u8, v.z.round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_outside_the_image_are_ignored() {
        let mut fb = FrameBuffer::new(4, 3);

        fb.set_pixel(3, 2, Pixel::new(1, 2, 3));
        fb.set_pixel(4, 0, Pixel::new(9, 9, 9));
        fb.set_pixel(0, 3, Pixel::new(9, 9, 9));

        assert_eq!(fb.pixel(3, 2), Some(Pixel::new(1, 2, 3)));
        assert_eq!(fb.pixel(4, 0), None);
        assert!(fb.buffer().iter().filter(|p| **p != Pixel::black()).count() == 1);
    }

    #[test]
    fn colors_quantize_with_clamping() {
        assert_eq!(Pixel::from(Vector3::new(0.0, 0.5, 1.0)), Pixel::new(0, 128, 255));
        assert_eq!(Pixel::from(Vector3::new(-2.0, 7.0, 200.0 / 255.0)), Pixel::new(0, 255, 200));
    }

    #[test]
    fn saved_png_decodes_back() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set_pixel(0, 0, Pixel::new(255, 0, 0));
        fb.set_pixel(2, 1, Pixel::new(0, 200, 200));

        let path = std::env::temp_dir().join(format!("whitted-fb-{}.png", std::process::id()));
        fb.save(&path).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!((info.width, info.height), (3, 2));
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(&buf[0..3], &[255, 0, 0]);
        assert_eq!(&buf[15..18], &[0, 200, 200]);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let fb = FrameBuffer::new(1, 1);
        let path = std::env::temp_dir().join("whitted-missing-dir").join("out.png");

        assert!(matches!(fb.save(path), Err(OutputError::Io(_))));
    }
}
