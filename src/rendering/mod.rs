//! Rendering module: paint styles, the raster canvas and PNG output

pub mod paint;
pub mod raster;

/// An encoded frame of the canvas.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    pub fn content_length(&self) -> usize {
        self.png_data.len()
    }
}
