//! Offscreen frame capture
//!
//! Rows copied out of a texture must start on a
//! [`wgpu::COPY_BYTES_PER_ROW_ALIGNMENT`] boundary, so the staging buffer is
//! padded and the padding is stripped again after mapping.

/// Tightly packed RGBA8 pixels of one rendered frame, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl CapturedFrame {
    pub const BYTES_PER_PIXEL: u32 = 4;

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Whether `pixels` holds exactly `width * height` RGBA pixels.
    pub fn is_well_formed(&self) -> bool {
        self.pixels.len() == self.width as usize * self.height as usize * Self::BYTES_PER_PIXEL as usize
    }
}

/// Row pitch of the staging buffer for a texture `width` pixels wide.
pub fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * CapturedFrame::BYTES_PER_PIXEL;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

/// Copies `height` rows of `width` pixels out of a padded buffer.
///
/// BGRA sources are swizzled to RGBA on the way.
pub fn unpad_rows(data: &[u8], width: u32, height: u32, padded_row: u32, bgra: bool) -> Vec<u8> {
    let row_len = (width * CapturedFrame::BYTES_PER_PIXEL) as usize;
    let mut out = Vec::with_capacity(row_len * height as usize);

    for row in data.chunks(padded_row as usize).take(height as usize) {
        let Some(pixels) = row.get(..row_len) else {
            break;
        };
        if bgra {
            for px in pixels.chunks_exact(4) {
                out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
            }
        } else {
            out.extend_from_slice(pixels);
        }
    }

    out
}

/// Whether reading back `format` needs a BGRA to RGBA swizzle.
pub fn is_bgra(format: wgpu::TextureFormat) -> bool {
    matches!(
        format,
        wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Bgra8UnormSrgb
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_padded_to_alignment() {
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(1), 256);
        assert_eq!(padded_bytes_per_row(1200) % wgpu::COPY_BYTES_PER_ROW_ALIGNMENT, 0);
    }

    #[test]
    fn test_unpad_strips_padding_and_swizzles() {
        let width = 2;
        let height = 2;
        let padded = padded_bytes_per_row(width);
        let mut data = vec![0xAAu8; (padded * height) as usize];
        // row 0: blue, green; row 1: red, white (BGRA order)
        data[..8].copy_from_slice(&[255, 0, 0, 255, 0, 255, 0, 255]);
        let row1 = padded as usize;
        data[row1..row1 + 8].copy_from_slice(&[0, 0, 255, 255, 255, 255, 255, 255]);

        let rgba = unpad_rows(&data, width, height, padded, true);
        assert_eq!(
            rgba,
            vec![0, 0, 255, 255, 0, 255, 0, 255, 255, 0, 0, 255, 255, 255, 255, 255]
        );

        let raw = unpad_rows(&data, width, height, padded, false);
        assert_eq!(&raw[..4], &[255, 0, 0, 255]);
        assert_eq!(raw.len(), 16);
    }

    #[test]
    fn test_frame_shape_checks() {
        let frame = CapturedFrame {
            width: 2,
            height: 1,
            pixels: vec![0; 8],
        };
        assert!(frame.is_well_formed());
        assert!(!frame.is_empty());

        let empty = CapturedFrame {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        };
        assert!(empty.is_empty());
        assert!(is_bgra(wgpu::TextureFormat::Bgra8Unorm));
        assert!(!is_bgra(wgpu::TextureFormat::Rgba8Unorm));
    }
}
