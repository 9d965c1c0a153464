use anyhow::Result;
use std::path::Path;

use rvdecode::{classify, Width};

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u32,
    pub bytes: Vec<u8>,
}

impl Segment {
    pub fn end(&self) -> u32 {
        self.base.wrapping_add(self.bytes.len() as u32)
    }

    fn contains(&self, addr: u32) -> bool {
        addr >= self.base && addr < self.end()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Image {
    pub segments: Vec<Segment>,
}

impl Image {
    pub fn from_bytes(base: u32, bytes: Vec<u8>) -> Self {
        let seg = Segment { name: "segment0".into(), base, bytes };
        Self { segments: vec![seg] }
    }

    /// Fetches the instruction starting at `addr`: two bytes decide the
    /// width, two more are read for standard encodings.
    pub fn fetch(&self, addr: u32) -> Option<(u32, Width)> {
        let lo = read_u16(self, addr)? as u32;
        match classify(lo) {
            Width::Compressed => Some((lo, Width::Compressed)),
            Width::Standard => Some((read_u32(self, addr)?, Width::Standard)),
        }
    }
}

/// Loads a raw little-endian image at `base`, dropping `skip` leading bytes
/// and keeping at most `len`.
pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    Ok(Image::from_bytes(base, payload.to_vec()))
}

pub fn read_u8(img: &Image, addr: u32) -> Option<u8> {
    img.segments
        .iter()
        .find(|s| s.contains(addr))
        .map(|s| s.bytes[(addr - s.base) as usize])
}

pub fn read_u16(img: &Image, addr: u32) -> Option<u16> {
    let b0 = read_u8(img, addr)?;
    let b1 = read_u8(img, addr.wrapping_add(1))?;
    Some(u16::from_le_bytes([b0, b1]))
}

pub fn read_u32(img: &Image, addr: u32) -> Option<u32> {
    let lo = read_u16(img, addr)? as u32;
    let hi = read_u16(img, addr.wrapping_add(2))? as u32;
    Some((hi << 16) | lo)
}

pub fn is_mapped(img: &Image, addr: u32) -> bool {
    img.segments.iter().any(|s| s.contains(addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_maps_skip_and_len() {
        let path = std::env::temp_dir().join("_rvdecode_loader_test.bin");
        std::fs::write(&path, [0u8, 1, 2, 3, 4, 5]).unwrap();
        let img = load_raw_bin(&path, 0x8000_0000, 2, Some(3)).unwrap();
        assert_eq!(img.segments.len(), 1);
        let s = &img.segments[0];
        assert_eq!(s.base, 0x8000_0000);
        assert_eq!(s.bytes, vec![2, 3, 4]);
        assert_eq!(read_u16(&img, 0x8000_0000), Some(0x0302));
        assert!(read_u32(&img, 0x8000_0000).is_none());
        assert!(load_raw_bin(&path, 0, 7, None).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn fetch_picks_width_from_low_bits() {
        // c.li a0, 1 followed by addi zero, zero, 0
        let img = Image::from_bytes(0, vec![0x05, 0x45, 0x13, 0x00, 0x00, 0x00]);
        assert_eq!(img.fetch(0), Some((0x4505, Width::Compressed)));
        assert_eq!(img.fetch(2), Some((0x0000_0013, Width::Standard)));
        // standard width but truncated
        assert_eq!(img.fetch(4), Some((0x0000, Width::Compressed)));
        let short = Image::from_bytes(0, vec![0x13, 0x00]);
        assert_eq!(short.fetch(0), None);
    }
}
