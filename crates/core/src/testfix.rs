// Minimal EXIF byte streams for tests: a little-endian TIFF whose IFD0
// carries a single ASCII DateTime field, and the same blob wrapped in a JPEG
// APP1 segment.

pub(crate) fn exif_tiff(taken: &str) -> Vec<u8> {
    assert_eq!(taken.len(), 19, "EXIF datetime must be YYYY:MM:DD HH:MM:SS");

    let mut tiff = Vec::new();
    tiff.extend_from_slice(&[0x49, 0x49, 0x2a, 0x00]);
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x0132u16.to_le_bytes());
    tiff.extend_from_slice(&2u16.to_le_bytes());
    tiff.extend_from_slice(&20u32.to_le_bytes());
    tiff.extend_from_slice(&26u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    tiff.extend_from_slice(taken.as_bytes());
    tiff.push(0);
    tiff
}

pub(crate) fn exif_jpeg(taken: &str) -> Vec<u8> {
    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(&exif_tiff(taken));

    let mut jpeg = vec![0xff, 0xd8, 0xff, 0xe1];
    jpeg.extend_from_slice(&(payload.len() as u16 + 2).to_be_bytes());
    jpeg.extend_from_slice(&payload);
    jpeg.extend_from_slice(&[0xff, 0xd9]);
    jpeg
}
