use log::{debug, info};

/// * The magic of the ADP file header
pub const ADP_MAGIC: [u8; 4] = *b"ADP\x02";

/// * The ADP header is 16 bytes: magic, big-endian payload size, then 8 bytes we don't use.
pub const ADP_HEADER_SIZE: usize = 16;

/// * Where the ADPCM payload starts in a file.
/// * The header is only trusted when its size field equals the file size minus the header, otherwise the whole file is payload.
pub fn data_offset(file: &[u8]) -> usize {
    if file.len() < 8 || file[0..4] != ADP_MAGIC {
        return 0;
    }
    let size_field = u32::from_be_bytes([file[4], file[5], file[6], file[7]]) as usize;
    match file.len().checked_sub(ADP_HEADER_SIZE) {
        Some(payload) if payload == size_field => ADP_HEADER_SIZE,
        _ => {
            debug!("ADP magic found but the size field {size_field} doesn't match the file size {}, treating as headerless", file.len());
            0
        }
    }
}

/// * The part of the file to feed to the codec.
pub fn strip_header(file: &[u8]) -> &[u8] {
    let offset = data_offset(file);
    if offset != 0 {
        info!("Found ADP header, skipping {offset} bytes");
    }
    &file[offset..]
}
