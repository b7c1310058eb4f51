/// * The 4-bit ADPCM codec of one channel, with its step table.
pub mod adpcm;

/// * Mono and stereo nibble packing over whole buffers.
pub mod stream;

/// * The optional `ADP\x02` file header.
pub mod container;

/// * Command line options.
pub mod options;

/// * File to file conversion.
pub mod converter;

/// * Errors returned from most of the function in this library.
pub mod errors;

pub use adpcm::{ChannelCodec, INDEX_DELTAS, STEP_TABLE};
pub use container::{ADP_HEADER_SIZE, ADP_MAGIC, data_offset, strip_header};
pub use converter::{ConvertReport, convert, convert_bytes};
pub use errors::{AdpError, IOErrorInfo};
pub use options::{Mode, Options, USAGE};
pub use stream::{ChannelLayout, StreamCodec, decoded_len, encoded_len};

/// * Encode interleaved 16-bit little-endian PCM with 1 or 2 channels into ADP ADPCM.
pub fn encode(pcm: &[u8], channels: u16) -> Result<Vec<u8>, AdpError> {
    StreamCodec::new(ChannelLayout::from_channels(channels)?).encode(pcm)
}

/// * Decode ADP ADPCM with 1 or 2 channels into interleaved 16-bit little-endian PCM.
pub fn decode(adpcm: &[u8], channels: u16) -> Result<Vec<u8>, AdpError> {
    StreamCodec::new(ChannelLayout::from_channels(channels)?).decode(adpcm)
}
