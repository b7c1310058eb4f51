use std::fs;

use log::info;

use crate::container;
use crate::errors::AdpError;
use crate::options::{Mode, Options};
use crate::stream::{StreamCodec, decoded_len, encoded_len};

/// * What a conversion did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    pub header_skipped: bool,
    pub input_bytes: usize,
    pub output_bytes: usize,
}

/// * Convert a whole buffer as read from a file.
/// * The output buffer is allocated here by the I/O side, the codec only fills it.
pub fn convert_bytes(file: &[u8], mode: Mode, codec: &StreamCodec) -> Result<(Vec<u8>, bool), AdpError> {
    let payload = container::strip_header(file);
    let header_skipped = payload.len() != file.len();
    let output = match mode {
        Mode::Decode => {
            let mut buffer = vec![0u8; decoded_len(payload.len())];
            let length = codec.decode_into(payload, &mut buffer)?;
            buffer.truncate(length);
            buffer
        }
        Mode::Encode => {
            let mut buffer = vec![0u8; encoded_len(payload.len())];
            let length = codec.encode_into(payload, &mut buffer)?;
            buffer.truncate(length);
            buffer
        }
    };
    Ok((output, header_skipped))
}

/// * Read `options.input`, convert it, write `options.output`.
pub fn convert(options: &Options) -> Result<ConvertReport, AdpError> {
    let file = fs::read(&options.input).map_err(|e| AdpError::io_with_path(e, &options.input))?;
    let codec = StreamCodec::new(options.layout);
    let (output, header_skipped) = convert_bytes(&file, options.mode, &codec)?;
    fs::write(&options.output, &output).map_err(|e| AdpError::io_with_path(e, &options.output))?;
    info!(
        "{:?} {} ({} bytes, {} channel(s)) -> {} ({} bytes)",
        options.mode,
        options.input.display(),
        file.len(),
        options.layout.channels(),
        options.output.display(),
        output.len()
    );
    Ok(ConvertReport {
        header_skipped,
        input_bytes: file.len(),
        output_bytes: output.len(),
    })
}
