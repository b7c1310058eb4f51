use log::debug;

use crate::adpcm::ChannelCodec;
use crate::errors::AdpError;

/// * How the 4-bit codes of one byte are distributed over the channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// * Two consecutive samples of the only channel, the earlier one in the high nibble.
    Mono,

    /// * One frame per byte, left in the high nibble and right in the low nibble.
    Stereo,
}

impl ChannelLayout {
    pub fn from_channels(channels: u16) -> Result<Self, AdpError> {
        match channels {
            1 => Ok(Self::Mono),
            2 => Ok(Self::Stereo),
            o => Err(AdpError::UnsupportedChannels(o)),
        }
    }

    pub fn channels(&self) -> u16 {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }

    /// * Which channel owns the high nibble and which owns the low nibble.
    pub fn nibble_routing(&self) -> [usize; 2] {
        match self {
            Self::Mono => [0, 0],
            Self::Stereo => [0, 1],
        }
    }
}

/// * Size of the ADPCM data for `pcm_len` bytes of 16-bit PCM, 4 bytes of PCM per byte.
pub fn encoded_len(pcm_len: usize) -> usize {
    pcm_len.div_ceil(4)
}

/// * Size of the 16-bit PCM decoded from `adpcm_len` bytes of ADPCM.
pub fn decoded_len(adpcm_len: usize) -> usize {
    adpcm_len * 4
}

/// * Converts whole buffers between interleaved 16-bit PCM and packed ADPCM.
/// * The codec state is fresh on every call, nothing is kept between buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamCodec {
    layout: ChannelLayout,
}

impl StreamCodec {
    pub fn new(layout: ChannelLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// * Encode `pcm` into `out` and return how many bytes of `out` were filled.
    /// * `out` may be larger than needed, the bytes past the returned length are left untouched.
    /// * A trailing odd byte of `pcm` is not a sample and is ignored.
    pub fn encode_into(&self, pcm: &[u8], out: &mut [u8]) -> Result<usize, AdpError> {
        let length = encoded_len(pcm.len());
        check_capacity(length, out.len())?;
        let out = &mut out[..length];
        out.fill(0);

        let routing = self.layout.nibble_routing();
        let mut codecs = [ChannelCodec::new(); 2];
        for (slot, bytes) in pcm.chunks_exact(2).enumerate() {
            let sample = i16::from_le_bytes([bytes[0], bytes[1]]);
            let code = codecs[routing[slot & 1]].encode_step(sample);
            out[slot >> 1] |= if slot & 1 == 0 { code << 4 } else { code };
        }
        debug!("Encoded {} bytes of PCM into {} bytes of {:?} ADPCM", pcm.len(), length, self.layout);
        Ok(length)
    }

    /// * Decode `adpcm` into `out` and return how many bytes of `out` were filled.
    /// * Every input byte yields two samples, the high nibble first.
    pub fn decode_into(&self, adpcm: &[u8], out: &mut [u8]) -> Result<usize, AdpError> {
        let length = decoded_len(adpcm.len());
        check_capacity(length, out.len())?;

        let [high_channel, low_channel] = self.layout.nibble_routing();
        let mut codecs = [ChannelCodec::new(); 2];
        for (&byte, frame) in adpcm.iter().zip(out[..length].chunks_exact_mut(4)) {
            let high = codecs[high_channel].decode_step((byte >> 4) & 0xF);
            let low = codecs[low_channel].decode_step(byte & 0xF);
            frame[..2].copy_from_slice(&high.to_le_bytes());
            frame[2..].copy_from_slice(&low.to_le_bytes());
        }
        debug!("Decoded {} bytes of {:?} ADPCM into {} bytes of PCM", adpcm.len(), self.layout, length);
        Ok(length)
    }

    /// * Encode into a freshly allocated buffer of the exact size.
    pub fn encode(&self, pcm: &[u8]) -> Result<Vec<u8>, AdpError> {
        let mut out = vec![0u8; encoded_len(pcm.len())];
        let length = self.encode_into(pcm, &mut out)?;
        out.truncate(length);
        Ok(out)
    }

    /// * Decode into a freshly allocated buffer of the exact size.
    pub fn decode(&self, adpcm: &[u8]) -> Result<Vec<u8>, AdpError> {
        let mut out = vec![0u8; decoded_len(adpcm.len())];
        let length = self.decode_into(adpcm, &mut out)?;
        out.truncate(length);
        Ok(out)
    }
}

fn check_capacity(needed: usize, capacity: usize) -> Result<(), AdpError> {
    if capacity < needed {
        Err(AdpError::BufferTooSmall(format!("need {needed} bytes, got {capacity}")))
    } else {
        Ok(())
    }
}
