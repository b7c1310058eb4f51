// Encode and decode algorithms for
// the 4-bit ADPCM used by "ADP" sound files.

// The step table is the OKI table scaled by 16, the index adjustment is the
// same. Samples are full 16-bit, no high pass.

/// * Quantization step sizes, indexed by the step index `0..=48`.
pub const STEP_TABLE: [i32; 49] = [
    256,  272,  304,  336,  368,  400,  448,  496,
    544,  592,  656,  720,  800,  880,  960, 1056,
    1168, 1280, 1408, 1552, 1712, 1888, 2080, 2288,
    2512, 2768, 3040, 3344, 3680, 4048, 4464, 4912,
    5392, 5936, 6528, 7184, 7904, 8704, 9568, 10528,
    11584, 12736, 14016, 15408, 16960, 18656, 20512, 22576,
    24832
];

/// * Step index adjustment for every 4-bit code. The sign bit doesn't matter.
pub const INDEX_DELTAS: [i8; 16] = [
    -1, -1, -1, -1, 2, 4, 6, 8,
    -1, -1, -1, -1, 2, 4, 6, 8
];

pub const MAX_STEP_INDEX: u8 = (STEP_TABLE.len() - 1) as u8;

/// * Reconstruct the delta of a 4-bit code at the given step size.
/// * The three low bits weigh `step/4`, `step/2` and `step`, on top of a `step/8` bias. Bit 3 is the sign.
pub fn code_to_delta(code: u8, step: i32) -> i32 {
    let mut delta = step >> 3;
    if code & 1 != 0 {
        delta += step >> 2;
    }
    if code & 2 != 0 {
        delta += step >> 1;
    }
    if code & 4 != 0 {
        delta += step;
    }
    if code & 8 != 0 {
        delta = -delta;
    }
    delta
}

/// * The state update shared by the encoder and the decoder.
pub fn adp_step(code: u8, history: &mut i16, step_hist: &mut u8) -> i16 {
    let code = code & 0xF;
    let step = STEP_TABLE[*step_hist as usize];
    let out = (*history as i32 + code_to_delta(code, step)).clamp(i16::MIN as i32, i16::MAX as i32) as i16;
    *history = out;
    let adjusted_step = *step_hist as i8 + INDEX_DELTAS[code as usize];
    *step_hist = adjusted_step.clamp(0, MAX_STEP_INDEX as i8) as u8;
    out
}

/// * Quantize one sample against the current prediction, then advance the state from the code.
pub fn adp_encode_step(input: i16, history: &mut i16, step_hist: &mut u8) -> u8 {
    let step = STEP_TABLE[*step_hist as usize];
    let delta = input as i32 - *history as i32;
    let sign: u8 = if delta < 0 { 8 } else { 0 };
    let quantized = ((delta.abs() << 2) / step).min(7) as u8;
    let code = sign | quantized;
    adp_step(code, history, step_hist);
    code
}

/// * The adaptive predictor of one audio channel.
/// * A fresh one starts at step index 0 with a prediction of 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChannelCodec {
    history: i16,
    step_hist: u8,
}

impl ChannelCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// * Decode one 4-bit code into a PCM sample. Only the low 4 bits of `code` are used.
    pub fn decode_step(&mut self, code: u8) -> i16 {
        adp_step(code, &mut self.history, &mut self.step_hist)
    }

    /// * Encode one PCM sample into a 4-bit code. The state evolves exactly as `decode_step()` of that code would.
    pub fn encode_step(&mut self, sample: i16) -> u8 {
        adp_encode_step(sample, &mut self.history, &mut self.step_hist)
    }

    pub fn step_index(&self) -> u8 {
        self.step_hist
    }

    pub fn predicted_sample(&self) -> i16 {
        self.history
    }
}
