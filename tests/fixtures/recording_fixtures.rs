//! Recording Test Fixtures
//!
//! Generated stand-ins for the clips a telephony platform records:
//! - Sample rate: 8kHz (8000 Hz)
//! - Bit depth: 16-bit signed PCM, little-endian
//! - Channels: Mono
//! - Up to 5 seconds, matching the `<Record timeout="5" />` directive

use serde_json::{Value, json};
use std::f32::consts::PI;

/// Telephony sample rate
pub const SAMPLE_RATE: u32 = 8000;

/// One second of samples at 8kHz
pub const SECOND: usize = 8000;

/// Longest clip the greeting asks for
pub const MAX_RECORDING: usize = 5 * SECOND;

/// Generate silence (zeros)
pub fn generate_silence(duration_samples: usize) -> Vec<i16> {
    vec![0i16; duration_samples]
}

/// Generate a voice-like signal: a 150Hz fundamental with two harmonics under
/// a slowly varying syllable envelope. Deterministic.
pub fn generate_voice_pattern(duration_samples: usize) -> Vec<i16> {
    let base_freq = 150.0;
    let mut state: u64 = 54321;
    let mut envelope = 0.0f32;

    (0..duration_samples)
        .map(|i| {
            // New syllable every 50ms
            if i % 400 == 0 {
                state = state.wrapping_mul(1103515245).wrapping_add(12345);
                let target = ((state >> 16) & 0x7FFF) as f32 / 0x7FFF as f32;
                envelope = envelope * 0.7 + target * 0.3;
            }

            let t = i as f32 / SAMPLE_RATE as f32;
            let waveform = ((2.0 * PI * base_freq * t).sin()
                + (2.0 * PI * base_freq * 2.0 * t).sin() * 0.5
                + (2.0 * PI * base_freq * 3.0 * t).sin() * 0.25)
                / 1.75;
            (waveform * envelope * i16::MAX as f32 * 0.6) as i16
        })
        .collect()
}

/// Convert i16 samples to little-endian bytes
pub fn samples_to_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Wrap samples in a 44-byte mono 16-bit WAV container
pub fn create_wav_file(samples: &[i16]) -> Vec<u8> {
    let data_size = (samples.len() * 2) as u32;
    let mut wav = Vec::with_capacity(44 + data_size as usize);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(data_size + 36).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes()); // byte rate
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    wav.extend(samples_to_bytes(samples));
    wav
}

/// A full-length recording as the media host would serve it
pub fn recorded_clip() -> Vec<u8> {
    create_wav_file(&generate_voice_pattern(MAX_RECORDING))
}

/// Successful recognition body with a single alternative
pub fn transcript_response(transcript: &str, confidence: f64) -> Value {
    json!({
        "results": [
            { "alternatives": [ { "transcript": transcript, "confidence": confidence } ] }
        ]
    })
}

/// Structured service error body
pub fn service_error_response(code: i32, status: &str, message: &str) -> Value {
    json!({
        "error": { "code": code, "message": message, "status": status }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_header_size() {
        let wav = create_wav_file(&generate_silence(SECOND));
        assert_eq!(wav.len(), 44 + SECOND * 2);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
    }

    #[test]
    fn test_voice_pattern_is_not_silent() {
        let samples = generate_voice_pattern(SECOND);
        assert!(samples.iter().any(|&s| s != 0));
    }
}
