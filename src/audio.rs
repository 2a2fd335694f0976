//! Audio system using Web Audio API
//!
//! Every sound is a single oscillator with a decaying gain envelope.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::sim::{Tone, Waveform};

/// Peak gain of a tone before the master volume is applied
const TONE_GAIN: f32 = 0.3;
/// Envelope floor (exponential ramps cannot reach zero)
const TONE_FLOOR: f32 = 0.01;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl AudioManager {
    pub fn new(volume: f32) -> Self {
        // May fail outside a secure context or without audio support
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Play a feedback tone
    pub fn play(&self, tone: Tone) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Browsers keep the context suspended until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let (freq, duration, waveform) = tone.params();
        self.play_envelope(ctx, freq, duration as f64, waveform);
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    fn play_envelope(&self, ctx: &AudioContext, freq: f32, duration: f64, waveform: Waveform) {
        let osc_type = match waveform {
            Waveform::Smooth => OscillatorType::Sine,
            Waveform::Harsh => OscillatorType::Square,
        };
        let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain()
            .set_value_at_time(TONE_GAIN * self.volume, t)
            .ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(TONE_FLOOR, t + duration)
            .ok();

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + duration).ok();
    }
}
