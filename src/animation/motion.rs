//! Idle motions
//!
//! Small closed-form offsets layered on top of a group's resting transform so
//! the diagrams never look frozen while playing.

use crate::gfx::scene::object::Transform;

/// Transform component an idle motion drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    RotationX,
    RotationY,
    RotationZ,
    PositionX,
    PositionY,
    PositionZ,
}

impl Channel {
    fn component_mut(self, transform: &mut Transform) -> &mut f32 {
        match self {
            Channel::RotationX => &mut transform.rotation.x,
            Channel::RotationY => &mut transform.rotation.y,
            Channel::RotationZ => &mut transform.rotation.z,
            Channel::PositionX => &mut transform.translation.x,
            Channel::PositionY => &mut transform.translation.y,
            Channel::PositionZ => &mut transform.translation.z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waveform {
    /// `amplitude * sin(frequency * t + phase)`
    Sine {
        amplitude: f32,
        frequency: f32,
        phase: f32,
    },
    /// `rate * t`, used for continuous spins.
    Linear { rate: f32 },
}

impl Waveform {
    pub fn offset(&self, t: f32) -> f32 {
        match *self {
            Waveform::Sine {
                amplitude,
                frequency,
                phase,
            } => amplitude * (frequency * t + phase).sin(),
            Waveform::Linear { rate } => rate * t,
        }
    }
}

/// One channel of one named group, driven by a waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleMotion {
    pub group: &'static str,
    pub channel: Channel,
    pub waveform: Waveform,
}

impl IdleMotion {
    pub fn sine(group: &'static str, channel: Channel, amplitude: f32, frequency: f32) -> Self {
        Self {
            group,
            channel,
            waveform: Waveform::Sine {
                amplitude,
                frequency,
                phase: 0.0,
            },
        }
    }

    pub fn spin(group: &'static str, channel: Channel, rate: f32) -> Self {
        Self {
            group,
            channel,
            waveform: Waveform::Linear { rate },
        }
    }

    /// Shifts a sine motion by `phase` radians. Linear motions are unchanged.
    pub fn with_phase(mut self, phase: f32) -> Self {
        if let Waveform::Sine { phase: p, .. } = &mut self.waveform {
            *p = phase;
        }
        self
    }

    pub fn offset(&self, t: f32) -> f32 {
        self.waveform.offset(t)
    }

    /// Adds this motion's offset at time `t` onto `transform`.
    ///
    /// The caller starts from the resting transform each frame, so several
    /// motions on the same channel accumulate.
    pub fn apply(&self, t: f32, transform: &mut Transform) {
        *self.channel.component_mut(transform) += self.offset(t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_sine_offset() {
        let motion = IdleMotion::sine("layer", Channel::RotationY, 0.05, 0.5);
        assert!(motion.offset(0.0).abs() < 1e-6);
        // sin(0.5 * PI) = 1
        assert!((motion.offset(PI) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_phase_shift() {
        let motion = IdleMotion::sine("layer", Channel::PositionY, 2.0, 1.0).with_phase(FRAC_PI_2);
        assert!((motion.offset(0.0) - 2.0).abs() < 1e-6);

        let spin = IdleMotion::spin("core", Channel::RotationY, 0.5).with_phase(1.0);
        assert!((spin.offset(2.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_apply_targets_one_channel() {
        let mut transform = Transform::at(Vector3::new(1.0, 2.0, 3.0));
        IdleMotion::spin("g", Channel::PositionY, 1.0).apply(0.5, &mut transform);
        assert_eq!(transform.translation, Vector3::new(1.0, 2.5, 3.0));
        assert_eq!(transform.rotation, Vector3::new(0.0, 0.0, 0.0));

        IdleMotion::spin("g", Channel::RotationX, 2.0).apply(0.25, &mut transform);
        assert!((transform.rotation.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_motions_accumulate_on_same_channel() {
        let mut transform = Transform::default();
        let a = IdleMotion::spin("g", Channel::RotationZ, 1.0);
        let b = IdleMotion::spin("g", Channel::RotationZ, 3.0);
        a.apply(1.0, &mut transform);
        b.apply(1.0, &mut transform);
        assert!((transform.rotation.z - 4.0).abs() < 1e-6);
    }
}
