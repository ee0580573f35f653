//! Fixed timestep accumulator
//!
//! Frame times vary; the simulation does not. Each frame the host feeds the
//! elapsed wall time in and gets back how many fixed steps to run. Whatever
//! is left below one step carries over to the next frame.

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    max_steps_per_frame: Option<usize>,
}

impl FixedTimestep {
    pub fn new(step: f32) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "timestep must be finite and > 0, got {step}"
            )));
        }

        Ok(Self {
            step,
            accumulator: 0.0,
            max_steps_per_frame: None,
        })
    }

    /// Step rate in Hz
    pub fn from_hz(hz: f32) -> Result<Self> {
        Self::new(1.0 / hz)
    }

    /// Cap the steps drained by one `accumulate` call.
    ///
    /// After a long stall the host would otherwise spend the next frame
    /// catching up, fall further behind, and never recover. Time beyond the
    /// cap is dropped.
    pub fn with_max_steps_per_frame(mut self, max_steps: usize) -> Self {
        self.max_steps_per_frame = Some(max_steps);
        self
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time waiting in the accumulator, always below one step after `accumulate`
    pub fn remainder(&self) -> f32 {
        self.accumulator
    }

    /// Fraction of a step left over, for interpolating between states
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    /// Add `frame_dt` seconds and return how many fixed steps are due.
    ///
    /// Negative or non-finite frame times add nothing.
    pub fn accumulate(&mut self, frame_dt: f32) -> usize {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }

        let mut steps = 0;
        while self.accumulator >= self.step {
            if self.max_steps_per_frame.is_some_and(|max| steps >= max) {
                let before = self.accumulator;
                self.accumulator %= self.step;
                log::warn!(
                    "Simulation running behind, dropped {:.4}s after {} steps",
                    before - self.accumulator,
                    steps
                );
                break;
            }
            self.accumulator -= self.step;
            steps += 1;
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_whole_steps_and_carries_remainder() -> Result<()> {
        let mut timestep = FixedTimestep::new(0.25)?;
        assert_eq!(timestep.accumulate(0.625), 2);
        assert_eq!(timestep.remainder(), 0.125);
        assert_eq!(timestep.alpha(), 0.5);

        assert_eq!(timestep.accumulate(0.125), 1);
        assert_eq!(timestep.remainder(), 0.0);
        Ok(())
    }

    #[test]
    fn short_frames_accumulate_until_a_step_is_due() -> Result<()> {
        let mut timestep = FixedTimestep::new(0.5)?;
        assert_eq!(timestep.accumulate(0.125), 0);
        assert_eq!(timestep.accumulate(0.125), 0);
        assert_eq!(timestep.accumulate(0.25), 1);
        Ok(())
    }

    #[test]
    fn ignores_negative_and_nan_frame_times() -> Result<()> {
        let mut timestep = FixedTimestep::new(0.25)?;
        assert_eq!(timestep.accumulate(-1.0), 0);
        assert_eq!(timestep.accumulate(f32::NAN), 0);
        assert_eq!(timestep.remainder(), 0.0);
        Ok(())
    }

    #[test]
    fn caps_steps_and_drops_backlog() -> Result<()> {
        let mut timestep = FixedTimestep::new(0.25)?.with_max_steps_per_frame(3);
        assert_eq!(timestep.accumulate(10.125), 3);
        assert_eq!(timestep.remainder(), 0.125);
        Ok(())
    }

    #[test]
    fn rejects_invalid_step() {
        assert!(FixedTimestep::new(0.0).is_err());
        assert!(FixedTimestep::new(-0.1).is_err());
        assert!(FixedTimestep::new(f32::INFINITY).is_err());
        assert!(FixedTimestep::from_hz(0.0).is_err());
    }
}
