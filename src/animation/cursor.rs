use crate::{animation::ease::Ease, foundation::core::Point};

/// Cyclic cursor motion over a set of waypoints.
///
/// The track alternates move and press segments: each move interpolates from
/// the previous waypoint (wrapping, so the first move starts from the last
/// waypoint) to the current one, then a short press plays in place before the
/// next move begins. Sampling wraps modulo [`CursorTrack::period`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorTrack {
    /// Waypoints visited in order, one per grid card center.
    pub waypoints: Vec<Point>,
    /// Duration of one move segment in seconds.
    pub move_duration: f64,
    /// Duration of one press segment in seconds.
    pub press_duration: f64,
    /// Fraction of cursor scale lost at full press depth.
    pub press_depth: f64,
    /// Curve applied to move interpolation and press depth.
    pub ease: Ease,
}

/// Phase of the track at a sampled instant.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Moving { from: usize, to: usize, t: f64 },
    Pressing { at: usize, t: f64 },
}

impl CursorTrack {
    /// Length of one full tour over all waypoints in seconds.
    pub fn period(&self) -> f64 {
        (self.waypoints.len() as f64) * (self.move_duration + self.press_duration)
    }

    /// Cursor center position at time `t` seconds from the track start.
    pub fn position_at(&self, t: f64) -> Point {
        match self.phase_at(t) {
            None => Point::ORIGIN,
            Some(Phase::Pressing { at, .. }) => self.waypoints[at],
            Some(Phase::Moving { from, to, t }) => {
                let a = self.waypoints[from];
                let b = self.waypoints[to];
                let k = self.ease.apply(t);
                Point::new(a.x + (b.x - a.x) * k, a.y + (b.y - a.y) * k)
            }
        }
    }

    /// Cursor scale multiplier at time `t`: 1.0 while moving, shrinking by
    /// [`press_depth`](Self::press_depth) through a press.
    pub fn scale_at(&self, t: f64) -> f64 {
        match self.phase_at(t) {
            Some(Phase::Pressing { t, .. }) => 1.0 - self.press_depth * self.ease.apply(t),
            _ => 1.0,
        }
    }

    /// Start times of every press segment strictly before `until`.
    ///
    /// These are the instants a click sound belongs to; the scheduler turns
    /// them into audio events when a click source is configured.
    pub fn press_starts(&self, until: f64) -> Vec<f64> {
        let slot = self.move_duration + self.press_duration;
        if self.waypoints.is_empty() || slot <= 0.0 {
            return Vec::new();
        }
        let mut starts = Vec::new();
        let mut cycle_base = 0.0;
        'cycles: loop {
            for i in 0..self.waypoints.len() {
                let press_start = cycle_base + (i as f64) * slot + self.move_duration;
                if press_start >= until {
                    break 'cycles;
                }
                starts.push(press_start);
            }
            cycle_base += self.period();
        }
        starts
    }

    fn phase_at(&self, t: f64) -> Option<Phase> {
        let n = self.waypoints.len();
        let slot = self.move_duration + self.press_duration;
        if n == 0 || slot <= 0.0 {
            return None;
        }
        let local = t.max(0.0) % self.period();
        let idx = ((local / slot) as usize).min(n - 1);
        let phase = local - (idx as f64) * slot;
        if phase < self.move_duration {
            Some(Phase::Moving {
                from: (idx + n - 1) % n,
                to: idx,
                t: phase / self.move_duration,
            })
        } else {
            Some(Phase::Pressing {
                at: idx,
                t: (phase - self.move_duration) / self.press_duration,
            })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/cursor.rs"]
mod tests;
