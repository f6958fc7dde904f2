use std::time::Duration;

/// Timing and contact counters for one call to [`World::step`](crate::world::World::step).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepStats {
    pub integrate_time: Duration,
    pub wall_time: Duration,
    pub pair_time: Duration,
    pub total_frame_time: Duration,

    /// Delta actually integrated, after clamping.
    pub dt: f32,
    pub body_count: usize,
    pub wall_contacts: usize,
    pub pair_contacts: usize,
    /// Pairs resolved with the fallback normal because their centers coincided.
    pub degenerate_contacts: usize,
}

impl StepStats {
    /// Logs the counters and the per-phase share of the step at `info` level.
    pub fn report(&self) {
        let total_us = self.total_frame_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        log::info!(
            "step: bodies={} wall_contacts={} pair_contacts={} degenerate={} dt={:.4}",
            self.body_count,
            self.wall_contacts,
            self.pair_contacts,
            self.degenerate_contacts,
            self.dt
        );
        log::info!(
            "  total {:.3} ms | integrate {:.1}% | walls {:.1}% | pairs {:.1}%",
            self.total_frame_time.as_secs_f32() * 1000.0,
            (self.integrate_time.as_micros() as f32 / total_us) * 100.0,
            (self.wall_time.as_micros() as f32 / total_us) * 100.0,
            (self.pair_time.as_micros() as f32 / total_us) * 100.0
        );
    }
}

/// Running totals across many steps.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhysicsProfiler {
    pub frames: u64,
    pub over_budget_frames: u64,
    pub total_time: Duration,
    pub last: StepStats,
}

impl PhysicsProfiler {
    pub fn record(&mut self, stats: StepStats, over_budget: bool) {
        self.frames += 1;
        if over_budget {
            self.over_budget_frames += 1;
        }
        self.total_time += stats.total_frame_time;
        self.last = stats;
    }

    pub fn average_frame_time(&self) -> Duration {
        if self.frames == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.total_time.as_secs_f64() / self.frames as f64)
    }

    /// Logs totals and then the breakdown of the most recent step.
    pub fn report(&self) {
        log::info!(
            "profiler: frames={} over_budget={} average={:.3} ms",
            self.frames,
            self.over_budget_frames,
            self.average_frame_time().as_secs_f64() * 1000.0
        );
        self.last.report();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiler_accumulates_frames() {
        let mut profiler = PhysicsProfiler::default();
        let stats = StepStats {
            total_frame_time: Duration::from_millis(4),
            ..StepStats::default()
        };
        profiler.record(stats, false);
        profiler.record(stats, true);

        assert_eq!(profiler.frames, 2);
        assert_eq!(profiler.over_budget_frames, 1);
        assert_eq!(profiler.average_frame_time(), Duration::from_millis(4));
    }

    #[test]
    fn average_survives_frame_counts_past_u32() {
        let profiler = PhysicsProfiler {
            frames: 1 << 32,
            total_time: Duration::from_secs(1 << 32),
            ..PhysicsProfiler::default()
        };
        assert_eq!(profiler.average_frame_time(), Duration::from_secs(1));
        profiler.report();
    }

    #[test]
    fn empty_profiler_reports_zero_average() {
        let profiler = PhysicsProfiler::default();
        assert_eq!(profiler.average_frame_time(), Duration::ZERO);
        profiler.report();
    }
}
