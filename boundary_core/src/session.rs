use std::time::Duration;

use log::{info, warn};

use crate::{
    animation::{Animator, Phase, Scheduler, TaskId},
    config::{INTERVAL_STEP_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS, RegenPolicy, VizConfig},
    dataset::{Dataset, DatasetSize},
    error::Result,
    export::{self, TextSink},
    geometry::{Bounds, Segment, line_for},
    plot::{Axis, PlotAdapter, SeriesId},
    weights::{self, WeightTriple},
};

/// One user action, or a timer tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Regenerate,
    Export,
    LoadWeights(String),
    Step,
    ToggleAnimate,
    Reset,
    Faster,
    Slower,
    Tick(TaskId),
}

/// Snapshot of the session for status readouts.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub seed: u32,
    pub points: usize,
    pub phase: Phase,
    pub cursor: Option<usize>,
    pub steps: usize,
    pub interval: Duration,
    pub weights: Option<WeightTriple>,
    /// Whether a boundary line is currently drawn.
    pub has_line: bool,
    pub message: String,
}

/// Advances a seed the way every regeneration does.
pub fn next_seed(seed: u32) -> u32 {
    seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223)
}

/// The single owner of everything the visualizer mutates: dataset, weight
/// sequence, cursor, timer handle, and the surfaces they are pushed to.
pub struct Session<P, S, X> {
    size: DatasetSize,
    policy: RegenPolicy,
    dataset: Dataset,
    bounds: Bounds,
    segment: Segment,
    animator: Animator,
    interval: Duration,
    message: String,
    plot: P,
    scheduler: S,
    sink: X,
}

impl<P, S, X> Session<P, S, X>
where
    P: PlotAdapter,
    S: Scheduler,
    X: TextSink,
{
    /// Creates a session, generating the initial dataset and drawing it
    /// with the baseline boundary.
    ///
    /// # Arguments
    /// * `config` - The visualizer settings.
    /// * `plot` - The surface points and lines are pushed to.
    /// * `scheduler` - Provider of the animation timer.
    /// * `sink` - Receiver of exported text.
    ///
    /// # Errors
    /// Returns an error if `config` does not validate.
    pub fn new(config: &VizConfig, plot: P, scheduler: S, sink: X) -> Result<Self> {
        config.validate()?;

        let size = config.size()?;
        let dataset = Dataset::generate(size, config.seed, config.layout);
        let bounds = dataset.bounds();

        let mut session = Self {
            size,
            policy: config.on_regenerate,
            dataset,
            bounds,
            segment: Segment::Empty,
            animator: Animator::new(),
            interval: config.interval(),
            message: "no weights loaded".into(),
            plot,
            scheduler,
            sink,
        };

        session.push_dataset();
        session.push_boundary();
        Ok(session)
    }

    /// Runs the method `cmd` maps to.
    ///
    /// # Errors
    /// Only [`Command::Export`] can fail.
    pub fn dispatch(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::Regenerate => self.regenerate(),
            Command::Export => return self.export(),
            Command::LoadWeights(text) => self.load_weights(&text),
            Command::Step => self.step(),
            Command::ToggleAnimate => self.toggle_animate(),
            Command::Reset => self.reset(),
            Command::Faster => self.faster(),
            Command::Slower => self.slower(),
            Command::Tick(task) => self.tick(task),
        }

        Ok(())
    }

    /// Advances the seed and replaces the dataset.
    ///
    /// The boundary is always recomputed against the new bounds. Under
    /// [`RegenPolicy::Reset`] the animation is stopped and rewound first.
    pub fn regenerate(&mut self) {
        let seed = next_seed(self.dataset.seed());
        self.dataset = Dataset::generate(self.size, seed, self.dataset.layout());
        self.bounds = self.dataset.bounds();

        if self.policy == RegenPolicy::Reset {
            self.animator.reset(&mut self.scheduler);
        }

        info!(seed = seed, n = self.dataset.len(); "dataset regenerated");
        self.message = format!("regenerated with seed {seed}");
        self.push_dataset();
        self.push_boundary();
    }

    /// Hands the dataset CSV to the sink.
    ///
    /// # Errors
    /// Returns `VizErr::Io` if the sink fails.
    pub fn export(&mut self) -> Result<()> {
        let name = export::dataset_file_name(self.dataset.seed());
        let text = export::dataset_csv(self.dataset.points());

        if let Err(e) = self.sink.deliver(&name, &text) {
            warn!("export of {name} failed: {e}");
            self.message = format!("export failed: {e}");
            return Err(e.into());
        }

        info!(rows = self.dataset.len(); "exported {name}");
        self.message = format!("exported {} points to {name}", self.dataset.len());
        Ok(())
    }

    /// Parses `text` and replaces the weight sequence, rewinding to the baseline.
    pub fn load_weights(&mut self, text: &str) {
        let report = weights::parse_report(text);
        let (loaded, dropped) = (report.weights.len(), report.dropped.len());

        self.animator.load(report.weights, &mut self.scheduler);
        info!(steps = loaded, dropped = dropped; "weights loaded");

        self.message = match (loaded, dropped) {
            (0, _) => "no weights loaded".into(),
            (n, 0) => format!("loaded {n} steps"),
            (n, 1) => format!("loaded {n} steps (1 row dropped)"),
            (n, d) => format!("loaded {n} steps ({d} rows dropped)"),
        };
        self.push_boundary();
    }

    pub fn step(&mut self) {
        if self.require_sequence() && self.animator.step() {
            self.message = self.position();
            self.push_boundary();
        }
    }

    /// Starts the animation at the current interval, or pauses it.
    pub fn toggle_animate(&mut self) {
        if !self.require_sequence() {
            return;
        }

        self.message = match self.animator.toggle(self.interval, &mut self.scheduler) {
            Phase::Running => format!("animating every {} ms", self.interval.as_millis()),
            _ => format!("paused at {}", self.position()),
        };
    }

    pub fn reset(&mut self) {
        if self.require_sequence() && self.animator.reset(&mut self.scheduler) {
            self.message = "reset to baseline".into();
            self.push_boundary();
        }
    }

    /// Shortens the tick interval. Takes effect on the next animation start.
    pub fn faster(&mut self) {
        let ms = self.interval_ms().saturating_sub(INTERVAL_STEP_MS);
        self.set_interval(ms);
    }

    /// Lengthens the tick interval. Takes effect on the next animation start.
    pub fn slower(&mut self) {
        let ms = self.interval_ms() + INTERVAL_STEP_MS;
        self.set_interval(ms);
    }

    /// Handles a timer tick. The message reports the new position, or that
    /// the animation finished once the timer has stopped itself.
    pub fn tick(&mut self, task: TaskId) {
        let was_running = self.animator.phase() == Phase::Running;
        let moved = self.animator.tick(task, &mut self.scheduler);

        if was_running && self.animator.phase() != Phase::Running {
            self.message = format!("finished at {}", self.position());
        } else if moved {
            self.message = self.position();
        }

        if moved {
            self.push_boundary();
        }
    }

    pub fn status(&self) -> Status {
        Status {
            seed: self.dataset.seed(),
            points: self.dataset.len(),
            phase: self.animator.phase(),
            cursor: self.animator.cursor(),
            steps: self.animator.len(),
            interval: self.interval,
            weights: self.animator.current().copied(),
            has_line: !self.segment.is_empty(),
            message: self.message.clone(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The boundary segment last pushed to the plot.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn plot(&self) -> &P {
        &self.plot
    }

    pub fn plot_mut(&mut self) -> &mut P {
        &mut self.plot
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn sink(&self) -> &X {
        &self.sink
    }

    fn require_sequence(&mut self) -> bool {
        if self.animator.is_empty() {
            self.message = "no weights loaded".into();
            return false;
        }
        true
    }

    fn position(&self) -> String {
        match self.animator.cursor() {
            None => "baseline".into(),
            Some(i) => format!("step {} / {}", i + 1, self.animator.len()),
        }
    }

    fn interval_ms(&self) -> u64 {
        self.interval.as_millis() as u64
    }

    fn set_interval(&mut self, ms: u64) {
        let ms = ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        self.interval = Duration::from_millis(ms);
        self.message = format!("interval {ms} ms");
    }

    fn push_dataset(&mut self) {
        let Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        } = self.bounds;

        self.plot.set_axis_bounds(Axis::X, x_min, x_max);
        self.plot.set_axis_bounds(Axis::Y, y_min, y_max);
        for y in [0, 1] {
            self.plot
                .set_series(SeriesId::for_label(y), &self.dataset.class(y));
        }
    }

    fn push_boundary(&mut self) {
        self.segment = line_for(self.animator.current(), &self.bounds);
        self.plot
            .set_series(SeriesId::Boundary, &self.segment.points());
        self.plot.redraw();
    }
}
