//! Linked histogram + map view controller

mod events;
mod snapshot;

pub(crate) use events::{ViewEvent, parse_drag_flag, parse_events};
pub(crate) use snapshot::Snapshot;

use crate::classify::{
    self, BreakSequence, Breakpoint, Bucket, ClassifyError, ColorAssignment, DEFAULT_BUCKETS,
    DEFAULT_MIN_GAP, InitOutcome, Tick, ValueScale,
};
use crate::dataset::{self, Observation, Variable};

/// Width of the histogram plotting area in screen units (500 minus margins)
pub(crate) const DEFAULT_CHART_WIDTH: f64 = 440.0;

/// Receives recomputed view state. Calls are side-effect only.
pub(crate) trait Renderer {
    fn render_buckets(&mut self, variable: Variable, buckets: &[Bucket]);
    fn render_axis_ticks(&mut self, ticks: &[Tick]);
    fn render_break_lines(&mut self, breaks: &[Breakpoint]);
    fn render_region_colors(&mut self, colors: &ColorAssignment);
}

/// Runtime settings for a view
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ViewSettings {
    pub(crate) chart_width: f64,
    pub(crate) min_gap: f64,
    pub(crate) bucket_count: usize,
    /// Reclassify on every drag move, not only on drag end
    pub(crate) live_reclassify: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            chart_width: DEFAULT_CHART_WIDTH,
            min_gap: DEFAULT_MIN_GAP,
            bucket_count: DEFAULT_BUCKETS,
            live_reclassify: false,
        }
    }
}

/// Everything derived from (variable, class count), built before commit
struct Layout {
    variable: Variable,
    class_count: usize,
    palette: &'static [&'static str],
    buckets: Vec<Bucket>,
    ticks: Vec<Tick>,
    breaks: BreakSequence,
    outcome: InitOutcome,
}

/// Classification state for one view: the active variable, class count and
/// break sequence over a fixed region registry
pub(crate) struct Session {
    regions: Vec<Observation>,
    settings: ViewSettings,
    variable: Variable,
    class_count: usize,
    palette: &'static [&'static str],
    buckets: Vec<Bucket>,
    ticks: Vec<Tick>,
    breaks: BreakSequence,
    outcome: InitOutcome,
    colors: ColorAssignment,
}

impl Session {
    /// Build the initial view and render it
    pub(crate) fn new<R: Renderer>(
        regions: Vec<Observation>,
        settings: ViewSettings,
        variable: &str,
        class_count: usize,
        renderer: &mut R,
    ) -> Result<Self, ClassifyError> {
        let variable: Variable = variable.parse()?;
        let layout = prepare(&regions, &settings, variable, class_count)?;

        let mut session = Session {
            regions,
            settings,
            variable: layout.variable,
            class_count: layout.class_count,
            palette: layout.palette,
            buckets: layout.buckets,
            ticks: layout.ticks,
            breaks: layout.breaks,
            outcome: layout.outcome,
            colors: ColorAssignment::default(),
        };
        session.publish(renderer);
        Ok(session)
    }

    pub(crate) fn regions(&self) -> &[Observation] {
        &self.regions
    }

    pub(crate) fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub(crate) fn variable(&self) -> Variable {
        self.variable
    }

    pub(crate) fn class_count(&self) -> usize {
        self.class_count
    }

    pub(crate) fn breakpoints(&self) -> &[Breakpoint] {
        self.breaks.points()
    }

    pub(crate) fn colors(&self) -> &ColorAssignment {
        &self.colors
    }

    /// Requested vs kept breaks when the last recomputation had to collapse
    /// duplicate breaks
    pub(crate) fn degenerate(&self) -> Option<InitOutcome> {
        self.outcome.is_collapsed().then_some(self.outcome)
    }

    pub(crate) fn select_variable<R: Renderer>(
        &mut self,
        name: &str,
        renderer: &mut R,
    ) -> Result<InitOutcome, ClassifyError> {
        let variable: Variable = name.parse()?;
        let layout = prepare(&self.regions, &self.settings, variable, self.class_count)?;
        Ok(self.commit(layout, renderer))
    }

    pub(crate) fn select_class_count<R: Renderer>(
        &mut self,
        class_count: usize,
        renderer: &mut R,
    ) -> Result<InitOutcome, ClassifyError> {
        let layout = prepare(&self.regions, &self.settings, self.variable, class_count)?;
        Ok(self.commit(layout, renderer))
    }

    pub(crate) fn begin_drag(&mut self, index: usize) -> Result<(), ClassifyError> {
        self.breaks.begin_drag(index)
    }

    pub(crate) fn drag_move<R: Renderer>(
        &mut self,
        index: usize,
        position: f64,
        renderer: &mut R,
    ) -> Result<Breakpoint, ClassifyError> {
        let moved = self.breaks.update_drag(index, position)?;
        renderer.render_break_lines(self.breaks.points());
        if self.settings.live_reclassify {
            self.reclassify(renderer);
        }
        Ok(moved)
    }

    pub(crate) fn drag_end<R: Renderer>(
        &mut self,
        index: usize,
        renderer: &mut R,
    ) -> Result<Breakpoint, ClassifyError> {
        let settled = self.breaks.end_drag(index)?;
        self.reclassify(renderer);
        Ok(settled)
    }

    /// Dispatch one selection or gesture event
    pub(crate) fn apply<R: Renderer>(
        &mut self,
        event: &ViewEvent,
        renderer: &mut R,
    ) -> Result<(), ClassifyError> {
        match event {
            ViewEvent::SelectVariable(name) => self.select_variable(name, renderer).map(drop),
            ViewEvent::SelectClassCount(count) => {
                self.select_class_count(*count, renderer).map(drop)
            }
            ViewEvent::BeginDrag(index) => self.begin_drag(*index),
            ViewEvent::DragMove { index, position } => {
                self.drag_move(*index, *position, renderer).map(drop)
            }
            ViewEvent::DragEnd(index) => self.drag_end(*index, renderer).map(drop),
        }
    }

    fn reclassify<R: Renderer>(&mut self, renderer: &mut R) {
        self.colors = classify::classify(
            &self.regions,
            self.variable,
            &self.breaks.values(),
            self.palette,
        );
        renderer.render_region_colors(&self.colors);
    }

    /// Swap in a fully built layout, reclassify and push everything out
    fn commit<R: Renderer>(&mut self, layout: Layout, renderer: &mut R) -> InitOutcome {
        self.variable = layout.variable;
        self.class_count = layout.class_count;
        self.palette = layout.palette;
        self.buckets = layout.buckets;
        self.ticks = layout.ticks;
        self.breaks = layout.breaks;
        self.outcome = layout.outcome;
        self.publish(renderer);
        self.outcome
    }

    fn publish<R: Renderer>(&mut self, renderer: &mut R) {
        renderer.render_buckets(self.variable, &self.buckets);
        renderer.render_axis_ticks(&self.ticks);
        renderer.render_break_lines(self.breaks.points());
        self.reclassify(renderer);
    }
}

/// Validate and compute the whole derived state for a variable and class count
fn prepare(
    regions: &[Observation],
    settings: &ViewSettings,
    variable: Variable,
    class_count: usize,
) -> Result<Layout, ClassifyError> {
    if !(settings.min_gap.is_finite() && settings.min_gap > 0.0) {
        return Err(ClassifyError::InvalidMinGap(settings.min_gap));
    }
    let palette = classify::palette(variable, class_count)?;
    let extent = dataset::extent(regions, variable)
        .ok_or_else(|| ClassifyError::NoData(variable.name().to_string()))?;

    let buckets = classify::compute_buckets(regions, variable, settings.bucket_count)?;
    let ticks = classify::axis_ticks(regions, variable, settings.bucket_count);

    let scale = ValueScale::new(extent, settings.chart_width);
    let initial = classify::compute_initial_breaks(regions, variable, class_count - 1);
    let mut breaks = BreakSequence::new(scale, settings.min_gap);
    let outcome = breaks.initialize(&initial, scale);

    Ok(Layout {
        variable,
        class_count,
        palette,
        buckets,
        ticks,
        breaks,
        outcome,
    })
}
