//! Scroll position to tour progress, with scrub smoothing and section triggers.

use smallvec::SmallVec;

/// Map the scroll container's viewport-relative rect to progress in [0, 1].
///
/// Progress is 0 when the container's top meets the viewport top and 1 when its
/// bottom meets the viewport bottom.
pub fn scroll_progress(top: f32, height: f32, viewport_height: f32) -> f32 {
    let span = height - viewport_height;
    if !(span > 0.0) {
        return if top < 0.0 { 1.0 } else { 0.0 };
    }
    (-top / span).clamp(0.0, 1.0)
}

/// Scroll-linked playhead. The raw scroll target is followed with a lag
/// (the scrub); disabling freezes the playhead where it is.
#[derive(Clone, Debug)]
pub struct ScrollDriver {
    target: f32,
    playhead: f32,
    enabled: bool,
    scrub_sec: f32,
}

impl ScrollDriver {
    pub fn new(scrub_sec: f32) -> Self {
        Self {
            target: 0.0,
            playhead: 0.0,
            enabled: true,
            scrub_sec: scrub_sec.max(0.0),
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_target(&mut self, progress: f32) {
        if progress.is_finite() {
            self.target = progress.clamp(0.0, 1.0);
        }
    }

    /// Enabling snaps the playhead to the current scroll target.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled && !self.enabled {
            self.playhead = self.target;
        }
        self.enabled = enabled;
    }

    /// Move the playhead towards the target. Returns the playhead when the driver is live.
    pub fn advance(&mut self, dt_sec: f32) -> Option<f32> {
        if !self.enabled {
            return None;
        }
        if self.scrub_sec <= 0.0 {
            self.playhead = self.target;
        } else {
            // Reaches ~95% of a step within one scrub period.
            let tau = self.scrub_sec / 3.0;
            let alpha = 1.0 - (-dt_sec.max(0.0) / tau).exp();
            self.playhead += (self.target - self.playhead) * alpha;
            if (self.target - self.playhead).abs() < 1e-5 {
                self.playhead = self.target;
            }
        }
        Some(self.playhead)
    }
}

/// Viewport-relative vertical extent of a section element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub bottom: f32,
}

/// Where a section sits relative to its trigger range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    /// Top still below the viewport centre.
    Before,
    Active,
    /// Bottom at or above the viewport top.
    After,
}

impl Zone {
    fn of(rect: &SectionRect, centre: f32) -> Self {
        if rect.top > centre {
            Zone::Before
        } else if rect.bottom <= 0.0 {
            Zone::After
        } else {
            Zone::Active
        }
    }
}

/// Tracks which sections are active. A section is active while its top is at
/// or above the viewport centre and its bottom is still below the viewport top.
///
/// A section fires when its range is entered: from above when its start line is
/// crossed going down, from below when its end line is crossed going up. A
/// single update that carries a section across its whole range still fires it.
#[derive(Clone, Debug, Default)]
pub struct SectionTriggers {
    zones: Vec<Zone>,
}

impl SectionTriggers {
    pub fn new(count: usize) -> Self {
        Self {
            zones: vec![Zone::Before; count],
        }
    }

    /// Update with fresh rects; returns the indices that fired, in the order the
    /// scroll crossed them (document order going down, reverse going up).
    pub fn update(&mut self, rects: &[SectionRect], viewport_height: f32) -> SmallVec<[usize; 4]> {
        if self.zones.len() != rects.len() {
            self.zones.resize(rects.len(), Zone::Before);
        }
        let centre = viewport_height * 0.5;
        let mut down: SmallVec<[usize; 4]> = SmallVec::new();
        let mut up: SmallVec<[usize; 4]> = SmallVec::new();
        for (i, r) in rects.iter().enumerate() {
            let now = Zone::of(r, centre);
            match (self.zones[i], now) {
                (Zone::Before, Zone::Active | Zone::After) => down.push(i),
                (Zone::After, Zone::Active | Zone::Before) => up.push(i),
                _ => {}
            }
            self.zones[i] = now;
        }
        down.extend(up.into_iter().rev());
        down
    }
}
