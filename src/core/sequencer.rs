//! Caption sequencing synchronised with scroll sections.
//!
//! Exactly one caption is current. A switch fades the current caption out,
//! then the target in; while that runs every other switch is dropped. The
//! first accepted switch wins, later ones are not queued.

use super::constants::*;
use super::easing::{Ease, Tween};

/// Visual state of one caption element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptionStyle {
    pub opacity: f32,
    /// Vertical offset in CSS pixels.
    pub offset_y: f32,
}

impl CaptionStyle {
    pub const HIDDEN: CaptionStyle = CaptionStyle {
        opacity: 0.0,
        offset_y: CAPTION_REST_OFFSET_PX,
    };
}

#[derive(Clone, Copy, Debug)]
struct Fade {
    index: usize,
    opacity: Tween,
    offset: Tween,
}

impl Fade {
    fn new(index: usize, from: CaptionStyle, to: CaptionStyle, duration: f32, ease: Ease) -> Self {
        Self {
            index,
            opacity: Tween::new(from.opacity, to.opacity, duration, ease),
            offset: Tween::new(from.offset_y, to.offset_y, duration, ease),
        }
    }

    fn advance(&mut self, dt: f32, styles: &mut [CaptionStyle]) -> f32 {
        let over = self.opacity.advance(dt);
        self.offset.advance(dt);
        styles[self.index] = CaptionStyle {
            opacity: self.opacity.value(),
            offset_y: self.offset.value(),
        };
        over
    }
}

#[derive(Clone, Copy, Debug)]
enum Step {
    FadeOut { fade: Fade, target: usize },
    FadeIn { fade: Fade },
}

#[derive(Clone, Debug)]
pub struct CaptionSequencer {
    styles: Vec<CaptionStyle>,
    current: usize,
    busy: bool,
    intro: Option<Fade>,
    step: Option<Step>,
}

impl CaptionSequencer {
    /// Create a sequencer over `count` captions and start fading caption 0 in.
    pub fn new(count: usize) -> Self {
        let styles = vec![CaptionStyle::HIDDEN; count];
        let intro = (count > 0).then(|| {
            Fade::new(
                0,
                CaptionStyle::HIDDEN,
                shown(),
                CAPTION_INTRO_SEC,
                Ease::Power2Out,
            )
        });
        Self {
            styles,
            current: 0,
            busy: false,
            intro,
            step: None,
        }
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    #[inline]
    pub fn styles(&self) -> &[CaptionStyle] {
        &self.styles
    }

    /// Request a switch to caption `target`. Returns whether the switch was accepted.
    pub fn switch_text(&mut self, target: usize) -> bool {
        if target == self.current || self.busy || target >= self.styles.len() {
            return false;
        }
        self.busy = true;
        // The outgoing caption fades from wherever its intro left it.
        if self.intro.as_ref().is_some_and(|f| f.index == self.current) {
            self.intro = None;
        }
        let from = self.styles[self.current];
        let fade = Fade::new(
            self.current,
            from,
            CaptionStyle {
                opacity: 0.0,
                offset_y: CAPTION_EXIT_OFFSET_PX,
            },
            CAPTION_FADE_OUT_SEC,
            Ease::Power2In,
        );
        log::debug!("[captions] switch {} -> {}", self.current, target);
        self.step = Some(Step::FadeOut { fade, target });
        true
    }

    /// Advance running fades by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if let Some(mut intro) = self.intro.take() {
            intro.advance(dt, &mut self.styles);
            if !intro.opacity.finished() {
                self.intro = Some(intro);
            }
        }

        let mut dt = dt;
        while let Some(step) = self.step.take() {
            match step {
                Step::FadeOut { mut fade, target } => {
                    let over = fade.advance(dt, &mut self.styles);
                    if !fade.opacity.finished() {
                        self.step = Some(Step::FadeOut { fade, target });
                        return;
                    }
                    let fade_in = Fade::new(
                        target,
                        self.styles[target],
                        shown(),
                        CAPTION_FADE_IN_SEC,
                        Ease::Power2Out,
                    );
                    self.step = Some(Step::FadeIn { fade: fade_in });
                    dt = over;
                }
                Step::FadeIn { mut fade } => {
                    fade.advance(dt, &mut self.styles);
                    if !fade.opacity.finished() {
                        self.step = Some(Step::FadeIn { fade });
                        return;
                    }
                    self.current = fade.index;
                    self.busy = false;
                    log::debug!("[captions] settled on {}", self.current);
                    return;
                }
            }
        }
    }
}

#[inline]
fn shown() -> CaptionStyle {
    CaptionStyle {
        opacity: 1.0,
        offset_y: 0.0,
    }
}
