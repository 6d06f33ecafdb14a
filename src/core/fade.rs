//! Two-phase caption swap: fade the current caption out, wait, swap the text,
//! fade the next one in.

use super::tween::ease_out_cubic;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadePhase {
    Visible { index: usize },
    /// `from` is the opacity the hide started at; below 1 when a fade-in
    /// was interrupted.
    Hiding {
        shown: usize,
        next: usize,
        since: f64,
        from: f32,
    },
    ShowingNext { index: usize, since: f64 },
}

/// Side effects the presentation layer must apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeEvent {
    /// Start fading the shown caption out.
    Hide,
    /// Replace the caption text with slide `index` and start fading it in.
    Show(usize),
}

#[derive(Clone, Debug)]
pub struct CaptionFader {
    phase: FadePhase,
    fade_out_sec: f64,
    fade_in_sec: f64,
}

impl CaptionFader {
    pub fn new(initial_index: usize, fade_out_sec: f64, fade_in_sec: f64) -> Self {
        Self {
            phase: FadePhase::Visible {
                index: initial_index,
            },
            fade_out_sec: fade_out_sec.max(0.0),
            fade_in_sec: fade_in_sec.max(0.0),
        }
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// Index of the caption text currently in the DOM.
    pub fn shown_index(&self) -> usize {
        match self.phase {
            FadePhase::Visible { index } | FadePhase::ShowingNext { index, .. } => index,
            FadePhase::Hiding { shown, .. } => shown,
        }
    }

    /// Feed the bucket index derived from the latest progress.
    pub fn set_index(&mut self, index: usize, now: f64) -> Option<FadeEvent> {
        match self.phase {
            FadePhase::Visible { index: shown } if shown != index => {
                self.phase = FadePhase::Hiding {
                    shown,
                    next: index,
                    since: now,
                    from: 1.0,
                };
                Some(FadeEvent::Hide)
            }
            FadePhase::Hiding {
                shown,
                next,
                since,
                from,
            } if next != index => {
                self.phase = FadePhase::Hiding {
                    shown,
                    next: index,
                    since,
                    from,
                };
                None
            }
            FadePhase::ShowingNext { index: shown, .. } if shown != index => {
                // fade out from wherever the fade-in got to
                let from = self.opacity(now);
                self.phase = FadePhase::Hiding {
                    shown,
                    next: index,
                    since: now,
                    from,
                };
                Some(FadeEvent::Hide)
            }
            _ => None,
        }
    }

    /// Advance timed transitions.
    pub fn tick(&mut self, now: f64) -> Option<FadeEvent> {
        match self.phase {
            FadePhase::Hiding { next, since, .. } if now - since >= self.fade_out_sec => {
                self.phase = FadePhase::ShowingNext {
                    index: next,
                    since: now,
                };
                Some(FadeEvent::Show(next))
            }
            FadePhase::ShowingNext { index, since } if now - since >= self.fade_in_sec => {
                self.phase = FadePhase::Visible { index };
                None
            }
            _ => None,
        }
    }

    pub fn opacity(&self, now: f64) -> f32 {
        match self.phase {
            FadePhase::Visible { .. } => 1.0,
            FadePhase::Hiding { since, from, .. } => {
                from * (1.0 - ease_out_cubic(phase_t(now, since, self.fade_out_sec)))
            }
            FadePhase::ShowingNext { since, .. } => ease_out_cubic(phase_t(now, since, self.fade_in_sec)),
        }
    }
}

fn phase_t(now: f64, since: f64, duration: f64) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    ((now - since) / duration).clamp(0.0, 1.0) as f32
}
