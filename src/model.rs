//! Core data model for the gift-reveal site: gift records, theming, and the
//! reducers behind each reveal mechanic.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Milliseconds of continuous holding needed to climb the full trail.
pub const CLIMB_DURATION_MS: f64 = 4000.0;
/// Pause between the confetti burst and handing control to the voucher.
pub const COMPLETION_DELAY_MS: i32 = 1200;
/// Balloons spawned per reveal session.
pub const BALLOON_COUNT: usize = 15;
/// Settling pause after the last balloon pops.
pub const BALLOON_SETTLE_MS: i32 = 500;

/// Which interactive gesture a gift uses for its reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealKind {
    Climb,
    Scratch,
    Unwrap,
    Balloons,
}

/// Visual theme, selected by the gift record's Christmas flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Classic,
    Christmas,
}

impl Theme {
    pub fn from_flag(christmas: bool) -> Self {
        if christmas { Theme::Christmas } else { Theme::Classic }
    }

    pub fn is_christmas(self) -> bool {
        matches!(self, Theme::Christmas)
    }

    pub fn confetti_colors(self) -> &'static [&'static str] {
        match self {
            Theme::Christmas => &["#dc2626", "#166534", "#fbbf24", "#ffffff"],
            Theme::Classic => &["#3b82f6", "#1d4ed8", "#60a5fa", "#ffffff"],
        }
    }

    pub fn confetti_count(self) -> usize {
        match self {
            Theme::Christmas => 200,
            Theme::Classic => 150,
        }
    }

    pub fn confetti_spread_deg(self) -> f64 {
        match self {
            Theme::Christmas => 100.0,
            Theme::Classic => 70.0,
        }
    }

    pub fn balloon_colors(self) -> &'static [&'static str] {
        match self {
            Theme::Christmas => &["#ef4444", "#22c55e", "#fbbf24", "#ffffff"],
            Theme::Classic => &["#3b82f6", "#60a5fa", "#93c5fd", "#1d4ed8"],
        }
    }

    /// Trail stroke for the lit portion of the climb path.
    pub fn stroke_color(self) -> &'static str {
        match self {
            Theme::Christmas => "#166534",
            Theme::Classic => "#3b82f6",
        }
    }

    /// Unlit track behind the progress stroke.
    pub fn track_color(self) -> &'static str {
        match self {
            Theme::Christmas => "#bbf7d0",
            Theme::Classic => "#e2e8f0",
        }
    }
}

/// A compiled-in gift record. Selected by slug, read-only at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gift {
    pub slug: &'static str,
    pub recipient_name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub intro: &'static str,
    pub hero_image: &'static str,
    pub included_title: &'static str,
    /// Items may carry simple inline markup (e.g. `<strong>`).
    pub included_items: &'static [&'static str],
    pub extra_title: Option<&'static str>,
    pub extra_items: Option<&'static [&'static str]>,
    pub christmas: bool,
    pub reveal: Option<RevealKind>,
    /// Optional custom avatar shown as the climber marker.
    pub avatar_image: Option<&'static str>,
}

impl Gift {
    pub fn theme(&self) -> Theme {
        Theme::from_flag(self.christmas)
    }

    /// The gift's reveal mechanic; climb is the default when unset.
    pub fn reveal_kind(&self) -> RevealKind {
        self.reveal.unwrap_or(RevealKind::Climb)
    }
}

// ---------------- Climb progress driver -----------------

/// Progress state for the hold-to-climb reveal. Progress lives in [0, 100]
/// and only the `Tick` action moves it; once `revealed` latches, all input
/// is ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClimbState {
    pub progress: f64,
    pub holding: bool,
    pub revealed: bool,
    /// Timestamp of the previous tick while holding; cleared on release so
    /// idle periods never accumulate phantom progress.
    pub last_tick_ms: Option<f64>,
}

impl Default for ClimbState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            holding: false,
            revealed: false,
            last_tick_ms: None,
        }
    }
}

#[derive(Clone, Debug)]
pub enum ClimbAction {
    HoldStart,
    /// Release, pointer-leave and pointer-cancel all funnel here.
    HoldEnd,
    /// One rendering-frame tick carrying the frame timestamp.
    Tick { now_ms: f64 },
}

impl Reducible for ClimbState {
    type Action = ClimbAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ClimbAction::HoldStart => {
                if self.revealed || self.holding {
                    return self;
                }
                let mut new = (*self).clone();
                new.holding = true;
                new.last_tick_ms = None;
                Rc::new(new)
            }
            ClimbAction::HoldEnd => {
                if !self.holding {
                    return self;
                }
                let mut new = (*self).clone();
                new.holding = false;
                new.last_tick_ms = None;
                Rc::new(new)
            }
            ClimbAction::Tick { now_ms } => {
                if !self.holding || self.revealed {
                    return self;
                }
                let mut new = (*self).clone();
                // Delta between consecutive ticks; the first tick of a hold
                // contributes nothing.
                let delta = match new.last_tick_ms {
                    Some(prev) => (now_ms - prev).max(0.0),
                    None => 0.0,
                };
                new.last_tick_ms = Some(now_ms);
                new.progress = (new.progress + (delta / CLIMB_DURATION_MS) * 100.0).min(100.0);
                if new.progress >= 100.0 {
                    new.revealed = true;
                    new.holding = false;
                }
                Rc::new(new)
            }
        }
    }
}

// ---------------- Unwrap layer stack -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Ribbon,
    Paper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrapLayer {
    pub id: &'static str,
    pub color: &'static str,
    pub kind: LayerKind,
}

/// The removable wrapping: a ribbon, then three paper layers, removed front
/// to back one tap at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrapStack {
    pub layers: Vec<WrapLayer>,
}

impl WrapStack {
    pub fn new(theme: Theme) -> Self {
        let layers = match theme {
            Theme::Christmas => vec![
                WrapLayer { id: "ribbon-bow", color: "#ef4444", kind: LayerKind::Ribbon },
                WrapLayer { id: "paper-top", color: "#166534", kind: LayerKind::Paper },
                WrapLayer { id: "paper-left", color: "#15803d", kind: LayerKind::Paper },
                WrapLayer { id: "paper-right", color: "#16a34a", kind: LayerKind::Paper },
            ],
            Theme::Classic => vec![
                WrapLayer { id: "ribbon-bow", color: "#3b82f6", kind: LayerKind::Ribbon },
                WrapLayer { id: "paper-top", color: "#60a5fa", kind: LayerKind::Paper },
                WrapLayer { id: "paper-left", color: "#93c5fd", kind: LayerKind::Paper },
                WrapLayer { id: "paper-right", color: "#bfdbfe", kind: LayerKind::Paper },
            ],
        };
        Self { layers }
    }

    pub fn is_open(&self) -> bool {
        self.layers.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum WrapAction {
    /// Remove the front layer; a no-op once the stack is empty.
    Unwrap,
}

impl Reducible for WrapStack {
    type Action = WrapAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            WrapAction::Unwrap => {
                if self.layers.is_empty() {
                    return self;
                }
                let mut new = (*self).clone();
                new.layers.remove(0);
                Rc::new(new)
            }
        }
    }
}

// ---------------- Balloon field -----------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Balloon {
    pub id: u32,
    /// Position as a percentage of the container, 10..90.
    pub x: f64,
    pub y: f64,
    /// Width in logical pixels, 60..100; height renders at 1.2x.
    pub size: f64,
    pub color: String,
    /// Spawn animation stagger, 0..0.5s.
    pub delay: f64,
}

/// The poppable balloon set. Randomness comes in through `rng` so the field
/// stays deterministic under test.
#[derive(Clone, Debug, PartialEq)]
pub struct BalloonField {
    pub balloons: Vec<Balloon>,
}

impl BalloonField {
    pub fn scatter(count: usize, theme: Theme, mut rng: impl FnMut() -> f64) -> Self {
        let palette = theme.balloon_colors();
        let balloons = (0..count)
            .map(|i| {
                let pick = ((rng() * palette.len() as f64) as usize).min(palette.len() - 1);
                Balloon {
                    id: i as u32,
                    x: rng() * 80.0 + 10.0,
                    y: rng() * 80.0 + 10.0,
                    size: rng() * 40.0 + 60.0,
                    color: palette[pick].to_string(),
                    delay: rng() * 0.5,
                }
            })
            .collect();
        Self { balloons }
    }

    pub fn remaining(&self) -> usize {
        self.balloons.len()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum BalloonAction {
    /// Pop one balloon by identity; popping a missing id is a no-op.
    Pop { id: u32 },
}

impl Reducible for BalloonField {
    type Action = BalloonAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BalloonAction::Pop { id } => {
                if !self.balloons.iter().any(|b| b.id == id) {
                    return self;
                }
                let mut new = (*self).clone();
                new.balloons.retain(|b| b.id != id);
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(state: Rc<ClimbState>, now_ms: f64) -> Rc<ClimbState> {
        state.reduce(ClimbAction::Tick { now_ms })
    }

    #[test]
    fn holding_advances_by_elapsed_time() {
        let state = Rc::new(ClimbState::default()).reduce(ClimbAction::HoldStart);
        let state = tick(state, 1000.0); // first tick anchors, no progress
        assert_eq!(state.progress, 0.0);
        let state = tick(state, 1000.0 + CLIMB_DURATION_MS / 4.0);
        assert!((state.progress - 25.0).abs() < 1e-9);
    }

    #[test]
    fn progress_clamps_at_one_hundred() {
        let mut state = Rc::new(ClimbState::default()).reduce(ClimbAction::HoldStart);
        state = tick(state, 0.0);
        for i in 1..=10 {
            state = tick(state, i as f64 * CLIMB_DURATION_MS);
        }
        assert_eq!(state.progress, 100.0);
        assert!(state.revealed);
    }

    #[test]
    fn idle_periods_accumulate_no_phantom_progress() {
        let state = Rc::new(ClimbState::default()).reduce(ClimbAction::HoldStart);
        let state = tick(state, 0.0);
        let state = tick(state, 400.0);
        let at_release = state.progress;
        let state = state.reduce(ClimbAction::HoldEnd);
        // Ticks while idle change nothing.
        let state = tick(state, 90_000.0);
        assert_eq!(state.progress, at_release);
        // Resuming re-anchors on the next tick instead of counting the gap.
        let state = state.reduce(ClimbAction::HoldStart);
        let state = tick(state, 100_000.0);
        assert_eq!(state.progress, at_release);
        let state = tick(state, 100_000.0 + 400.0);
        assert!((state.progress - 2.0 * at_release).abs() < 1e-9);
    }

    #[test]
    fn hold_start_is_ignored_after_reveal() {
        let mut state = Rc::new(ClimbState::default()).reduce(ClimbAction::HoldStart);
        state = tick(state, 0.0);
        state = tick(state, CLIMB_DURATION_MS * 2.0);
        assert!(state.revealed);
        let state = state.reduce(ClimbAction::HoldStart);
        assert!(!state.holding);
        let state = tick(state, CLIMB_DURATION_MS * 3.0);
        assert_eq!(state.progress, 100.0);
    }

    #[test]
    fn backwards_timestamps_never_regress_progress() {
        let state = Rc::new(ClimbState::default()).reduce(ClimbAction::HoldStart);
        let state = tick(state, 1000.0);
        let state = tick(state, 1400.0);
        let before = state.progress;
        let state = tick(state, 1300.0);
        assert!(state.progress >= before);
    }

    #[test]
    fn unwrap_completes_on_exactly_the_last_tap() {
        let mut stack = Rc::new(WrapStack::new(Theme::Christmas));
        let total = stack.layers.len();
        assert_eq!(total, 4);
        for tap in 1..=total {
            assert!(!stack.is_open());
            stack = stack.reduce(WrapAction::Unwrap);
            assert_eq!(stack.layers.len(), total - tap);
        }
        assert!(stack.is_open());
        // Further taps are no-ops.
        let again = stack.clone().reduce(WrapAction::Unwrap);
        assert!(again.is_open());
    }

    #[test]
    fn unwrap_removes_front_layer_first() {
        let stack = Rc::new(WrapStack::new(Theme::Classic));
        assert_eq!(stack.layers[0].kind, LayerKind::Ribbon);
        let stack = stack.reduce(WrapAction::Unwrap);
        assert!(stack.layers.iter().all(|l| l.kind == LayerKind::Paper));
    }

    #[test]
    fn scatter_spawns_within_bounds_and_palette() {
        let mut seed = 0u64;
        let mut rng = move || {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (seed >> 11) as f64 / (1u64 << 53) as f64
        };
        let field = BalloonField::scatter(BALLOON_COUNT, Theme::Classic, &mut rng);
        assert_eq!(field.remaining(), BALLOON_COUNT);
        let palette = Theme::Classic.balloon_colors();
        for b in &field.balloons {
            assert!((10.0..=90.0).contains(&b.x));
            assert!((10.0..=90.0).contains(&b.y));
            assert!((60.0..=100.0).contains(&b.size));
            assert!(palette.contains(&b.color.as_str()));
            assert!((0.0..=0.5).contains(&b.delay));
        }
    }

    #[test]
    fn popping_every_balloon_empties_the_field() {
        let field = BalloonField::scatter(3, Theme::Christmas, || 0.4);
        let mut field = Rc::new(field);
        for id in 0..3 {
            field = field.reduce(BalloonAction::Pop { id });
        }
        assert_eq!(field.remaining(), 0);
    }

    #[test]
    fn popping_the_same_balloon_twice_is_a_no_op() {
        let field = Rc::new(BalloonField::scatter(3, Theme::Classic, || 0.2));
        let field = field.reduce(BalloonAction::Pop { id: 1 });
        assert_eq!(field.remaining(), 2);
        let field = field.reduce(BalloonAction::Pop { id: 1 });
        assert_eq!(field.remaining(), 2);
    }

    #[test]
    fn reveal_kind_defaults_to_climb() {
        let gift = Gift {
            slug: "x",
            recipient_name: "X",
            title: "T",
            subtitle: "",
            intro: "",
            hero_image: "/x.svg",
            included_title: "Included",
            included_items: &[],
            extra_title: None,
            extra_items: None,
            christmas: false,
            reveal: None,
            avatar_image: None,
        };
        assert_eq!(gift.reveal_kind(), RevealKind::Climb);
    }
}
