//! Typewriter text animation: type a fragment, hold, delete, move on.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::typewriter::{CURSOR_BLINK_MS, DEFAULT_DELAY_MS, DEFAULT_SPEED_MS, REWIND_PAUSE_MS};
use crate::schedule::{Scheduler, TaskHandle};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Styled { text: String, style: String },
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self::Styled {
            text: text.into(),
            style: style.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Styled { text, .. } => text,
        }
    }

    pub fn style(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Styled { style, .. } => Some(style),
        }
    }
}

pub type Fragment = Vec<Segment>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Revealed<'a> {
    pub text: &'a str,
    pub style: Option<&'a str>,
}

/// Splits the first `shown` characters of `fragment` back into its segments.
pub fn reveal(fragment: &[Segment], shown: usize) -> Vec<Revealed<'_>> {
    let mut consumed = 0;
    let mut visible = Vec::new();

    for segment in fragment {
        if consumed >= shown {
            break;
        }

        let text = segment.text();
        let length = text.chars().count();
        let take = (shown - consumed).min(length);
        let end = text
            .char_indices()
            .nth(take)
            .map_or(text.len(), |(offset, _)| offset);

        visible.push(Revealed {
            text: &text[..end],
            style: segment.style(),
        });
        consumed += length;
    }

    visible
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub speed_ms: u32,
    pub delay_ms: u32,
    pub looping: bool,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
            delay_ms: DEFAULT_DELAY_MS,
            looping: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    HoldingFull,
    Deleting,
    HoldingEmpty,
    Done,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub fragment_index: usize,
    pub shown: usize,
}

pub struct Typewriter {
    flattened: Vec<Vec<char>>,
    fragment_index: usize,
    char_index: usize,
    phase: Phase,
    displayed: String,
}

impl Typewriter {
    pub fn new(fragments: &[Fragment]) -> Self {
        let mut flattened: Vec<Vec<char>> = fragments
            .iter()
            .map(|fragment| fragment.iter().flat_map(|s| s.text().chars()).collect())
            .collect();
        if flattened.is_empty() {
            flattened.push(Vec::new());
        }

        Self {
            flattened,
            fragment_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            displayed: String::new(),
        }
    }

    #[cfg(test)]
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    #[cfg(test)]
    pub fn fragment_index(&self) -> usize {
        self.fragment_index
    }

    #[cfg(test)]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[cfg(test)]
    pub fn is_deleting(&self) -> bool {
        matches!(self.phase, Phase::Deleting | Phase::HoldingEmpty)
    }

    pub fn frame(&self) -> Frame {
        Frame {
            fragment_index: self.fragment_index,
            shown: self.char_index,
        }
    }

    pub fn set_fragment(&mut self, index: usize) {
        self.fragment_index = index % self.flattened.len();
        self.char_index = 0;
        self.displayed.clear();
        self.phase = Phase::Typing;
    }

    /// Advances one step. Returns the delay before the next step, or `None`
    /// once a non-looping animation has typed its last fragment.
    pub fn tick(&mut self, timing: Timing) -> Option<u32> {
        match self.phase {
            Phase::Typing => {
                let target = &self.flattened[self.fragment_index];
                if let Some(&next) = target.get(self.char_index) {
                    self.displayed.push(next);
                    self.char_index += 1;
                }
                if self.char_index < target.len() {
                    return Some(timing.speed_ms);
                }
                if !timing.looping && self.fragment_index + 1 == self.flattened.len() {
                    self.phase = Phase::Done;
                    return None;
                }
                self.phase = Phase::HoldingFull;
                Some(timing.delay_ms)
            }
            Phase::HoldingFull | Phase::Deleting => {
                self.phase = Phase::Deleting;
                if self.char_index > 0 {
                    self.displayed.pop();
                    self.char_index -= 1;
                }
                if self.char_index > 0 {
                    return Some(timing.speed_ms);
                }
                self.phase = Phase::HoldingEmpty;
                Some(REWIND_PAUSE_MS)
            }
            Phase::HoldingEmpty => {
                self.set_fragment(self.fragment_index + 1);
                Some(timing.speed_ms)
            }
            Phase::Done => None,
        }
    }
}

struct DriverState {
    engine: Typewriter,
    timing: Timing,
    scheduler: Rc<dyn Scheduler>,
    on_frame: Rc<dyn Fn(Frame)>,
    pending: Option<TaskHandle>,
}

/// Dropping the driver stops it.
pub struct TypewriterDriver {
    state: Rc<RefCell<DriverState>>,
}

impl TypewriterDriver {
    pub fn start(
        fragments: &[Fragment],
        timing: Timing,
        scheduler: Rc<dyn Scheduler>,
        on_frame: impl Fn(Frame) + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(DriverState {
            engine: Typewriter::new(fragments),
            timing,
            scheduler,
            on_frame: Rc::new(on_frame),
            pending: None,
        }));
        arm(&state, timing.speed_ms);
        Self { state }
    }

    #[cfg(test)]
    pub fn set_fragment(&self, index: usize) {
        let (frame, on_frame, speed) = {
            let mut state = self.state.borrow_mut();
            state.pending = None;
            state.engine.set_fragment(index);
            (state.engine.frame(), Rc::clone(&state.on_frame), state.timing.speed_ms)
        };
        on_frame(frame);
        arm(&self.state, speed);
    }

    #[cfg(test)]
    pub fn displayed(&self) -> String {
        self.state.borrow().engine.displayed().to_string()
    }

    #[cfg(test)]
    pub fn frame(&self) -> Frame {
        self.state.borrow().engine.frame()
    }

    #[cfg(test)]
    pub fn is_deleting(&self) -> bool {
        self.state.borrow().engine.is_deleting()
    }
}

fn arm(state: &Rc<RefCell<DriverState>>, delay_ms: u32) {
    let weak = Rc::downgrade(state);
    let scheduler = Rc::clone(&state.borrow().scheduler);
    let handle = scheduler.schedule(delay_ms, Box::new(move || step(&weak)));
    state.borrow_mut().pending = Some(handle);
}

fn step(weak: &Weak<RefCell<DriverState>>) {
    let Some(state) = weak.upgrade() else {
        return;
    };

    let (next, frame, on_frame) = {
        let mut guard = state.borrow_mut();
        let timing = guard.timing;
        let next = guard.engine.tick(timing);
        (next, guard.engine.frame(), Rc::clone(&guard.on_frame))
    };

    on_frame(frame);

    match next {
        Some(delay_ms) => arm(&state, delay_ms),
        None => state.borrow_mut().pending = None,
    }
}

pub struct CursorBlink {
    _task: TaskHandle,
}

impl CursorBlink {
    pub fn start(scheduler: &dyn Scheduler, on_toggle: impl Fn(bool) + 'static) -> Self {
        let visible = Cell::new(true);
        let task = scheduler.schedule_repeating(
            CURSOR_BLINK_MS,
            Box::new(move || {
                visible.set(!visible.get());
                on_toggle(visible.get());
            }),
        );
        Self { _task: task }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;

    fn headline() -> Vec<Fragment> {
        vec![
            vec![Segment::plain("An "), Segment::styled("Dev", "accent")],
            vec![Segment::plain("A "), Segment::styled("Dev", "accent")],
        ]
    }

    #[test]
    fn reveal_keeps_style_on_partial_segment() {
        let fragment = &headline()[0];

        assert!(reveal(fragment, 0).is_empty());
        assert_eq!(
            reveal(fragment, 2),
            vec![Revealed { text: "An", style: None }]
        );
        assert_eq!(
            reveal(fragment, 5),
            vec![
                Revealed { text: "An ", style: None },
                Revealed { text: "De", style: Some("accent") },
            ]
        );
        assert_eq!(reveal(fragment, 6).len(), 2);
        assert_eq!(reveal(fragment, 6)[1].text, "Dev");
    }

    #[test]
    fn reveal_counts_characters_not_bytes() {
        let fragment = vec![Segment::plain("é"), Segment::styled("ñó", "x")];
        assert_eq!(
            reveal(&fragment, 2),
            vec![
                Revealed { text: "é", style: None },
                Revealed { text: "ñ", style: Some("x") },
            ]
        );
    }

    #[test]
    fn types_holds_then_deletes_short_fragment() {
        let scheduler = ManualScheduler::new();
        let timing = Timing {
            speed_ms: 50,
            delay_ms: 1_000,
            looping: true,
        };
        let driver = TypewriterDriver::start(
            &[vec![Segment::plain("Hi")]],
            timing,
            Rc::new(scheduler.clone()),
            |_| {},
        );

        scheduler.advance(100);
        assert_eq!(driver.displayed(), "Hi");
        assert!(!driver.is_deleting());

        scheduler.advance(999);
        assert_eq!(driver.displayed(), "Hi");

        scheduler.advance(1);
        assert!(driver.is_deleting());
        assert_eq!(driver.displayed(), "H");

        scheduler.advance(50);
        assert_eq!(driver.displayed(), "");
    }

    #[test]
    fn cycles_to_next_fragment_and_wraps() {
        let mut engine = Typewriter::new(&headline());
        let timing = Timing::default();

        for _ in 0..6 {
            engine.tick(timing);
        }
        assert_eq!(engine.displayed(), "An Dev");

        // Six deletes, then the rewind pause advances the fragment.
        for _ in 0..6 {
            engine.tick(timing);
        }
        assert_eq!(engine.displayed(), "");
        assert_eq!(engine.fragment_index(), 0);
        engine.tick(timing);
        assert_eq!(engine.fragment_index(), 1);
        assert_eq!(engine.char_index(), 0);
        assert!(!engine.is_deleting());

        for _ in 0..(5 + 5 + 1) {
            engine.tick(timing);
        }
        assert_eq!(engine.fragment_index(), 0);
    }

    #[test]
    fn rewind_pause_is_half_a_second() {
        let mut engine = Typewriter::new(&[vec![Segment::plain("a")]]);
        let timing = Timing::default();

        assert_eq!(engine.tick(timing), Some(timing.delay_ms));
        assert_eq!(engine.tick(timing), Some(REWIND_PAUSE_MS));
        assert_eq!(engine.tick(timing), Some(timing.speed_ms));
    }

    #[test]
    fn set_fragment_resets_progress() {
        let mut engine = Typewriter::new(&headline());
        let timing = Timing::default();
        engine.tick(timing);
        engine.tick(timing);

        engine.set_fragment(1);

        assert_eq!(engine.displayed(), "");
        assert_eq!(engine.frame(), Frame { fragment_index: 1, shown: 0 });
        assert!(!engine.is_deleting());
    }

    #[test]
    fn non_looping_stops_after_last_fragment() {
        let mut engine = Typewriter::new(&[vec![Segment::plain("ok")]]);
        let timing = Timing {
            looping: false,
            ..Timing::default()
        };

        assert_eq!(engine.tick(timing), Some(timing.speed_ms));
        assert_eq!(engine.tick(timing), None);
        assert_eq!(engine.tick(timing), None);
        assert_eq!(engine.displayed(), "ok");
    }

    #[test]
    fn driver_reports_frames_and_stops_when_dropped() {
        let scheduler = ManualScheduler::new();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();
        let driver = TypewriterDriver::start(
            &headline(),
            Timing::default(),
            Rc::new(scheduler.clone()),
            move |frame| sink.borrow_mut().push(frame.shown),
        );

        scheduler.advance(u64::from(DEFAULT_SPEED_MS) * 3);
        assert_eq!(*frames.borrow(), vec![1, 2, 3]);

        drop(driver);
        scheduler.advance(10_000);
        assert_eq!(frames.borrow().len(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn driver_set_fragment_restarts_typing() {
        let scheduler = ManualScheduler::new();
        let driver = TypewriterDriver::start(
            &headline(),
            Timing::default(),
            Rc::new(scheduler.clone()),
            |_| {},
        );
        scheduler.advance(u64::from(DEFAULT_SPEED_MS) * 2);

        driver.set_fragment(1);
        assert_eq!(driver.frame(), Frame { fragment_index: 1, shown: 0 });

        scheduler.advance(u64::from(DEFAULT_SPEED_MS));
        assert_eq!(driver.displayed(), "A");
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn cursor_blinks_until_dropped() {
        let scheduler = ManualScheduler::new();
        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = states.clone();
        let blink = CursorBlink::start(&scheduler, move |on| sink.borrow_mut().push(on));

        scheduler.advance(u64::from(CURSOR_BLINK_MS) * 3);
        assert_eq!(*states.borrow(), vec![false, true, false]);

        drop(blink);
        scheduler.advance(u64::from(CURSOR_BLINK_MS) * 3);
        assert_eq!(states.borrow().len(), 3);
    }
}
