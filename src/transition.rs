//! Slide transitions between routes. A navigation inside the window replaces
//! the pending target and restarts the window.

use serde_json::json;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::TRANSITION_WINDOW_MS;
use crate::logging::{log_event, LogLevel};
use crate::routes::Route;
use crate::schedule::{Scheduler, TaskHandle};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Neutral,
    Forward,
    Backward,
}

impl Direction {
    /// Compares positions in the route order. Unknown routes are neutral.
    pub fn between(from: &Route, to: &Route) -> Self {
        match (from.position(), to.position()) {
            (Some(from), Some(to)) if to > from => Self::Forward,
            (Some(from), Some(to)) if to < from => Self::Backward,
            _ => Self::Neutral,
        }
    }

    /// `(enter, exit)` class pair.
    pub fn classes(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Neutral => None,
            Self::Forward => Some(("slide-up", "exit-up")),
            Self::Backward => Some(("slide-down", "exit-down")),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionView {
    pub displayed: Route,
    pub pending: Option<Route>,
    pub direction: Direction,
    pub active: bool,
}

impl TransitionView {
    pub fn idle(displayed: Route) -> Self {
        Self {
            displayed,
            pending: None,
            direction: Direction::Neutral,
            active: false,
        }
    }

    pub fn container_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["route-transition-container"];
        if self.active {
            classes.push("transitioning");
        }
        if let Some((enter, exit)) = self.direction.classes() {
            classes.push(enter);
            classes.push(exit);
        }
        classes
    }
}

struct ShellState {
    view: TransitionView,
    scheduler: Rc<dyn Scheduler>,
    on_change: Rc<dyn Fn(TransitionView)>,
    commit: Option<TaskHandle>,
}

/// Owns the displayed route and at most one pending commit.
pub struct Transitioner {
    state: Rc<RefCell<ShellState>>,
}

impl Transitioner {
    pub fn new(
        initial: Route,
        scheduler: Rc<dyn Scheduler>,
        on_change: impl Fn(TransitionView) + 'static,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(ShellState {
                view: TransitionView::idle(initial),
                scheduler,
                on_change: Rc::new(on_change),
                commit: None,
            })),
        }
    }

    #[cfg(test)]
    pub fn view(&self) -> TransitionView {
        self.state.borrow().view.clone()
    }

    pub fn navigate(&self, target: Route) {
        let (view, schedule) = {
            let mut state = self.state.borrow_mut();

            if target == state.view.displayed {
                if !state.view.active {
                    return;
                }
                // Back to the page on screen: abandon the window.
                state.commit = None;
                state.view = TransitionView::idle(target);
                (state.view.clone(), false)
            } else {
                state.commit = None;
                let direction = Direction::between(&state.view.displayed, &target);
                log_event(
                    LogLevel::Debug,
                    "route.transition_started",
                    json!({
                        "from": state.view.displayed.path(),
                        "to": target.path(),
                        "direction": direction.as_str(),
                        "superseded": state.view.pending.as_ref().map(|route| route.path().to_string()),
                    }),
                );
                state.view.direction = direction;
                state.view.active = true;
                state.view.pending = Some(target);
                (state.view.clone(), true)
            }
        };

        if schedule {
            let weak = Rc::downgrade(&self.state);
            let scheduler = Rc::clone(&self.state.borrow().scheduler);
            let handle = scheduler.schedule(TRANSITION_WINDOW_MS, Box::new(move || commit(&weak)));
            self.state.borrow_mut().commit = Some(handle);
        }

        let on_change = Rc::clone(&self.state.borrow().on_change);
        on_change(view);
    }

    /// Follows a `hashchange`. Anchors that name no route leave the page alone.
    pub fn follow_hash(&self, hash: &str) {
        match Route::from_hash(hash) {
            Some(route) => self.navigate(route),
            None => log_event(
                LogLevel::Debug,
                "route.anchor_ignored",
                json!({ "hash": hash }),
            ),
        }
    }
}

fn commit(weak: &Weak<RefCell<ShellState>>) {
    let Some(state) = weak.upgrade() else {
        return;
    };

    let (view, on_change) = {
        let mut guard = state.borrow_mut();
        let Some(target) = guard.view.pending.take() else {
            return;
        };
        guard.view = TransitionView::idle(target);
        guard.commit = None;
        (guard.view.clone(), Rc::clone(&guard.on_change))
    };

    log_event(
        LogLevel::Debug,
        "route.committed",
        json!({ "route": view.displayed.path() }),
    );
    on_change(view);
}
