//! One-shot readiness signal.
//!
//! Systems that depend on the model (path planner, captions) subscribe here
//! instead of being built inside the loader callback. Subscribers registered
//! after the signal fired run immediately.

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber<T> = Box<dyn FnOnce(&T)>;

enum State<T> {
    Pending(Vec<Subscriber<T>>),
    Ready(Rc<T>),
}

pub struct ReadySignal<T> {
    state: Rc<RefCell<State<T>>>,
}

impl<T> Clone for ReadySignal<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T> Default for ReadySignal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReadySignal<T> {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State::Pending(Vec::new()))),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.state.borrow(), State::Ready(_))
    }

    pub fn subscribe(&self, f: impl FnOnce(&T) + 'static) {
        let ready = {
            let mut state = self.state.borrow_mut();
            match &mut *state {
                State::Pending(subs) => {
                    subs.push(Box::new(f));
                    return;
                }
                State::Ready(value) => value.clone(),
            }
        };
        f(&ready);
    }

    /// Fire the signal. Only the first call has any effect; returns whether this call fired it.
    pub fn fire(&self, value: T) -> bool {
        let value = Rc::new(value);
        let subs = {
            let mut state = self.state.borrow_mut();
            if let State::Ready(_) = &*state {
                log::warn!("ready signal fired twice; ignoring");
                return false;
            }
            match std::mem::replace(&mut *state, State::Ready(value.clone())) {
                State::Pending(subs) => subs,
                State::Ready(_) => Vec::new(),
            }
        };
        // Borrow released: subscribers may subscribe or query again.
        for sub in subs {
            sub(&value);
        }
        true
    }
}
