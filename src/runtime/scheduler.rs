use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::Window;

use crate::config::ScrollPolicy;

type Subscriber = Box<dyn FnMut(f64)>;

/// Owns the window scroll listener and fans each sampled offset out to subscribers.
///
/// Dropping the scheduler removes the listener and cancels a pending frame.
pub struct ScrollScheduler {
    shared: Rc<Shared>,
    _listener: EventListener,
}

struct Shared {
    window: Window,
    policy: ScrollPolicy,
    subscribers: RefCell<Vec<Subscriber>>,
    pending: Cell<bool>,
    frame: RefCell<Option<AnimationFrame>>,
    dispatches: Cell<u32>,
}

impl ScrollScheduler {
    pub fn new(window: &Window, policy: ScrollPolicy) -> Self {
        let shared = Rc::new(Shared {
            window: window.clone(),
            policy,
            subscribers: RefCell::new(Vec::new()),
            pending: Cell::new(false),
            frame: RefCell::new(None),
            dispatches: Cell::new(0),
        });

        let weak = Rc::downgrade(&shared);
        let listener = EventListener::new(window, "scroll", move |_| {
            if let Some(shared) = weak.upgrade() {
                Shared::schedule(&shared);
            }
        });

        Self {
            shared,
            _listener: listener,
        }
    }

    /// Subscribers run in registration order.
    pub fn subscribe(&self, subscriber: impl FnMut(f64) + 'static) {
        self.shared
            .subscribers
            .borrow_mut()
            .push(Box::new(subscriber));
    }

    /// Samples and dispatches right away, bypassing the policy.
    pub fn dispatch_now(&self) {
        self.shared.dispatch();
    }

    pub fn dispatch_count(&self) -> u32 {
        self.shared.dispatches.get()
    }
}

impl Shared {
    fn sample(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn dispatch(&self) {
        let offset = self.sample();
        self.dispatches.set(self.dispatches.get() + 1);
        for subscriber in self.subscribers.borrow_mut().iter_mut() {
            subscriber(offset);
        }
    }

    fn schedule(this: &Rc<Self>) {
        match this.policy {
            ScrollPolicy::Immediate => this.dispatch(),
            ScrollPolicy::AnimationFrame => {
                if this.pending.replace(true) {
                    return;
                }
                let weak: Weak<Shared> = Rc::downgrade(this);
                let frame = request_animation_frame(move |_| {
                    if let Some(shared) = weak.upgrade() {
                        shared.pending.set(false);
                        shared.dispatch();
                    }
                });
                // The previous frame already fired; replacing it here drops it outside its own callback.
                *this.frame.borrow_mut() = Some(frame);
            }
        }
    }
}
