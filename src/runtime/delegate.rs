use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Element, Event, EventTarget};

use super::dom;

/// What a delegated event target can be, resolved by selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    MenuToggle,
    NavMenu,
    Link,
    Anchor,
    Form,
}

/// Closest element per role for one event.
#[derive(Debug, Default)]
pub struct Hits {
    hits: Vec<(Role, Element)>,
}

impl Hits {
    pub fn get(&self, role: Role) -> Option<&Element> {
        self.hits
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, element)| element)
    }
}

type Handler = Box<dyn FnMut(&Event, &Hits)>;

#[derive(Default)]
struct Routes {
    roles: Vec<(Role, String)>,
    handlers: Vec<Handler>,
}

impl Routes {
    fn resolve(&self, target: Option<&Element>) -> Hits {
        let Some(target) = target else {
            return Hits::default();
        };
        Hits {
            hits: self
                .roles
                .iter()
                .filter_map(|(role, selector)| Some((*role, dom::closest(target, selector)?)))
                .collect(),
        }
    }
}

/// One listener on a common ancestor that routes events by the role of their target.
///
/// Handlers see every event, including ones with no hits (clicks outside everything).
pub struct Delegator {
    routes: Rc<RefCell<Routes>>,
    _listener: EventListener,
}

impl Delegator {
    pub fn new(target: &EventTarget, event_type: &'static str) -> Self {
        let routes = Rc::new(RefCell::new(Routes::default()));
        let listener = {
            let routes = Rc::clone(&routes);
            EventListener::new_with_options(
                target,
                event_type,
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let target = dom::event_element(event);
                    let mut routes = routes.borrow_mut();
                    let hits = routes.resolve(target.as_ref());
                    for handler in routes.handlers.iter_mut() {
                        handler(event, &hits);
                    }
                },
            )
        };
        Self {
            routes,
            _listener: listener,
        }
    }

    pub fn route(&self, role: Role, selector: &str) {
        let mut routes = self.routes.borrow_mut();
        routes.roles.retain(|(r, _)| *r != role);
        routes.roles.push((role, selector.to_string()));
    }

    pub fn on(&self, handler: impl FnMut(&Event, &Hits) + 'static) {
        self.routes.borrow_mut().handlers.push(Box::new(handler));
    }
}
