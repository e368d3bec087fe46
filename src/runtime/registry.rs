use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, Window};

use crate::config::{NotificationConfig, ThemeConfig};
use crate::error::Result;
use crate::features::{anchors, forms, header, lazy_images, legacy, mobile_nav, parallax, reveal, scroll_spy};
use crate::runtime::delegate::Delegator;
use crate::runtime::dom;
use crate::runtime::observer::Observer;
use crate::runtime::scheduler::ScrollScheduler;

thread_local! {
    static RUNNING: RefCell<Option<Theme>> = const { RefCell::new(None) };
}

/// Everything a running theme installed. Dropping it removes every listener and observer.
pub struct Theme {
    config: Rc<ThemeConfig>,
    started: Vec<&'static str>,
    scheduler: ScrollScheduler,
    _clicks: Delegator,
    _submits: Delegator,
    _observers: Vec<Observer>,
}

impl Theme {
    pub fn start(window: &Window, document: &Document, config: ThemeConfig) -> Result<Self> {
        let config = Rc::new(config);
        legacy::cleanup(window, document, &config.legacy);

        let mut started = Vec::new();
        let scheduler = ScrollScheduler::new(window, config.scroll_policy);
        let clicks = Delegator::new(document, "click");
        let submits = Delegator::new(document, "submit");
        let mut observers = Vec::new();

        if header::attach(document, &config, &scheduler) {
            started.push("header");
        }
        if parallax::attach(document, &config, &scheduler) {
            started.push("parallax");
        }
        let spy = scroll_spy::attach(document, &config, &scheduler);
        if spy.is_some() {
            started.push("scroll-spy");
        }

        anchors::attach(document, &config, &clicks, spy);
        started.push("anchors");
        if mobile_nav::attach(document, &config, &clicks) {
            started.push("mobile-nav");
        }

        if let Some(observer) = reveal::attach(window, document, &config)? {
            observers.push(observer);
            started.push("reveal");
        }
        if let Some(observer) = lazy_images::attach(window, document, &config)? {
            observers.push(observer);
            started.push("lazy-images");
        }

        forms::attach(Rc::clone(&config), &submits);
        started.push("forms");

        // Reflect a restored scroll position before the first scroll event.
        scheduler.dispatch_now();

        log::info!("Factory theme started: {}", started.join(", "));
        Ok(Self {
            config,
            started,
            scheduler,
            _clicks: clicks,
            _submits: submits,
            _observers: observers,
        })
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn started(&self) -> &[&'static str] {
        &self.started
    }

    pub fn scheduler(&self) -> &ScrollScheduler {
        &self.scheduler
    }
}

/// Loads the page configuration and (re)starts the theme.
pub fn init() -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;
    let config = ThemeConfig::load(&window, &document);
    init_with(config)
}

/// Starts the theme with an explicit configuration, replacing any running instance.
pub fn init_with(config: ThemeConfig) -> Result<()> {
    teardown();
    log::set_max_level(config.level_filter());

    let window = dom::window()?;
    let document = dom::document()?;
    let theme = Theme::start(&window, &document, config)?;
    RUNNING.with(|running| *running.borrow_mut() = Some(theme));
    Ok(())
}

/// Stops the running theme. Returns `false` when nothing was running.
pub fn teardown() -> bool {
    let theme = RUNNING.with(|running| running.borrow_mut().take());
    match theme {
        Some(theme) => {
            log::info!("Factory theme stopped");
            drop(theme);
            true
        }
        None => false,
    }
}

pub fn is_running() -> bool {
    RUNNING.with(|running| running.borrow().is_some())
}

pub fn with_running<R>(f: impl FnOnce(&Theme) -> R) -> Option<R> {
    RUNNING.with(|running| running.borrow().as_ref().map(f))
}

/// Timings of the running theme, or the defaults before `init`.
pub fn notification_config() -> NotificationConfig {
    with_running(|theme| theme.config.notifications).unwrap_or_default()
}

/// Runs `init` now, or on `DOMContentLoaded` while the document is still loading.
pub fn init_when_ready() -> Result<()> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        log::debug!("Waiting for DOMContentLoaded");
        EventListener::once(&document, "DOMContentLoaded", |_| {
            if let Err(e) = init() {
                log::error!("Factory theme failed to start: {}", e);
            }
        })
        .forget();
        Ok(())
    } else {
        init()
    }
}
