use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::config::SCROLL_THRESHOLD;

pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Tracks whether the page has been scrolled far enough for the compact nav bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollModeTracker {
    past_threshold: bool,
}

impl ScrollModeTracker {
    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }

    /// Feeds a new scroll offset in. Returns `true` when the mode flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let past = is_past_threshold(offset);
        let changed = past != self.past_threshold;
        self.past_threshold = past;
        changed
    }
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("no window available")]
    NoWindow,
    #[error("could not register scroll listener: {0}")]
    Listener(String),
}

impl From<JsValue> for SubscribeError {
    fn from(value: JsValue) -> Self {
        SubscribeError::Listener(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Live scroll listener. Dropping it detaches the listener from its source.
pub struct ScrollSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// Something that delivers vertical scroll offsets to listeners.
pub trait ScrollSource {
    fn subscribe(
        &self,
        listener: Box<dyn FnMut(f64)>,
    ) -> Result<ScrollSubscription, SubscribeError>;
}

/// The browser window's `scroll` event, reporting `window.scrollY`.
pub struct WindowScrollSource {
    window: Window,
}

impl WindowScrollSource {
    pub fn current() -> Result<Self, SubscribeError> {
        let window = web_sys::window().ok_or(SubscribeError::NoWindow)?;
        Ok(Self { window })
    }
}

impl ScrollSource for WindowScrollSource {
    fn subscribe(
        &self,
        mut listener: Box<dyn FnMut(f64)>,
    ) -> Result<ScrollSubscription, SubscribeError> {
        let reader = self.window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            let offset = reader.scroll_y().unwrap_or_default();
            listener(offset);
        });

        self.window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;

        let window = self.window.clone();
        Ok(ScrollSubscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove scroll listener: {:?}", err);
            }
        }))
    }
}

/// Subscribes a fresh tracker to `source` and reports every mode flip to `on_change`.
pub fn watch_scroll_mode<S>(
    source: &S,
    on_change: impl Fn(bool) + 'static,
) -> Result<ScrollSubscription, SubscribeError>
where
    S: ScrollSource + ?Sized,
{
    let mut tracker = ScrollModeTracker::default();
    source.subscribe(Box::new(move |offset| {
        if tracker.observe(offset) {
            log::debug!("Scroll mode changed, past threshold: {}", tracker.past_threshold());
            on_change(tracker.past_threshold());
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Listeners = Rc<RefCell<Vec<(usize, Box<dyn FnMut(f64)>)>>>;

    #[derive(Default)]
    struct ManualScroll {
        listeners: Listeners,
        next_id: Cell<usize>,
    }

    impl ManualScroll {
        fn scroll_to(&self, offset: f64) {
            for (_, listener) in self.listeners.borrow_mut().iter_mut() {
                listener(offset);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ScrollSource for ManualScroll {
        fn subscribe(
            &self,
            listener: Box<dyn FnMut(f64)>,
        ) -> Result<ScrollSubscription, SubscribeError> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, listener));

            let listeners = Rc::clone(&self.listeners);
            Ok(ScrollSubscription::new(move || {
                listeners.borrow_mut().retain(|(other, _)| *other != id);
            }))
        }
    }

    #[test]
    fn threshold_boundary() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(20.0));
        assert!(is_past_threshold(21.0));
        assert!(is_past_threshold(20.5));
        assert!(!is_past_threshold(f64::NAN));
    }

    #[test]
    fn tracker_starts_unscrolled() {
        assert!(!ScrollModeTracker::default().past_threshold());
    }

    #[test]
    fn offset_sequence_maps_to_modes() {
        let mut tracker = ScrollModeTracker::default();
        let modes: Vec<bool> = [0.0, 15.0, 20.0, 21.0, 5.0]
            .into_iter()
            .map(|offset| {
                tracker.observe(offset);
                tracker.past_threshold()
            })
            .collect();
        assert_eq!(modes, vec![false, false, false, true, false]);
    }

    #[test]
    fn observe_reports_only_flips() {
        let mut tracker = ScrollModeTracker::default();
        assert!(!tracker.observe(10.0));
        assert!(tracker.observe(300.0));
        assert!(!tracker.observe(400.0));
        assert!(tracker.observe(0.0));
    }

    #[test]
    fn watcher_forwards_changes_only() {
        let source = ManualScroll::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _subscription =
            watch_scroll_mode(&source, move |past| sink.borrow_mut().push(past)).unwrap();

        for offset in [0.0, 15.0, 20.0, 21.0, 80.0, 5.0] {
            source.scroll_to(offset);
        }
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn dropping_subscription_stops_updates() {
        let source = ManualScroll::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription =
            watch_scroll_mode(&source, move |past| sink.borrow_mut().push(past)).unwrap();

        source.scroll_to(100.0);
        assert_eq!(source.listener_count(), 1);

        drop(subscription);
        assert_eq!(source.listener_count(), 0);

        source.scroll_to(0.0);
        source.scroll_to(500.0);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn subscriptions_detach_independently() {
        let source = ManualScroll::default();
        let first = watch_scroll_mode(&source, |_| {}).unwrap();
        let second = watch_scroll_mode(&source, |_| {}).unwrap();
        assert_eq!(source.listener_count(), 2);

        drop(first);
        assert_eq!(source.listener_count(), 1);
        drop(second);
        assert_eq!(source.listener_count(), 0);
    }
}
