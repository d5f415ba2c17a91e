//! Controller for observing the projection from outside the UI.
//!
//! The rendering layer does not own the panel; it holds a clone of
//! [`ProjectionController`] and either polls [`ProjectionController::current`]
//! or subscribes to a channel that receives every new component list.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct ProjectionController {
    pub(crate) inner: Arc<Mutex<ProjectionCtrlInner>>,
}

#[derive(Default)]
pub(crate) struct ProjectionCtrlInner {
    pub(crate) current: Option<Vec<usize>>,
    pub(crate) listeners: Vec<Sender<Vec<usize>>>,
}

impl ProjectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published component list, if the panel has published one.
    pub fn current(&self) -> Option<Vec<usize>> {
        self.lock_inner().current.clone()
    }

    /// Subscribe to component list updates.
    pub fn subscribe(&self) -> Receiver<Vec<usize>> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.lock_inner();
        inner.listeners.push(tx);
        rx
    }

    /// Record `components` and broadcast them; listeners whose receiver was
    /// dropped are forgotten.
    pub(crate) fn publish(&self, components: Vec<usize>) {
        let mut inner = self.lock_inner();
        inner
            .listeners
            .retain(|tx| tx.send(components.clone()).is_ok());
        log::debug!(
            "published projection {:?} to {} listener(s)",
            components,
            inner.listeners.len()
        );
        inner.current = Some(components);
    }

    fn lock_inner(&self) -> std::sync::MutexGuard<'_, ProjectionCtrlInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_reaches_subscribers_and_updates_current() {
        let ctrl = ProjectionController::new();
        assert_eq!(ctrl.current(), None);
        let rx = ctrl.subscribe();
        ctrl.publish(vec![0, 1, 2]);
        assert_eq!(rx.try_recv().unwrap(), vec![0, 1, 2]);
        assert_eq!(ctrl.current(), Some(vec![0, 1, 2]));
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let ctrl = ProjectionController::new();
        drop(ctrl.subscribe());
        let rx = ctrl.subscribe();
        ctrl.publish(vec![1, 0]);
        assert_eq!(ctrl.inner.lock().unwrap().listeners.len(), 1);
        assert_eq!(rx.try_recv().unwrap(), vec![1, 0]);
    }
}
