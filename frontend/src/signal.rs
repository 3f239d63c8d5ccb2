use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;

/// One-shot answer shared by several event handlers. The first `send` wins and
/// later ones are dropped, so a late `change` after a fallback `None` is lost.
pub struct FirstSignal<T> {
    slot: Rc<RefCell<Option<oneshot::Sender<Option<T>>>>>,
}

impl<T> Clone for FirstSignal<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> FirstSignal<T> {
    pub fn new() -> (Self, oneshot::Receiver<Option<T>>) {
        let (tx, rx) = oneshot::channel();
        let signal = Self {
            slot: Rc::new(RefCell::new(Some(tx))),
        };
        (signal, rx)
    }

    pub fn send(&self, value: Option<T>) {
        if let Some(tx) = self.slot.borrow_mut().take() {
            let _ = tx.send(value);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.slot.borrow().is_none()
    }
}
