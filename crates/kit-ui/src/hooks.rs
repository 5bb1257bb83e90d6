use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

/// Handle to a headless interaction model owned by one component instance.
///
/// The model sits outside the reactive graph so that the owner's value can
/// be recorded while rendering. Mutations made from event handlers bump
/// `revision`, which is what re-renders the component.
pub struct ModelHandle<M: 'static> {
    model: Rc<RefCell<M>>,
    revision: Signal<u64>,
}

impl<M: 'static> Clone for ModelHandle<M> {
    fn clone(&self) -> Self {
        Self {
            model: Rc::clone(&self.model),
            revision: self.revision,
        }
    }
}

impl<M: 'static> ModelHandle<M> {
    /// Read the model. Inside a render this subscribes to updates.
    pub fn read<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        let _ = self.revision.read();
        f(&self.model.borrow())
    }

    /// Mutate the model without scheduling a render. Used to record the
    /// owner's value during render.
    pub fn sync<R>(&self, f: impl FnOnce(&mut M) -> R) -> R {
        f(&mut self.model.borrow_mut())
    }

    /// Mutate the model from an event handler and re-render.
    pub fn update<R>(&self, f: impl FnOnce(&mut M) -> R) -> R {
        let result = f(&mut self.model.borrow_mut());
        let mut revision = self.revision;
        *revision.write() += 1;
        result
    }
}

/// Create the model once for this component instance.
pub fn use_model<M: 'static>(init: impl FnOnce() -> M) -> ModelHandle<M> {
    let model = use_hook(|| Rc::new(RefCell::new(init())));
    let revision = use_signal(|| 0u64);
    ModelHandle { model, revision }
}
