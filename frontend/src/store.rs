use std::{ops::Deref, rc::Rc};

use repurposer_shared::{workflow::Dispatch, Action, AppState};
use yew::prelude::*;

/// Yew reducer around the shared [`AppState`].
#[derive(Default, PartialEq)]
pub struct Store(AppState);

impl Deref for Store {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.0
    }
}

impl Reducible for Store {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.reduce(action);
        Rc::new(Store(next))
    }
}

/// Lets shared workflows dispatch into the page reducer from async tasks.
#[derive(Clone)]
pub struct StoreDispatcher(UseReducerDispatcher<Store>);

impl From<UseReducerDispatcher<Store>> for StoreDispatcher {
    fn from(dispatcher: UseReducerDispatcher<Store>) -> Self {
        Self(dispatcher)
    }
}

impl Dispatch for StoreDispatcher {
    fn dispatch(&self, action: Action) {
        self.0.dispatch(action);
    }
}
