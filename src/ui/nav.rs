//! View context: reactive wrapper around the core view controller
//!
//! The app has no URL routing; which screen is visible is plain in-memory
//! state owned by this context.

use leptos::prelude::*;

use crate::core::{Screen, ViewController};

#[derive(Clone, Copy)]
pub struct ViewContext {
    controller: RwSignal<ViewController>,
}

impl ViewContext {
    /// The active screen (reactive).
    pub fn screen(&self) -> Screen {
        self.controller.with(|controller| controller.current())
    }

    /// Switch screens. Total: any target is valid from any screen.
    pub fn navigate(&self, target: Screen) {
        self.controller
            .update(|controller| controller.navigate(target));
    }
}

/// Provide view context to the application
pub fn provide_view_context() -> ViewContext {
    let ctx = ViewContext {
        controller: RwSignal::new(ViewController::new()),
    };
    provide_context(ctx);
    ctx
}

/// Use view context from anywhere in the component tree
pub fn use_view_context() -> ViewContext {
    use_context::<ViewContext>().expect("ViewContext should be provided")
}
