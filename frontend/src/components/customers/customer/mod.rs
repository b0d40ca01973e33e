//! Customer intake form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! The form logic itself lives in `common::screen`; this component only maps
//! DOM events to form edits, runs the email debounce timer and renders the
//! field tree.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CustomerProps;
pub use state::CustomerComponent;

impl Component for CustomerComponent {
    type Message = Msg;
    type Properties = CustomerProps;

    fn create(ctx: &Context<Self>) -> Self {
        CustomerComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.cancel_email_timer();
        self.screen.teardown();
    }
}
