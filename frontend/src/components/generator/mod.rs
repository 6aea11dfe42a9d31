//! Document generator page: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! field widgets and helpers.
//!
//! Responsibilities
//! - Resolve the browser identity when the component is created.
//! - On first render, fetch the template catalog with an abortable request.
//! - Abort that request if the component is destroyed before it completes.

use yew::platform::spawn_local;
use yew::prelude::*;

mod fields;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::services::{api, identity};
pub use messages::Msg;
pub use props::DocumentGeneratorProps;
pub use state::DocumentGeneratorComponent;

impl Component for DocumentGeneratorComponent {
    type Message = Msg;
    type Properties = DocumentGeneratorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DocumentGeneratorComponent::new(identity::user_id())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let controller = web_sys::AbortController::new().ok();
            let signal = controller.as_ref().map(|controller| controller.signal());
            self.catalog_abort = controller;

            let link = ctx.link().clone();
            let api_base = ctx.props().api_base_path.to_string();
            spawn_local(async move {
                let outcome = api::fetch_templates(&api_base, signal.as_ref()).await;
                link.send_message(Msg::CatalogFinished(outcome));
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(controller) = self.catalog_abort.take() {
            controller.abort();
        }
    }
}
