//! Update function for the document generator component.
//!
//! Elm-style: each `Msg` becomes one transition on the `GeneratorSession`,
//! plus whatever async work it needs (generation call, clipboard write,
//! flash timers). Returns `true` when the view should re-render.

use docgen_common::export::{COPY_CONFIRMATION_MS, RESET_CONFIRMATION_MS};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services::api;
use crate::services::export::{copy_text, BrowserDownload};

use super::helpers::schedule_flash_clear;
use super::messages::Msg;
use super::state::DocumentGeneratorComponent;

pub fn update(
    component: &mut DocumentGeneratorComponent,
    ctx: &Context<DocumentGeneratorComponent>,
    msg: Msg,
) -> bool {
    let session = &mut component.session;
    match msg {
        Msg::CatalogFinished(outcome) => {
            component.catalog_abort = None;
            session.apply_catalog(outcome);
            true
        }
        Msg::SelectTemplate(id) => session.select_template(&id),
        Msg::SetField(name, value) => session.set_field(&name, value),
        Msg::ResetForm => {
            if let Some(flash_id) = session.reset_form() {
                schedule_flash_clear(ctx.link(), flash_id, RESET_CONFIRMATION_MS);
            }
            true
        }
        Msg::Generate => {
            // Nothing is sent when the session refuses the submission.
            if let Some(pending) = session.submit() {
                let link = ctx.link().clone();
                let api_base = ctx.props().api_base_path.to_string();
                spawn_local(async move {
                    let result = api::generate(&api_base, &pending.request).await;
                    link.send_message(Msg::GenerationFinished(pending.ticket, result));
                });
            }
            true
        }
        Msg::GenerationFinished(ticket, result) => {
            session.finish_generation(ticket, result);
            true
        }
        Msg::CopyText => {
            if let Some(artifact) = session.artifact() {
                let text = artifact.generated_text.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = copy_text(text).await;
                    link.send_message(Msg::CopyFinished(result));
                });
            }
            false
        }
        Msg::CopyFinished(Ok(())) => {
            let flash_id = session.copy_succeeded();
            schedule_flash_clear(ctx.link(), flash_id, COPY_CONFIRMATION_MS);
            true
        }
        Msg::CopyFinished(Err(_)) => {
            session.copy_failed();
            true
        }
        Msg::Download(extension) => {
            session.download(&BrowserDownload, &extension);
            true
        }
        Msg::ClearFlash(flash_id) => session.clear_flash(flash_id),
        Msg::DismissError => {
            session.dismiss_error();
            true
        }
    }
}
