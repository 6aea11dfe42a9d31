//! View rendering for the document generator component.
//!
//! Layout: a header with the error banner and flash message, a sidebar with
//! the template catalog, and a main column holding the form of the selected
//! template followed by the generated document.

use docgen_common::catalog::EMPTY_CATALOG_NOTICE;
use docgen_common::export::DEFAULT_EXTENSION;
use docgen_common::model::{GeneratedArtifact, TemplateSchema};
use docgen_common::session::GeneratorSession;
use web_sys::SubmitEvent;
use yew::html::Scope;
use yew::prelude::*;

use super::fields::render_field;
use super::helpers::format_timestamp;
use super::messages::Msg;
use super::state::DocumentGeneratorComponent;
use crate::components::catalog::{template_skeleton, TemplateCard};

pub fn view(
    component: &DocumentGeneratorComponent,
    ctx: &Context<DocumentGeneratorComponent>,
) -> Html {
    let link = ctx.link();
    let session = &component.session;

    html! {
        <div class="generator">
            <header class="generator-header">
                <h1>{ "Document Generator" }</h1>
                <p class="subtitle">
                    { "Pick a template, fill in its fields and generate a redacted document." }
                </p>
            </header>

            { build_banners(session, link) }

            <div class="generator-body">
                <aside class="catalog">
                    <h2>{ "Templates" }</h2>
                    { build_catalog(session, link) }
                </aside>

                <main class="workspace">
                    {
                        match session.selected_template() {
                            Some(template) => build_form(session, template, link),
                            None => html! {},
                        }
                    }
                    {
                        match session.artifact() {
                            Some(artifact) => build_artifact(artifact, link),
                            None => html! {},
                        }
                    }
                </main>
            </div>
        </div>
    }
}

/// Dismissible error banner and flash confirmation.
fn build_banners(session: &GeneratorSession, link: &Scope<DocumentGeneratorComponent>) -> Html {
    html! {
        <>
            if let Some(err) = session.banner_error() {
                <div class="banner banner-error" role="alert">
                    <span>{ err.to_string() }</span>
                    <button
                        type="button"
                        class="banner-dismiss"
                        title="Dismiss"
                        onclick={link.callback(|_| Msg::DismissError)}
                    >
                        { "×" }
                    </button>
                </div>
            }
            if let Some(flash) = session.flash() {
                <div class="banner banner-flash" role="status">{ flash.message.clone() }</div>
            }
        </>
    }
}

fn build_catalog(session: &GeneratorSession, link: &Scope<DocumentGeneratorComponent>) -> Html {
    let catalog = session.catalog();
    if catalog.is_loading() {
        return template_skeleton();
    }
    if catalog.is_empty_notice() {
        return html! { <p class="catalog-empty">{ EMPTY_CATALOG_NOTICE }</p> };
    }

    let on_select = link.callback(Msg::SelectTemplate);
    html! {
        <div class="catalog-list">
            { for catalog.templates().iter().map(|template| html! {
                <TemplateCard
                    key={template.id.clone()}
                    template={template.clone()}
                    active={session.selected_id() == Some(template.id.as_str())}
                    on_select={on_select.clone()}
                />
            }) }
        </div>
    }
}

/// Summary of the selected template and its form.
fn build_form(
    session: &GeneratorSession,
    template: &TemplateSchema,
    link: &Scope<DocumentGeneratorComponent>,
) -> Html {
    let form = session.form();
    let submitting = session.workflow().is_submitting();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Generate
    });

    html! {
        <section class="template-form">
            <div class="template-summary">
                <div>
                    <span class="template-category">{ template.category.to_uppercase() }</span>
                    <h2>{ template.name.clone() }</h2>
                    <p>{ template.description.clone() }</p>
                </div>
                <div class="template-badges">
                    <span class="badge">{ format!("{} fields", template.fields.len()) }</span>
                    <span class="badge badge-pii">{ format!("{} PII fields", session.pii_count()) }</span>
                    <span class="badge">{ format!("v{}", template.version) }</span>
                </div>
                <span class="template-id">{ format!("Template ID: {}", template.id) }</span>
            </div>

            if let Some(err) = session.form_error() {
                <div class="form-error" role="alert">{ err.to_string() }</div>
            }

            <form class="field-grid" {onsubmit}>
                { for template.fields.iter().map(|field| render_field(field, form.value(&field.name), link)) }

                <div class="form-actions">
                    <button type="submit" class="primary" disabled={!session.can_submit()}>
                        { if submitting { "Generating..." } else { "Generate Document" } }
                    </button>
                    <button
                        type="button"
                        class="secondary"
                        disabled={submitting}
                        onclick={link.callback(|_| Msg::ResetForm)}
                    >
                        { "Reset" }
                    </button>
                </div>
            </form>

            <p class="identity">
                {
                    if session.user_id().is_empty() {
                        "No browser identity available; generation is disabled.".to_string()
                    } else {
                        format!("Generating as {}", session.user_id())
                    }
                }
            </p>
        </section>
    }
}

fn build_artifact(artifact: &GeneratedArtifact, link: &Scope<DocumentGeneratorComponent>) -> Html {
    let generated_at = format_timestamp(&artifact.generated_at);

    html! {
        <section class="artifact">
            <div class="artifact-header">
                <h2>{ "Generated Document" }</h2>
                <div class="artifact-actions">
                    <button type="button" class="secondary" onclick={link.callback(|_| Msg::CopyText)}>
                        { "Copy Text" }
                    </button>
                    <button
                        type="button"
                        class="secondary"
                        onclick={link.callback(|_| Msg::Download(DEFAULT_EXTENSION.to_string()))}
                    >
                        { "Download TXT" }
                    </button>
                </div>
            </div>

            <pre class="artifact-text">{ artifact.generated_text.clone() }</pre>

            <dl class="artifact-meta">
                <dt>{ "Document ID" }</dt>
                <dd>{ artifact.document_id.clone() }</dd>
                if !generated_at.is_empty() {
                    <dt>{ "Generated" }</dt>
                    <dd>{ generated_at }</dd>
                }
                <dt>{ "PII placeholders" }</dt>
                <dd>{ artifact.placeholder_count() }</dd>
            </dl>
        </section>
    }
}
