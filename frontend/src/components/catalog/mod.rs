//! Template catalog cards shown in the generator sidebar.

use docgen_common::model::TemplateSchema;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TemplateCardProps {
    pub template: TemplateSchema,
    /// Highlights the card of the selected template.
    #[prop_or_default]
    pub active: bool,
    /// Receives the template id when the card is clicked.
    pub on_select: Callback<String>,
}

/// A clickable summary of one template.
pub struct TemplateCard;

impl Component for TemplateCard {
    type Message = ();
    type Properties = TemplateCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TemplateCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let template = &props.template;
        let id = template.id.clone();
        let onclick = props.on_select.reform(move |_: MouseEvent| id.clone());
        let required = template.fields.iter().filter(|field| field.required).count();

        html! {
            <button
                type="button"
                class={classes!("template-card", props.active.then_some("active"))}
                {onclick}
            >
                <div class="template-card-header">
                    <span class="template-category">{ template.category.to_uppercase() }</span>
                    <span class="badge">{ format!("v{}", template.version) }</span>
                </div>
                <h3>{ template.name.clone() }</h3>
                <p class="template-description">{ template.description.clone() }</p>
                <span class="template-meta">{ format!("{} required inputs", required) }</span>
            </button>
        }
    }
}

/// Placeholder cards while the catalog is loading.
pub fn template_skeleton() -> Html {
    html! {
        <>
            { for (0..3).map(|_| html! {
                <div class="template-card skeleton">
                    <div class="skeleton-line short"></div>
                    <div class="skeleton-line"></div>
                    <div class="skeleton-line"></div>
                </div>
            }) }
        </>
    }
}
