//! Input widgets for template fields.
//!
//! Every widget is controlled: its value comes from the form engine and each
//! edit is sent back as `Msg::SetField`.

use docgen_common::model::template::SELECT_PLACEHOLDER;
use docgen_common::model::{FieldSpec, FieldWidget};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::DocumentGeneratorComponent;

/// Renders one labelled field with its badge and hint.
pub fn render_field(
    field: &FieldSpec,
    value: &str,
    link: &Scope<DocumentGeneratorComponent>,
) -> Html {
    let input_id = format!("field-{}", field.name);
    let placeholder = field.placeholder.clone().unwrap_or_default();

    let control = match field.widget() {
        FieldWidget::TextArea { rows } => {
            let name = field.name.clone();
            html! {
                <textarea
                    id={input_id.clone()}
                    name={field.name.clone()}
                    rows={rows.to_string()}
                    value={value.to_string()}
                    placeholder={placeholder}
                    required={field.required}
                    oninput={link.callback(move |e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                        Msg::SetField(name.clone(), value)
                    })}
                />
            }
        }
        FieldWidget::Select { options } => {
            let name = field.name.clone();
            html! {
                <select
                    id={input_id.clone()}
                    name={field.name.clone()}
                    required={field.required}
                    onchange={link.callback(move |e: Event| {
                        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                        Msg::SetField(name.clone(), value)
                    })}
                >
                    <option value="" selected={value.is_empty()}>{ SELECT_PLACEHOLDER }</option>
                    { for options.iter().map(|option| html! {
                        <option value={option.clone()} selected={option == value}>{ option.clone() }</option>
                    }) }
                </select>
            }
        }
        FieldWidget::Input { input_type } => {
            let name = field.name.clone();
            html! {
                <input
                    id={input_id.clone()}
                    name={field.name.clone()}
                    type={input_type}
                    value={value.to_string()}
                    placeholder={placeholder}
                    required={field.required}
                    oninput={link.callback(move |e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlInputElement>().value();
                        Msg::SetField(name.clone(), value)
                    })}
                />
            }
        }
    };

    html! {
        <div class="field">
            <label for={input_id}>
                { field.display_label() }
                if field.required {
                    <span class="required-mark">{ " *" }</span>
                }
                if field.is_pii {
                    <span class="badge badge-pii">{ "PII" }</span>
                }
            </label>
            { control }
            <p class="field-hint">{ field.hint() }</p>
        </div>
    }
}
