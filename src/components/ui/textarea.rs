use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Controlled multi-line input.
///
/// `on_keydown` runs before the browser's default action, so handlers may call
/// `prevent_default` on the event.
#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,

    #[prop(into)] value: Signal<String>,
    on_value: Callback<String>,
    #[prop(optional)] on_keydown: Option<Callback<web_sys::KeyboardEvent>>,

    #[prop(optional)] node_ref: NodeRef<html::Textarea>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "placeholder:text-muted-foreground border-input flex w-full min-h-16 rounded-md border bg-transparent px-3 py-2 text-sm shadow-xs outline-none resize-none",
        "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2",
        class
    );

    view! {
        <textarea
            data-name="Textarea"
            class=merged_class
            placeholder=placeholder
            name=name
            spellcheck="false"
            prop:value=move || value.get()
            on:input=move |ev| on_value.run(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if let Some(cb) = on_keydown {
                    cb.run(ev);
                }
            }
            node_ref=node_ref
        ></textarea>
    }
}
