use leptos::prelude::*;

/// Pill button: "primary" (default), "secondary" or "ghost".
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Дополнительные CSS классы
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Подсказка, также служит доступной меткой для кнопок без текста
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class(), class.get().unwrap_or_default())
            title=move || title.get()
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
