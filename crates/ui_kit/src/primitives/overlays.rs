use super::recipes::TOOLTIP;
use super::*;

#[component]
/// Hover/focus tooltip anchored to its trigger children.
///
/// Opens on pointer enter or focus, closes on pointer leave, blur, or
/// Escape. The trigger wrapper points at the bubble via `aria-describedby`.
pub fn Tooltip(
    #[prop(into)] content: MaybeSignal<String>,
    #[prop(default = TooltipSide::Top)] side: TooltipSide,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let tooltip_id = id.unwrap_or_else(|| next_dom_id("ui-tooltip"));
    let show = move || {
        if !disabled.get_untracked() {
            open.set(true);
        }
    };
    let hide = move || open.set(false);

    view! {
        <span
            class="ui-tooltip-trigger"
            aria-describedby=tooltip_id.clone()
            data-ui-primitive="true"
            data-ui-kind="tooltip-trigger"
            on:mouseenter=move |_: MouseEvent| show()
            on:mouseleave=move |_: MouseEvent| hide()
            on:focusin=move |_: FocusEvent| show()
            on:focusout=move |_: FocusEvent| hide()
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    hide();
                }
            }
        >
            {children()}
            <div
                class=resolve_classes(&TOOLTIP, &[("side", side.token())], layout_class)
                id=tooltip_id
                role="tooltip"
                node_ref=node_ref
                hidden=move || !open.get()
                data-ui-primitive="true"
                data-ui-kind="tooltip"
                data-ui-side=side.token()
                data-ui-state=move || if open.get() { "open" } else { "closed" }
                {..attrs}
            >
                {move || content.get()}
            </div>
        </span>
    }
}
