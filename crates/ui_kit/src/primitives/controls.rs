use ui_core_headless::{SequenceField, SequenceFieldConfig, SequenceMode};

use super::recipes::{BUTTON, FIELD, NUMBER_INPUT, SWITCH};
use super::*;

#[component]
/// Shared button primitive with variant/size class resolution and attribute forwarding.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let class = resolve_classes(
        &BUTTON,
        &[("variant", variant.token()), ("size", size.token())],
        layout_class,
    );
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            node_ref=node_ref
            aria-label=move || {
                let label = aria_label.get();
                (!label.is_empty()).then_some(label)
            }
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
/// Shared switch with explicit `role="switch"` semantics.
pub fn Switch(
    #[prop(default = SwitchSize::Md)] size: SwitchSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(!checked.get_untracked());
        }
    };

    view! {
        <button
            type="button"
            class=move || {
                resolve_classes(
                    &SWITCH,
                    &[("size", size.token()), ("checked", bool_token(checked.get()))],
                    layout_class,
                )
            }
            role="switch"
            node_ref=node_ref
            aria-label=move || aria_label.get()
            aria-checked=move || checked.get().to_string()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-slot=ui_slot
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| handle_toggle()
            on:keydown=move |ev| match ev.key().as_str() {
                " " | "Enter" => {
                    ev.prevent_default();
                    handle_toggle();
                }
                _ => {}
            }
            {..attrs}
        >
            <span data-ui-slot="track">
                <span data-ui-slot="thumb"></span>
            </span>
        </button>
    }
}

#[component]
/// Shared text input primitive.
pub fn TextField(
    #[prop(default = FieldVariant::Standard)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    view! {
        <input
            class=resolve_classes(&FIELD, &[("variant", variant.token())], layout_class)
            id=id
            placeholder=placeholder
            aria-label=aria_label
            node_ref=node_ref
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            on:focus=move |ev| {
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
            {..attrs}
        />
    }
}

fn input_mode(mode: SequenceMode) -> &'static str {
    match mode {
        SequenceMode::Numeric => "decimal",
        SequenceMode::Alpha | SequenceMode::Alphanumeric => "text",
    }
}

#[component]
/// Stepper input over numbers, letter sequences (`A`..`Z`, `AA`..), or
/// letter sequences with a fixed digit suffix.
///
/// Keystrokes that break the mode's grammar are rejected and the last
/// committed value is restored. ArrowUp/ArrowDown and the stepper buttons
/// increment and decrement.
pub fn NumberInput(
    #[prop(optional)] config: SequenceFieldConfig,
    #[prop(optional, into)] value: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = true)] show_steppers: bool,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let mode = config.mode();
    let field = create_rw_signal(SequenceField::new(config, value));

    let notify = move || {
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(field.with_untracked(|field| field.value().to_string()));
        }
    };

    let step = move |up: bool| {
        if disabled.get_untracked() {
            return;
        }
        field.update(|field| {
            if up {
                field.increment();
            } else {
                field.decrement();
            }
        });
        notify();
    };

    let steppers = show_steppers.then(move || {
        view! {
            <span data-ui-slot="steppers">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    aria_label="Increment"
                    ui_slot="increment"
                    disabled=disabled
                    on_click=Callback::new(move |_| step(true))
                >
                    "▲"
                </Button>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    aria_label="Decrement"
                    ui_slot="decrement"
                    disabled=disabled
                    on_click=Callback::new(move |_| step(false))
                >
                    "▼"
                </Button>
            </span>
        }
    });

    view! {
        <div
            class=resolve_classes(&NUMBER_INPUT, &[("mode", mode.token())], layout_class)
            data-ui-primitive="true"
            data-ui-kind="number-input"
            data-ui-mode=mode.token()
        >
            <input
                class=resolve_classes(&FIELD, &[], None)
                type="text"
                inputmode=input_mode(mode)
                autocomplete="off"
                id=id
                placeholder=placeholder
                aria-label=aria_label
                node_ref=node_ref
                prop:value=move || field.with(|field| field.value().to_string())
                disabled=move || disabled.get()
                data-ui-slot="control"
                data-ui-disabled=move || bool_token(disabled.get())
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    let mut accepted = false;
                    // Updating even on rejection re-runs `prop:value` and restores the DOM.
                    field.update(|field| accepted = field.input(&raw));
                    if accepted {
                        notify();
                    } else {
                        logging::debug_warn!(
                            "number input rejected {raw:?} in {} mode",
                            mode.token()
                        );
                    }
                }
                on:keydown=move |ev| match ev.key().as_str() {
                    "ArrowUp" => {
                        ev.prevent_default();
                        step(true);
                    }
                    "ArrowDown" => {
                        ev.prevent_default();
                        step(false);
                    }
                    _ => {}
                }
                {..attrs}
            />
            {steppers}
        </div>
    }
}
