use atelier_core::catalog::DesignRecord;
use atelier_core::swatch::{is_select_key, rotation_class, SwatchCardState};
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SwatchProps {
    pub(crate) design: &'static DesignRecord,
    #[prop_or_default]
    pub(crate) index: usize,
    #[prop_or_default]
    pub(crate) selected: bool,
    pub(crate) on_select: Callback<&'static str>,
}

#[function_component(Swatch)]
pub(crate) fn swatch(props: &SwatchProps) -> Html {
    let card = use_state(SwatchCardState::default);
    let design = props.design;

    let on_enter = {
        let card = card.clone();
        Callback::from(move |_: MouseEvent| card.set((*card).pointer_enter()))
    };
    let on_leave = {
        let card = card.clone();
        Callback::from(move |_: MouseEvent| card.set((*card).pointer_leave()))
    };
    let on_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(design.code))
    };
    let on_keydown = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: KeyboardEvent| {
            if is_select_key(&event.key()) {
                event.prevent_default();
                on_select.emit(design.code);
            }
        })
    };
    let on_flip = {
        let card = card.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            card.set((*card).toggle_flip());
        })
    };
    // Enter/Space on the flip button must not reach the card's select handler.
    let on_flip_keydown = Callback::from(|event: KeyboardEvent| event.stop_propagation());

    let hovered = card.hovered;
    let mount_class = classes!(
        "relative",
        "photo-mount",
        "transition-all",
        "duration-500",
        "ease-out",
        if hovered { "-translate-y-2 shadow-xl" } else { "shadow-md" },
        props
            .selected
            .then_some("ring-2 ring-accent ring-offset-2 ring-offset-card"),
    );
    let flip_class = classes!(
        "swatch-flip",
        "absolute",
        "top-1",
        "right-1",
        "z-20",
        "transition-opacity",
        "duration-300",
        if hovered { "opacity-100" } else { "opacity-0" },
    );
    let inner_style = format!(
        "transform-style: preserve-3d; transform: {};",
        card.transform()
    );

    html! {
        <div
            class={classes!("swatch", "group", "relative", "cursor-pointer", rotation_class(props.index))}
            data-code={design.code}
            role="button"
            tabindex="0"
            aria-label={format!("{} UI design by {}", design.name, design.designer)}
            style="transition: transform 0.3s ease"
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            onclick={on_click}
            onkeydown={on_keydown}
        >
            <div class={mount_class} style="perspective: 1000px">
                <div class="mount-bl" />
                <div class="mount-br" />
                <div class="relative transition-transform duration-700 ease-out" style={inner_style}>
                    <div class="relative aspect-[4/3] overflow-hidden bg-muted" style="backface-visibility: hidden">
                        <img
                            src={design.image}
                            alt={format!("{} UI design screenshot", design.name)}
                            class="absolute inset-0 h-full w-full object-cover"
                            loading="lazy"
                        />
                        <div class="browser-chrome absolute top-0 left-0 right-0 h-5 flex items-center px-2 gap-1">
                            <div class="w-1.5 h-1.5 rounded-full bg-accent/60" />
                            <div class="w-1.5 h-1.5 rounded-full bg-muted-foreground/40" />
                            <div class="w-1.5 h-1.5 rounded-full bg-muted-foreground/40" />
                            <div class="ml-2 flex-1 h-2 rounded-sm bg-foreground/30" />
                        </div>
                        <div class="absolute bottom-0 left-0 right-0 bg-card/90 px-2 py-1.5 border-t border-border/30">
                            <p class="text-[10px] uppercase tracking-widest text-muted-foreground">{ design.code }</p>
                        </div>
                    </div>
                    <div
                        class="swatch-back absolute inset-0 aspect-[4/3] bg-card flex flex-col justify-center p-4 border border-border"
                        style="backface-visibility: hidden; transform: rotateY(180deg);"
                    >
                        <p class="font-serif text-sm italic">{ design.name }</p>
                        <div class="mt-2 space-y-1.5">
                            <p class="text-[10px] uppercase tracking-wider text-muted-foreground">{ design.designer }</p>
                            <p class="text-[10px] text-muted-foreground">{ design.style }</p>
                            <p class="text-[10px] text-muted-foreground">{ design.stack }</p>
                            <div class="pt-1.5 border-t border-border/50">
                                <p class="text-[10px] text-muted-foreground leading-relaxed">{ design.description }</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <div class="mt-3 text-center">
                <p class="font-serif text-sm leading-tight italic">{ design.name }</p>
                <p class="text-[9px] uppercase tracking-[0.2em] text-muted-foreground mt-0.5">{ design.designer }</p>
            </div>
            <button
                type="button"
                class={flip_class}
                aria-label="Flip to see design details"
                onclick={on_flip}
                onkeydown={on_flip_keydown}
            >
                <svg width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                    stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M17 1l4 4-4 4" />
                    <path d="M3 11V9a4 4 0 0 1 4-4h14" />
                    <path d="M7 23l-4-4 4-4" />
                    <path d="M21 13v2a4 4 0 0 1-4 4H3" />
                </svg>
            </button>
        </div>
    }
}
