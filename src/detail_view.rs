use atelier_core::catalog::DesignRecord;
use atelier_core::palette::palette_colors;
use yew::prelude::*;

pub(crate) const STAR_PATH: &str = "M12 2L15.09 8.26L22 9.27L17 14.14L18.18 21.02L12 17.77L5.82 21.02L7 14.14L2 9.27L8.91 8.26L12 2Z";

#[derive(Properties, PartialEq)]
pub(crate) struct SwatchDetailProps {
    pub(crate) design: Option<&'static DesignRecord>,
}

#[function_component(SwatchDetail)]
pub(crate) fn swatch_detail(props: &SwatchDetailProps) -> Html {
    let Some(design) = props.design else {
        return html! {
            <aside class="swatch-detail hidden lg:block w-80 shrink-0 p-6 lg:p-8">
                <div class="sticky top-20">
                    <div class="insert-card p-8 text-center">
                        <div class="w-12 h-12 mx-auto mb-4 border border-border/50 rounded-full flex items-center justify-center">
                            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                                stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"
                                class="text-muted-foreground">
                                <path d="M15 15l-2 5L9 9l11 4-5 2z" />
                                <path d="M2 2l7.586 7.586" />
                            </svg>
                        </div>
                        <p class="font-serif text-sm mb-1 italic">{ "Select a Design" }</p>
                        <p class="text-[10px] text-muted-foreground leading-relaxed">
                            { "UIスウォッチをクリックすると、" }<br />
                            { "デザインの詳細が表示されます" }
                        </p>
                        <div class="mt-6 flex items-center justify-center gap-3">
                            <div class="w-8 h-px bg-border/40" />
                            <div class="w-1 h-1 rotate-45 border border-border/40" />
                            <div class="w-8 h-px bg-border/40" />
                        </div>
                    </div>
                </div>
            </aside>
        };
    };

    let color_dots: Html = palette_colors(design.palette)
        .into_iter()
        .map(|swatch| {
            html! {
                <div
                    key={swatch.name.to_string()}
                    class="palette-dot w-4 h-4 rounded-full border border-border/60"
                    style={format!("background-color: {}", swatch.hex)}
                    title={swatch.name.to_string()}
                />
            }
        })
        .collect();

    html! {
        <aside class="swatch-detail hidden lg:block w-80 shrink-0 p-6 lg:p-8" data-code={design.code}>
            <div class="sticky top-20">
                <div class="insert-card overflow-hidden">
                    <div class="h-1 bg-gradient-to-r from-transparent via-accent/40 to-transparent" />
                    <div class="relative aspect-[4/3] overflow-hidden">
                        <img
                            src={design.image}
                            alt={format!("{} UI design detail", design.name)}
                            class="absolute inset-0 h-full w-full object-cover"
                        />
                        <div class="browser-chrome absolute top-0 left-0 right-0 h-6 flex items-center px-2.5 gap-1.5">
                            <div class="w-2 h-2 rounded-full bg-accent/60" />
                            <div class="w-2 h-2 rounded-full bg-muted-foreground/40" />
                            <div class="w-2 h-2 rounded-full bg-muted-foreground/40" />
                            <div class="ml-3 flex-1 h-2.5 rounded-sm bg-foreground/30" />
                        </div>
                    </div>
                    <div class="p-6">
                        <div class="flex items-start justify-between gap-2">
                            <div>
                                <h3 class="font-serif text-lg leading-tight italic">{ design.name }</h3>
                                <p class="text-[10px] uppercase tracking-[0.2em] text-muted-foreground mt-1">
                                    { design.designer }
                                </p>
                            </div>
                            <span class="text-[9px] text-muted-foreground bg-secondary/80 px-2 py-1 shrink-0 page-number">
                                { design.code }
                            </span>
                        </div>
                        <p class="mt-4 text-xs text-muted-foreground leading-relaxed">{ design.description }</p>
                        <div class="flex items-center gap-3 my-5">
                            <div class="flex-1 h-px bg-border/40" />
                            <svg class="w-3 h-3 text-muted-foreground/30" viewBox="0 0 24 24" fill="currentColor">
                                <path d={STAR_PATH} />
                            </svg>
                            <div class="flex-1 h-px bg-border/40" />
                        </div>
                        <div class="space-y-3">
                            { detail_row("Style", design.style) }
                            { detail_row("Stack", design.stack) }
                            { detail_row("Palette", design.palette) }
                        </div>
                        <div class="mt-4 flex items-center gap-2">
                            <p class="text-[9px] uppercase tracking-wider text-muted-foreground">{ "Colors" }</p>
                            <div class="flex gap-1.5">{ color_dots }</div>
                        </div>
                        <div class="mt-6 space-y-2">
                            <button type="button" class="w-full py-2.5 px-4 bg-foreground text-background text-[11px] uppercase tracking-[0.15em]">
                                { "Apply This Design" }
                            </button>
                            <button type="button" class="w-full py-2.5 px-4 bg-transparent text-[11px] uppercase tracking-[0.15em] border border-border/60">
                                { "Add to Favorites" }
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </aside>
    }
}

fn detail_row(label: &'static str, value: &'static str) -> Html {
    html! {
        <div class="flex justify-between items-baseline border-b border-border/30 pb-2 gap-4">
            <span class="text-[10px] uppercase tracking-wider text-muted-foreground shrink-0">{ label }</span>
            <span class="text-xs text-right">{ value }</span>
        </div>
    }
}
