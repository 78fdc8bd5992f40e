use atelier_core::book::{BookState, ChapterPage, ALL_DESIGNS_LABEL};
use atelier_core::catalog::{chapter_count, total_designs, CHAPTERS, COLLECTION_LABEL};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::detail_view::{SwatchDetail, STAR_PATH};
use crate::swatch_view::Swatch;

const SECTION_RULED_LINES: usize = 20;
pub(crate) const RULE_SPACING_PX: usize = 44;

#[derive(Properties, PartialEq)]
pub(crate) struct SwatchBookProps {
    /// Replaces the detail panel on the right page.
    #[prop_or_default]
    pub(crate) sidebar: Option<Html>,
    #[prop_or(true)]
    pub(crate) show_cover_header: bool,
}

#[function_component(SwatchBook)]
pub(crate) fn swatch_book(props: &SwatchBookProps) -> Html {
    let book = use_state(BookState::default);

    let on_select_design = {
        let book = book.clone();
        Callback::from(move |code: &'static str| {
            let mut next = (*book).clone();
            next.toggle_design(code);
            book.set(next);
        })
    };

    let tabs: Html = std::iter::once(None)
        .chain(CHAPTERS.iter().map(|chapter| Some(chapter.category)))
        .map(|category| {
            let active = book.is_active(category);
            let onclick = {
                let book = book.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*book).clone();
                    next.select_category(category);
                    book.set(next);
                })
            };
            html! {
                <button
                    type="button"
                    key={category.unwrap_or(ALL_DESIGNS_LABEL)}
                    class={classes!(
                        "chapter-tab",
                        "text-[10px]",
                        "uppercase",
                        "tracking-[0.18em]",
                        "whitespace-nowrap",
                        "transition-colors",
                        if active {
                            "active text-foreground font-medium"
                        } else {
                            "text-muted-foreground hover:text-foreground"
                        },
                    )}
                    onclick={onclick}
                >
                    { category.unwrap_or(ALL_DESIGNS_LABEL) }
                </button>
            }
        })
        .collect();

    let sections: Html = book
        .visible_chapters()
        .into_iter()
        .map(|page| chapter_section(page, &book, &on_select_design))
        .collect();

    let page_key = book.active_category().unwrap_or("all");
    let right_page = match &props.sidebar {
        Some(sidebar) => sidebar.clone(),
        None => html! { <SwatchDetail design={book.selected_design()} /> },
    };

    html! {
        <div class="swatch-book h-full overflow-hidden bg-background paper-texture">
            <div class="h-full overflow-hidden flex flex-col">
                { if props.show_cover_header { cover_header() } else { html! {} } }
                <div class="flex-1 min-h-0 px-3 pb-4 lg:px-8">
                    <div class="mx-auto h-full w-full max-w-[1800px]">
                        <div class="book-container relative h-full overflow-hidden">
                            <div class="book-spine hidden lg:block">
                                <span class="book-spine-title">{ "Atelier UI" }</span>
                            </div>
                            <div class="bookmark-ribbon hidden lg:block" />
                            <div class="h-full lg:ml-9 flex flex-col">
                                <nav class="chapter-tabs border-b border-border/60 bg-card/80 sticky top-0 z-40">
                                    <div class="flex items-center gap-0.5 overflow-x-auto px-4 lg:px-8 pt-2">
                                        { tabs }
                                    </div>
                                </nav>
                                <main class="page-curl flex-1 min-h-0">
                                    <div class="flex h-full min-h-0 flex-col lg:flex-row">
                                        <div
                                            class="page-content min-h-0 flex-1 overflow-y-auto p-6 lg:p-10"
                                            key={page_key}
                                        >
                                            { sections }
                                        </div>
                                        { right_page }
                                    </div>
                                </main>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn chapter_section(
    page: ChapterPage,
    book: &UseStateHandle<BookState>,
    on_select: &Callback<&'static str>,
) -> Html {
    let chapter = page.chapter;
    let swatches: Html = chapter
        .designs
        .iter()
        .enumerate()
        .map(|(index, design)| {
            html! {
                <Swatch
                    key={design.code}
                    design={design}
                    index={index}
                    selected={book.is_selected(design.code)}
                    on_select={on_select.clone()}
                />
            }
        })
        .collect();

    html! {
        <section key={chapter.category} class="chapter mb-16 last:mb-0" data-category={chapter.category}>
            <div class="mb-10">
                <div class="ornament-divider mb-4">
                    <div class="text-center px-6">
                        <p class="text-[9px] uppercase tracking-[0.3em] text-muted-foreground mb-1">
                            { format!("Chapter {}", page.number) }
                        </p>
                        <h2 class="font-serif text-2xl lg:text-3xl italic">{ chapter.category }</h2>
                        <p class="text-[11px] text-muted-foreground mt-1">{ chapter.category_ja }</p>
                    </div>
                </div>
            </div>
            <div class="relative bg-card/50 border border-border/40 p-6 lg:p-10">
                { ruled_lines(SECTION_RULED_LINES) }
                <div class="relative grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-10 lg:gap-14">
                    { swatches }
                </div>
                <div class="absolute top-3 left-3 w-5 h-5 border-t border-l border-border/40" />
                <div class="absolute top-3 right-3 w-5 h-5 border-t border-r border-border/40" />
                <div class="absolute bottom-3 left-3 w-5 h-5 border-b border-l border-border/40" />
                <div class="absolute bottom-3 right-3 w-5 h-5 border-b border-r border-border/40" />
            </div>
            <div class="flex justify-between items-center mt-6 px-2">
                <div class="page-range text-[9px] text-muted-foreground/50 page-number">
                    { page.page_range_label() }
                </div>
                <div class="flex items-center gap-3">
                    <div class="w-8 h-px bg-border/30" />
                    <div class="folio text-[9px] font-serif text-muted-foreground/40 italic page-number">
                        { page.folio_label() }
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Notebook rules behind a page area.
pub(crate) fn ruled_lines(count: usize) -> Html {
    html! {
        <div class="absolute inset-0 pointer-events-none overflow-hidden">
            { for (0..count).map(|line| html! {
                <div
                    key={line.to_string()}
                    class="absolute left-0 right-0 h-px bg-border/20"
                    style={format!("top: {}px", (line + 1) * RULE_SPACING_PX)}
                />
            }) }
        </div>
    }
}

fn cover_header() -> Html {
    html! {
        <header class="cover-header shrink-0 px-4 pb-3 pt-4 lg:px-6 lg:pb-4 lg:pt-6">
            <div class="mx-auto w-full max-w-[1600px] text-center">
                <div class="flex items-center justify-center gap-4 mb-8">
                    <div class="w-16 h-px bg-foreground/20" />
                    <svg class="w-5 h-5 text-foreground/30" viewBox="0 0 24 24" fill="currentColor">
                        <path d={STAR_PATH} />
                    </svg>
                    <div class="w-16 h-px bg-foreground/20" />
                </div>
                <p class="text-[10px] uppercase tracking-[0.4em] text-muted-foreground mb-4">
                    { "UI Design Swatch Book — Curated Collection" }
                </p>
                <h1 class="font-serif text-5xl lg:text-7xl font-light tracking-tight italic">{ "Atelier UI" }</h1>
                <p class="mt-4 text-sm text-muted-foreground leading-relaxed max-w-lg mx-auto">
                    { "厳選されたWebフロントエンドデザインのコレクション。" }<br />
                    { "あなたのプロジェクトにぴったりの一着を見つけてください。" }
                </p>
                <div class="colophon mt-6 flex items-center justify-center gap-6 text-muted-foreground">
                    { colophon_entry("Collection", COLLECTION_LABEL.to_string()) }
                    <div class="w-px h-8 bg-border" />
                    { colophon_entry("Designs", total_designs().to_string()) }
                    <div class="w-px h-8 bg-border" />
                    { colophon_entry("Chapters", chapter_count().to_string()) }
                </div>
                <div class="flex items-center justify-center gap-4 mt-8">
                    <div class="w-24 h-px bg-foreground/15" />
                    <div class="w-1.5 h-1.5 rotate-45 border border-foreground/20" />
                    <div class="w-24 h-px bg-foreground/15" />
                </div>
            </div>
        </header>
    }
}

fn colophon_entry(label: &'static str, value: String) -> Html {
    html! {
        <div class="text-center">
            <p class="text-[9px] uppercase tracking-[0.2em]">{ label }</p>
            <p class="font-serif text-base mt-0.5" data-colophon={label}>{ value }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_book() -> Element {
        set_panic_hook();
        let document = gloo::utils::document();
        let root = document.create_element("div").expect("create root");
        document.body().expect("body").append_child(&root).expect("append root");
        let props = SwatchBookProps {
            sidebar: None,
            show_cover_header: true,
        };
        let _handle = yew::Renderer::<SwatchBook>::with_root_and_props(root.clone(), props).render();
        root
    }

    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    fn find(root: &Element, selector: &str) -> Element {
        root.query_selector(selector)
            .expect("query")
            .unwrap_or_else(|| panic!("missing {selector}"))
    }

    fn press(target: &Element, key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keydown event");
        target.dispatch_event(&event).expect("dispatch keydown");
    }

    #[wasm_bindgen_test]
    async fn cover_header_shows_catalog_totals() {
        let root = mount_book();
        settle().await;
        let designs = find(&root, r#"[data-colophon="Designs"]"#);
        assert_eq!(designs.text_content().as_deref(), Some("12"));
        let chapters = find(&root, r#"[data-colophon="Chapters"]"#);
        assert_eq!(chapters.text_content().as_deref(), Some("4"));
    }

    #[wasm_bindgen_test]
    async fn selecting_a_card_fills_the_detail_panel() {
        let root = mount_book();
        settle().await;
        let empty = find(&root, ".swatch-detail");
        assert!(empty.get_attribute("data-code").is_none());
        assert!(empty
            .text_content()
            .unwrap_or_default()
            .contains("Select a Design"));

        find(&root, r#".swatch[data-code="MK-002"]"#)
            .dyn_into::<HtmlElement>()
            .expect("html element")
            .click();
        settle().await;
        let detail = find(&root, r#".swatch-detail[data-code="MK-002"]"#);
        assert_eq!(detail.query_selector_all(".palette-dot").expect("query").length(), 3);
        assert!(detail
            .text_content()
            .unwrap_or_default()
            .contains("Pricing Cards"));

        find(&root, r#".swatch[data-code="MK-002"]"#)
            .dyn_into::<HtmlElement>()
            .expect("html element")
            .click();
        settle().await;
        assert!(find(&root, ".swatch-detail").get_attribute("data-code").is_none());
    }

    #[wasm_bindgen_test]
    async fn enter_on_flip_button_does_not_select_card() {
        let root = mount_book();
        settle().await;
        press(&find(&root, r#".swatch[data-code="DS-001"] .swatch-flip"#), "Enter");
        settle().await;
        assert!(find(&root, ".swatch-detail").get_attribute("data-code").is_none());

        press(&find(&root, r#".swatch[data-code="DS-001"]"#), "Enter");
        settle().await;
        assert!(root
            .query_selector(r#".swatch-detail[data-code="DS-001"]"#)
            .expect("query")
            .is_some());
    }
}
