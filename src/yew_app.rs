use atelier_core::preview_url::{parse_preview_url, PreviewUrlError, PREVIEW_SANDBOX};
use atelier_core::view_mode::ViewMode;
use atelier_core::workbench::Workbench;
use web_sys::{HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::app_runtime;
use crate::book_view::{ruled_lines, SwatchBook};

/// Dev-only shortcuts between the two screens.
const DEV_TOOLS: bool = cfg!(debug_assertions);
const PREVIEW_RULED_LINES: usize = 18;

#[function_component(App)]
pub(crate) fn app() -> Html {
    let workbench = use_state(|| Workbench::new(app_runtime::init_config().view_mode));

    let update = |apply: fn(&mut Workbench)| {
        let workbench = workbench.clone();
        move || {
            let mut next = (*workbench).clone();
            let from = next.view_mode();
            apply(&mut next);
            log_transition(from, &next);
            workbench.set(next);
        }
    };
    let open_book = update(Workbench::open_book);
    let reflect = update(Workbench::reflect);
    let back_to_setup = update(Workbench::back_to_setup);
    let skip_to_book = update(Workbench::skip_to_book);

    let on_repo_input = {
        let workbench = workbench.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*workbench).clone();
            next.set_repo_input(input.value());
            workbench.set(next);
        })
    };
    let on_preview_input = {
        let workbench = workbench.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*workbench).clone();
            next.set_preview_input(input.value());
            workbench.set(next);
        })
    };

    match workbench.view_mode() {
        ViewMode::Setup => {
            let on_open = Callback::from(move |_: MouseEvent| open_book());
            let on_skip = Callback::from(move |_: MouseEvent| skip_to_book());
            html! {
                <main class="workbench setup h-screen overflow-hidden bg-background paper-texture">
                    { if DEV_TOOLS {
                        dev_overlay("Skip to Book", "skip-to-book", on_skip)
                    } else {
                        html! {}
                    }}
                    <div class="mx-auto flex h-full w-full max-w-[980px] items-center px-4 py-8 lg:px-6">
                        <section class="w-full overflow-hidden border border-border/40 bg-card/80 shadow-lg">
                            <header class="border-b border-border px-6 py-8 text-center lg:px-10">
                                <p class="text-[10px] uppercase tracking-[0.4em] text-muted-foreground">
                                    { "UI Design Swatch Book" }
                                </p>
                                <h1 class="mt-3 font-serif text-5xl italic lg:text-6xl">{ "Atelier UI" }</h1>
                                <p class="mt-3 text-sm text-muted-foreground">
                                    { "リポジトリを指定すると、見開きビューでデザイン比較を開始できます。" }
                                </p>
                            </header>
                            <div class="space-y-5 px-6 py-6 lg:px-10">
                                <div class="space-y-2">
                                    <label for="repo-url" class="text-[10px] uppercase tracking-[0.16em] text-muted-foreground">
                                        { "Repository URL (optional)" }
                                    </label>
                                    <input
                                        id="repo-url"
                                        type="text"
                                        value={workbench.repo_input().to_string()}
                                        oninput={on_repo_input}
                                        placeholder="https://github.com/your/repo"
                                        class="h-10 w-full border border-border bg-background px-3 text-sm outline-none"
                                    />
                                </div>
                                <div class="space-y-2">
                                    <label for="preview-url" class="text-[10px] uppercase tracking-[0.16em] text-muted-foreground">
                                        { "Preview URL" }
                                    </label>
                                    <input
                                        id="preview-url"
                                        type="text"
                                        value={workbench.preview_input().to_string()}
                                        oninput={on_preview_input}
                                        placeholder="preview-123.example.com"
                                        class="h-10 w-full border border-border bg-background px-3 text-sm outline-none"
                                    />
                                </div>
                                <div class="flex items-center justify-between gap-4 border-t border-border pt-5">
                                    <p class="repo-status text-xs text-muted-foreground">{ workbench.repo_status() }</p>
                                    <button
                                        id="open-book"
                                        type="button"
                                        class="h-10 border border-border bg-foreground px-5 text-[11px] uppercase tracking-[0.14em] text-background"
                                        onclick={on_open}
                                    >
                                        { "Open Book" }
                                    </button>
                                </div>
                            </div>
                        </section>
                    </div>
                </main>
            }
        }
        ViewMode::Book => {
            let on_back = Callback::from(move |_: MouseEvent| back_to_setup());
            let on_change_setup = on_back.clone();
            let on_reflect = Callback::from(move |event: SubmitEvent| {
                event.prevent_default();
                reflect();
            });
            let sidebar = html! {
                <PreviewPanel
                    input={workbench.preview_input().to_string()}
                    safe_url={workbench.safe_preview_url()}
                    on_input={on_preview_input}
                    on_reflect={on_reflect}
                    on_setup={on_change_setup}
                />
            };
            html! {
                <main class="workbench book h-screen overflow-hidden bg-background">
                    { if DEV_TOOLS {
                        dev_overlay("Back to Setup", "back-to-setup", on_back)
                    } else {
                        html! {}
                    }}
                    <SwatchBook show_cover_header={false} sidebar={Some(sidebar)} />
                </main>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct PreviewPanelProps {
    input: String,
    safe_url: String,
    on_input: Callback<InputEvent>,
    on_reflect: Callback<SubmitEvent>,
    on_setup: Callback<MouseEvent>,
}

#[function_component(PreviewPanel)]
fn preview_panel(props: &PreviewPanelProps) -> Html {
    let safe_url = props.safe_url.clone();
    html! {
        <aside class="preview-panel flex-1 min-h-0 border-t border-border/40 p-6 lg:border-l lg:border-t-0 lg:p-10">
            <div class="relative h-full min-h-0 overflow-hidden border border-border/40 bg-card/60">
                { ruled_lines(PREVIEW_RULED_LINES) }
                <div class="relative flex h-full flex-col">
                    <header class="flex items-center justify-between border-b border-border px-5 py-4">
                        <div>
                            <p class="text-[10px] tracking-[0.18em] uppercase text-muted-foreground">{ "Right Page" }</p>
                            <h3 class="font-serif text-xl italic">{ "User Site Preview" }</h3>
                        </div>
                        <span class="rounded-full border border-border bg-background px-2 py-0.5 text-[10px] tracking-wide text-muted-foreground">
                            { "READY" }
                        </span>
                    </header>
                    <div class="border-b border-border px-5 py-3">
                        <form class="preview-form flex gap-2" onsubmit={props.on_reflect.clone()}>
                            <input
                                class="h-9 flex-1 border border-border bg-background px-3 text-sm outline-none"
                                type="text"
                                value={props.input.clone()}
                                oninput={props.on_input.clone()}
                                placeholder="Preview URL"
                                aria-label="Preview URL"
                            />
                            <button type="submit" class="h-9 border border-border bg-foreground px-3 text-[10px] uppercase tracking-[0.12em] text-background">
                                { "Reflect" }
                            </button>
                        </form>
                    </div>
                    <div class="border-b border-border px-5 py-2">
                        <button
                            type="button"
                            class="change-setup text-[10px] uppercase tracking-[0.14em] text-muted-foreground underline"
                            onclick={props.on_setup.clone()}
                        >
                            { "Change Repository / Setup" }
                        </button>
                    </div>
                    <div class="flex-1 p-4">
                        <div class="relative h-full overflow-hidden border border-border bg-card shadow-sm">
                            <iframe
                                key={safe_url.clone()}
                                title="User site preview"
                                src={safe_url}
                                class="h-full w-full bg-white"
                                sandbox={PREVIEW_SANDBOX}
                            />
                        </div>
                    </div>
                </div>
            </div>
        </aside>
    }
}

fn dev_overlay(label: &'static str, id: &'static str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <div class="dev-overlay fixed right-3 top-3 z-50 rounded border border-border bg-card/95 p-2 shadow-sm">
            <button
                id={id}
                type="button"
                class="h-8 border border-border px-3 text-[10px] uppercase tracking-[0.12em]"
                onclick={onclick}
            >
                { label }
            </button>
        </div>
    }
}

fn log_transition(from: ViewMode, next: &Workbench) {
    let to = next.view_mode();
    if from != to {
        gloo::console::log!(format!("view mode: {from} -> {to}"));
    }
    match parse_preview_url(next.active_preview()) {
        Ok(_) | Err(PreviewUrlError::Empty) => {}
        Err(err) => {
            gloo::console::warn!(format!("{err}; previewing default url"));
        }
    }
}

pub(crate) fn run() {
    yew::Renderer::<App>::new().render();
}
