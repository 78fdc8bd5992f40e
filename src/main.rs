mod app_router;
mod app_runtime;
mod book_view;
mod detail_view;
mod swatch_view;
mod yew_app;

fn main() {
    yew_app::run();
}
