use atelier_core::view_mode::{query_mode_param, resolve_view_mode, ModeSource, ViewMode};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct InitConfig {
    pub(crate) view_mode: ViewMode,
}

/// Resolves the startup mode. Called once; later query changes are not seen.
pub(crate) fn load_init_config() -> InitConfig {
    let query_mode = load_query_mode();
    let resolved = resolve_view_mode(query_mode.as_deref(), default_view_mode());
    if let (Some(raw), ModeSource::BuildDefault | ModeSource::Fallback) =
        (query_mode.as_deref(), resolved.source)
    {
        gloo::console::warn!(format!("ignoring unknown ?mode={raw}"));
    }
    gloo::console::log!(format!(
        "initial view mode: {} ({})",
        resolved.mode,
        source_label(resolved.source)
    ));
    InitConfig {
        view_mode: resolved.mode,
    }
}

/// Build-time default, e.g. `TRUNK_PUBLIC_ATELIER_DEFAULT_VIEW_MODE=book trunk build`.
pub(crate) fn default_view_mode() -> Option<&'static str> {
    option_env!("ATELIER_DEFAULT_VIEW_MODE")
        .or(option_env!("TRUNK_PUBLIC_ATELIER_DEFAULT_VIEW_MODE"))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn source_label(source: ModeSource) -> &'static str {
    match source {
        ModeSource::Query => "query",
        ModeSource::BuildDefault => "build default",
        ModeSource::Fallback => "fallback",
    }
}

fn load_query_mode() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    query_mode_param(&search)
}
