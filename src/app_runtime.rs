use std::cell::RefCell;

use crate::app_router::{self, InitConfig};

thread_local! {
    static INIT_CONFIG: RefCell<Option<InitConfig>> = RefCell::new(None);
}

pub(crate) fn set_init_config(config: InitConfig) {
    INIT_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

/// Startup config; the query string is read on the first call only.
pub(crate) fn init_config() -> InitConfig {
    INIT_CONFIG
        .with(|slot| *slot.borrow())
        .unwrap_or_else(|| {
            let config = app_router::load_init_config();
            set_init_config(config);
            config
        })
}
