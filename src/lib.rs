pub mod app;
pub mod error;
pub mod filter;
pub mod similarity;

#[cfg(feature = "ssr")]
pub mod config;

pub mod models {
    pub mod contact;
    pub mod post;
    pub mod profile;
    pub mod project;
}
pub mod content {
    pub mod front_matter;
    pub mod queries;
    pub mod repository;
    pub mod seed;
}
pub mod rendering {
    pub mod markdown;
    pub mod share;
    pub mod slug;
    pub mod toc;
}
pub mod mail {
    pub mod client;
    pub mod contact;
}
pub mod components {
    pub mod contact_form;
    pub mod post_list;
    pub mod post_view;
    pub mod profile;
    pub mod projects;
}
pub mod api {
    pub mod posts;

    #[cfg(feature = "ssr")]
    pub mod contact;
    #[cfg(feature = "ssr")]
    pub mod errors;
    #[cfg(feature = "ssr")]
    pub mod profile;
    #[cfg(feature = "ssr")]
    pub mod projects;
    #[cfg(feature = "ssr")]
    pub mod router;
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
