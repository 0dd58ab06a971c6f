use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::components::contact_form::ContactForm;
use crate::components::post_list::{PostCard, PostList, list_posts};
use crate::components::post_view::PostView;
use crate::components::profile::{SkillList, Testimonials};
use crate::components::projects::{ProjectCard, ProjectGallery, list_projects};

/// Shared server state, handed to axum handlers and (through context) to
/// server functions.
#[cfg(feature = "ssr")]
#[derive(Clone)]
pub struct AppState {
    pub content_repo: std::sync::Arc<dyn crate::content::repository::ContentRepository>,
    /// `None` when no mail API key is configured.
    pub mailer: Option<std::sync::Arc<dyn crate::mail::client::Mailer>>,
    pub contact: crate::mail::contact::ContactSettings,
    pub service_token: String,
    pub site_url: String,
    pub leptos_options: LeptosOptions,
}

#[cfg(feature = "ssr")]
impl axum::extract::FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

/// Fetch the [`AppState`] provided to server functions.
#[cfg(feature = "ssr")]
pub fn app_state() -> Result<AppState, ServerFnError> {
    use_context::<AppState>().ok_or_else(|| ServerFnError::new("AppState not found in context"))
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Alex Johnson - Frontend Developer"/>

        <Router>
            <nav class="top-nav">
                <a class="logo" href="/">"Alex Johnson"</a>
                <a href="/projects">"Projects"</a>
                <a href="/blog">"Blog"</a>
                <a href="/#contact">"Contact"</a>
            </nav>
            <main>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/projects") view=ProjectsPage/>
                    <Route path=path!("/blog") view=BlogPage/>
                    <Route path=path!("/blog/:slug") view=BlogPostPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let featured = Resource::new(|| (), |_| async move { list_projects(None).await });
    let latest = Resource::new(|| (), |_| async move { list_posts(None, None).await });

    view! {
        <section class="hero">
            <h1>"Hi, I'm Alex. I build fast, accessible web apps."</h1>
            <p>"Frontend developer working with React, Next.js and modern CSS."</p>
            <a class="button" href="/projects">"View my work"</a>
        </section>

        <SkillList/>

        <section class="featured-projects">
            <h2>"Featured Projects"</h2>
            <Suspense fallback=|| view! { <p>"Loading projects..."</p> }>
                {move || featured.get().map(|res| match res {
                    Ok(projects) => view! {
                        <div class="grid">
                            {projects
                                .into_iter()
                                .filter(|p| p.featured)
                                .map(|project| view! { <ProjectCard project/> })
                                .collect_view()}
                        </div>
                    }.into_any(),
                    Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </section>

        <section class="latest-posts">
            <h2>"Latest Articles"</h2>
            <Suspense fallback=|| view! { <p>"Loading articles..."</p> }>
                {move || latest.get().map(|res| match res {
                    Ok(posts) => view! {
                        <div class="grid">
                            {posts
                                .into_iter()
                                .take(3)
                                .map(|post| view! { <PostCard post/> })
                                .collect_view()}
                        </div>
                    }.into_any(),
                    Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </section>

        <Testimonials/>
        <ContactForm/>
    }
}

#[component]
fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects - Alex Johnson"/>
        <h1>"Projects"</h1>
        <ProjectGallery/>
    }
}

#[component]
fn BlogPage() -> impl IntoView {
    view! {
        <Title text="Blog - Alex Johnson"/>
        <h1>"Blog"</h1>
        <PostList/>
    }
}

#[component]
fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.get().get("slug").unwrap_or_default());

    view! { <PostView slug/> }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found"/>
        <h1>"Page not found."</h1>
        <a href="/">"Back home"</a>
    }
}
