use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::post_list::PostCard;
use crate::content::queries::PostPage;
use crate::models::post::PostSummary;
use crate::rendering::share::ShareLink;
use crate::rendering::toc::TocEntry;

/// Load a post page and count the view. `None` for an unknown slug.
#[server]
pub async fn get_post_page(slug: String) -> Result<Option<PostPage>, ServerFnError> {
    use crate::error::AppError;

    let state = crate::app::app_state()?;
    crate::content::queries::post_page(state.content_repo.as_ref(), &slug, &state.site_url)
        .await
        .map_err(AppError::into_server_fn_error)
}

/// Collapsible list of anchor links to the post's headings.
#[component]
pub fn TableOfContents(entries: Vec<TocEntry>) -> impl IntoView {
    let (open, set_open) = signal(true);

    if entries.is_empty() {
        return ().into_any();
    }

    view! {
        <nav class="toc">
            <button on:click=move |_| set_open.update(|o| *o = !*o)>
                "Table of Contents"
            </button>
            <Show when=move || open.get()>
                <ul>
                    {entries
                        .clone()
                        .into_iter()
                        .map(|entry| {
                            let class = format!("toc-level-{}", entry.level);
                            view! {
                                <li class=class>
                                    <a href=format!("#{}", entry.id)>{entry.text}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </nav>
    }
    .into_any()
}

#[component]
pub fn ShareButtons(links: Vec<ShareLink>) -> impl IntoView {
    view! {
        <div class="share">
            <span>"Share this article"</span>
            {links
                .into_iter()
                .map(|link| view! {
                    <a href=link.url target="_blank" rel="noopener noreferrer">{link.network}</a>
                })
                .collect_view()}
        </div>
    }
}

/// "Related articles"; renders nothing when there are none.
#[component]
pub fn SimilarPosts(posts: Vec<PostSummary>) -> impl IntoView {
    if posts.is_empty() {
        return ().into_any();
    }

    view! {
        <section class="similar-posts">
            <h2>"Related Articles"</h2>
            <div class="grid">
                {posts.into_iter().map(|post| view! { <PostCard post/> }).collect_view()}
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn PostNotFound() -> impl IntoView {
    view! {
        <Title text="Post Not Found"/>
        <div class="not-found">
            <h1>"Post Not Found"</h1>
            <p>"The article you're looking for doesn't exist."</p>
            <a href="/blog">"Back to Blog"</a>
        </div>
    }
}

#[component]
pub fn PostView(#[prop(into)] slug: Signal<String>) -> impl IntoView {
    let page = Resource::new(move || slug.get(), |s| async move { get_post_page(s).await });

    view! {
        <Suspense fallback=|| view! { <p>"Loading..."</p> }>
            {move || page.get().map(|res| match res {
                Ok(Some(page)) => {
                    let detail = page.detail;
                    let post = detail.post;
                    let meta = format!(
                        "{} · {} · {} views",
                        post.published_label(),
                        post.read_time_label(),
                        post.views,
                    );
                    view! {
                        <Title text=post.title.clone()/>
                        <article class="post">
                            <a href="/blog">"Back to Blog"</a>
                            <span class="badge">{post.category}</span>
                            <h1>{post.title}</h1>
                            <p class="meta">{meta}</p>
                            <div class="author">
                                <img src=detail.author.avatar alt=detail.author.name.clone()/>
                                <strong>{detail.author.name}</strong>
                                <p>{detail.author.bio}</p>
                            </div>
                            <img class="cover" src=post.image alt=""/>
                            <div class="layout">
                                <TableOfContents entries=detail.toc/>
                                <div class="prose" inner_html=detail.html></div>
                            </div>
                            <ul class="tags">
                                {post.tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
                            </ul>
                            <ShareButtons links=page.share/>
                        </article>
                        <SimilarPosts posts=page.similar/>
                    }
                    .into_any()
                }
                Ok(None) => view! { <PostNotFound/> }.into_any(),
                Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
            })}
        </Suspense>
    }
}
