use leptos::prelude::*;

use crate::filter::Categories;
use crate::models::post::PostSummary;

#[server]
pub async fn list_posts(
    category: Option<String>,
    q: Option<String>,
) -> Result<Vec<PostSummary>, ServerFnError> {
    use crate::content::queries;
    use crate::error::AppError;
    use crate::filter::PostQuery;

    let state = crate::app::app_state()?;
    queries::list_post_summaries(state.content_repo.as_ref(), &PostQuery { category, q })
        .await
        .map_err(AppError::into_server_fn_error)
}

#[server]
pub async fn list_categories() -> Result<Categories, ServerFnError> {
    use crate::error::AppError;

    let state = crate::app::app_state()?;
    crate::content::queries::categories(state.content_repo.as_ref())
        .await
        .map_err(AppError::into_server_fn_error)
}

#[component]
pub fn PostCard(post: PostSummary) -> impl IntoView {
    let href = format!("/blog/{}", post.slug);
    let meta = format!("{} · {}", post.published_label(), post.read_time_label());

    view! {
        <article class="post-card">
            <a href=href.clone()>
                <img src=post.image alt=post.title.clone() loading="lazy"/>
            </a>
            <span class="badge">{post.category}</span>
            <h3><a href=href>{post.title}</a></h3>
            <p>{post.excerpt}</p>
            <p class="meta">{meta}</p>
        </article>
    }
}

/// Row of category buttons. The first entry is always "All".
#[component]
pub fn CategoryButtons(
    categories: Vec<String>,
    #[prop(into)] active: Signal<String>,
    on_select: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="category-buttons">
            {categories
                .into_iter()
                .map(|category| {
                    let value = category.clone();
                    let current = category.clone();
                    view! {
                        <button
                            class:active=move || active.get() == current
                            on:click=move |_| on_select.set(value.clone())
                        >
                            {category}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Blog index with a search box and category filter.
#[component]
pub fn PostList() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(crate::filter::ALL_CATEGORIES.to_string());

    let categories = Resource::new(|| (), |_| async move { list_categories().await });
    let posts = Resource::new(
        move || (category.get(), query.get()),
        |(category, q)| async move { list_posts(Some(category), Some(q)).await },
    );

    view! {
        <div class="post-filters">
            <input
                type="search"
                placeholder="Search articles..."
                on:input=move |ev| set_query.set(event_target_value(&ev))
                prop:value=query
            />
            <Suspense fallback=|| ()>
                {move || categories.get().map(|res| match res {
                    Ok(cats) => view! {
                        <CategoryButtons categories=cats.posts active=category on_select=set_category/>
                    }.into_any(),
                    Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </div>

        <Transition fallback=|| view! { <p>"Loading articles..."</p> }>
            {move || posts.get().map(|res| match res {
                Ok(posts) if posts.is_empty() => {
                    view! { <p class="empty">"No articles found matching your criteria."</p> }.into_any()
                }
                Ok(posts) => view! {
                    <div class="grid">
                        {posts.into_iter().map(|post| view! { <PostCard post/> }).collect_view()}
                    </div>
                }.into_any(),
                Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
            })}
        </Transition>
    }
}
