use leptos::prelude::*;

use crate::components::post_list::CategoryButtons;
use crate::models::project::Project;

#[server]
pub async fn list_projects(category: Option<String>) -> Result<Vec<Project>, ServerFnError> {
    use crate::error::AppError;

    let state = crate::app::app_state()?;
    crate::content::queries::list_projects(state.content_repo.as_ref(), category.as_deref())
        .await
        .map_err(AppError::into_server_fn_error)
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let live = project.links.live.map(|href| {
        view! { <a href=href target="_blank" rel="noopener noreferrer">"Live Demo"</a> }
    });
    let source = project.links.source.map(|href| {
        view! { <a href=href target="_blank" rel="noopener noreferrer">"Source"</a> }
    });

    view! {
        <article class="project-card">
            <img src=project.image alt=project.title.clone() loading="lazy"/>
            <span class="badge">{project.category}</span>
            <h3>{project.title}</h3>
            <p>{project.description}</p>
            <ul class="technologies">
                {project.technologies.into_iter().map(|t| view! { <li>{t}</li> }).collect_view()}
            </ul>
            <div class="links">{live}{source}</div>
        </article>
    }
}

/// Project cards with category filter buttons.
#[component]
pub fn ProjectGallery() -> impl IntoView {
    let (category, set_category) = signal(crate::filter::ALL_CATEGORIES.to_string());

    let categories = Resource::new(
        || (),
        |_| async move { crate::components::post_list::list_categories().await },
    );
    let projects = Resource::new(
        move || category.get(),
        |c| async move { list_projects(Some(c)).await },
    );

    view! {
        <Suspense fallback=|| ()>
            {move || categories.get().map(|res| match res {
                Ok(cats) => view! {
                    <CategoryButtons categories=cats.projects active=category on_select=set_category/>
                }.into_any(),
                Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
            })}
        </Suspense>

        <Transition fallback=|| view! { <p>"Loading projects..."</p> }>
            {move || projects.get().map(|res| match res {
                Ok(projects) => view! {
                    <div class="grid">
                        {projects.into_iter().map(|project| view! { <ProjectCard project/> }).collect_view()}
                    </div>
                }.into_any(),
                Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
            })}
        </Transition>
    }
}
