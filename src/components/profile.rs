use leptos::prelude::*;

use crate::models::profile::Profile;

#[server]
pub async fn get_profile() -> Result<Profile, ServerFnError> {
    use crate::error::AppError;

    let state = crate::app::app_state()?;
    crate::content::queries::profile(state.content_repo.as_ref())
        .await
        .map_err(AppError::into_server_fn_error)
}

#[component]
pub fn SkillList() -> impl IntoView {
    let profile = Resource::new(|| (), |_| async move { get_profile().await });

    view! {
        <section class="skills">
            <h2>"Skills"</h2>
            <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                {move || profile.get().map(|res| match res {
                    Ok(profile) => profile
                        .skills
                        .into_iter()
                        .map(|skill| {
                            let width = format!("width: {}%", skill.level);
                            view! {
                                <div class="skill">
                                    <span>{skill.name}</span>
                                    <span>{format!("{}%", skill.level)}</span>
                                    <div class="bar"><div class="fill" style=width></div></div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any(),
                    Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let profile = Resource::new(|| (), |_| async move { get_profile().await });

    view! {
        <section class="testimonials">
            <h2>"What Clients Say"</h2>
            <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                {move || profile.get().map(|res| match res {
                    Ok(profile) => profile
                        .testimonials
                        .into_iter()
                        .map(|t| {
                            let stars = "★".repeat(t.rating as usize);
                            let byline = format!("{}, {}", t.role, t.company);
                            view! {
                                <blockquote class="testimonial">
                                    <p class="rating">{stars}</p>
                                    <p>{t.quote}</p>
                                    <footer>
                                        <img src=t.image alt=t.name.clone()/>
                                        <strong>{t.name}</strong>
                                        <span>{byline}</span>
                                    </footer>
                                </blockquote>
                            }
                        })
                        .collect_view()
                        .into_any(),
                    Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </section>
    }
}
