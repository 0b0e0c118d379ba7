use leptos::prelude::*;

use catalog_models::Actor;

#[component]
pub(crate) fn ActorCard(actor: Actor) -> impl IntoView {
    let avatar = actor
        .avatar_url
        .clone()
        .map(|url| view! { <img class="actor-card-avatar" src=url alt=actor.name.clone() /> });
    let wiki = (!actor.wiki_url.is_empty()).then(|| {
        view! {
            <a class="actor-card-wiki" href=actor.wiki_url.clone() target="_blank" rel="noreferrer">
                "Википедия"
            </a>
        }
    });

    view! {
        <div class="actor-card">
            {avatar}
            <h4>{actor.name.clone()}</h4>
            {wiki}
        </div>
    }
}
