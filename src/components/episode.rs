use crate::components::context::{PlayerAction, PlayerState};
use crate::components::gen_funcs::sanitize_html_with_blank_target;
use crate::components::routes::Route;
use crate::config::AppConfig;
use crate::requests::pod_req::{call_get_episode, EpisodeDetail};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::functional::use_dispatch;
use yewdux::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SafeHtmlProps {
    pub html: String,
}

/// Renders already-sanitised markup.
#[function_component(SafeHtml)]
pub fn safe_html(props: &SafeHtmlProps) -> Html {
    let Some(div) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.create_element("div").ok())
    else {
        return html! {};
    };
    div.set_inner_html(&props.html);

    Html::VRef(div.into())
}

#[derive(Properties, PartialEq)]
pub struct EpisodePageProps {
    pub slug: String,
}

#[function_component(EpisodePage)]
pub fn episode_page(props: &EpisodePageProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let dispatch = use_dispatch::<PlayerState>();
    let episode = use_state(|| None::<EpisodeDetail>);
    let error = use_state(|| None::<String>);

    {
        let episode = episode.clone();
        let error = error.clone();
        use_effect_with((config, props.slug.clone()), move |(config, slug)| {
            let config = config.clone();
            let slug = slug.clone();
            episode.set(None);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match call_get_episode(&config, &slug).await {
                    Ok(fetched_episode) => episode.set(Some(fetched_episode)),
                    Err(e) => {
                        log::error!("Failed to fetch episode {}: {}", slug, e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    if let Some(message) = (*error).as_ref() {
        return html! {
            <div class="episode error">
                <p>{ format!("Could not load this episode: {}", message) }</p>
                <Link<Route> to={Route::Home}>{"Back to all episodes"}</Link<Route>>
            </div>
        };
    }

    let Some(episode) = (*episode).clone() else {
        return html! { <div class="episode loading">{"Loading episode..."}</div> };
    };

    let on_play = {
        let playable = episode.to_episode();
        dispatch.apply_callback(move |_: MouseEvent| PlayerAction::Play(playable.clone()))
    };
    let description = sanitize_html_with_blank_target(&episode.description);

    html! {
        <div class="episode">
            <div class="thumbnail-container">
                <Link<Route> to={Route::Home}>
                    <img src="/static/images/arrow-left.svg" alt="Back" />
                </Link<Route>>
                <img class="thumbnail" src={episode.thumbnail.clone()} alt={episode.title.clone()} />
                <button type="button" onclick={on_play}>
                    <img src="/static/images/play.svg" alt="Play episode" />
                </button>
            </div>
            <header>
                <h1>{ episode.title.clone() }</h1>
                <span>{ episode.members.clone() }</span>
                <span>{ episode.published_at.clone() }</span>
                <span>{ episode.duration_as_string.clone() }</span>
            </header>
            <div class="description">
                <SafeHtml html={description} />
            </div>
        </div>
    }
}
