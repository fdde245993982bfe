use crate::components::context::{Episode, PlayerAction, PlayerState};
use crate::components::routes::Route;
use crate::config::AppConfig;
use crate::requests::pod_req::{call_get_episodes, EpisodeDetail};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::functional::use_dispatch;
use yewdux::prelude::*;

#[derive(Properties, PartialEq)]
struct EpisodeCardProps {
    episode: EpisodeDetail,
    on_play: Callback<MouseEvent>,
}

#[function_component(EpisodeCard)]
fn episode_card(props: &EpisodeCardProps) -> Html {
    let episode = &props.episode;
    html! {
        <li class="episode-card">
            <img src={episode.thumbnail.clone()} alt={episode.title.clone()} />
            <div class="episode-details">
                <Link<Route> to={Route::Episode { slug: episode.id.clone() }}>
                    { episode.title.clone() }
                </Link<Route>>
                <p>{ episode.members.clone() }</p>
                <span>{ episode.published_at.clone() }</span>
                <span>{ episode.duration_as_string.clone() }</span>
            </div>
            <button type="button" onclick={props.on_play.clone()}>
                <img src="/static/images/play-green.svg" alt="Play episode" />
            </button>
        </li>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let dispatch = use_dispatch::<PlayerState>();
    let episodes = use_state(|| None::<Vec<EpisodeDetail>>);
    let error = use_state(|| None::<String>);

    {
        let episodes = episodes.clone();
        let error = error.clone();
        use_effect_with(config.clone(), move |config| {
            let config = config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match call_get_episodes(&config).await {
                    Ok(fetched_episodes) => episodes.set(Some(fetched_episodes)),
                    Err(e) => {
                        log::error!("Failed to fetch episodes: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    if let Some(message) = (*error).as_ref() {
        return html! {
            <div class="homepage error">
                <p>{ format!("Could not load episodes: {}", message) }</p>
            </div>
        };
    }

    let Some(episodes) = (*episodes).as_ref() else {
        return html! { <div class="homepage loading">{"Loading episodes..."}</div> };
    };

    // Both sections play from one queue so next/previous cross between them.
    let queue: Vec<Episode> = episodes.iter().map(EpisodeDetail::to_episode).collect();
    let play_at = {
        let dispatch = dispatch.clone();
        move |index: usize| {
            let dispatch = dispatch.clone();
            let queue = queue.clone();
            Callback::from(move |_: MouseEvent| {
                dispatch.apply(PlayerAction::PlayList(queue.clone(), index));
            })
        }
    };

    let latest_count = config.latest_count.min(episodes.len());
    let (latest, rest) = episodes.split_at(latest_count);

    html! {
        <div class="homepage">
            <section class="latest-episodes">
                <h2>{"Latest releases"}</h2>
                <ul>
                    { for latest.iter().enumerate().map(|(index, episode)| html! {
                        <EpisodeCard
                            key={episode.id.clone()}
                            episode={episode.clone()}
                            on_play={play_at(index)}
                        />
                    }) }
                </ul>
            </section>

            <section class="all-episodes">
                <h2>{"All episodes"}</h2>
                <table cellspacing="0">
                    <thead>
                        <tr>
                            <th></th>
                            <th>{"Podcast"}</th>
                            <th>{"Members"}</th>
                            <th>{"Date"}</th>
                            <th>{"Duration"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rest.iter().enumerate().map(|(offset, episode)| html! {
                            <tr key={episode.id.clone()}>
                                <td class="thumbnail">
                                    <img src={episode.thumbnail.clone()} alt={episode.title.clone()} />
                                </td>
                                <td>
                                    <Link<Route> to={Route::Episode { slug: episode.id.clone() }}>
                                        { episode.title.clone() }
                                    </Link<Route>>
                                </td>
                                <td>{ episode.members.clone() }</td>
                                <td class="published-at">{ episode.published_at.clone() }</td>
                                <td>{ episode.duration_as_string.clone() }</td>
                                <td>
                                    <button type="button" onclick={play_at(latest_count + offset)}>
                                        <img src="/static/images/play-green.svg" alt="Play episode" />
                                    </button>
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </section>
        </div>
    }
}
