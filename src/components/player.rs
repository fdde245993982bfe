use crate::components::audio::{AudioBinding, MediaEvent};
use crate::components::context::{PlayerAction, PlayerState};
use crate::components::gen_funcs::format_time;
use gloo_events::EventListener;
use web_sys::{HtmlAudioElement, HtmlInputElement};
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component(Player)]
pub fn player() -> Html {
    let (state, dispatch) = use_store::<PlayerState>();
    let audio_ref = use_node_ref();
    let binding = use_mut_ref(|| None::<AudioBinding<HtmlAudioElement>>);

    // Attach the binding and the element listeners once the <audio> node exists.
    {
        let audio_ref = audio_ref.clone();
        let binding = binding.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                *binding.borrow_mut() = Some(AudioBinding::new(audio.clone()));

                for name in MediaEvent::DOM_EVENTS {
                    let binding = binding.clone();
                    let dispatch = dispatch.clone();
                    let element = audio.clone();
                    listeners.push(EventListener::new(&audio, name, move |_| {
                        let Some(event) = MediaEvent::from_dom(name, || element.current_time())
                        else {
                            return;
                        };
                        let action = binding
                            .borrow_mut()
                            .as_mut()
                            .and_then(|binding| binding.handle(event, &dispatch.get()));
                        if let Some(action) = action {
                            dispatch.apply(action);
                        }
                    }));
                }
            } else {
                log::error!("Audio element was not mounted; playback is unavailable");
            }

            move || drop(listeners)
        });
    }

    // Every new snapshot goes through the binding; only transitions reach the element.
    {
        let binding = binding.clone();
        use_effect_with(state.clone(), move |state| {
            if let Some(binding) = binding.borrow_mut().as_mut() {
                binding.sync(state);
            }
        });
    }

    let on_seek = {
        let binding = binding.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Ok(seconds) = input.value().parse::<f64>() else {
                return;
            };
            let action = binding
                .borrow_mut()
                .as_mut()
                .and_then(|binding| binding.seek(seconds, &dispatch.get()));
            if let Some(action) = action {
                dispatch.apply(action);
            }
        })
    };

    let on_shuffle = dispatch.apply_callback(|_: MouseEvent| PlayerAction::ToggleShuffle);
    let on_previous = dispatch.apply_callback(|_: MouseEvent| PlayerAction::PlayPrevious);
    let on_toggle = dispatch.apply_callback(|_: MouseEvent| PlayerAction::TogglePlay);
    let on_next = dispatch.apply_callback(|_: MouseEvent| PlayerAction::PlayNext);
    let on_loop = dispatch.apply_callback(|_: MouseEvent| PlayerAction::ToggleLoop);

    let episode = state.current_episode().cloned();
    let empty = state.episode_list().is_empty();
    let duration = episode.as_ref().map_or(0, |episode| episode.duration);

    html! {
        <div class="player-container">
            <header>
                <img src="/static/images/playing.svg" alt="Headphones" />
                <strong>{"Now playing"}</strong>
            </header>

            {
                if let Some(episode) = episode.as_ref() {
                    html! {
                        <div class="current-episode">
                            <img
                                class="current-episode-thumbnail"
                                src={episode.thumbnail.clone()}
                                alt={episode.title.clone()}
                            />
                            <strong>{ episode.title.clone() }</strong>
                            <span>{ episode.members.clone() }</span>
                            <span class="queue-position">
                                { format!("{} / {}", state.current_episode_index() + 1, state.episode_list().len()) }
                            </span>
                        </div>
                    }
                } else {
                    html! {
                        <div class="empty-player">
                            <strong>{"Select a podcast to listen to"}</strong>
                        </div>
                    }
                }
            }

            <footer class={classes!(empty.then_some("empty"))}>
                <div class="progress">
                    <span>{ format_time(f64::from(state.progress())) }</span>
                    <div class="slider">
                        {
                            if episode.is_some() {
                                html! {
                                    <input
                                        type="range"
                                        min="0"
                                        max={duration.to_string()}
                                        step="1"
                                        value={state.progress().to_string()}
                                        oninput={on_seek}
                                    />
                                }
                            } else {
                                html! { <div class="empty-slider" /> }
                            }
                        }
                    </div>
                    <span>{ format_time(f64::from(duration)) }</span>
                </div>

                <audio ref={audio_ref} preload="metadata" />

                <div class="buttons">
                    <button
                        type="button"
                        class={classes!(state.is_shuffling().then_some("is-active"))}
                        disabled={empty}
                        onclick={on_shuffle}
                    >
                        <img src="/static/images/shuffle.svg" alt="Shuffle" />
                    </button>
                    <button
                        type="button"
                        disabled={empty || !state.has_previous()}
                        onclick={on_previous}
                    >
                        <img src="/static/images/play-previous.svg" alt="Play previous" />
                    </button>
                    <button
                        type="button"
                        class="play-button"
                        disabled={empty}
                        onclick={on_toggle}
                    >
                        {
                            if state.is_playing() {
                                html! { <img src="/static/images/pause.svg" alt="Pause" /> }
                            } else {
                                html! { <img src="/static/images/play.svg" alt="Play" /> }
                            }
                        }
                    </button>
                    <button
                        type="button"
                        disabled={empty || !state.has_next()}
                        onclick={on_next}
                    >
                        <img src="/static/images/play-next.svg" alt="Play next" />
                    </button>
                    <button
                        type="button"
                        class={classes!(state.is_looping().then_some("is-active"))}
                        disabled={empty}
                        onclick={on_loop}
                    >
                        <img src="/static/images/repeat.svg" alt="Repeat" />
                    </button>
                </div>
            </footer>
        </div>
    }
}
