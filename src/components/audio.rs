use crate::components::context::{PlayerAction, PlayerState};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, HtmlMediaElement};

/// Commands the binding can issue to the media resource it is attached to.
pub trait MediaElement {
    fn load(&self, url: &str);
    fn start(&self);
    fn pause(&self);
    fn seek_to(&self, seconds: f64);
    fn set_looping(&self, looping: bool);
}

impl MediaElement for HtmlAudioElement {
    fn load(&self, url: &str) {
        HtmlMediaElement::set_src(self, url);
    }

    fn start(&self) {
        match HtmlMediaElement::play(self) {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                // Browsers reject the promise when autoplay is blocked.
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Audio playback was refused: {:?}", e);
                }
            }),
            Err(e) => log::warn!("Failed to start audio playback: {:?}", e),
        }
    }

    fn pause(&self) {
        if let Err(e) = HtmlMediaElement::pause(self) {
            log::warn!("Failed to pause audio playback: {:?}", e);
        }
    }

    fn seek_to(&self, seconds: f64) {
        HtmlMediaElement::set_current_time(self, seconds);
    }

    fn set_looping(&self, looping: bool) {
        HtmlMediaElement::set_loop(self, looping);
    }
}

/// Events raised by the media resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    LoadedMetadata,
    TimeUpdate(f64),
    Play,
    Pause,
    Ended,
}

impl MediaEvent {
    pub const DOM_EVENTS: [&'static str; 5] = ["loadedmetadata", "timeupdate", "play", "pause", "ended"];

    /// Maps a DOM event name to a `MediaEvent`, reading the playhead for `timeupdate`.
    pub fn from_dom(name: &str, current_time: impl FnOnce() -> f64) -> Option<Self> {
        match name {
            "loadedmetadata" => Some(MediaEvent::LoadedMetadata),
            "timeupdate" => Some(MediaEvent::TimeUpdate(current_time())),
            "play" => Some(MediaEvent::Play),
            "pause" => Some(MediaEvent::Pause),
            "ended" => Some(MediaEvent::Ended),
            _ => None,
        }
    }
}

/// Keeps one media element in step with `PlayerState`.
///
/// Store snapshots come in through `sync` and only transitions turn into element
/// commands. Element events come in through `handle` and come back out as
/// `PlayerAction`s for the caller to dispatch.
pub struct AudioBinding<E> {
    element: E,
    loaded_source: Option<u64>,
    playing: bool,
    looping: bool,
    observing_progress: bool,
}

impl<E: MediaElement> AudioBinding<E> {
    pub fn new(element: E) -> Self {
        Self {
            element,
            loaded_source: None,
            playing: false,
            looping: false,
            observing_progress: false,
        }
    }

    #[cfg(test)]
    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn sync(&mut self, state: &PlayerState) {
        if state.is_looping() != self.looping {
            self.looping = state.is_looping();
            self.element.set_looping(self.looping);
        }

        let source = current_source(state);
        if source != self.loaded_source {
            self.loaded_source = source;
            self.observing_progress = false;
            match state.current_episode() {
                Some(episode) => {
                    log::debug!("Loading {}", episode.url);
                    self.element.load(&episode.url);
                    self.element.start();
                }
                None => self.element.pause(),
            }
            self.playing = state.is_playing();
            return;
        }

        if state.is_playing() != self.playing {
            self.playing = state.is_playing();
            if self.playing {
                self.element.start();
            } else {
                self.element.pause();
            }
        }
    }

    pub fn handle(&mut self, event: MediaEvent, state: &PlayerState) -> Option<PlayerAction> {
        match event {
            // Recorded before the store sees it, so the next sync has nothing to issue.
            MediaEvent::Play => {
                self.playing = true;
                return Some(PlayerAction::SetPlayingState(true));
            }
            MediaEvent::Pause => {
                self.playing = false;
                return Some(PlayerAction::SetPlayingState(false));
            }
            _ => {}
        }

        if self.loaded_source.is_none() || self.loaded_source != current_source(state) {
            log::debug!("Ignoring {:?} from a replaced source", event);
            return None;
        }

        match event {
            MediaEvent::LoadedMetadata => {
                self.element.seek_to(0.0);
                self.observing_progress = true;
                Some(PlayerAction::SetProgress(0))
            }
            MediaEvent::TimeUpdate(seconds) if self.observing_progress => {
                Some(PlayerAction::SetProgress(whole_seconds(seconds)))
            }
            MediaEvent::TimeUpdate(_) => None,
            MediaEvent::Ended if state.is_looping() => {
                // loop was toggled on after the element already ran out
                self.element.seek_to(0.0);
                self.element.start();
                None
            }
            MediaEvent::Ended if state.has_next() => Some(PlayerAction::PlayNext),
            MediaEvent::Ended => Some(PlayerAction::ClearPlayerState),
            MediaEvent::Play | MediaEvent::Pause => None,
        }
    }

    /// Moves the playhead without touching the playing flag.
    pub fn seek(&mut self, seconds: f64, state: &PlayerState) -> Option<PlayerAction> {
        if !seconds.is_finite() {
            return None;
        }
        let episode = state.current_episode()?;
        if self.loaded_source != current_source(state) {
            return None;
        }

        let target = seconds.clamp(0.0, f64::from(episode.duration));
        self.element.seek_to(target);
        Some(PlayerAction::SetProgress(whole_seconds(target)))
    }
}

fn current_source(state: &PlayerState) -> Option<u64> {
    state.current_episode().map(|_| state.source_id())
}

fn whole_seconds(seconds: f64) -> u32 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u32
    } else {
        0
    }
}
