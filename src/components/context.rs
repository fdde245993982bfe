use rand::Rng;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yewdux::prelude::*;

/// A playable episode as the player sees it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    /// Length in whole seconds.
    pub duration: u32,
    pub url: String,
}

/// Session-wide playback state shared by every component under the `YewduxRoot`.
///
/// Fields are private so the queue/index/progress invariants can only be changed
/// through the operations below.
#[derive(Default, Clone, PartialEq, Debug, Store)]
pub struct PlayerState {
    episode_list: Vec<Episode>,
    current_episode_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
    progress: u32,
    source_id: u64,
}

impl PlayerState {
    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    pub fn current_episode_index(&self) -> usize {
        self.current_episode_index
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Elapsed seconds of the current episode.
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Identity of the current selection; bumped every time an episode is (re)selected,
    /// even when the same index is picked again.
    pub fn source_id(&self) -> u64 {
        self.source_id
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index + 1 < self.episode_list.len()
    }

    pub fn play(&mut self, episode: Episode) {
        self.episode_list = vec![episode];
        self.select(0);
        self.is_playing = true;
    }

    /// Replaces the queue and starts at `index`. An index outside the list is
    /// rejected and leaves the state untouched.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        if index >= list.len() {
            log::warn!(
                "play_list rejected: index {} out of range for {} episodes",
                index,
                list.len()
            );
            return;
        }
        self.episode_list = list;
        self.select(index);
        self.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn set_playing_state(&mut self, state: bool) {
        self.is_playing = state;
    }

    pub fn play_next(&mut self) {
        self.play_next_with(&mut rand::rng());
    }

    /// Shuffle picks uniformly over the whole queue; the current index may come up again.
    pub fn play_next_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_shuffling {
            if self.episode_list.is_empty() {
                return;
            }
            let next = rng.random_range(0..self.episode_list.len());
            self.select(next);
        } else if self.current_episode_index + 1 < self.episode_list.len() {
            self.select(self.current_episode_index + 1);
        }
    }

    pub fn play_previous(&mut self) {
        if !self.has_previous() {
            return;
        }
        self.select(self.current_episode_index - 1);
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn clear_player_state(&mut self) {
        self.episode_list.clear();
        self.select(0);
    }

    pub fn set_progress(&mut self, seconds: u32) {
        let duration = self.current_episode().map_or(0, |episode| episode.duration);
        self.progress = seconds.min(duration);
    }

    fn select(&mut self, index: usize) {
        self.current_episode_index = index;
        self.progress = 0;
        self.source_id = self.source_id.wrapping_add(1);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    Play(Episode),
    PlayList(Vec<Episode>, usize),
    TogglePlay,
    SetPlayingState(bool),
    PlayNext,
    PlayPrevious,
    ToggleShuffle,
    ToggleLoop,
    ClearPlayerState,
    SetProgress(u32),
}

impl Reducer<PlayerState> for PlayerAction {
    fn apply(self, mut state: Rc<PlayerState>) -> Rc<PlayerState> {
        let state_mut = Rc::make_mut(&mut state);

        // timeupdate fires several times a second
        if !matches!(self, PlayerAction::SetProgress(_)) {
            log::debug!("player action: {:?}", self);
        }

        match self {
            PlayerAction::Play(episode) => state_mut.play(episode),
            PlayerAction::PlayList(list, index) => state_mut.play_list(list, index),
            PlayerAction::TogglePlay => state_mut.toggle_play(),
            PlayerAction::SetPlayingState(playing) => state_mut.set_playing_state(playing),
            PlayerAction::PlayNext => state_mut.play_next(),
            PlayerAction::PlayPrevious => state_mut.play_previous(),
            PlayerAction::ToggleShuffle => state_mut.toggle_shuffle(),
            PlayerAction::ToggleLoop => state_mut.toggle_loop(),
            PlayerAction::ClearPlayerState => state_mut.clear_player_state(),
            PlayerAction::SetProgress(seconds) => state_mut.set_progress(seconds),
        }

        state
    }
}
