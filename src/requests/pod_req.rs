use crate::components::context::Episode;
use crate::components::gen_funcs::{format_published_date, format_time};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use gloo_net::http::{Request, Response};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EpisodeFile {
    pub url: String,
    pub duration: u32,
}

/// An episode exactly as the API serves it.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EpisodeData {
    pub id: String,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub published_at: String,
    pub file: EpisodeFile,
}

/// An episode prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeDetail {
    pub id: String,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    pub published_at: String,
    pub duration: u32,
    pub duration_as_string: String,
    pub description: String,
    pub url: String,
}

impl From<EpisodeData> for EpisodeDetail {
    fn from(data: EpisodeData) -> Self {
        Self {
            published_at: format_published_date(&data.published_at),
            duration_as_string: format_time(f64::from(data.file.duration)),
            duration: data.file.duration,
            url: data.file.url,
            id: data.id,
            title: data.title,
            members: data.members,
            thumbnail: data.thumbnail,
            description: data.description,
        }
    }
}

impl EpisodeDetail {
    pub fn to_episode(&self) -> Episode {
        Episode {
            title: self.title.clone(),
            members: self.members.clone(),
            thumbnail: self.thumbnail.clone(),
            duration: self.duration,
            url: self.url.clone(),
        }
    }
}

fn check_status(response: &Response, url: &str) -> AppResult<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(AppError::Status {
            status: response.status(),
            url: url.to_string(),
        })
    }
}

/// Newest episodes first.
pub async fn call_get_episodes(config: &AppConfig) -> AppResult<Vec<EpisodeDetail>> {
    let url = config.episodes_url();
    let limit = config.episode_limit.to_string();
    log::debug!("Fetching episodes from {}", url);

    let response = Request::get(&url)
        .query([
            ("_limit", limit.as_str()),
            ("_sort", "published_at"),
            ("_order", "desc"),
        ])
        .send()
        .await?;
    check_status(&response, &url)?;

    let episodes: Vec<EpisodeData> = response.json().await?;
    Ok(episodes.into_iter().map(EpisodeDetail::from).collect())
}

pub async fn call_get_episode(config: &AppConfig, slug: &str) -> AppResult<EpisodeDetail> {
    let url = config.episode_url(slug);
    log::debug!("Fetching episode from {}", url);

    let response = Request::get(&url).send().await?;
    check_status(&response, &url)?;

    let episode: EpisodeData = response.json().await?;
    Ok(episode.into())
}
