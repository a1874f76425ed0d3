use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::YOUTUBE_API_BASE_URL;
use crate::duration::format_duration;
use crate::error::{Error, Result};

/// Maximum number of search results requested per query
pub const MAX_RESULTS: u32 = 10;

/// Connection settings for the YouTube Data API
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub base_url: String,
}

impl YouTubeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: YOUTUBE_API_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// A video as shown in the results view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub channel: String,
    /// Display duration, e.g. `1:02:03`
    pub duration: String,
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId", default)]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    #[serde(default)]
    snippet: Snippet,
    #[serde(rename = "contentDetails", default)]
    content_details: ContentDetails,
}

#[derive(Debug, Default, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}

impl VideoItem {
    fn into_record(self) -> VideoRecord {
        VideoRecord {
            id: self.id,
            title: self.snippet.title,
            channel: self.snippet.channel_title,
            duration: format_duration(&self.content_details.duration),
        }
    }
}

/// YouTube Data API client
pub struct YouTube {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTube {
    pub fn new(config: &YouTubeConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::ApiKeyMissing);
        }

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search for videos and return their ids, in result order
    async fn search_ids(&self, query: &str) -> Result<Vec<String>> {
        debug!(query, "Calling YouTube search.list");

        let max_results = MAX_RESULTS.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "id,snippet"),
                ("q", query),
                ("maxResults", max_results.as_str()),
                ("type", "video"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::YouTube(format!("search request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::YouTube(format!("search failed ({}): {}", status, text)));
        }

        let search: SearchListResponse = response
            .json()
            .await
            .map_err(|e| Error::YouTube(format!("search response unreadable: {}", e)))?;

        Ok(search.items.into_iter().map(|item| item.id.video_id).collect())
    }

    /// Fetch snippet and content details for a batch of video ids
    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoItem>> {
        debug!(count = ids.len(), "Calling YouTube videos.list");

        let ids = ids.join(",");
        let response = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "snippet,contentDetails"),
                ("id", ids.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::YouTube(format!("details request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::YouTube(format!("details failed ({}): {}", status, text)));
        }

        let details: VideoListResponse = response
            .json()
            .await
            .map_err(|e| Error::YouTube(format!("details response unreadable: {}", e)))?;

        Ok(details.items)
    }

    /// Search for up to ten videos and resolve their details.
    ///
    /// Records come back in the order of the details response, which the
    /// API does not guarantee to match the search order.
    pub async fn fetch_videos(&self, query: &str) -> Result<Vec<VideoRecord>> {
        let ids = self.search_ids(query).await?;
        let items = self.video_details(&ids).await?;

        Ok(items.into_iter().map(VideoItem::into_record).collect())
    }
}

/// Search YouTube, treating every failure as "no results".
///
/// Client setup, search and details failures are logged and collapse to an
/// empty list; nothing is retried.
pub async fn search_youtube(config: &YouTubeConfig, query: &str) -> Vec<VideoRecord> {
    let youtube = match YouTube::new(config) {
        Ok(youtube) => youtube,
        Err(e) => {
            error!(error = %e, "Error initializing YouTube client");
            return Vec::new();
        }
    };

    match youtube.fetch_videos(query).await {
        Ok(videos) => videos,
        Err(e) => {
            error!(error = %e, query, "Error searching YouTube");
            Vec::new()
        }
    }
}
