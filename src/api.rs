//! REST client for the intelligence feed backend.
//!
//! Failures never propagate past this module: a feed fetch collapses to
//! `None` and an image analysis to an error envelope, so pages degrade to
//! empty or placeholder states instead of surfacing exceptions.

use std::collections::HashMap;

use gloo_net::http::Request;
use log::error;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

const API_BASE_URL: &str = "http://localhost:8000";

/// Verdict the backend's scoring pass attaches to a feed item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AiStatus {
	Verified,
	Manipulated,
	Uncertain,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NewsItem {
	pub title: String,
	pub link: String,
	pub summary: String,
	pub published: String,
	pub source: String,
	pub image: Option<String>,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub is_breaking: Option<bool>,
	#[serde(default)]
	pub is_trending: Option<bool>,
	#[serde(default)]
	pub ai_score: Option<f64>,
	#[serde(default)]
	pub ai_status: Option<AiStatus>,
}

/// Payload of `GET /api/feed`. The backend's error envelope carries none of
/// the data fields, so they all default and an error decodes as an empty
/// feed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FeedResponse {
	pub status: String,
	#[serde(default)]
	pub source: String,
	#[serde(default)]
	pub count: usize,
	#[serde(default)]
	pub sections: HashMap<String, Vec<NewsItem>>,
	#[serde(default)]
	pub data: Vec<NewsItem>,
}

/// Single-attempt fetch of the live feed. No retries, no backoff.
pub async fn fetch_live_feed() -> Option<FeedResponse> {
	let response = match Request::get(&format!("{API_BASE_URL}/api/feed")).send().await {
		Ok(response) if response.ok() => response,
		Ok(response) => {
			error!("Feed API error: HTTP {}", response.status());
			return None;
		}
		Err(err) => {
			error!("Failed to fetch live feed: {err}");
			return None;
		}
	};

	match response.json::<FeedResponse>().await {
		Ok(feed) => Some(feed),
		Err(err) => {
			error!("Malformed feed payload: {err}");
			None
		}
	}
}

/// Single-attempt deep scan of an image URL. Returns the analysis payload,
/// or the backend-shaped error envelope when anything goes wrong.
pub async fn analyze_image(image_url: &str) -> Value {
	let url = format!(
		"{API_BASE_URL}/api/analyze-image?url={}",
		String::from(js_sys::encode_uri_component(image_url))
	);

	let result = match Request::get(&url).send().await {
		Ok(response) if response.ok() => response.json::<Value>().await.map_err(|e| e.to_string()),
		Ok(response) => Err(format!("API error: {}", response.status())),
		Err(err) => Err(err.to_string()),
	};

	result.unwrap_or_else(|message| {
		error!("Deep analysis failed: {message}");
		json!({ "status": "error", "message": message })
	})
}

/// Resolve the list a category chip should display. `"all"` shows the
/// unified feed; a category with a backend section uses that section;
/// anything else falls back to filtering items by their own tag.
pub fn filter_by_category(
	all: &[NewsItem],
	sections: &HashMap<String, Vec<NewsItem>>,
	category: &str,
) -> Vec<NewsItem> {
	if category == "all" {
		return all.to_vec();
	}
	if let Some(section) = sections.get(category) {
		return section.clone();
	}
	all.iter()
		.filter(|item| item.category.as_deref() == Some(category))
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(title: &str, category: Option<&str>) -> NewsItem {
		NewsItem {
			title: title.into(),
			link: format!("https://news.example/{title}"),
			summary: "summary".into(),
			published: "2026-08-06T12:00:00Z".into(),
			source: "Example Wire".into(),
			image: None,
			category: category.map(Into::into),
			is_breaking: None,
			is_trending: None,
			ai_score: None,
			ai_status: None,
		}
	}

	#[test]
	fn test_feed_payload_decodes_backend_shape() {
		let payload = r#"{
			"status": "success",
			"source": "live-sampled",
			"count": 2,
			"sections": {
				"tech": [{
					"title": "Chip fab opens",
					"link": "https://news.example/chips",
					"summary": "A new fab.",
					"published": "2026-08-06",
					"source": "Example Wire",
					"image": null,
					"category": "tech",
					"is_trending": true,
					"ai_score": 0.91,
					"ai_status": "verified"
				}]
			},
			"data": [{
				"title": "Chip fab opens",
				"link": "https://news.example/chips",
				"summary": "A new fab.",
				"published": "2026-08-06",
				"source": "Example Wire",
				"image": null,
				"ai_score": 0.12,
				"ai_status": "manipulated"
			}, {
				"title": "Sparse item",
				"link": "https://news.example/sparse",
				"summary": "",
				"published": "2026-08-06",
				"source": "Example Wire",
				"image": "https://img.example/x.jpg"
			}]
		}"#;

		let feed: FeedResponse = serde_json::from_str(payload).unwrap();
		assert_eq!(feed.status, "success");
		assert_eq!(feed.count, 2);
		assert_eq!(feed.data.len(), 2);
		assert_eq!(feed.data[0].ai_status, Some(AiStatus::Manipulated));
		assert_eq!(feed.data[1].ai_status, None);
		assert_eq!(feed.sections["tech"][0].ai_status, Some(AiStatus::Verified));
		assert_eq!(feed.sections["tech"][0].ai_score, Some(0.91));
	}

	#[test]
	fn test_error_envelope_decodes_as_empty_feed() {
		let feed: FeedResponse =
			serde_json::from_str(r#"{"status": "error", "message": "scrape timeout"}"#).unwrap();
		assert_eq!(feed.status, "error");
		assert!(feed.data.is_empty());
		assert!(feed.sections.is_empty());
		assert_eq!(feed.count, 0);
	}

	#[test]
	fn test_filter_all_returns_everything() {
		let all = vec![item("a", Some("tech")), item("b", None)];
		let filtered = filter_by_category(&all, &HashMap::new(), "all");
		assert_eq!(filtered, all);
	}

	#[test]
	fn test_filter_prefers_backend_section() {
		let all = vec![item("a", Some("tech"))];
		let mut sections = HashMap::new();
		sections.insert("tech".to_string(), vec![item("curated", Some("tech"))]);

		let filtered = filter_by_category(&all, &sections, "tech");
		assert_eq!(filtered.len(), 1);
		assert_eq!(filtered[0].title, "curated");
	}

	#[test]
	fn test_filter_falls_back_to_item_category() {
		let all = vec![
			item("a", Some("tech")),
			item("b", Some("sports")),
			item("c", None),
		];
		let filtered = filter_by_category(&all, &HashMap::new(), "sports");
		assert_eq!(filtered.len(), 1);
		assert_eq!(filtered[0].title, "b");
	}

	#[test]
	fn test_empty_feed_filters_to_empty_list() {
		let filtered = filter_by_category(&[], &HashMap::new(), "tech");
		assert!(filtered.is_empty());
	}
}
