use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::{AiStatus, NewsItem};

/// Accent color for an item's verification state: green for verified, red
/// for manipulated, amber for everything else.
pub fn trust_color(status: Option<AiStatus>) -> &'static str {
	match status {
		Some(AiStatus::Verified) => "#10b981",
		Some(AiStatus::Manipulated) => "#ef4444",
		_ => "#f59e0b",
	}
}

pub fn status_badge(status: AiStatus) -> &'static str {
	match status {
		AiStatus::Verified => "NEURAL VERIFIED",
		AiStatus::Uncertain => "PROCESSED / EDITED",
		AiStatus::Manipulated => "AI MANIPULATED",
	}
}

pub fn score_percent(score: f64) -> u32 {
	(score * 100.0).round() as u32
}

/// Route to the report view carrying everything it renders from.
fn report_href(news: &NewsItem) -> String {
	let encode = |s: &str| String::from(js_sys::encode_uri_component(s));
	let status = match news.ai_status {
		Some(AiStatus::Verified) => "verified",
		Some(AiStatus::Manipulated) => "manipulated",
		Some(AiStatus::Uncertain) => "uncertain",
		None => "",
	};
	format!(
		"/analytics?title={}&status={}&score={}&image={}&summary={}",
		encode(&news.title),
		status,
		news.ai_score.unwrap_or(0.0),
		encode(news.image.as_deref().unwrap_or("")),
		encode(&news.summary),
	)
}

/// One card in the live-feed grid.
#[component]
pub fn NewsCard(news: NewsItem) -> impl IntoView {
	let trust = trust_color(news.ai_status);
	let href = report_href(&news);
	let navigate = use_navigate();
	let on_report = move |_| navigate(&href, Default::default());

	let manipulated = news.ai_status == Some(AiStatus::Manipulated);
	let card_style = format!(
		"border-radius: 16px; background: rgba(25, 30, 40, 0.4); border: 1px solid {}; display: flex; flex-direction: column; height: 100%; overflow: hidden; position: relative;",
		if manipulated {
			"rgba(239, 68, 68, 0.4)"
		} else {
			"rgba(255, 255, 255, 0.05)"
		}
	);
	let report_style = format!(
		"flex: 1; display: flex; align-items: center; justify-content: center; gap: 0.4rem; padding: 0.65rem; border-radius: 8px; background: {}; border: 1px solid {}; color: {}; font-size: 0.7rem; font-weight: 800; cursor: pointer; letter-spacing: 0.05em;",
		if manipulated {
			"rgba(239, 68, 68, 0.1)"
		} else {
			"rgba(16, 185, 129, 0.1)"
		},
		if manipulated {
			"rgba(239, 68, 68, 0.2)"
		} else {
			"rgba(16, 185, 129, 0.2)"
		},
		if manipulated { "#ef4444" } else { "#10b981" }
	);

	view! {
		<div class="glass animate-fade-in" style=card_style>
			// Top: thumbnail & AI badges
			<div style="width: 100%; height: 160px; background: #0a0a0a; border-bottom: 1px solid rgba(255,255,255,0.05); display: flex; align-items: center; justify-content: center; position: relative; overflow: hidden;">
				{match news.image.clone() {
					Some(image) => {
						view! {
							<img src=image style="width: 100%; height: 100%; object-fit: cover;" alt="News" />
						}
							.into_any()
					}
					None => {
						view! {
							<div style="color: rgba(255,255,255,0.1); font-size: 0.7rem; font-weight: 800; letter-spacing: 0.1em;">
								"NO VISUAL"
							</div>
						}
							.into_any()
					}
				}}

				<div style="position: absolute; top: 0.75rem; left: 0.75rem; display: flex; flex-wrap: wrap; gap: 0.4rem; z-index: 20;">
					{news.ai_status
						.map(|status| {
							let badge_style = format!(
								"background: {trust}; padding: 0.2rem 0.5rem; border-radius: 4px; font-size: 9px; font-weight: 900; color: white; box-shadow: 0 0 10px {trust}88;"
							);
							view! { <div style=badge_style>{status_badge(status)}</div> }
						})}
					{(news.is_breaking == Some(true))
						.then(|| {
							view! {
								<div style="background: #ef4444; padding: 0.2rem 0.5rem; border-radius: 4px; font-size: 9px; font-weight: 900; color: white;">
									"LIVE"
								</div>
							}
						})}
				</div>

				{news.ai_score
					.map(|score| {
						let bubble_style = format!(
							"position: absolute; bottom: 0.5rem; right: 0.5rem; background: rgba(0,0,0,0.7); padding: 0.2rem 0.4rem; border-radius: 4px; border: 1px solid {trust}55; color: {trust}; font-size: 10px; font-weight: 800; font-family: monospace;"
						);
						view! { <div style=bubble_style>{format!("TRUTH: {}%", score_percent(score))}</div> }
					})}
			</div>

			// Bottom: content area
			<div style="padding: 1rem; flex: 1; display: flex; flex-direction: column;">
				<div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 0.6rem;">
					<span style="font-size: 0.65rem; font-weight: 800; color: var(--accent-primary); text-transform: uppercase; letter-spacing: 0.05em;">
						{news.source.clone()}
					</span>
					{news.category
						.clone()
						.map(|category| {
							view! {
								<span style="font-size: 0.65rem; background: rgba(255,255,255,0.05); padding: 0.1rem 0.4rem; border-radius: 4px; color: rgba(255,255,255,0.4); text-transform: uppercase;">
									{category}
								</span>
							}
						})}
				</div>

				<a
					href=news.link.clone()
					target="_blank"
					rel="noopener noreferrer"
					style="text-decoration: none; color: inherit;"
				>
					<h3 style="font-size: 0.95rem; font-weight: 800; line-height: 1.3; margin-bottom: 0.5rem; min-height: 2.6em;">
						{news.title.clone()}
					</h3>
				</a>

				{news.ai_score
					.map(|score| {
						let fill_style = format!(
							"width: {}%; height: 100%; background: {trust}; transition: width 1.5s ease 0.5s;",
							score_percent(score)
						);
						view! {
							<div style="margin-bottom: 1rem;">
								<div style="display: flex; justify-content: space-between; font-size: 8px; font-weight: 900; color: rgba(255,255,255,0.3); margin-bottom: 4px;">
									<span>"NEURAL AUTHENTICITY"</span>
									<span>{format!("{}%", score_percent(score))}</span>
								</div>
								<div style="width: 100%; height: 3px; background: rgba(255,255,255,0.05); border-radius: 10px; overflow: hidden;">
									<div style=fill_style></div>
								</div>
							</div>
						}
					})}

				<p style="font-size: 0.75rem; color: var(--text-muted); line-height: 1.4; overflow: hidden; margin-bottom: 1rem;">
					{news.summary.clone()}
				</p>

				<div style="margin-top: auto; font-size: 0.6rem; color: rgba(255,255,255,0.3); font-weight: 700; font-family: monospace; margin-bottom: 1rem;">
					{news.published.clone()}
				</div>

				<div style="display: flex; gap: 0.6rem; margin-top: auto;">
					<a
						href=news.link.clone()
						target="_blank"
						rel="noopener noreferrer"
						style="flex: 1; display: flex; align-items: center; justify-content: center; gap: 0.4rem; padding: 0.65rem; border-radius: 8px; background: rgba(59, 130, 246, 0.05); border: 1px solid rgba(59, 130, 246, 0.2); color: #3b82f6; font-size: 0.7rem; font-weight: 800; text-decoration: none; letter-spacing: 0.05em;"
					>
						"SOURCE"
					</a>
					<button on:click=on_report style=report_style>
						"REPORT"
					</button>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_trust_color_by_status() {
		assert_eq!(trust_color(Some(AiStatus::Verified)), "#10b981");
		assert_eq!(trust_color(Some(AiStatus::Manipulated)), "#ef4444");
		assert_eq!(trust_color(Some(AiStatus::Uncertain)), "#f59e0b");
		assert_eq!(trust_color(None), "#f59e0b");
	}

	#[test]
	fn test_status_badge_labels() {
		assert_eq!(status_badge(AiStatus::Verified), "NEURAL VERIFIED");
		assert_eq!(status_badge(AiStatus::Uncertain), "PROCESSED / EDITED");
		assert_eq!(status_badge(AiStatus::Manipulated), "AI MANIPULATED");
	}

	#[test]
	fn test_score_percent_rounds() {
		assert_eq!(score_percent(0.82), 82);
		assert_eq!(score_percent(0.005), 1);
		assert_eq!(score_percent(0.0), 0);
	}
}
