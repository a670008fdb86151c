use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use log::info;

use crate::api;
use crate::components::pill_nav::PillNav;
use crate::pages::nav_items;

/// Everything the report view renders from, lifted out of the URL query.
/// Malformed or missing values fall back silently: score parse failure
/// reads as zero, a missing image as no visual asset.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportQuery {
	pub title: String,
	pub status: Option<String>,
	pub score: f64,
	pub image: Option<String>,
	pub summary: String,
}

impl ReportQuery {
	/// `None` without a `title` param; the page then falls back to the
	/// network-tree view.
	pub fn from_params(get: impl Fn(&str) -> Option<String>) -> Option<Self> {
		let title = get("title")?;
		Some(Self {
			title,
			status: get("status"),
			score: get("score").and_then(|s| s.parse().ok()).unwrap_or(0.0),
			image: get("image").filter(|s| !s.is_empty()),
			summary: get("summary").unwrap_or_default(),
		})
	}

	pub fn is_manipulated(&self) -> bool {
		self.status.as_deref() == Some("manipulated")
	}

	pub fn percent(&self) -> u32 {
		(self.score * 100.0).round() as u32
	}

	pub fn accent_color(&self) -> &'static str {
		if self.is_manipulated() { "#ef4444" } else { "#10b981" }
	}
}

fn image_domain(image: Option<&str>) -> String {
	image
		.and_then(|url| web_sys::Url::new(url).ok())
		.map(|url| url.hostname())
		.unwrap_or_else(|| String::from("unknown-source.net"))
}

/// Analysis page: a full intelligence dossier when reached with report
/// query params, otherwise the propagation-tree placeholder.
#[component]
pub fn Analytics() -> impl IntoView {
	let query = use_query_map();
	// Query-only navigation does not remount the route, so the mode
	// switch has to track the params.
	let report = Memo::new(move |_| query.with(|q| ReportQuery::from_params(|key| q.get(key))));

	view! {
		<main style="min-height: 100vh; padding-top: 6rem; background: #05070a;">
			<PillNav
				logo="/logo.svg"
				items=nav_items()
				active_href="/analytics"
				base_color="#3b82f6"
				pill_color="#05070a"
				pill_text_color="#3b82f6"
				hovered_pill_text_color="white"
			/>
			{move || match report.get() {
				Some(report) => view! { <ReportView report=report /> }.into_any(),
				None => view! { <NetworkTreeView /> }.into_any(),
			}}
		</main>
	}
}

#[component]
fn ReportView(report: ReportQuery) -> impl IntoView {
	let (active_tab, set_active_tab) = signal("image");
	let (cross_ref, set_cross_ref) = signal(String::new());

	let accent = report.accent_color();
	let manipulated = report.is_manipulated();
	let percent = report.percent();
	let domain = image_domain(report.image.as_deref());

	let report_image = report.image.clone();
	let report_title = report.title.clone();
	let report_summary = report.summary.clone();

	let scan_target = report.image.clone().unwrap_or_default();
	let on_cross_reference = move |_| {
		let target = scan_target.clone();
		spawn_local(async move {
			let verdict = api::analyze_image(&target).await;
			info!("Cross-reference verdict: {verdict}");
			let status = verdict
				.get("status")
				.and_then(|s| s.as_str())
				.unwrap_or("error")
				.to_uppercase();
			set_cross_ref.set(format!("INTELLIGENCE SYNC: {status}"));
		});
	};

	let tab_style = move |tab: &'static str| {
		let active = active_tab.get() == tab;
		format!(
			"background: transparent; border: none; padding: 0.75rem 0.5rem; cursor: pointer; color: {}; font-weight: 900; font-size: 0.85rem; letter-spacing: 0.1em; border-bottom: {};",
			if active { "#3b82f6" } else { "rgba(255,255,255,0.4)" },
			if active {
				"2px solid #3b82f6"
			} else {
				"2px solid transparent"
			}
		)
	};

	let risk_color = if manipulated { "#ef4444" } else { "#10b981" };
	let image_stats: [(&str, &str, &str); 4] = [
		(
			"NEURAL NOISE",
			if manipulated { "HIGH" } else { "LOW" },
			risk_color,
		),
		(
			"PIXEL GEOMETRY",
			if manipulated { "ANOMALOUS" } else { "NOMINAL" },
			risk_color,
		),
		("LIGHT ALIGNMENT", "CONSISTENT", "#10b981"),
		("METADATA SYNC", "OFFLINE", "#f59e0b"),
	];

	let image_verdict = if manipulated {
		"Forensic patterns detect synthetic pixel clusters and inconsistent noise variances typical of generative AI or manual cloning."
	} else {
		"Standard sensor noise and consistent pixel geometry confirmed across all quadrants. No traces of neural tampering detected."
	};
	let text_verdict = if manipulated {
		format!(
			"The combination of multiple anomalies from {domain} source and the detected visual manipulation suggests this narrative is intentionally deceptive."
		)
	} else {
		format!(
			"Content from {domain} verified against global intelligence nodes. High topical consistency detected."
		)
	};

	view! {
		<div style="max-width: 1200px; margin: 0 auto; padding: 2rem;">
			<div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem;">
				<div>
					<div style="display: flex; gap: 0.5rem; align-items: center; margin-bottom: 0.5rem;">
						<span style=format!(
							"font-size: 0.75rem; font-weight: 900; color: {accent}; letter-spacing: 0.2em;",
						)>"COMBINED TRUST ARCHITECTURE"</span>
					</div>
					<h2 style="font-size: 2.2rem; font-weight: 800; line-height: 1.1;">"Intelligence Dossier"</h2>
				</div>
				<div style="text-align: right;">
					<div style=format!(
						"font-size: 2.5rem; font-weight: 900; color: {accent}; line-height: 1;",
					)>{format!("{percent}%")}</div>
					<div style="font-size: 0.7rem; color: rgba(255,255,255,0.4); font-weight: 800;">
						"AGGREGATE PROBABILITY"
					</div>
				</div>
			</div>

			// Sub-navbar toggle
			<div style="display: flex; gap: 1.5rem; margin-bottom: 2rem; border-bottom: 1px solid rgba(255,255,255,0.05);">
				<button on:click=move |_| set_active_tab.set("image") style=move || tab_style("image")>
					"IMAGE"
				</button>
				<button on:click=move |_| set_active_tab.set("text") style=move || tab_style("text")>
					"TEXT"
				</button>
			</div>

			<Show
				when=move || active_tab.get() == "image"
				fallback={
					let text_verdict = text_verdict.clone();
					let domain = domain.clone();
					let title = report_title.clone();
					let summary = report_summary.clone();
					let cross_ref_label = move || cross_ref.get();
					let on_cross_reference = on_cross_reference.clone();
					move || {
						view! {
							// Contextual intelligence
							<div style="display: flex; flex-direction: column; gap: 1.5rem; max-width: 800px; margin: 0 auto;">
								<div style="display: flex; align-items: center; gap: 0.75rem; border-bottom: 1px solid rgba(255,255,255,0.05); padding-bottom: 0.75rem;">
									<div style="width: 12px; height: 12px; background: #3b82f6; border-radius: 2px;"></div>
									<h3 style="font-size: 1rem; font-weight: 900; letter-spacing: 0.05em;">
										"TEXT & SOURCE INTELLIGENCE"
									</h3>
								</div>

								<div class="glass" style="padding: 2rem; border-radius: 24px; background: rgba(59, 130, 246, 0.03); border: 1px solid rgba(59, 130, 246, 0.1);">
									<div style="margin-bottom: 1.5rem; background: rgba(255,255,255,0.03); padding: 1rem; border-radius: 16px; border: 1px solid rgba(255,255,255,0.05);">
										<div style="font-size: 0.65rem; color: #3b82f6; font-weight: 900; letter-spacing: 0.1em; margin-bottom: 0.25rem;">
											"SOURCE AUTHENTICITY [DOMAIN]"
										</div>
										<div style="font-size: 1.2rem; font-weight: 800; color: white;">{domain.clone()}</div>
									</div>

									<div style="margin-bottom: 1.5rem;">
										<div style="font-size: 0.65rem; color: rgba(255,255,255,0.4); font-weight: 900; letter-spacing: 0.1em; margin-bottom: 0.5rem;">
											"HEADLINE VERIFICATION [TITLE]"
										</div>
										<h4 style="font-size: 1.2rem; font-weight: 700; line-height: 1.3; color: white;">
											{title.clone()}
										</h4>
									</div>

									<div>
										<div style="font-size: 0.65rem; color: rgba(255,255,255,0.4); font-weight: 900; letter-spacing: 0.1em; margin-bottom: 0.5rem;">
											"NARRATIVE CONTENT [DESCRIPTION]"
										</div>
										<p style="font-size: 0.95rem; color: rgba(255,255,255,0.6); line-height: 1.6; background: rgba(0,0,0,0.2); padding: 1rem; border-radius: 12px; border-left: 2px solid #3b82f6;">
											{summary.clone()}
										</p>
									</div>

									<div style="display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-top: 1.5rem; margin-bottom: 1.5rem;">
										<div style="padding: 1rem; background: rgba(255,255,255,0.02); border-radius: 16px; border: 1px solid rgba(255,255,255,0.05);">
											<div style="font-size: 0.65rem; color: rgba(255,255,255,0.3); font-weight: 800; margin-bottom: 0.25rem;">
												"NLP SENTIMENT"
											</div>
											<div style="color: #10b981; font-weight: 900; font-size: 0.8rem;">"NEUTRAL / FACTUAL"</div>
										</div>
										<div style="padding: 1rem; background: rgba(255,255,255,0.02); border-radius: 16px; border: 1px solid rgba(255,255,255,0.05);">
											<div style="font-size: 0.65rem; color: rgba(255,255,255,0.3); font-weight: 800; margin-bottom: 0.25rem;">
												"REPUTATION RANK"
											</div>
											<div style="color: #3b82f6; font-weight: 900; font-size: 0.8rem;">"TIER-1 SOURCE"</div>
										</div>
									</div>

									<div style=format!(
										"padding: 1.25rem; border-radius: 16px; background: {}; border: 1px solid {};",
										if manipulated { "rgba(239, 68, 68, 0.08)" } else { "rgba(59, 130, 246, 0.08)" },
										if manipulated { "#ef444444" } else { "#3b82f644" },
									)>
										<div style=format!(
											"font-size: 0.65rem; color: {}; font-weight: 900; letter-spacing: 0.1em; margin-bottom: 0.5rem;",
											if manipulated { "#ef4444" } else { "#3b82f6" },
										)>"NEWS ACCURACY VERDICT"</div>
										<div style=format!(
											"font-size: 1.4rem; font-weight: 900; color: {};",
											if manipulated { "#ef4444" } else { "white" },
										)>
											{if manipulated { "POTENTIAL MISINFORMATION" } else { "FACTUALLY CONSISTENT" }}
										</div>
										<p style="font-size: 0.75rem; color: rgba(255,255,255,0.4); margin-top: 0.4rem;">
											{text_verdict.clone()}
										</p>
									</div>

									<button
										on:click=on_cross_reference.clone()
										style="margin-top: 1.5rem; width: 100%; padding: 1rem; border-radius: 12px; background: linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(59, 130, 246, 0.05)); color: #3b82f6; border: 1px solid rgba(59, 130, 246, 0.2); font-weight: 800; cursor: pointer;"
									>
										"CROSS-REFERENCE INTELLIGENCE"
									</button>
									<div style="margin-top: 0.5rem; font-size: 0.65rem; font-family: monospace; color: rgba(255,255,255,0.35); text-align: center;">
										{cross_ref_label}
									</div>
								</div>
							</div>
						}
					}
				}
			>
				// Visual forensics
				<div style="display: flex; flex-direction: column; gap: 1.5rem; max-width: 800px; margin: 0 auto;">
					<div style="display: flex; align-items: center; gap: 0.75rem; border-bottom: 1px solid rgba(255,255,255,0.05); padding-bottom: 0.75rem;">
						<div style="width: 12px; height: 12px; background: var(--accent-primary); border-radius: 2px;"></div>
						<h3 style="font-size: 1rem; font-weight: 900; letter-spacing: 0.05em;">"VISUAL FORENSICS"</h3>
					</div>

					<div
						class="glass"
						style=format!(
							"border-radius: 24px; overflow: hidden; border: 1px solid {accent}33; position: relative;",
						)
					>
						<div style="position: absolute; top: 1rem; right: 1rem; background: rgba(0,0,0,0.6); padding: 0.4rem 0.8rem; border-radius: 100px; backdrop-filter: blur(8px); border: 1px solid rgba(255,255,255,0.1); z-index: 10;">
							<span style="font-size: 0.65rem; font-weight: 800; color: white;">"PIXEL ANALYSIS ACTIVE"</span>
						</div>
						{match report_image.clone() {
							Some(image) => {
								view! {
									<img
										src=image
										style="width: 100%; display: block; height: 350px; object-fit: cover;"
										alt="Visual Evidence"
									/>
								}
									.into_any()
							}
							None => {
								view! {
									<div style="height: 350px; background: #0a0c10; display: flex; align-items: center; justify-content: center; color: rgba(255,255,255,0.2);">
										"NO VISUAL ASSET"
									</div>
								}
									.into_any()
							}
						}}

						<div style="padding: 1.25rem; background: rgba(0,0,0,0.4);">
							<div style="display: flex; justify-content: space-between; margin-bottom: 0.5rem;">
								<span style="font-size: 0.65rem; color: rgba(255,255,255,0.4); font-weight: 800;">
									"IMAGE INTEGRITY SCORE"
								</span>
								<span style=format!(
									"font-size: 0.65rem; color: {accent}; font-weight: 900;",
								)>{format!("{percent}%")}</span>
							</div>
							<div style="height: 3px; background: rgba(255,255,255,0.03); border-radius: 10px;">
								<div style=format!(
									"width: {percent}%; height: 100%; background: {accent}; transition: width 1s ease;",
								)></div>
							</div>
						</div>
					</div>

					<div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem;">
						{image_stats
							.iter()
							.map(|&(label, val, color)| {
								view! {
									<div class="glass" style="padding: 0.75rem; border-radius: 12px; border: 1px solid rgba(255,255,255,0.03); display: flex; flex-direction: column; gap: 0.5rem;">
										<div style="font-size: 0.55rem; color: rgba(255,255,255,0.3); font-weight: 800;">
											{label}
										</div>
										<div style=format!(
											"font-size: 0.7rem; color: {color}; font-weight: 900;",
										)>{val}</div>
									</div>
								}
							})
							.collect_view()}
					</div>

					<div
						class="glass"
						style=format!(
							"padding: 1.25rem; border-radius: 24px; background: {}; border: 1px solid {accent}44;",
							if manipulated { "rgba(239, 68, 68, 0.05)" } else { "rgba(16, 185, 129, 0.05)" },
						)
					>
						<div style=format!(
							"font-size: 0.65rem; color: {accent}; font-weight: 900; letter-spacing: 0.1em; margin-bottom: 0.5rem;",
						)>"IMAGE AUTHENTICITY VERDICT"</div>
						<div style=format!(
							"font-size: 1.8rem; font-weight: 900; color: {accent};",
						)>{if manipulated { "FAKE / MANIPULATED" } else { "REAL / AUTHENTIC" }}</div>
						<p style="font-size: 0.8rem; color: rgba(255,255,255,0.5); margin-top: 0.5rem; line-height: 1.4;">
							{image_verdict}
						</p>
					</div>
				</div>
			</Show>

			// Report footer
			<div style="margin-top: 3rem; padding-top: 1.5rem; border-top: 1px solid rgba(255,255,255,0.05); display: flex; justify-content: space-between; align-items: center;">
				<div style="font-size: 0.75rem; font-weight: 800; color: rgba(255,255,255,0.4);">
					"NEURAL CORE V4.2 // SCAN ACTIVE"
				</div>
				<div style="display: flex; gap: 1rem;">
					<button style="padding: 0.6rem 1.2rem; border-radius: 8px; background: white; color: black; border: none; font-weight: 900; font-size: 0.7rem;">
						"DOWNLOAD PDF"
					</button>
					<button style="padding: 0.6rem 1.2rem; border-radius: 8px; background: rgba(255,255,255,0.05); color: white; border: 1px solid rgba(255,255,255,0.1); font-weight: 900; font-size: 0.7rem;">
						"SHARE INTEL"
					</button>
				</div>
			</div>
		</div>
	}
}

#[component]
fn NetworkTreeView() -> impl IntoView {
	let (node_count, set_node_count) = signal(0_usize);
	let (loading, set_loading) = signal(true);

	spawn_local(async move {
		let feed = api::fetch_live_feed().await;
		set_node_count.set(feed.map(|f| f.data.len()).unwrap_or(0));
		set_loading.set(false);
	});

	view! {
		<div style="max-width: 1200px; margin: 0 auto; padding: 2rem;">
			<div style="margin-bottom: 2rem;">
				<h2 style="font-size: 2rem; margin-bottom: 0.5rem;">"Misinformation Propagation Tree"</h2>
				<p style="color: var(--text-secondary);">
					"Visualizing how false narratives evolve and spread across the network."
				</p>
			</div>

			<div class="glass" style="height: 600px; border-radius: 24px; position: relative; display: flex; align-items: center; justify-content: center; overflow: hidden; background: rgba(59, 130, 246, 0.02); border: 1px solid rgba(255, 255, 255, 0.05);">
				<div style="text-align: center; z-index: 10;">
					<h3 style="font-size: 1.5rem; margin-bottom: 1rem;">
						{move || {
							if loading.get() { "INITIALIZING ANALYSIS ENGINE..." } else { "NETWORK TREE READY" }
						}}
					</h3>
					<p style="color: var(--text-secondary); max-width: 400px;">
						{move || {
							if loading.get() {
								String::from("Contacting global nodes for current data stream...")
							} else {
								format!(
									"We are connecting the dots between {} detected nodes in the current live stream.",
									node_count.get(),
								)
							}
						}}
					</p>
				</div>

				<div style="position: absolute; inset: 0; background-image: radial-gradient(var(--bg-tertiary) 1px, transparent 1px); background-size: 40px 40px; opacity: 0.3;"></div>
			</div>

			<div style="margin-top: 2rem; display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 1.5rem;">
				<div class="glass" style="padding: 1.5rem; border-radius: 16px; display: flex; gap: 1rem; background: rgba(25, 30, 40, 0.4);">
					<div>
						<h4 style="margin-bottom: 0.2rem;">"Network Density"</h4>
						<p style="font-size: 0.85rem; color: var(--text-secondary);">
							{move || format!("Monitoring {} active nodes for pattern emergence.", node_count.get())}
						</p>
					</div>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|&(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_report_requires_title() {
		let q = params(&[("status", "manipulated"), ("score", "0.82")]);
		assert_eq!(ReportQuery::from_params(|key| q.get(key).cloned()), None);
	}

	#[test]
	fn test_manipulated_report_renders_high_risk_theme() {
		let q = params(&[
			("title", "Deepfake flood hits feeds"),
			("status", "manipulated"),
			("score", "0.82"),
			("summary", "A wave of synthetic imagery."),
		]);
		let report = ReportQuery::from_params(|key| q.get(key).cloned()).unwrap();

		assert!(report.is_manipulated());
		assert_eq!(report.percent(), 82);
		assert_eq!(report.accent_color(), "#ef4444");
		assert_eq!(report.image, None);
	}

	#[test]
	fn test_verified_report_renders_safe_theme() {
		let q = params(&[
			("title", "Chip fab opens"),
			("status", "verified"),
			("score", "0.97"),
			("image", "https://img.example/x.jpg"),
		]);
		let report = ReportQuery::from_params(|key| q.get(key).cloned()).unwrap();

		assert!(!report.is_manipulated());
		assert_eq!(report.percent(), 97);
		assert_eq!(report.accent_color(), "#10b981");
		assert_eq!(report.image.as_deref(), Some("https://img.example/x.jpg"));
	}

	#[test]
	fn test_malformed_score_falls_back_to_zero() {
		let q = params(&[("title", "t"), ("score", "not-a-float")]);
		let report = ReportQuery::from_params(|key| q.get(key).cloned()).unwrap();
		assert_eq!(report.score, 0.0);
		assert_eq!(report.percent(), 0);
	}

	#[test]
	fn test_empty_image_param_reads_as_absent() {
		let q = params(&[("title", "t"), ("image", "")]);
		let report = ReportQuery::from_params(|key| q.get(key).cloned()).unwrap();
		assert_eq!(report.image, None);
	}
}
