use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, NewsItem};
use crate::components::news_card::NewsCard;
use crate::components::pill_nav::PillNav;
use crate::pages::nav_items;

const CATEGORIES: &[(&str, &str)] = &[
	("all", "All News"),
	("breaking", "Breaking"),
	("trending", "Trending"),
	("top", "Top Stories"),
	("finance", "Finance"),
	("sports", "Sports"),
	("tech", "Technology"),
	("science", "Science"),
];

/// Live feed: bento grid of scored news cards with category chips.
#[component]
pub fn Feed() -> impl IntoView {
	let (all_news, set_all_news) = signal(Vec::<NewsItem>::new());
	let (sections, set_sections) = signal(HashMap::<String, Vec<NewsItem>>::new());
	let (loading, set_loading) = signal(true);
	let (last_sync, set_last_sync) = signal(String::new());
	let (active_category, set_active_category) = signal(String::from("all"));

	let load_feed = move || {
		set_loading.set(true);
		spawn_local(async move {
			match api::fetch_live_feed().await {
				Some(feed) => {
					set_all_news.set(feed.data);
					set_sections.set(feed.sections);
					set_last_sync
						.set(String::from(js_sys::Date::new_0().to_locale_time_string("en-US")));
				}
				None => {
					set_all_news.set(Vec::new());
					set_sections.set(HashMap::new());
				}
			}
			set_loading.set(false);
		});
	};
	load_feed();

	let filtered = Memo::new(move |_| {
		active_category
			.with(|cat| api::filter_by_category(&all_news.get(), &sections.get(), cat))
	});

	let subtitle = move || {
		let cat = active_category.get();
		let stream = if cat == "all" {
			String::from("Unified global feed")
		} else {
			format!("{} Intel Stream", cat.to_uppercase())
		};
		format!("{stream} \u{2022} {} active nodes.", filtered.get().len())
	};

	let chips = move || {
		CATEGORIES
			.iter()
			.map(|&(id, label)| {
				let is_active = active_category.get() == id;
				let chip_style = format!(
					"padding: 0.5rem 1.25rem; border-radius: 100px; background: {}; border: 1px solid {}; color: {}; font-size: 0.75rem; font-weight: 700; cursor: pointer; white-space: nowrap;",
					if is_active {
						"var(--accent-primary)"
					} else {
						"rgba(255,255,255,0.03)"
					},
					if is_active {
						"var(--accent-primary)"
					} else {
						"rgba(255,255,255,0.05)"
					},
					if is_active { "white" } else { "rgba(255,255,255,0.5)" }
				);
				view! {
					<button on:click=move |_| set_active_category.set(id.to_string()) style=chip_style>
						{label}
					</button>
				}
			})
			.collect_view()
	};

	view! {
		<main style="min-height: 100vh; background: #05070a;">
			<PillNav
				logo="/logo.svg"
				items=nav_items()
				active_href="/feed"
				base_color="#3b82f6"
				pill_color="#0c111a"
				pill_text_color="#3b82f6"
				hovered_pill_text_color="white"
			/>

			<div style="max-width: 1200px; margin: 0 auto; padding: 8rem 1.5rem 4rem 1.5rem;">
				// Feed header
				<div style="margin-bottom: 2rem; display: flex; justify-content: space-between; align-items: flex-end; border-left: 4px solid var(--accent-primary); padding-left: 1.5rem;">
					<div>
						<div style="display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.5rem;">
							<div style="width: 8px; height: 8px; border-radius: 50%; background: var(--accent-primary); box-shadow: 0 0 10px var(--accent-primary);"></div>
							<span style="font-size: 0.8rem; font-weight: 800; color: var(--accent-primary); letter-spacing: 0.1em;">
								"INTELLIGENCE STREAM ACTIVE"
							</span>
						</div>
						<h2 style="font-size: 2.5rem; font-weight: 800;">"Intelligence Feed"</h2>
						<p style="color: var(--text-muted); font-size: 1rem; margin-top: 0.5rem;">{subtitle}</p>
					</div>

					<button
						on:click=move |_| load_feed()
						disabled=move || loading.get()
						style="background: rgba(59, 130, 246, 0.1); border: 1px solid rgba(59, 130, 246, 0.2); color: #3b82f6; padding: 0.6rem 1rem; border-radius: 8px; cursor: pointer; display: flex; align-items: center; gap: 0.5rem; font-size: 0.8rem; font-weight: 700;"
					>
						{move || if loading.get() { "SYNCING..." } else { "REFRESH" }}
					</button>
				</div>

				// Category selector chips
				<div style="display: flex; gap: 0.75rem; margin-bottom: 3rem; overflow-x: auto; padding-bottom: 0.5rem;">
					{chips}
				</div>

				// Content: 3-column bento grid
				<Show
					when=move || !(loading.get() && filtered.get().is_empty())
					fallback=move || {
						view! {
							<div style="height: 400px; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem;">
								<div style="text-align: center;">
									<h3 style="font-weight: 800; font-size: 1.25rem; margin-bottom: 0.5rem;">
										"FILTERING NEURAL NODES"
									</h3>
									<p style="color: var(--text-muted); font-family: monospace; font-size: 0.8rem;">
										{move || {
											format!(
												"Reconfiguring feed based on category: {}...",
												active_category.get(),
											)
										}}
									</p>
								</div>
							</div>
						}
					}
				>
					<div class="animate-fade-in" style="display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1.5rem;">
						{move || {
							filtered
								.get()
								.into_iter()
								.map(|item| view! { <NewsCard news=item /> })
								.collect_view()
						}}
					</div>
				</Show>

				// Bottom status
				<div style="text-align: center; padding: 2rem; border-top: 1px solid rgba(255,255,255,0.05); color: rgba(255,255,255,0.2); font-size: 0.75rem; font-family: monospace; margin-top: 4rem;">
					{move || format!("[LAST SYNC: {}] \u{2022} ALL NODES REPORTING NOMINAL", last_sync.get())}
				</div>
			</div>
		</main>
	}
}
