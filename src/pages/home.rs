use leptos::prelude::*;

use crate::components::network_nodes::NetworkNodes;
use crate::components::pill_nav::PillNav;
use crate::pages::nav_items;

/// Landing page: hero copy over the ambient particle network.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<main style="min-height: 100vh; position: relative; overflow: hidden;">
			<PillNav
				logo="/logo.svg"
				items=nav_items()
				active_href="/"
				base_color="#3b82f6"
				pill_color="#05070a"
				pill_text_color="#3b82f6"
				hovered_pill_text_color="white"
			/>

			// Background layer
			<div style="position: absolute; inset: 0; z-index: -1;">
				<NetworkNodes color="#3b82f6" node_count=100 connection_distance=150.0 speed=0.3 />
			</div>

			// Content layer
			<section style="height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 2rem; text-align: center;">
				<div class="animate-fade-in" style="z-index: 1; max-width: 900px;">
					<h1 style="font-size: clamp(2.5rem, 8vw, 5rem); font-weight: 800; line-height: 1.1; margin-bottom: 1.5rem; letter-spacing: -0.04em; text-transform: uppercase; color: white; text-shadow: 0 0 20px rgba(59, 130, 246, 0.5);">
						"TRUSTED INSIGHT" <br />
						<span style="color: var(--accent-primary);">"FROM DATA STREAMS"</span>
					</h1>

					<p style="font-size: 1.25rem; color: rgba(255, 255, 255, 0.7); line-height: 1.6; margin-bottom: 3rem; max-width: 600px; margin-inline: auto; font-family: monospace;">
						"An intelligent framework for real-time collection and analysis of misinformation from streaming data sources."
					</p>

					<div style="display: flex; gap: 1.5rem; justify-content: center;">
						<a
							href="/feed"
							style="background: white; color: black; padding: 1.2rem 2.5rem; border-radius: 4px; font-weight: 800; display: flex; align-items: center; gap: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; text-decoration: none;"
						>
							"INITIALIZE FEED"
						</a>

						<a
							href="/analytics"
							style="border: 1px solid rgba(255, 255, 255, 0.3); color: white; padding: 1.2rem 2.5rem; border-radius: 4px; font-weight: 800; display: flex; align-items: center; gap: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; backdrop-filter: blur(10px); text-decoration: none;"
						>
							"NETWORK TREE"
						</a>
					</div>
				</div>
			</section>

			// Decorative bottom bar
			<div style="position: absolute; bottom: 0; width: 100%; padding: 1rem 2rem; border-top: 1px solid rgba(255, 255, 255, 0.1); display: flex; justify-content: space-between; font-size: 0.75rem; color: var(--text-muted); font-family: monospace; z-index: 10;">
				<span>"STATUS: ACTIVE_MONITORING"</span>
				<span>"LOCATION: GLOBAL_NODES"</span>
				<span>"ENCRYPTION: AES-256"</span>
			</div>
		</main>
	}
}
