use leptos::prelude::*;

/// 404 fallback page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main style="min-height: 100vh; background: #05070a; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; text-align: center;">
			<h1 style="font-size: 5rem; font-weight: 900; color: var(--accent-primary); margin: 0;">"404"</h1>
			<p style="color: var(--text-muted); font-family: monospace; letter-spacing: 0.1em;">
				"SIGNAL LOST // NO ROUTE MATCHES THIS NODE"
			</p>
			<a
				href="/"
				style="margin-top: 1rem; border: 1px solid rgba(255,255,255,0.3); color: white; padding: 0.8rem 2rem; border-radius: 4px; font-weight: 800; text-transform: uppercase; letter-spacing: 0.1em; text-decoration: none;"
			>
				"RETURN TO BASE"
			</a>
		</main>
	}
}
