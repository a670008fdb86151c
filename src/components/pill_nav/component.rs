use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlDivElement, HtmlElement, HtmlImageElement, Window};

use super::geometry::reveal_geometry;
use super::timeline::{
	TRACK_CIRCLE_SCALE, TRACK_HOVER_OPACITY, TRACK_HOVER_SHIFT, TRACK_INTRO_OPACITY,
	TRACK_INTRO_SCALE, TRACK_LABEL_OPACITY, TRACK_LABEL_SHIFT, TRACK_LOGO_ROTATION, Timeline,
	hover_timeline, intro_timeline, logo_timeline,
};

/// A single navigation entry.
#[derive(Clone, Debug, PartialEq)]
pub struct PillNavItem {
	pub label: String,
	pub href: String,
}

impl PillNavItem {
	pub fn new(label: &str, href: &str) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
		}
	}
}

// All timelines share the simulator's fixed frame step.
const FRAME_DT: f64 = 0.016;
// Measuring right at mount can race the first style/font pass.
const LAYOUT_DELAY_MS: u32 = 300;

struct ItemAnim {
	timeline: Timeline,
	circle: Option<HtmlElement>,
	label: Option<HtmlElement>,
	hover_label: Option<HtmlElement>,
}

struct NavAnim {
	items: Vec<ItemAnim>,
	logo: Timeline,
	logo_el: Option<HtmlImageElement>,
	intro: Timeline,
	intro_enabled: bool,
	cluster: Option<HtmlDivElement>,
}

impl NavAnim {
	fn new(item_count: usize, intro_enabled: bool) -> Self {
		Self {
			items: (0..item_count)
				.map(|_| ItemAnim {
					timeline: hover_timeline(),
					circle: None,
					label: None,
					hover_label: None,
				})
				.collect(),
			logo: logo_timeline(),
			logo_el: None,
			intro: intro_timeline(),
			intro_enabled,
			cluster: None,
		}
	}
}

/// Pill-shaped navigation bar with a circular flood reveal per item, a
/// logo spin, and an optional first-mount flourish. Purely cosmetic;
/// navigation itself is ordinary anchors handled by the router.
#[component]
pub fn PillNav(
	#[prop(into)] logo: String,
	#[prop(into, default = String::from("Logo"))] logo_alt: String,
	items: Vec<PillNavItem>,
	#[prop(into, default = String::new())] active_href: String,
	#[prop(into, default = String::from("#3b82f6"))] base_color: String,
	#[prop(into, default = String::from("#05070a"))] pill_color: String,
	#[prop(into, default = String::from("#ffffff"))] hovered_pill_text_color: String,
	#[prop(into, default = String::from("#3b82f6"))] pill_text_color: String,
	#[prop(default = true)] initial_load_animation: bool,
) -> impl IntoView {
	let nav_items_ref = NodeRef::<leptos::html::Div>::new();
	let logo_img_ref = NodeRef::<leptos::html::Img>::new();

	let anim: Rc<RefCell<NavAnim>> =
		Rc::new(RefCell::new(NavAnim::new(items.len(), initial_load_animation)));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let layout_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
	let raf_handle: Rc<Cell<i32>> = Rc::new(Cell::new(0));
	let (anim_init, animate_init, resize_cb_init, layout_timer_init, raf_init) = (
		anim.clone(),
		animate.clone(),
		resize_cb.clone(),
		layout_timer.clone(),
		raf_handle.clone(),
	);

	Effect::new(move |_| {
		let Some(cluster) = nav_items_ref.get() else {
			return;
		};
		let cluster: HtmlDivElement = cluster.into();
		let window: Window = web_sys::window().unwrap();

		{
			let mut anim = anim_init.borrow_mut();
			anim.cluster = Some(cluster.clone());
			anim.logo_el = logo_img_ref.get().map(|img| img.into());
			if anim.intro_enabled {
				anim.intro.play_forward();
			}
		}

		// Measure once the first paint has settled, then again on resize.
		let (anim_layout, cluster_layout) = (anim_init.clone(), cluster.clone());
		*layout_timer_init.borrow_mut() = Some(Timeout::new(LAYOUT_DELAY_MS, move || {
			layout(&cluster_layout, &mut anim_layout.borrow_mut());
		}));

		let (anim_resize, cluster_resize) = (anim_init.clone(), cluster.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			layout(&cluster_resize, &mut anim_resize.borrow_mut());
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (anim_tick, animate_inner, raf_anim) =
			(anim_init.clone(), animate_init.clone(), raf_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			advance(&mut anim_tick.borrow_mut());
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(handle) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					raf_anim.set(handle);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(handle) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				raf_init.set(handle);
			}
		}
	});

	let (animate_drop, resize_drop, timer_drop) =
		(animate.clone(), resize_cb.clone(), layout_timer.clone());
	on_cleanup(move || {
		let window = web_sys::window().unwrap();
		let _ = window.cancel_animation_frame(raf_handle.get());
		if let Some(cb) = resize_drop.borrow_mut().take() {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		// Dropping a pending timer cancels the deferred layout pass.
		timer_drop.borrow_mut().take();
		animate_drop.borrow_mut().take();
	});

	let anim_logo = anim.clone();
	let on_logo_enter = move |_| {
		let mut anim = anim_logo.borrow_mut();
		if anim.logo.settled_forward() {
			anim.logo.reset();
		}
		anim.logo.play_forward();
	};

	let css_vars = format!(
		"pointer-events: auto; --base: {base_color}; --pill-bg: {pill_color}; --hover-text: {hovered_pill_text_color}; --pill-text: {pill_text_color};"
	);
	let cluster_style = format!(
		"display: flex; align-items: center; background: var(--base); border-radius: 99px; padding: 4px; margin-left: 12px; box-shadow: 0 4px 15px rgba(0,0,0,0.4); border: 1px solid rgba(255,255,255,0.1);{}",
		if initial_load_animation {
			" opacity: 0; transform: scale(0.95);"
		} else {
			""
		}
	);

	let pills = items
		.into_iter()
		.enumerate()
		.map(|(i, item)| {
			let is_active = item.href == active_href;
			let pill_style = format!(
				"background: var(--pill-bg); color: var({}); padding: 0 22px; height: 38px; display: flex; align-items: center; border-radius: 99px; text-decoration: none; font-weight: 700; font-size: 12px; text-transform: uppercase; letter-spacing: 0.08em; position: relative; overflow: hidden;",
				if is_active { "--hover-text" } else { "--pill-text" }
			);
			let (anim_enter, anim_leave) = (anim.clone(), anim.clone());

			view! {
				<li>
					<a
						class="pill"
						href=item.href.clone()
						on:mouseenter=move |_| {
							let mut anim = anim_enter.borrow_mut();
							anim.items[i].timeline.cancel();
							anim.items[i].timeline.play_forward();
						}
						on:mouseleave=move |_| {
							let mut anim = anim_leave.borrow_mut();
							anim.items[i].timeline.cancel();
							anim.items[i].timeline.play_reverse();
						}
						style=pill_style
					>
						<span
							class="hover-circle"
							style="position: absolute; left: 50%; background: var(--base); border-radius: 50%; pointer-events: none; z-index: 1; display: block; transform: translateX(-50%) scale(0); will-change: transform;"
						></span>
						<span style="position: relative; z-index: 2; height: 100%; display: flex; align-items: center; justify-content: center; width: 100%;">
							<span class="pill-label" style="display: block; position: relative;">
								{item.label.clone()}
							</span>
							<span
								class="pill-label-hover"
								style="position: absolute; left: 50%; transform: translateX(-50%); color: var(--hover-text); display: block; opacity: 0;"
							>
								{item.label.clone()}
							</span>
						</span>
						{is_active
							.then(|| {
								view! {
									<span style="position: absolute; bottom: 3px; left: 50%; transform: translateX(-50%); width: 4px; height: 4px; border-radius: 50%; background: var(--base); z-index: 3;"></span>
								}
							})}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<div style="position: absolute; top: 1.5rem; width: 100%; left: 0; z-index: 1000; display: flex; justify-content: center; pointer-events: none;">
			<div style=css_vars>
				<nav style="display: flex; align-items: center;">
					<a
						href="/"
						on:mouseenter=on_logo_enter
						style="width: 46px; height: 46px; background: var(--base); border-radius: 50%; display: flex; align-items: center; justify-content: center; padding: 9px; overflow: hidden; box-shadow: 0 4px 15px rgba(0,0,0,0.4); border: 1px solid rgba(255,255,255,0.1);"
					>
						<img
							node_ref=logo_img_ref
							src=logo
							alt=logo_alt
							style="width: 100%; height: 100%; object-fit: contain;"
						/>
					</a>
					<div node_ref=nav_items_ref style=cluster_style>
						<ul style="list-style: none; display: flex; gap: 2px; margin: 0; padding: 0;">
							{pills}
						</ul>
					</div>
				</nav>
			</div>
		</div>
	}
}

/// Advance every timeline one frame and push the values that moved into
/// the DOM.
fn advance(anim: &mut NavAnim) {
	for item in &mut anim.items {
		if item.timeline.tick(FRAME_DT) {
			apply_item(item);
		}
	}

	if anim.logo.tick(FRAME_DT) {
		if anim.logo.settled_forward() {
			// Snap back to zero; invisible after a full turn.
			anim.logo.reset();
		}
		if let Some(ref img) = anim.logo_el {
			let _ = web_sys::HtmlElement::style(img).set_property(
				"transform",
				&format!("rotate({}deg)", anim.logo.value(TRACK_LOGO_ROTATION)),
			);
		}
	}

	if anim.intro_enabled && anim.intro.tick(FRAME_DT) {
		if let Some(ref cluster) = anim.cluster {
			let style = web_sys::HtmlElement::style(cluster);
			let _ = style.set_property(
				"opacity",
				&anim
					.intro
					.value(TRACK_INTRO_OPACITY)
					.clamp(0.0, 1.0)
					.to_string(),
			);
			let _ = style.set_property(
				"transform",
				&format!("scale({})", anim.intro.value(TRACK_INTRO_SCALE)),
			);
		}
	}
}

/// Measure each pill and anchor its reveal circle, then rebuild that
/// item's timeline at the rest state.
fn layout(cluster: &HtmlDivElement, anim: &mut NavAnim) {
	let pills = cluster.get_elements_by_class_name("pill");
	for (i, item) in anim.items.iter_mut().enumerate() {
		let Some(pill) = pills
			.item(i as u32)
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		else {
			continue;
		};
		let rect = pill.get_bounding_client_rect();
		// Zero size means this pill hasn't been laid out yet; the next
		// resize pass retries.
		let Some(geom) = reveal_geometry(rect.width(), rect.height()) else {
			continue;
		};

		item.circle = first_by_class(&pill, "hover-circle");
		item.label = first_by_class(&pill, "pill-label");
		item.hover_label = first_by_class(&pill, "pill-label-hover");

		if let Some(ref circle) = item.circle {
			let style = circle.style();
			let _ = style.set_property("width", &format!("{}px", geom.diameter));
			let _ = style.set_property("height", &format!("{}px", geom.diameter));
			let _ = style.set_property("bottom", &format!("-{}px", geom.inset));
			let _ = style.set_property("transform-origin", &format!("50% {}px", geom.origin_y));
		}

		item.timeline = hover_timeline();
		apply_item(item);
	}
}

fn apply_item(item: &ItemAnim) {
	if let Some(ref circle) = item.circle {
		let _ = circle.style().set_property(
			"transform",
			&format!(
				"translateX(-50%) scale({})",
				item.timeline.value(TRACK_CIRCLE_SCALE)
			),
		);
	}
	if let Some(ref label) = item.label {
		let style = label.style();
		let _ = style.set_property(
			"opacity",
			&item.timeline.value(TRACK_LABEL_OPACITY).to_string(),
		);
		let _ = style.set_property(
			"transform",
			&format!("translateY({}px)", item.timeline.value(TRACK_LABEL_SHIFT)),
		);
	}
	if let Some(ref hover) = item.hover_label {
		let style = hover.style();
		let _ = style.set_property(
			"opacity",
			&item.timeline.value(TRACK_HOVER_OPACITY).to_string(),
		);
		let _ = style.set_property(
			"transform",
			&format!(
				"translate(-50%, {}px)",
				item.timeline.value(TRACK_HOVER_SHIFT)
			),
		);
	}
}

fn first_by_class(pill: &HtmlElement, class: &str) -> Option<HtmlElement> {
	pill.get_elements_by_class_name(class)
		.item(0)
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
}
