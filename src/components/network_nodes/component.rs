use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render;
use super::state::ParticleField;

/// Ambient particle-network background: a batch of drifting nodes joined by
/// proximity edges, rendered on a canvas sized to its parent.
#[component]
pub fn NetworkNodes(
	#[prop(into, default = String::from("#00ff41"))] color: String,
	#[prop(default = 80)] node_count: usize,
	#[prop(default = 150.0)] connection_distance: f64,
	#[prop(default = 0.5)] speed: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let raf_handle: Rc<Cell<i32>> = Rc::new(Cell::new(0));
	let (field_init, animate_init, resize_cb_init, raf_init) = (
		field.clone(),
		animate.clone(),
		resize_cb.clone(),
		raf_handle.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let mut seeded = ParticleField::new(w, h);
		seeded.reseed(node_count, speed, &mut || js_sys::Math::random());
		*field_init.borrow_mut() = Some(seeded);

		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (field_anim, animate_inner, raf_anim) =
			(field_init.clone(), animate_init.clone(), raf_init.clone());
		let color_anim = color.clone();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.step();
				render::render(f, &ctx, &color_anim, connection_distance);
			}
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

	let (animate_drop, resize_drop) = (animate.clone(), resize_cb.clone());
	on_cleanup(move || {
		let window = web_sys::window().unwrap();
		let _ = window.cancel_animation_frame(raf_handle.get());
		if let Some(cb) = resize_drop.borrow_mut().take() {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		animate_drop.borrow_mut().take();
	});

	view! {
		<div style="position: relative; width: 100%; height: 100%; background-color: #05070a; overflow: hidden;">
			<canvas node_ref=canvas_ref style="display: block; width: 100%; height: 100%;" />
			// Subtle vignette for depth
			<div style="position: absolute; inset: 0; background: radial-gradient(circle at center, transparent 0%, rgba(5, 7, 10, 0.4) 100%); pointer-events: none;"></div>
		</div>
	}
}

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((800.0, 600.0))
}
