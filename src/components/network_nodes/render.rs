use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ParticleField, distance, edge_opacity};

const EDGE_WIDTH: f64 = 0.5;

pub fn render(
	field: &ParticleField,
	ctx: &CanvasRenderingContext2d,
	color: &str,
	connection_distance: f64,
) {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);

	ctx.set_fill_style_str(color);
	for particle in &field.particles {
		ctx.begin_path();
		let _ = ctx.arc(particle.x, particle.y, particle.radius, 0.0, 2.0 * PI);
		ctx.fill();
	}

	// All-pairs scan is O(n^2); fine for the tens of nodes this runs with,
	// and the edge density depends on visiting every pair.
	ctx.set_line_width(EDGE_WIDTH);
	for (i, a) in field.particles.iter().enumerate() {
		for b in &field.particles[i + 1..] {
			let Some(opacity) = edge_opacity(distance(a, b), connection_distance) else {
				continue;
			};
			ctx.set_stroke_style_str(&edge_stroke(color, opacity));
			ctx.begin_path();
			ctx.move_to(a.x, a.y);
			ctx.line_to(b.x, b.y);
			ctx.stroke();
		}
	}
}

/// Hex color plus a two-digit alpha suffix. Alpha tops out well below
/// opaque so the mesh stays a background element.
fn edge_stroke(color: &str, opacity: f64) -> String {
	format!("{}{:02x}", color, (opacity * 40.0) as u32)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_edge_stroke_appends_alpha_byte() {
		assert_eq!(edge_stroke("#3b82f6", 1.0), "#3b82f628");
		assert_eq!(edge_stroke("#00ff41", 0.5), "#00ff4114");
		assert_eq!(edge_stroke("#00ff41", 0.0), "#00ff4100");
	}
}
