/// Placement of the hover reveal circle for one pill, derived from the
/// pill's measured size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealGeometry {
	/// Circle diameter in px, padded past the minimal covering circle.
	pub diameter: f64,
	/// How far the circle's bottom edge sits below the pill's bottom edge.
	pub inset: f64,
	/// Transform-origin y offset, measured from the circle's top edge.
	pub origin_y: f64,
}

/// Smallest circle that covers a `w` x `h` pill from a center on the pill's
/// vertical midline at its bottom edge, plus padding. Returns `None` for a
/// pill that has not been laid out yet; the caller retries on the next
/// layout pass.
pub fn reveal_geometry(w: f64, h: f64) -> Option<RevealGeometry> {
	if w == 0.0 || h == 0.0 {
		return None;
	}

	let r = (w * w / 4.0 + h * h) / (2.0 * h);
	let diameter = (2.0 * r).ceil() + 12.0;
	let inset = (r - (r * r - w * w / 4.0).max(0.0).sqrt()).ceil() + 6.0;

	Some(RevealGeometry {
		diameter,
		inset,
		origin_y: diameter - inset,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_reference_pill_dimensions() {
		let geom = reveal_geometry(120.0, 38.0).unwrap();
		assert_eq!(geom.diameter, 145.0);
		assert_eq!(geom.inset, 44.0);
		assert_eq!(geom.origin_y, 101.0);
	}

	#[test]
	fn test_unlaid_out_pill_is_skipped() {
		assert_eq!(reveal_geometry(0.0, 38.0), None);
		assert_eq!(reveal_geometry(120.0, 0.0), None);
	}

	#[test]
	fn test_circle_covers_all_pill_corners() {
		for (w, h) in [(120.0, 38.0), (80.0, 30.0), (200.0, 44.0), (38.0, 38.0)] {
			let geom = reveal_geometry(w, h).unwrap();
			let radius = geom.diameter / 2.0;

			// Circle center in pill coordinates (origin at the pill's
			// top-left): horizontally centered, bottom edge `inset` px
			// below the pill's bottom edge.
			let cx = w / 2.0;
			let cy = h + geom.inset - radius;

			for (px, py) in [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)] {
				let d = (px - cx).hypot(py - cy);
				assert!(
					d <= radius,
					"corner ({px}, {py}) outside circle for {w}x{h}: {d} > {radius}"
				);
			}
		}
	}
}
