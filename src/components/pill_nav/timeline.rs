//! Hand-rolled tween timelines, advanced by the nav component's frame
//! clock. A timeline owns a set of property tracks sharing one playhead;
//! playing a direction resumes from the current playhead, so an interrupted
//! enter/leave pair never pops back to an endpoint.

/// Easing curves used by the nav transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
	Linear,
	/// Cubic ease-out: `1 - (1 - t)^3`.
	PowerOut,
	/// Cubic ease-in-out.
	PowerInOut,
	/// Ease-out that overshoots by the given back strength before settling.
	BackOut(f64),
}

impl Ease {
	pub fn apply(self, t: f64) -> f64 {
		match self {
			Ease::Linear => t,
			Ease::PowerOut => 1.0 - (1.0 - t).powi(3),
			Ease::PowerInOut => {
				if t < 0.5 {
					4.0 * t * t * t
				} else {
					1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
				}
			}
			Ease::BackOut(s) => {
				let u = t - 1.0;
				1.0 + (s + 1.0) * u * u * u + s * u * u
			}
		}
	}
}

/// One animated property: `from` -> `to` over `duration` seconds, starting
/// `start` seconds into the timeline.
#[derive(Clone, Copy, Debug)]
pub struct Track {
	pub from: f64,
	pub to: f64,
	pub start: f64,
	pub duration: f64,
	pub ease: Ease,
}

impl Track {
	fn value_at(&self, head: f64) -> f64 {
		let t = if self.duration > 0.0 {
			((head - self.start) / self.duration).clamp(0.0, 1.0)
		} else if head >= self.start {
			1.0
		} else {
			0.0
		};
		self.from + (self.to - self.from) * self.ease.apply(t)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
	Forward,
	Reverse,
}

/// A cancelable, reversible tween group. At most one tween is active per
/// timeline by construction: starting a direction replaces whatever was
/// playing before.
#[derive(Clone, Debug)]
pub struct Timeline {
	tracks: Vec<Track>,
	head: f64,
	total: f64,
	direction: Direction,
	playing: bool,
}

impl Timeline {
	pub fn new(tracks: Vec<Track>) -> Self {
		let total = tracks
			.iter()
			.map(|t| t.start + t.duration)
			.fold(0.0, f64::max);
		Self {
			tracks,
			head: 0.0,
			total,
			direction: Direction::Forward,
			playing: false,
		}
	}

	pub fn play_forward(&mut self) {
		self.direction = Direction::Forward;
		self.playing = true;
	}

	pub fn play_reverse(&mut self) {
		self.direction = Direction::Reverse;
		self.playing = true;
	}

	pub fn cancel(&mut self) {
		self.playing = false;
	}

	pub fn reset(&mut self) {
		self.head = 0.0;
		self.direction = Direction::Forward;
		self.playing = false;
	}

	/// Advance the playhead by `dt` seconds, clamping at either end.
	/// Returns whether the playhead moved this tick.
	pub fn tick(&mut self, dt: f64) -> bool {
		if !self.playing {
			return false;
		}
		match self.direction {
			Direction::Forward => {
				self.head += dt;
				if self.head >= self.total {
					self.head = self.total;
					self.playing = false;
				}
			}
			Direction::Reverse => {
				self.head -= dt;
				if self.head <= 0.0 {
					self.head = 0.0;
					self.playing = false;
				}
			}
		}
		true
	}

	pub fn value(&self, track: usize) -> f64 {
		self.tracks[track].value_at(self.head)
	}

	pub fn settled_forward(&self) -> bool {
		!self.playing && self.head >= self.total
	}

	pub fn settled_reverse(&self) -> bool {
		!self.playing && self.head <= 0.0
	}
}

pub const TRACK_CIRCLE_SCALE: usize = 0;
pub const TRACK_LABEL_OPACITY: usize = 1;
pub const TRACK_LABEL_SHIFT: usize = 2;
pub const TRACK_HOVER_OPACITY: usize = 3;
pub const TRACK_HOVER_SHIFT: usize = 4;

/// The per-item hover timeline: the reveal circle floods in with a slight
/// overshoot while the two label layers cross-fade, the hover layer
/// trailing the circle slightly.
pub fn hover_timeline() -> Timeline {
	Timeline::new(vec![
		Track {
			from: 0.0,
			to: 1.15,
			start: 0.0,
			duration: 0.8,
			ease: Ease::PowerOut,
		},
		Track {
			from: 1.0,
			to: 0.0,
			start: 0.0,
			duration: 0.4,
			ease: Ease::PowerInOut,
		},
		Track {
			from: 0.0,
			to: -5.0,
			start: 0.0,
			duration: 0.4,
			ease: Ease::PowerInOut,
		},
		Track {
			from: 0.0,
			to: 1.0,
			start: 0.1,
			duration: 0.4,
			ease: Ease::PowerOut,
		},
		Track {
			from: 5.0,
			to: 0.0,
			start: 0.1,
			duration: 0.4,
			ease: Ease::PowerOut,
		},
	])
}

pub const TRACK_LOGO_ROTATION: usize = 0;

/// One full turn of the logo glyph. The component snaps the playhead back
/// to zero once this settles, which is invisible at 360 degrees.
pub fn logo_timeline() -> Timeline {
	Timeline::new(vec![Track {
		from: 0.0,
		to: 360.0,
		start: 0.0,
		duration: 0.6,
		ease: Ease::PowerInOut,
	}])
}

pub const TRACK_INTRO_OPACITY: usize = 0;
pub const TRACK_INTRO_SCALE: usize = 1;

/// First-mount flourish for the whole item cluster, delayed briefly and
/// landing with a bouncy overshoot.
pub fn intro_timeline() -> Timeline {
	Timeline::new(vec![
		Track {
			from: 0.0,
			to: 1.0,
			start: 0.2,
			duration: 0.6,
			ease: Ease::BackOut(1.2),
		},
		Track {
			from: 0.95,
			to: 1.0,
			start: 0.2,
			duration: 0.6,
			ease: Ease::BackOut(1.2),
		},
	])
}

#[cfg(test)]
mod tests {
	use super::*;

	const DT: f64 = 0.016;

	fn settle(tl: &mut Timeline) {
		for _ in 0..200 {
			if !tl.tick(DT) {
				return;
			}
		}
		panic!("timeline did not settle within 200 ticks");
	}

	#[test]
	fn test_ease_endpoints() {
		for ease in [
			Ease::Linear,
			Ease::PowerOut,
			Ease::PowerInOut,
			Ease::BackOut(1.2),
		] {
			assert!((ease.apply(0.0)).abs() < 1e-9, "{ease:?} at 0");
			assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
		}
	}

	#[test]
	fn test_back_out_overshoots() {
		assert!(Ease::BackOut(1.2).apply(0.8) > 1.0);
	}

	#[test]
	fn test_hover_forward_settles_on_hover_label() {
		let mut tl = hover_timeline();
		tl.play_forward();
		settle(&mut tl);

		assert!(tl.settled_forward());
		assert!((tl.value(TRACK_CIRCLE_SCALE) - 1.15).abs() < 1e-9);
		assert_eq!(tl.value(TRACK_LABEL_OPACITY), 0.0);
		assert_eq!(tl.value(TRACK_HOVER_OPACITY), 1.0);
		assert_eq!(tl.value(TRACK_HOVER_SHIFT), 0.0);
	}

	#[test]
	fn test_reverse_resumes_from_current_progress() {
		let mut tl = hover_timeline();
		tl.play_forward();
		for _ in 0..10 {
			tl.tick(DT);
		}
		let mid = tl.value(TRACK_CIRCLE_SCALE);
		assert!(mid > 0.0 && mid < 1.15);

		// Flipping direction must not move the playhead by itself.
		tl.play_reverse();
		assert_eq!(tl.value(TRACK_CIRCLE_SCALE), mid);

		settle(&mut tl);
		assert!(tl.settled_reverse());
		assert_eq!(tl.value(TRACK_LABEL_OPACITY), 1.0);
		assert_eq!(tl.value(TRACK_HOVER_OPACITY), 0.0);
	}

	#[test]
	fn test_rapid_enter_leave_settles_on_exactly_one_label() {
		// Scripted flurry of interrupted transitions with uneven gaps.
		let script: &[(bool, usize)] = &[
			(true, 3),
			(false, 1),
			(true, 7),
			(false, 2),
			(true, 1),
			(false, 9),
			(true, 4),
		];
		let mut tl = hover_timeline();
		for &(enter, ticks) in script {
			if enter {
				tl.play_forward();
			} else {
				tl.play_reverse();
			}
			for _ in 0..ticks {
				tl.tick(DT);
			}
		}
		settle(&mut tl);

		let label = tl.value(TRACK_LABEL_OPACITY);
		let hover = tl.value(TRACK_HOVER_OPACITY);
		let primary_visible = label == 1.0 && hover == 0.0;
		let hover_visible = label == 0.0 && hover == 1.0;
		assert!(
			primary_visible ^ hover_visible,
			"settled with label={label} hover={hover}"
		);
	}

	#[test]
	fn test_cancel_freezes_playhead() {
		let mut tl = hover_timeline();
		tl.play_forward();
		for _ in 0..5 {
			tl.tick(DT);
		}
		let frozen = tl.value(TRACK_CIRCLE_SCALE);

		tl.cancel();
		assert!(!tl.tick(DT));
		assert_eq!(tl.value(TRACK_CIRCLE_SCALE), frozen);
	}

	#[test]
	fn test_large_tick_clamps_at_end() {
		let mut tl = hover_timeline();
		tl.play_forward();
		tl.tick(10.0);
		assert!(tl.settled_forward());
		assert!((tl.value(TRACK_CIRCLE_SCALE) - 1.15).abs() < 1e-9);
	}

	#[test]
	fn test_logo_snap_returns_to_zero() {
		let mut tl = logo_timeline();
		tl.play_forward();
		settle(&mut tl);
		assert_eq!(tl.value(TRACK_LOGO_ROTATION), 360.0);

		tl.reset();
		assert_eq!(tl.value(TRACK_LOGO_ROTATION), 0.0);
		assert!(tl.settled_reverse());
	}

	#[test]
	fn test_intro_holds_hidden_through_delay() {
		let mut tl = intro_timeline();
		tl.play_forward();
		// 0.16s in, still inside the 0.2s delay.
		for _ in 0..10 {
			tl.tick(DT);
		}
		assert_eq!(tl.value(TRACK_INTRO_OPACITY), 0.0);
		assert_eq!(tl.value(TRACK_INTRO_SCALE), 0.95);

		settle(&mut tl);
		assert_eq!(tl.value(TRACK_INTRO_OPACITY), 1.0);
		assert_eq!(tl.value(TRACK_INTRO_SCALE), 1.0);
	}
}
