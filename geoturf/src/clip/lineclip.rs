//! Cohen–Sutherland polyline clipping and Sutherland–Hodgman ring clipping
//! against an axis-aligned window `[min_x, min_y, max_x, max_y]`.

use geoturf_core::Position;

pub const LEFT: u8 = 1;
pub const RIGHT: u8 = 2;
pub const BOTTOM: u8 = 4;
pub const TOP: u8 = 8;

/// Outcode of `p`: which sides of the window it lies beyond. 0 means inside.
pub fn bit_code(p: &Position, bbox: &[f64; 4]) -> u8 {
	let mut code = 0;
	if p.x() < bbox[0] {
		code |= LEFT;
	}
	if p.x() > bbox[2] {
		code |= RIGHT;
	}
	if p.y() < bbox[1] {
		code |= BOTTOM;
	}
	if p.y() > bbox[3] {
		code |= TOP;
	}
	code
}

/// Intersection of segment `a`-`b` with the window edge named by `edge`.
/// When several bits are set, top wins over bottom, bottom over right, right over left.
pub fn intersect(a: &Position, b: &Position, edge: u8, bbox: &[f64; 4]) -> Position {
	if edge & TOP != 0 {
		Position::new(a.x() + (b.x() - a.x()) * (bbox[3] - a.y()) / (b.y() - a.y()), bbox[3])
	} else if edge & BOTTOM != 0 {
		Position::new(a.x() + (b.x() - a.x()) * (bbox[1] - a.y()) / (b.y() - a.y()), bbox[1])
	} else if edge & RIGHT != 0 {
		Position::new(bbox[2], a.y() + (b.y() - a.y()) * (bbox[2] - a.x()) / (b.x() - a.x()))
	} else {
		Position::new(bbox[0], a.y() + (b.y() - a.y()) * (bbox[0] - a.x()) / (b.x() - a.x()))
	}
}

/// Clips a polyline, appending every visible part to `result`.
///
/// A line leaving and re-entering the window produces several parts.
pub fn line_clip(points: &[Position], bbox: &[f64; 4], result: &mut Vec<Vec<Position>>) {
	let Some(first) = points.first() else {
		return;
	};
	let len = points.len();
	let mut code_a = bit_code(first, bbox);
	let mut part: Vec<Position> = Vec::new();

	for i in 1..len {
		let mut a = points[i - 1];
		let mut b = points[i];
		let last_code = bit_code(&b, bbox);
		let mut code_b = last_code;

		loop {
			if code_a | code_b == 0 {
				// accepted
				part.push(a);
				if code_b != last_code {
					// the segment leaves the window
					part.push(b);
					if i < len - 1 {
						result.push(std::mem::take(&mut part));
					}
				} else if i == len - 1 {
					part.push(b);
				}
				break;
			} else if code_a & code_b != 0 {
				// rejected
				break;
			} else if code_a != 0 {
				a = intersect(&a, &b, code_a, bbox);
				code_a = bit_code(&a, bbox);
			} else {
				b = intersect(&a, &b, code_b, bbox);
				code_b = bit_code(&b, bbox);
			}
		}

		code_a = last_code;
	}

	if !part.is_empty() {
		result.push(part);
	}
}

/// Clips a ring against the four half-planes top, bottom, right and left in turn.
///
/// The result is not closed and is empty if nothing of the ring is visible.
pub fn polygon_clip(points: &[Position], bbox: &[f64; 4]) -> Vec<Position> {
	let mut points = points.to_vec();

	for edge in [TOP, BOTTOM, RIGHT, LEFT] {
		let Some(last) = points.last() else {
			break;
		};
		let mut result = Vec::with_capacity(points.len() + 4);
		let mut prev = *last;
		let mut prev_inside = bit_code(&prev, bbox) & edge == 0;

		for p in &points {
			let inside = bit_code(p, bbox) & edge == 0;
			if inside != prev_inside {
				result.push(intersect(&prev, p, edge, bbox));
			}
			if inside {
				result.push(*p);
			}
			prev = *p;
			prev_inside = inside;
		}

		points = result;
	}

	points
}
