/// Screen the click script was recorded on.
pub const REFERENCE_SCREEN: (u32, u32) = (1920, 1080);

/// A point in reference-screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Shorthand used by the phase scripts.
pub const fn pt(x: u32, y: u32) -> Point {
    Point::new(x, y)
}

fn clamp01(value: f32) -> f32 {
    if value < 0.0 {
        0.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

pub fn normalize_point(point: Point, reference: (u32, u32)) -> Option<(f32, f32)> {
    let (width, height) = reference;
    if width == 0 || height == 0 {
        return None;
    }
    let nx = clamp01(point.x as f32 / width as f32);
    let ny = clamp01(point.y as f32 / height as f32);
    Some((nx, ny))
}

pub fn denormalize_point(x: f32, y: f32, actual: (u32, u32)) -> Option<Point> {
    let (width, height) = actual;
    if width == 0 || height == 0 {
        return None;
    }
    let max_x = width.saturating_sub(1);
    let max_y = height.saturating_sub(1);
    let px = ((clamp01(x) * width as f32).round() as u32).min(max_x);
    let py = ((clamp01(y) * height as f32).round() as u32).min(max_y);
    Some(Point::new(px, py))
}

/// Map a reference-screen point onto a screen of a different size.
/// Identity when the actual screen matches the reference.
pub fn scale_point(point: Point, reference: (u32, u32), actual: (u32, u32)) -> Point {
    if reference == actual {
        return point;
    }
    normalize_point(point, reference)
        .and_then(|(nx, ny)| denormalize_point(nx, ny, actual))
        .unwrap_or(point)
}

/// Offset from `cursor` to `target`, for input backends that drag relative to the cursor.
pub fn drag_offset(cursor: (i32, i32), target: Point) -> (i32, i32) {
    let x = i64::from(target.x) - i64::from(cursor.0);
    let y = i64::from(target.y) - i64::from(cursor.1);
    (clamp_i32(x), clamp_i32(y))
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
