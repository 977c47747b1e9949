use crate::point::Point;
use crate::query::Regression;

fn to_text(val: f64) -> String {
    format!("{:.2}", val)
}

pub fn correlation_text(regression: &Regression) -> String {
    regression.r.map(to_text).unwrap_or_default()
}

/// `y = a x + b`, with the sign of `b` pulled out.
pub fn regression_text(regression: &Regression) -> String {
    match (regression.a, regression.b) {
        (Some(a), Some(b)) => {
            let sign = if b >= 0.0 { '+' } else { '-' };
            format!("y = {} x {} {}", to_text(a), sign, to_text(b.abs()))
        }
        _ => String::new(),
    }
}

pub fn cursor_text(cursor: Option<Point>) -> String {
    cursor.map(|p| p.to_string()).unwrap_or_default()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasHint {
    pub text: &'static str,
    pub opacity: f64,
}

/// Prompt shown on the canvas while there are too few points to be interesting.
pub fn canvas_hint(sample_size: usize) -> Option<CanvasHint> {
    let (text, opacity) = match sample_size {
        0 => ("Click here!", 1.0),
        1 => ("Click more!", 0.2),
        2 => ("More & more!", 0.1),
        _ => return None,
    };
    Some(CanvasHint { text, opacity })
}
