use once_cell::sync::Lazy;
use regex::Regex;

const NUMBER: &str = r"([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)";
const SEP: &str = r"(?:\s*,\s*|\s+)";

static TRANSLATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"translate\(\s*{NUMBER}{SEP}{NUMBER}\s*\)")).unwrap()
});
static MATRIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"matrix\(\s*{NUMBER}{SEP}{NUMBER}{SEP}{NUMBER}{SEP}{NUMBER}{SEP}{NUMBER}{SEP}{NUMBER}\s*\)"
    ))
    .unwrap()
});
static SCALE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"scale\(\s*{NUMBER}(?:{SEP}{NUMBER})?\s*\)")).unwrap()
});

/// 2D affine transform `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl TransformMatrix {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Parses an SVG `transform` attribute.
    ///
    /// Only the first `translate(tx,ty)`, `matrix(a,b,c,d,e,f)` or
    /// `scale(sx[,sy])` is honoured, checked in that order. Anything else,
    /// `rotate` and `skewX`/`skewY` included, yields the identity.
    pub fn parse(input: &str) -> Self {
        if let Some(values) = capture_numbers(&TRANSLATE_RE, input) {
            return Self::translate(values[0], values[1]);
        }
        if let Some(v) = capture_numbers(&MATRIX_RE, input) {
            return Self::new(v[0], v[1], v[2], v[3], v[4], v[5]);
        }
        if let Some(values) = capture_numbers(&SCALE_RE, input) {
            let sx = values[0];
            let sy = values.get(1).copied().unwrap_or(sx);
            return Self::scale(sx, sy);
        }
        if !input.trim().is_empty() {
            log::debug!(transform = input; "unsupported transform syntax, using identity");
        }
        Self::IDENTITY
    }

    /// Returns `self * child`: the child's transform is applied first.
    pub fn compose(self, child: Self) -> Self {
        Self {
            a: self.a * child.a + self.c * child.b,
            b: self.b * child.a + self.d * child.b,
            c: self.a * child.c + self.c * child.d,
            d: self.b * child.c + self.d * child.d,
            e: self.a * child.e + self.c * child.f + self.e,
            f: self.b * child.e + self.d * child.f + self.f,
        }
    }

    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Numbers captured by the first match of `re`, skipping absent optional groups.
fn capture_numbers(re: &Regex, input: &str) -> Option<Vec<f64>> {
    let caps = re.captures(input)?;
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}
