use super::*;

// NaN wins, same as Math.max / Math.min
fn max_f64(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn min_f64(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_to_zero(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v
    }
}

impl Vector2 {
    /// angle between two vectors, in degree
    ///
    /// `v2` direction is extended to length of `v1`, then half of the chord
    /// between them over the radius gives the half angle
    pub fn angle(v1: &Vector2, v2: &Vector2) -> f64 {
        let r = v1.magnitude();
        let t = v2.normalize().forward(r - 1.0);
        let a = Vector2::distance(&t, v1) * 0.5;
        let half = (a / r).asin().to_degrees();
        half * 2.0
    }

    pub fn distance(v1: &Vector2, v2: &Vector2) -> f64 {
        ((v1.x() - v2.x()).powi(2) + (v1.y() - v2.y()).powi(2)).sqrt()
    }

    pub fn dot(v1: &Vector2, v2: &Vector2) -> f64 {
        v1.x() * v2.x() + v1.y() * v2.y()
    }

    /// linear interpolate, `amount` is clamped into [0, 1], 0 is `v1`, 1 is `v2`
    pub fn lerp(v1: &Vector2, v2: &Vector2, amount: f64) -> Vector2 {
        let a = nan_to_zero(amount).clamp(0.0, 1.0);
        v1.addition(v2.subtract(v1).multiply(a))
    }

    pub fn clamp(v: &Vector2, min: &Vector2, max: &Vector2) -> Vector2 {
        let x = max_f64(min_f64(v.x(), max.x()), min.x());
        let y = max_f64(min_f64(v.y(), max.y()), min.y());
        Vector2::new(x, y)
    }

    pub fn max(v1: &Vector2, v2: &Vector2) -> Vector2 {
        Vector2::new(max_f64(v1.x(), v2.x()), max_f64(v1.y(), v2.y()))
    }

    pub fn min(v1: &Vector2, v2: &Vector2) -> Vector2 {
        Vector2::new(min_f64(v1.x(), v2.x()), min_f64(v1.y(), v2.y()))
    }

    pub fn mid(v1: &Vector2, v2: &Vector2) -> Vector2 {
        let min = Vector2::min(v1, v2);
        let max = Vector2::max(v1, v2);
        max.subtract(&min).divide(2).addition(&min)
    }

    /// per axis sign, zero axis stays zero
    pub fn trend(v: &Vector2) -> Vector2 {
        let xt = v.x() / v.x().abs();
        let yt = v.y() / v.y().abs();
        Vector2::new(nan_to_zero(xt), nan_to_zero(yt))
    }
}
