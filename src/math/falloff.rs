/// Linear falloff of a cursor's influence over distance.
///
/// Returns `1` at `distance = 0`, falling linearly to `0` at
/// `distance >= radius`. A zero, negative, or non-finite radius never
/// activates anything, and neither does a non-finite distance.
#[must_use]
pub fn activation_intensity(distance: f64, radius: f64) -> f64 {
    if radius <= 0.0 || !radius.is_finite() || !distance.is_finite() {
        return 0.0;
    }
    (1.0 - distance.abs() / radius).clamp(0.0, 1.0)
}
