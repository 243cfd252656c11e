use crate::math::Point3;

/// A light the engine can drive.
///
/// Fixtures are owned by the host. The engine only reads [`Fixture::position`]
/// and reports activation through [`Fixture::set_brightness_influence`]; how
/// the light rises and falls in response is up to the implementation.
pub trait Fixture {
    /// Fixed position of the fixture in the venue frame.
    fn position(&self) -> Point3;

    /// Reports that a cursor wants this fixture at least `intensity` bright.
    ///
    /// `intensity` is in `(0, 1]`. It is only called for fixtures that are
    /// inside some cursor's radius this frame.
    fn set_brightness_influence(&mut self, intensity: f64);
}

impl<F: Fixture + ?Sized> Fixture for Box<F> {
    fn position(&self) -> Point3 {
        (**self).position()
    }

    fn set_brightness_influence(&mut self, intensity: f64) {
        (**self).set_brightness_influence(intensity);
    }
}

impl<F: Fixture + ?Sized> Fixture for &mut F {
    fn position(&self) -> Point3 {
        (**self).position()
    }

    fn set_brightness_influence(&mut self, intensity: f64) {
        (**self).set_brightness_influence(intensity);
    }
}

/// A single-channel light with eased fade-in and fade-out.
///
/// Influence raises `target`; [`Light::update`] moves `value` toward it and
/// then clears `target`, so a light nobody touches on a frame starts fading
/// out on the next update.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    position: Point3,
    value: f64,
    target: f64,
}

impl Light {
    /// Creates a dark light at `position`.
    #[must_use]
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            value: 0.0,
            target: 0.0,
        }
    }

    /// Current brightness in `[0, 1]`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Brightness requested for the next [`Light::update`].
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Eases `value` toward `target` and resets `target` to zero.
    ///
    /// `fade_in` is the fraction of the gap closed per update while rising,
    /// `fade_out` while falling. Both are clamped to `[0, 1]`.
    pub fn update(&mut self, fade_in: f64, fade_out: f64) {
        let rate = if self.target > self.value {
            fade_in
        } else {
            fade_out
        };
        let rate = if rate.is_finite() {
            rate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.value = (self.value + (self.target - self.value) * rate).clamp(0.0, 1.0);
        self.target = 0.0;
    }
}

impl Fixture for Light {
    fn position(&self) -> Point3 {
        self.position
    }

    fn set_brightness_influence(&mut self, intensity: f64) {
        if intensity.is_finite() {
            self.target = self.target.max(intensity.clamp(0.0, 1.0));
        }
    }
}
