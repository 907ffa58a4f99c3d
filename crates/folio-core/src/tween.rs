//! Narrow tweening interface.
//!
//! Effects describe *what* to animate as a [`Tween`]; a [`Tweener`]
//! implementation decides *how*. The browser client animates with CSS
//! transitions, tests record calls.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Easing curve applied to a tween's normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Cubic ease-out.
    Power2Out,
    /// Quartic ease-out.
    Power3Out,
    /// Overshoots past the target before settling (`overshoot` ≈ 1.7).
    BackOut { overshoot: f32 },
}

impl Easing {
    pub const BACK_OUT: Easing = Easing::BackOut { overshoot: 1.7 };

    /// Applies the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::BackOut { overshoot } => {
                let s = *overshoot;
                let u = t - 1.0;
                u * u * ((s + 1.0) * u + s) + 1.0
            }
        }
    }

    /// CSS `transition-timing-function` approximating this curve.
    pub fn css(&self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::EaseIn => "ease-in".to_string(),
            Self::EaseOut => "ease-out".to_string(),
            Self::EaseInOut => "ease-in-out".to_string(),
            Self::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)".to_string(),
            Self::Power3Out => "cubic-bezier(0.25, 1, 0.5, 1)".to_string(),
            Self::BackOut { overshoot } => {
                // Control point height grows with the overshoot amount.
                let y1 = 1.0 + overshoot / 3.0;
                format!("cubic-bezier(0.34, {y1:.2}, 0.64, 1)")
            }
        }
    }
}

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend: `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let value = f64::from(a) * (1.0 - t) + f64::from(b) * t;
            // Clamped to the u8 range above.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let value = value.round().clamp(0.0, 255.0) as u8;
            value
        };
        Rgb::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Animatable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenProperty {
    X,
    Y,
    Scale,
    SkewX,
    SkewY,
    Opacity,
    BackgroundColor,
    BorderColor,
}

impl TweenProperty {
    fn is_transform(self) -> bool {
        matches!(
            self,
            Self::X | Self::Y | Self::Scale | Self::SkewX | Self::SkewY
        )
    }
}

/// Target value of a property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TweenValue {
    Number(f64),
    Color(Rgb),
}

impl TweenValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Color(_) => None,
        }
    }
}

/// A set of property assignments, the unit every effect produces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TweenVars {
    values: BTreeMap<TweenProperty, TweenValue>,
}

impl TweenVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: TweenProperty, value: TweenValue) -> Self {
        self.values.insert(property, value);
        self
    }

    pub fn x(self, px: f64) -> Self {
        self.with(TweenProperty::X, TweenValue::Number(px))
    }

    pub fn y(self, px: f64) -> Self {
        self.with(TweenProperty::Y, TweenValue::Number(px))
    }

    pub fn scale(self, scale: f64) -> Self {
        self.with(TweenProperty::Scale, TweenValue::Number(scale))
    }

    pub fn skew_x(self, deg: f64) -> Self {
        self.with(TweenProperty::SkewX, TweenValue::Number(deg))
    }

    pub fn skew_y(self, deg: f64) -> Self {
        self.with(TweenProperty::SkewY, TweenValue::Number(deg))
    }

    pub fn opacity(self, opacity: f64) -> Self {
        self.with(TweenProperty::Opacity, TweenValue::Number(opacity))
    }

    pub fn background_color(self, color: Rgb) -> Self {
        self.with(TweenProperty::BackgroundColor, TweenValue::Color(color))
    }

    pub fn border_color(self, color: Rgb) -> Self {
        self.with(TweenProperty::BorderColor, TweenValue::Color(color))
    }

    pub fn get(&self, property: TweenProperty) -> Option<TweenValue> {
        self.values.get(&property).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TweenProperty, TweenValue)> + '_ {
        self.values.iter().map(|(p, v)| (*p, *v))
    }

    /// Renders the vars as CSS declarations.
    ///
    /// Transform components collapse into a single `transform` declaration
    /// in translate, scale, skew order.
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        let mut transform = Vec::new();
        let number = |p| self.get(p).and_then(|v| v.as_number());

        if self.values.keys().any(|p| p.is_transform()) {
            let x = number(TweenProperty::X).unwrap_or(0.0);
            let y = number(TweenProperty::Y).unwrap_or(0.0);
            transform.push(format!("translate({x}px, {y}px)"));
            if let Some(scale) = number(TweenProperty::Scale) {
                transform.push(format!("scale({scale})"));
            }
            let skew_x = number(TweenProperty::SkewX);
            let skew_y = number(TweenProperty::SkewY);
            if skew_x.is_some() || skew_y.is_some() {
                transform.push(format!(
                    "skew({}deg, {}deg)",
                    skew_x.unwrap_or(0.0),
                    skew_y.unwrap_or(0.0)
                ));
            }
            out.push(("transform", transform.join(" ")));
        }

        for (property, value) in self.iter() {
            let name = match property {
                TweenProperty::Opacity => "opacity",
                TweenProperty::BackgroundColor => "background-color",
                TweenProperty::BorderColor => "border-color",
                _ => continue,
            };
            let value = match value {
                TweenValue::Number(n) => n.to_string(),
                TweenValue::Color(c) => c.to_string(),
            };
            out.push((name, value));
        }
        out
    }
}

/// "Animate property set `vars` to its values over `duration` with `easing`."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub vars: TweenVars,
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(vars: TweenVars) -> Self {
        Self {
            vars,
            duration: 0.5,
            delay: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Engine that applies tweens to targets of type `T`.
pub trait Tweener<T: ?Sized> {
    /// Animates `target` towards `tween.vars`.
    fn to(&self, target: &T, tween: &Tween);

    /// Applies `vars` instantly.
    fn set(&self, target: &T, vars: &TweenVars);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_functions() {
        assert!((Easing::Linear.apply(0.5) - 0.5).abs() < 0.001);
        assert!((Easing::EaseIn.apply(0.5) - 0.25).abs() < 0.001);
        assert!((Easing::EaseOut.apply(0.5) - 0.75).abs() < 0.001);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 0.001);
        assert!((Easing::Power2Out.apply(0.5) - 0.875).abs() < 0.001);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::Power2Out,
            Easing::Power3Out,
            Easing::BACK_OUT,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-5, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BACK_OUT.apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_css_transform_composition() {
        let vars = TweenVars::new().scale(1.2).x(10.0).skew_x(2.0).opacity(0.5);
        let css = vars.css_declarations();
        assert_eq!(
            css[0],
            (
                "transform",
                "translate(10px, 0px) scale(1.2) skew(2deg, 0deg)".to_string()
            )
        );
        assert_eq!(css[1], ("opacity", "0.5".to_string()));
    }

    #[test]
    fn test_css_colors() {
        let vars = TweenVars::new().background_color(Rgb::new(0, 240, 255));
        assert_eq!(
            vars.css_declarations(),
            vec![("background-color", "rgb(0,240,255)".to_string())]
        );
    }

    #[test]
    fn test_rgb_mix() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Rgb::new(100, 50, 25));
        assert_eq!(a.mix(b, 7.0), b);
    }
}
