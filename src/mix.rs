use crate::{color::Component, math::weighted, models::Rgb, models::Rgba};

/// Default weight for [`mix_rgba_values`], an even mix.
pub const DEFAULT_MIX_WEIGHT: Component = 0.5;

/// Mix two colors, taking their alpha into account.
/// <https://sass-lang.com/documentation/modules/color#mix>
///
/// `weight` is the share of `first` in the channels. The difference in alpha
/// between the two colors pulls the channel weights towards the more opaque
/// color. The channels of the result are not rounded.
pub fn mix_rgba_values(first: &Rgba, second: &Rgba, weight: Component) -> Rgba {
    let w = 2.0 * weight - 1.0;
    let a = first.alpha - second.alpha;

    let w1 = ((if w * a == -1.0 { w } else { (w + a) / (1.0 + w * a) }) + 1.0) / 2.0;
    let w2 = 1.0 - w1;

    let (c1, c2) = (first.rgb, second.rgb);
    let rgb = Rgb::new(
        weighted(c1.red, w1, c2.red, w2),
        weighted(c1.green, w1, c2.green, w2),
        weighted(c1.blue, w1, c2.blue, w2),
    );

    let alpha = first.alpha * weight + second.alpha * (1.0 - weight);

    Rgba::new(rgb, alpha)
}
