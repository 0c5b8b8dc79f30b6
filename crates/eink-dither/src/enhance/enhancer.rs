//! Fixed-order enhancement pipeline.
//!
//! [`Enhancer`] turns [`EnhanceOptions`] into an ordered list of [`Stage`]s
//! and folds a raster through them. Stages whose factor is exactly `1.0`
//! are left out because the blend is an identity at that factor.

use super::options::EnhanceOptions;
use super::stages;
use crate::raster::Raster;

/// One enhancement step and its scalar factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    Invert,
    Brightness(f32),
    Contrast(f32),
    Saturation(f32),
    Sharpness(f32),
}

impl Stage {
    /// Run this stage on `input`, producing a new raster.
    pub fn apply(&self, input: &Raster) -> Raster {
        match *self {
            Stage::Invert => stages::invert(input),
            Stage::Brightness(f) => stages::brightness(input, f),
            Stage::Contrast(f) => stages::contrast(input, f),
            Stage::Saturation(f) => stages::saturation(input, f),
            Stage::Sharpness(f) => stages::sharpness(input, f),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Invert => "invert",
            Stage::Brightness(_) => "brightness",
            Stage::Contrast(_) => "contrast",
            Stage::Saturation(_) => "saturation",
            Stage::Sharpness(_) => "sharpness",
        }
    }
}

/// Applies the enhancement stages in panel order.
///
/// # Example
///
/// ```
/// use eink_dither::{EnhanceOptions, Enhancer, Raster, Rgb, Stage};
///
/// let enhancer = Enhancer::new(EnhanceOptions::new().invert(true).contrast(1.5));
/// assert_eq!(enhancer.stages(), &[Stage::Invert, Stage::Contrast(1.5)]);
///
/// let out = enhancer.process(&Raster::filled(2, 2, Rgb::BLACK));
/// assert_eq!(out.pixel(0, 0), Rgb::WHITE);
/// ```
#[derive(Debug, Clone)]
pub struct Enhancer {
    stages: Vec<Stage>,
}

impl Enhancer {
    pub fn new(options: EnhanceOptions) -> Self {
        let mut stages = Vec::with_capacity(5);
        if options.invert {
            stages.push(Stage::Invert);
        }
        // Order is fixed: brightness, contrast, saturation, sharpness
        let factors = [
            Stage::Brightness(options.brightness),
            Stage::Contrast(options.contrast),
            Stage::Saturation(options.saturation),
            Stage::Sharpness(options.sharpness),
        ];
        stages.extend(factors.into_iter().filter(|stage| !is_identity(stage)));
        Self { stages }
    }

    /// The stages this enhancer will run, in order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Run every stage over `input`.
    pub fn process(&self, input: &Raster) -> Raster {
        match self.stages.split_first() {
            None => input.clone(),
            Some((first, rest)) => rest
                .iter()
                .fold(first.apply(input), |raster, stage| stage.apply(&raster)),
        }
    }
}

fn is_identity(stage: &Stage) -> bool {
    match *stage {
        Stage::Invert => false,
        Stage::Brightness(f)
        | Stage::Contrast(f)
        | Stage::Saturation(f)
        | Stage::Sharpness(f) => f == 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn gradient(width: usize, height: usize) -> Raster {
        let pixels = (0..width * height)
            .map(|i| {
                let v = (i * 255 / (width * height - 1)) as u8;
                Rgb::new(v, 255 - v, v / 2)
            })
            .collect();
        Raster::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_default_options_have_no_stages() {
        let enhancer = Enhancer::new(EnhanceOptions::default());
        assert!(enhancer.stages().is_empty());
        let input = gradient(4, 4);
        assert_eq!(enhancer.process(&input), input);
    }

    #[test]
    fn test_stage_order_is_fixed() {
        let options = EnhanceOptions::new()
            .sharpness(2.0)
            .saturation(0.5)
            .contrast(1.2)
            .brightness(0.9)
            .invert(true);
        let enhancer = Enhancer::new(options);
        let names: Vec<_> = enhancer.stages().iter().map(Stage::name).collect();
        assert_eq!(
            names,
            ["invert", "brightness", "contrast", "saturation", "sharpness"]
        );
    }

    #[test]
    fn test_identity_factors_are_skipped() {
        let enhancer = Enhancer::new(EnhanceOptions::new().saturation(0.0));
        assert_eq!(enhancer.stages(), &[Stage::Saturation(0.0)]);
    }

    #[test]
    fn test_process_matches_manual_fold() {
        let input = gradient(6, 5);
        let options = EnhanceOptions::new()
            .invert(true)
            .brightness(1.1)
            .contrast(1.3)
            .saturation(1.4)
            .sharpness(1.5);

        let expected = stages::sharpness(
            &stages::saturation(
                &stages::contrast(&stages::brightness(&stages::invert(&input), 1.1), 1.3),
                1.4,
            ),
            1.5,
        );

        assert_eq!(Enhancer::new(options).process(&input), expected);
    }

    #[test]
    fn test_order_matters() {
        // Brightness before contrast differs from contrast before brightness
        let input = gradient(5, 5);
        let forward = stages::contrast(&stages::brightness(&input, 0.5), 2.0);
        let reversed = stages::brightness(&stages::contrast(&input, 2.0), 0.5);
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_process_does_not_touch_input() {
        let input = gradient(4, 4);
        let copy = input.clone();
        let _ = Enhancer::new(EnhanceOptions::new().invert(true)).process(&input);
        assert_eq!(input, copy);
    }
}
