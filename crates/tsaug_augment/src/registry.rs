//! Construction of augmenters from name/keyword-argument records.
//!
//! Configuration loaders hand the engine ordered `(name, kwargs)` records;
//! this module turns each record into a boxed [`Augmenter`], rejecting
//! unknown names, unknown enumeration strings, unknown keyword arguments,
//! and out-of-range parameters with
//! [`Configuration`](tsaug_core::CoreError::Configuration) errors.
//!
//! Dispatch is an exhaustive match over the closed variant set, so adding a
//! variant is a compile-time-checked change.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use tsaug_core::{CoreError, Result};

use crate::augmenter::Augmenter;
use crate::frequency::{AmplitudePhasePerturbation, FrequencyMask};
use crate::noise::{AddNoise, Drop, Jittering, NoiseKind};
use crate::pipeline::AugmentationPipeline;
use crate::scale::{Drift, Reverse, Rotation, Scaling};
use crate::segment::{Crop, Permutate, Repeat, Resize};
use crate::smooth::{Convolve, Pool, Quantize};
use crate::warp::RandomTimeWarp;

fn parse_kwargs<T: DeserializeOwned>(name: &str, kwargs: &Value) -> Result<T> {
    serde_json::from_value(kwargs.clone()).map_err(|e| {
        CoreError::Configuration(format!("invalid arguments for {name}: {e}"))
    })
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AddNoiseArgs {
    kind: String,
    bounds: Option<(f64, f64)>,
    mean: Option<f64>,
    std_dev: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConvolveArgs {
    window: String,
    size: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DriftArgs {
    max_drift: f64,
    n_drift_points: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JitteringArgs {
    std_dev: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DropArgs {
    percentage: f64,
    fill: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SizeArgs {
    size: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RotationArgs {
    anchor: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ScalingArgs {
    min_factor: f64,
    max_factor: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QuantizeArgs {
    levels: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PermutateArgs {
    window_size: usize,
    segment_size: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AppArgs {
    magnitude_std: f64,
    phase_std: f64,
    #[serde(default)]
    time_domain: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TimeWarpArgs {
    window_size: usize,
    min_speed_ratio: f64,
    max_speed_ratio: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RepeatArgs {
    times: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PoolArgs {
    kind: String,
    size: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FrequencyMaskArgs {
    mask_width: usize,
    #[serde(default)]
    time_domain: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NoArgs {}

/// Build the named augmenter from validated keyword arguments.
///
/// # Errors
///
/// Returns [`CoreError::Configuration`] for unknown augmenter names, unknown
/// or missing keyword arguments, unknown enumeration strings, and
/// out-of-range parameter values.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tsaug_augment::{build_augmenter, Augmenter};
///
/// let augmenter = build_augmenter("Crop", &json!({ "size": 20 }))?;
/// assert_eq!(augmenter.name(), "Crop");
/// # Ok::<(), tsaug_core::CoreError>(())
/// ```
pub fn build_augmenter(name: &str, kwargs: &Value) -> Result<Box<dyn Augmenter>> {
    match name {
        "AddNoise" => {
            let args: AddNoiseArgs = parse_kwargs(name, kwargs)?;
            let missing = |what: &str| {
                CoreError::Configuration(format!(
                    "AddNoise kind '{}' requires {what}",
                    args.kind
                ))
            };
            let augmenter = match args.kind.parse::<NoiseKind>()? {
                NoiseKind::Uniform => {
                    let (low, high) = args.bounds.ok_or_else(|| missing("bounds"))?;
                    AddNoise::uniform(low, high)?
                }
                NoiseKind::Gaussian => {
                    let mean = args.mean.ok_or_else(|| missing("mean"))?;
                    let std_dev = args.std_dev.ok_or_else(|| missing("std_dev"))?;
                    AddNoise::gaussian(mean, std_dev)?
                }
                NoiseKind::Spike => {
                    let (low, high) = args.bounds.ok_or_else(|| missing("bounds"))?;
                    AddNoise::spike(low, high)?
                }
                NoiseKind::Slope => {
                    let (low, high) = args.bounds.ok_or_else(|| missing("bounds"))?;
                    AddNoise::slope(low, high)?
                }
            };
            Ok(Box::new(augmenter))
        }
        "Convolve" => {
            let args: ConvolveArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Convolve::new(args.window.parse()?, args.size)?))
        }
        "Drift" => {
            let args: DriftArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Drift::new(args.max_drift, args.n_drift_points)?))
        }
        "Jittering" => {
            let args: JitteringArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Jittering::new(args.std_dev)?))
        }
        "Drop" => {
            let args: DropArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Drop::new(args.percentage, args.fill)?))
        }
        "Crop" => {
            let args: SizeArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Crop::new(args.size)?))
        }
        "Rotation" => {
            let args: RotationArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Rotation::new(args.anchor)?))
        }
        "Scaling" => {
            let args: ScalingArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Scaling::new(args.min_factor, args.max_factor)?))
        }
        "Quantize" => {
            let args: QuantizeArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Quantize::new(args.levels)?))
        }
        "Reverse" => {
            let _args: NoArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Reverse::new()))
        }
        "Permutate" => {
            let args: PermutateArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Permutate::new(args.window_size, args.segment_size)?))
        }
        "AmplitudePhasePerturbation" => {
            let args: AppArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(AmplitudePhasePerturbation::new(
                args.magnitude_std,
                args.phase_std,
                args.time_domain,
            )?))
        }
        "RandomTimeWarp" => {
            let args: TimeWarpArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(RandomTimeWarp::new(
                args.window_size,
                (args.min_speed_ratio, args.max_speed_ratio),
            )?))
        }
        "Repeat" => {
            let args: RepeatArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Repeat::new(args.times)?))
        }
        "Pool" => {
            let args: PoolArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Pool::new(args.kind.parse()?, args.size)?))
        }
        "Resize" => {
            let args: SizeArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(Resize::new(args.size)?))
        }
        "FrequencyMask" => {
            let args: FrequencyMaskArgs = parse_kwargs(name, kwargs)?;
            Ok(Box::new(FrequencyMask::new(args.mask_width, args.time_domain)?))
        }
        other => Err(CoreError::Configuration(format!(
            "unknown augmenter '{other}'"
        ))),
    }
}

/// Build a pipeline from ordered `(name, kwargs)` records.
///
/// Record order becomes stage order. Any invalid record fails the whole
/// build before a pipeline exists.
///
/// # Errors
///
/// Propagates [`build_augmenter`] errors.
pub fn build_pipeline(records: &[(String, Value)]) -> Result<AugmentationPipeline> {
    let mut pipeline = AugmentationPipeline::new();
    for (name, kwargs) in records {
        pipeline = pipeline.add_boxed(build_augmenter(name, kwargs)?);
    }
    Ok(pipeline)
}
