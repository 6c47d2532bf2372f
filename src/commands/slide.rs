//! Slide command implementation
//!
//! Replays a drag of one slider handle across a track of a given width, the
//! way a browser would deliver the events, and applies the committed
//! interval to the catalog.

use super::{Context, Result, apply_filter_args};
use crate::VitrineError;
use crate::cli::SlideArgs;
use crate::filters::FilterEngine;
use crate::output::{OutputWriter, format_interval};
use crate::slider::{RangeSlider, SliderChange, TrackRect};

/// Drag a handle through the given positions and release it at the last
///
/// # Errors
///
/// Returns `VitrineError` if the catalog cannot be loaded, a filter value is
/// invalid, or the track width is not positive.
pub fn execute(args: &SlideArgs, ctx: &Context, output: &dyn OutputWriter) -> Result<()> {
    if args.width.is_nan() || args.width <= 0.0 {
        return Err(VitrineError::InvalidInput(format!(
            "Track width must be positive, got {}",
            args.width
        )));
    }

    let mut engine = ctx.engine(args.scope.scope())?;
    apply_filter_args(&mut engine, &args.filters)?;

    let committed = replay(&mut engine, args, ctx, output);

    if !ctx.quiet {
        match committed {
            Some(change) => output.success(&format!(
                "Committed {} ({} products)",
                format_interval(change.interval, ctx.symbol()),
                engine.filtered_products().len()
            )),
            None => output.warning("The drag did not commit an interval"),
        }
    } else if let Some(change) = committed {
        output.write(&format!("{} {}", change.interval.low, change.interval.high));
    }
    Ok(())
}

/// Feed the drag to a slider bound to `engine`, returning the committed change
fn replay(
    engine: &mut FilterEngine,
    args: &SlideArgs,
    ctx: &Context,
    output: &dyn OutputWriter,
) -> Option<SliderChange> {
    let options = engine.options();
    let step = ctx.config.slider_step.unwrap_or(options.slider_step);
    let mut slider = RangeSlider::new(options.min_price, options.max_price, engine.price_interval(), step);
    slider.set_track(TrackRect::new(args.left, args.width));

    let (&release, moves) = args.positions.split_last()?;
    let started = if args.touch {
        slider.touch_start(args.handle, &[moves.first().copied().unwrap_or(release)])
    } else {
        slider.pointer_down(args.handle)
    };
    if !started {
        return None;
    }

    for &x in moves {
        let change = if args.touch {
            slider.touch_move(&[x])
        } else {
            slider.pointer_move(x)
        };
        if let Some(change) = change
            && !ctx.quiet
        {
            output.info(&format!("  x={x}: {}", format_interval(change.interval, ctx.symbol())));
        }
    }

    let change = if args.touch {
        slider.touch_end(&[release])
    } else {
        slider.pointer_up(release)
    }?;
    change.apply(engine);
    Some(change)
}
