//! Pipeline driver
//!
//! A single straight-line run: read input lines, normalize, tally, build
//! renderer options, generate, save. No retries, no loops; any failure
//! aborts the run and propagates to the caller.

use crate::config::Config;
use crate::error::CloudError;
use crate::{mask, render, text};
use std::fs;
use std::path::PathBuf;

/// Run the whole pipeline and return the path of the written image.
pub fn run(config: &Config) -> Result<PathBuf, CloudError> {
    config.validate()?;

    let raw = fs::read_to_string(&config.input_path)
        .map_err(|e| CloudError::resource(&config.input_path, e))?;
    let lines: Vec<String> = raw
        .lines()
        .map(|line| text::normalize::apply(line, config))
        .collect();
    tracing::info!(
        "Read {} lines from {}",
        lines.len(),
        config.input_path.display()
    );

    if config.debug {
        tracing::debug!("Normalized lines: {:?}", lines);
    }

    let counts = text::count::tally(lines);

    if config.debug {
        tracing::debug!("Count of unique lines: {:?}", counts);
    }

    let options = build_options(config)?;
    let cloud = render::generate(&options, &counts)?;

    cloud
        .save(&config.output_path)
        .map_err(|e| CloudError::resource(&config.output_path, e))?;

    Ok(config.output_path.clone())
}

/// Translate the flat configuration into immutable renderer options,
/// loading the font and preparing the mask along the way.
fn build_options(config: &Config) -> Result<render::RenderOptions, CloudError> {
    let font_data = if config.use_custom_font {
        render::fonts::load(&config.font_path)?
    } else {
        render::fonts::load_default()?
    };

    let mut options = render::RenderOptions::new(config.width, config.height, font_data);

    if config.background_transparent {
        options = options.transparent();
    } else {
        let color = render::parse_color(&config.background_color).ok_or_else(|| {
            CloudError::Config(format!(
                "Unknown background color {:?}",
                config.background_color
            ))
        })?;
        options = options.background(color);
    }

    if config.use_custom_mask {
        let prepared = mask::prepare(&config.mask_path, config.width, config.height)?;
        options = options.mask(prepared);
    }

    Ok(options)
}
