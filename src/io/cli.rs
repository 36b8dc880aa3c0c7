//! Command-line interface for converting one texture into a seamless one

use crate::algorithm::executor::{SeamConfig, TextureSeamer};
use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::Result;
use crate::io::image::{load_texture, save_png};
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "convert")]
#[command(author, about = "Make a texture tile seamlessly by blending its edges")]
/// Command-line arguments for the seamless texture converter
pub struct Cli {
    /// Input image file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Runs the conversion described by the command-line arguments
pub struct FileProcessor {
    cli: Cli,
    config: SeamConfig,
}

impl FileProcessor {
    /// Create a processor using the default blend geometry
    pub fn new(cli: Cli) -> Self {
        Self::with_config(cli, SeamConfig::default())
    }

    /// Create a processor with an explicit blend geometry
    pub const fn with_config(cli: Cli, config: SeamConfig) -> Self {
        Self { cli, config }
    }

    /// Convert the input file, returning the path that was written
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be decoded, is too small, or the
    /// output cannot be written
    pub fn process(&self) -> Result<PathBuf> {
        make_seamless(&self.cli.input, &self.config)
    }
}

/// Where the seamless version of `input` is written
///
/// The suffix is appended to the whole path as given, so `tiles/brick.jpg`
/// maps to `tiles/brick.jpg_seamless.png`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(OUTPUT_SUFFIX);
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}

/// Load `input`, blend its seams and write the result next to it
///
/// Nothing is written unless the whole transform succeeds.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The input cannot be read or decoded
/// - The image is smaller than the configuration allows
/// - The output file cannot be written
pub fn make_seamless<P: AsRef<Path>>(input: P, config: &SeamConfig) -> Result<PathBuf> {
    let input = input.as_ref();
    let start_time = Instant::now();
    let seamer = TextureSeamer::new(*config)?;

    let texture = load_texture(input)?;
    debug!(
        "Decoded '{}' as {}x{} {:?}",
        input.display(),
        texture.width(),
        texture.height(),
        texture.layout()
    );

    let seamless = seamer.apply(&texture)?;

    let output = output_path_for(input);
    save_png(&seamless, &output)?;
    info!(
        "Wrote '{}' in {:.2?}",
        output.display(),
        start_time.elapsed()
    );

    Ok(output)
}
