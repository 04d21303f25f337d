mod settings;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use roundview_core::compositing::circular_image_compositor::{
    CircularImageCompositor, RenderOutcome,
};
use roundview_core::io::domain::image_reader::ImageReader;
use roundview_core::io::domain::image_writer::ImageWriter;
use roundview_core::io::infrastructure::image_file_reader::ImageFileReader;
use roundview_core::io::infrastructure::image_file_writer::ImageFileWriter;
use roundview_core::pipeline::render_avatar_use_case::RenderAvatarUseCase;
use roundview_core::shared::color::Color;
use roundview_core::shared::constants::{IMAGE_EXTENSIONS, OUTPUT_EXTENSIONS};
use roundview_core::shared::view_geometry::{GeometryPolicy, ViewGeometry};

use settings::Settings;

/// Render an image clipped to a circle, with an optional ring border.
#[derive(Parser, Debug)]
#[command(name = "roundview")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file (png or tiff, to keep transparency).
    output: PathBuf,

    /// Square view size in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// View width in pixels (overrides --size).
    #[arg(long)]
    width: Option<u32>,

    /// View height in pixels (overrides --size).
    #[arg(long)]
    height: Option<u32>,

    /// Ring width in pixels (0 = no ring).
    #[arg(long)]
    border_width: Option<u32>,

    /// Ring color as #RRGGBB, #AARRGGBB or 0xAARRGGBB.
    #[arg(long)]
    border_color: Option<Color>,

    /// Store the effective size and border as defaults for later runs.
    #[arg(long)]
    save_defaults: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut settings = Settings::load();
    apply_overrides(&mut settings, &cli);
    if cli.save_defaults {
        let path = settings.save()?;
        log::info!("Saved defaults to {}", path.display());
    }

    let border = settings.border();
    let view = resolve_view(&cli, &settings);
    let reader: Box<dyn ImageReader> = Box::new(ImageFileReader::new());
    let writer: Box<dyn ImageWriter> = Box::new(ImageFileWriter::new());
    let compositor = CircularImageCompositor::new(border, GeometryPolicy::Live);

    let mut use_case = RenderAvatarUseCase::new(reader, writer, compositor);
    match use_case.execute(&cli.input, &cli.output, view)? {
        RenderOutcome::Drawn { radius } => {
            log::info!("Output written to {} (radius {radius})", cli.output.display())
        }
        RenderOutcome::SkippedNoRoom => log::warn!(
            "Border width {} leaves no room for the image; output is blank",
            border.width
        ),
        RenderOutcome::SkippedEmptyView => {
            return Err(format!("Nothing to draw: {} has no pixels", cli.input.display()).into())
        }
        RenderOutcome::SkippedNoImage => log::warn!("Output written without an image"),
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !has_extension(&cli.input, IMAGE_EXTENSIONS) {
        return Err(format!(
            "Unsupported input format: {} (expected one of: {})",
            cli.input.display(),
            IMAGE_EXTENSIONS.join(", ")
        )
        .into());
    }
    if !has_extension(&cli.output, OUTPUT_EXTENSIONS) {
        return Err(format!(
            "Output must be one of: {}, got {}",
            OUTPUT_EXTENSIONS.join(", "),
            cli.output.display()
        )
        .into());
    }
    for (name, value) in [("size", cli.size), ("width", cli.width), ("height", cli.height)] {
        if value == Some(0) {
            return Err(format!("--{name} must be positive").into());
        }
    }
    Ok(())
}

fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(width) = cli.border_width {
        settings.border_width = width;
    }
    if let Some(color) = cli.border_color {
        settings.border_color = color;
    }
    if let Some(size) = cli.size {
        settings.size = Some(size);
    }
}

/// `--width`/`--height` win over the square size; `None` means "fit the source".
fn resolve_view(cli: &Cli, settings: &Settings) -> Option<ViewGeometry> {
    let side = settings.size;
    match (cli.width.or(side), cli.height.or(side)) {
        (Some(width), Some(height)) => Some(ViewGeometry::new(width, height)),
        (Some(width), None) => Some(ViewGeometry::square(width)),
        (None, Some(height)) => Some(ViewGeometry::square(height)),
        (None, None) => None,
    }
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| allowed.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundview_core::shared::border::BorderSpec;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["roundview"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_border_color_parses_hex() {
        let cli = parse(&["in.png", "out.png", "--border-color", "#FF0000"]);
        assert_eq!(cli.border_color, Some(Color::from_rgba8(255, 0, 0, 255)));
    }

    #[test]
    fn test_invalid_border_color_is_rejected() {
        let result = Cli::try_parse_from(["roundview", "in.png", "out.png", "--border-color", "red"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_replace_settings() {
        let cli = parse(&["in.png", "out.png", "--border-width", "4", "--size", "64"]);
        let mut settings = Settings::default();
        apply_overrides(&mut settings, &cli);
        assert_eq!(settings.border(), BorderSpec::new(4, Color::WHITE));
        assert_eq!(settings.size, Some(64));
    }

    #[test]
    fn test_resolve_view_prefers_explicit_dimensions() {
        let cli = parse(&["in.png", "out.png", "--width", "120"]);
        let settings = Settings {
            size: Some(64),
            ..Settings::default()
        };
        assert_eq!(resolve_view(&cli, &settings), Some(ViewGeometry::new(120, 64)));
    }

    #[test]
    fn test_resolve_view_single_dimension_is_square() {
        let cli = parse(&["in.png", "out.png", "--height", "50"]);
        assert_eq!(
            resolve_view(&cli, &Settings::default()),
            Some(ViewGeometry::square(50))
        );
    }

    #[test]
    fn test_resolve_view_without_size_fits_source() {
        let cli = parse(&["in.png", "out.png"]);
        assert_eq!(resolve_view(&cli, &Settings::default()), None);
    }

    #[test]
    fn test_validate_rejects_jpeg_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        std::fs::write(&input, b"").unwrap();
        let cli = parse(&[input.to_str().unwrap(), "out.jpg"]);
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        std::fs::write(&input, b"").unwrap();
        let cli = parse(&[input.to_str().unwrap(), "out.png", "--size", "0"]);
        assert!(validate(&cli).unwrap_err().to_string().contains("--size"));
    }

    #[test]
    fn test_validate_rejects_missing_input() {
        let cli = parse(&["/nonexistent/in.png", "out.png"]);
        assert!(validate(&cli).unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_has_extension_is_case_insensitive() {
        assert!(has_extension(Path::new("a/B.PNG"), OUTPUT_EXTENSIONS));
        assert!(!has_extension(Path::new("noext"), OUTPUT_EXTENSIONS));
    }
}
