mod bitmap;

use std::path::PathBuf;

use ::log::{info, warn, LevelFilter};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use spritefx_core::effect::{
    BlackAndWhite, ChromaKey, CopyPixel, DissolveHalfTint, Ghost, Inverse, Silhouette, SubstituteFade, Substitution,
};
use spritefx_core::{draw_sprite, BufferSurface, Color, Effect, Flip, Surface};
use spritefx_geom::Vector2;

/// Tool for drawing sprites with pixel effects.
#[derive(Parser, Debug)]
#[clap(version)]
struct SpriteFxCli {
    #[clap(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    Render(RenderArgs),
}

/// Draws a sprite onto a background and writes the result.
#[derive(Args, Debug)]
struct RenderArgs {
    /// The sprite (BMP).
    #[clap(long)]
    sprite: PathBuf,
    /// The target output file (BMP).
    #[clap(long, short = 'o')]
    out: PathBuf,
    /// The image to draw onto (BMP). Without it, a blank surface is used.
    #[clap(long)]
    background: Option<PathBuf>,
    /// The width of the blank surface. Defaults to the sprite width.
    #[clap(long, conflicts_with = "background")]
    width: Option<u16>,
    /// The height of the blank surface. Defaults to the sprite height.
    #[clap(long, conflicts_with = "background")]
    height: Option<u16>,
    /// The color of the blank surface (RRGGBB). Defaults to black.
    #[clap(long, conflicts_with = "background")]
    clear: Option<Color>,
    /// The X-coordinate of the top-left corner of the sprite.
    #[clap(long, default_value = "0", allow_hyphen_values = true)]
    x: i32,
    /// The Y-coordinate of the top-left corner of the sprite.
    #[clap(long, default_value = "0", allow_hyphen_values = true)]
    y: i32,
    /// Mirrors the sprite horizontally.
    #[clap(long)]
    hflip: bool,
    /// Mirrors the sprite vertically.
    #[clap(long)]
    vflip: bool,
    /// Increases the log output (once for debug, twice for trace).
    #[clap(short, long, parse(from_occurrences))]
    verbose: u64,
    #[clap(subcommand)]
    effect: EffectCommand,
}

/// The effect to draw with.
#[derive(Subcommand, Debug)]
enum EffectCommand {
    /// Copies every pixel.
    Copy,
    /// Skips pixels of the key color.
    Chroma(KeyArgs),
    /// Replaces pixels of the key color.
    Substitution(SubstitutionArgs),
    /// Fills every pixel that is not of the key color.
    Silhouette(SilhouetteArgs),
    /// Averages with the background.
    Ghost(KeyArgs),
    /// Draws tinted horizontal stripes.
    Dissolve(DissolveArgs),
    /// Blends a color over the sprite.
    Fade(FadeArgs),
    /// Draws in grayscale.
    BlackAndWhite(KeyArgs),
    /// Inverts the background under the sprite.
    Inverse(KeyArgs),
}

#[derive(Args, Debug)]
struct KeyArgs {
    /// The transparent color (RRGGBB).
    #[clap(long, default_value = "FF00FF")]
    key: Color,
}

#[derive(Args, Debug)]
struct SubstitutionArgs {
    #[clap(flatten)]
    key: KeyArgs,
    /// The color that replaces the key color (RRGGBB).
    #[clap(long)]
    substitute: Color,
}

#[derive(Args, Debug)]
struct SilhouetteArgs {
    #[clap(flatten)]
    key: KeyArgs,
    /// The fill color (RRGGBB).
    #[clap(long)]
    fill: Color,
}

#[derive(Args, Debug)]
struct DissolveArgs {
    #[clap(flatten)]
    key: KeyArgs,
    /// The tint color (RRGGBB).
    #[clap(long)]
    tint: Color,
    /// The fraction of every band that is drawn, in [0, 1].
    #[clap(long)]
    percent: f32,
}

#[derive(Args, Debug)]
struct FadeArgs {
    #[clap(flatten)]
    key: KeyArgs,
    /// The color to blend over the sprite (RRGGBB).
    #[clap(long)]
    substitute: Color,
    /// The opacity of the blended color, in [0, 1].
    #[clap(long)]
    opacity: f32,
}

impl EffectCommand {
    fn to_effect(&self) -> Effect {
        match self {
            EffectCommand::Copy => CopyPixel.into(),
            EffectCommand::Chroma(args) => ChromaKey::new(args.key).into(),
            EffectCommand::Substitution(args) => Substitution::new(args.key.key, args.substitute).into(),
            EffectCommand::Silhouette(args) => Silhouette::new(args.key.key, args.fill).into(),
            EffectCommand::Ghost(args) => Ghost::new(args.key).into(),
            EffectCommand::Dissolve(args) => DissolveHalfTint::new(args.key.key, args.tint, args.percent).into(),
            EffectCommand::Fade(args) => SubstituteFade::new(args.key.key, args.substitute, args.opacity).into(),
            EffectCommand::BlackAndWhite(args) => BlackAndWhite::new(args.key).into(),
            EffectCommand::Inverse(args) => Inverse::new(args.key).into(),
        }
    }
}

fn render(args: &RenderArgs) -> Result<()> {
    let sprite = bitmap::load(&args.sprite)?;
    let mut dest = match &args.background {
        Some(path) => bitmap::load(path)?,
        None => {
            let size = sprite.size();
            let width = args.width.map(i32::from).unwrap_or(size.x);
            let height = args.height.map(i32::from).unwrap_or(size.y);
            BufferSurface::new(width, height, args.clear.unwrap_or(Color::BLACK))
        }
    };

    let effect = args.effect.to_effect();
    let position = Vector2::new(args.x, args.y);
    let flip = Flip::new(args.hflip, args.vflip);
    info!("Drawing {} at {} onto {} surface with {:?}.", args.sprite.display(), position, dest.size(), effect);

    let clip = dest.rect();
    let count = draw_sprite(&mut dest, position, sprite.rect(), clip, &sprite, &effect, flip);
    if count == 0 {
        warn!("The sprite is not visible at {}.", position);
    } else {
        info!("Processed {} pixels.", count);
    }

    bitmap::save(&dest, &args.out)?;
    info!("Wrote output file: {}", args.out.display());
    Ok(())
}

fn init_logger(verbosity: u64) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Off)
        .with_module_level(env!("CARGO_CRATE_NAME"), level)
        .with_module_level("spritefx_core", level)
        .init()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli_args: SpriteFxCli = SpriteFxCli::parse();

    match cli_args.command {
        CliCommand::Render(args) => {
            init_logger(args.verbose)?;
            render(&args)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod test_cli {
    use std::path::PathBuf;

    use clap::Parser;
    use spritefx_core::effect::{ChromaKey, CopyPixel, DissolveHalfTint, Substitution};
    use spritefx_core::{BufferSurface, Color, Effect, Surface, SurfaceMut};
    use spritefx_geom::Vector2;

    use super::{bitmap, render, CliCommand, RenderArgs, SpriteFxCli};

    fn parse(args: &[&str]) -> RenderArgs {
        let mut all = vec!["spritefx", "render", "--sprite", "in.bmp", "--out", "out.bmp"];
        all.extend_from_slice(args);
        match SpriteFxCli::try_parse_from(all).unwrap().command {
            CliCommand::Render(args) => args,
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("spritefx-{}-{}.bmp", std::process::id(), name))
    }

    #[test]
    fn test_effect_args() {
        assert_eq!(Effect::from(CopyPixel), parse(&["copy"]).effect.to_effect());
        assert_eq!(Effect::from(ChromaKey::new(Color::MAGENTA)), parse(&["chroma"]).effect.to_effect());
        assert_eq!(
            Effect::from(ChromaKey::new(Color::GREEN)),
            parse(&["chroma", "--key", "#00FF00"]).effect.to_effect()
        );
        assert_eq!(
            Effect::from(Substitution::new(Color::MAGENTA, Color::BLUE)),
            parse(&["substitution", "--substitute", "0000ff"]).effect.to_effect()
        );
        assert_eq!(
            Effect::from(DissolveHalfTint::new(Color::BLACK, Color::RED, 0.5)),
            parse(&["dissolve", "--key", "000000", "--tint", "FF0000", "--percent", "0.5"]).effect.to_effect()
        );
    }

    #[test]
    fn test_render_args() {
        let args = parse(&["--x", "-3", "--y=4", "--hflip", "-vv", "copy"]);
        assert_eq!(-3, args.x);
        assert_eq!(4, args.y);
        assert!(args.hflip);
        assert!(!args.vflip);
        assert_eq!(2, args.verbose);
        assert_eq!(None, args.background);
    }

    #[test]
    fn test_invalid_args() {
        let invalid = |args: &[&str]| {
            let mut all = vec!["spritefx", "render", "--sprite", "in.bmp", "--out", "out.bmp"];
            all.extend_from_slice(args);
            SpriteFxCli::try_parse_from(all).is_err()
        };
        assert!(invalid(&["chroma", "--key", "FF00"]));
        assert!(invalid(&["substitution"]));
        assert!(invalid(&["--background", "bg.bmp", "--width", "4", "copy"]));
        assert!(invalid(&[]));
    }

    #[test]
    fn test_render() {
        let sprite_path = temp_path("render-sprite");
        let out_path = temp_path("render-out");

        let mut sprite = BufferSurface::new(2, 2, Color::MAGENTA);
        sprite.put_pixel(0, 0, Color::RED);
        sprite.put_pixel(1, 1, Color::BLUE);
        bitmap::save(&sprite, &sprite_path).unwrap();

        let mut args = parse(&["--width", "4", "--height", "3", "--clear", "FFFFFF", "--x=1", "--y=1", "chroma"]);
        args.sprite = sprite_path.clone();
        args.out = out_path.clone();
        render(&args).unwrap();

        let out = bitmap::load(&out_path).unwrap();
        assert_eq!(Vector2::new(4, 3), out.size());
        assert_eq!(Color::RED, out.pixel(1, 1));
        assert_eq!(Color::WHITE, out.pixel(2, 1));
        assert_eq!(Color::WHITE, out.pixel(1, 2));
        assert_eq!(Color::BLUE, out.pixel(2, 2));
        assert_eq!(Color::WHITE, out.pixel(0, 0));

        std::fs::remove_file(sprite_path).unwrap();
        std::fs::remove_file(out_path).unwrap();
    }
}
