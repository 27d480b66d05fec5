use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use base16_themer::backends::{ShellBackend, ThemeBackend, VimBackend};
use base16_themer::cli::{Args, Target};
use base16_themer::scheme::{scheme_slug, Base16Scheme, Palette};
use base16_themer::{config, preview};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let file = &args.file;
    if !file.to_string_lossy().ends_with(".json") {
        bail!("invalid base16 file {}; expecting json file", file.display());
    }

    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let scheme = Base16Scheme::from_json(&raw)
        .with_context(|| format!("failed to parse {}", file.display()))?;
    let palette = Palette::try_from(&scheme)
        .with_context(|| format!("invalid palette in {}", file.display()))?;
    debug!(name = %palette.name, author = %palette.author, "decoded palette");

    if args.preview {
        preview::print_preview(&palette, &mut std::io::stderr().lock())
            .context("failed to print preview")?;
    }

    if let Some(target) = args.print {
        let backend: &dyn ThemeBackend = match target {
            Target::Vim => &VimBackend,
            Target::Shell => &ShellBackend,
        };
        print!("{}", backend.serialize(&palette));
        return Ok(());
    }

    let cfg = config::load(args.config.as_deref())
        .context("load config")?
        .with_overrides(args.neovim_out.clone(), args.terminal_out.clone());
    let home = config::home_dir()?;
    let slug = scheme_slug(file);

    let neovim_dir = home.join(&cfg.neovim_out);
    let terminal_dir = home.join(&cfg.terminal_out);
    write_scheme(&VimBackend, "vim", &palette, &slug, &neovim_dir)?;
    write_scheme(&ShellBackend, "terminal", &palette, &slug, &terminal_dir)?;

    Ok(())
}

fn write_scheme(
    backend: &dyn ThemeBackend,
    label: &str,
    palette: &Palette,
    slug: &str,
    dir: &Path,
) -> Result<()> {
    let path = backend.install(palette, slug, dir)?;
    info!(backend = backend.name(), path = %path.display(), "wrote scheme");
    println!("wrote {label} scheme to {}", path.display());
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}
