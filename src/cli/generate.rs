//! Generate command implementation.
//!
//! Resolves settings (defaults, then materials.yaml, then flags), averages
//! every catalog texture and writes the dataset in one go.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::manifest::{EmptyPolicy, Manifest, DEFAULT_OUTPUT, DEFAULT_TEXTURE_DIR};
use crate::output::{display_path, plural, Printer, Verbosity};
use crate::pipeline::{build_records, OnEmpty, PipelineEvent, PipelineOptions};
use crate::resolver::TextureResolver;
use crate::serialize::write_materials;
use crate::types::Colour;

/// Average block textures and write the colour dataset
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Directory of block texture PNGs
    #[arg(long)]
    pub textures: Option<PathBuf>,

    /// Output JSON file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Catalog table replacing the built-in block list
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Manifest file (default: ./materials.yaml if present). Relative paths
    /// inside it are resolved against the manifest's directory.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum alpha (0-255) for a pixel to count
    #[arg(long)]
    pub alpha_threshold: Option<u8>,

    /// What to do with textures that have no opaque pixels
    #[arg(long, value_enum)]
    pub on_empty: Option<EmptyPolicy>,

    /// Colour used for empty textures with `--on-empty fill`
    #[arg(long)]
    pub fill_colour: Option<Colour>,

    /// Report every averaged texture and rejected filename
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl GenerateArgs {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Effective settings for a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub textures: PathBuf,
    pub output: PathBuf,
    pub catalog: Option<PathBuf>,
    pub options: PipelineOptions,
}

impl GenerateSettings {
    /// Layer command-line flags over a manifest.
    pub fn resolve(args: &GenerateArgs, manifest: Manifest) -> Result<Self> {
        let on_empty = match args.on_empty.unwrap_or(manifest.on_empty) {
            EmptyPolicy::Error => OnEmpty::Error,
            EmptyPolicy::Skip => OnEmpty::Skip,
            EmptyPolicy::Fill => match args.fill_colour {
                Some(colour) => OnEmpty::Fill(colour),
                None => OnEmpty::Fill(manifest.effective_fill_colour()?),
            },
        };

        Ok(Self {
            textures: args
                .textures
                .clone()
                .or(manifest.textures)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEXTURE_DIR)),
            output: args
                .output
                .clone()
                .or(manifest.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            catalog: args.catalog.clone().or(manifest.catalog),
            options: PipelineOptions {
                alpha_threshold: args.alpha_threshold.unwrap_or(manifest.alpha_threshold),
                on_empty,
            },
        })
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::with_verbosity(args.verbosity());

    let manifest = match &args.config {
        Some(path) => Manifest::load(path)?,
        None => Manifest::discover(Path::new("."))?,
    };
    let settings = GenerateSettings::resolve(&args, manifest)?;

    generate(&settings, &printer)?;
    Ok(())
}

/// Run the pipeline with resolved settings. Returns the record count.
pub fn generate(settings: &GenerateSettings, printer: &Printer) -> Result<usize> {
    let catalog = match &settings.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };

    if catalog.is_empty() {
        printer.warning("Warning", "the catalog lists no blocks; the dataset will be empty");
    }

    let resolver = TextureResolver::scan(&settings.textures);
    printer.status(
        "Scanning",
        &format!(
            "{} ({}, {})",
            display_path(&settings.textures),
            plural(resolver.file_count(), "texture", "textures"),
            plural(catalog.len(), "block", "blocks"),
        ),
    );
    if resolver.file_count() == 0 {
        printer.warning("Warning", "no textures found; the dataset will be empty");
    }

    let records = build_records(&catalog, &resolver, &settings.options, |event| match event {
        PipelineEvent::Averaged { texture, colour } => {
            printer.detail("Averaged", &format!("{} {}", texture.label(), printer.dim(&colour.to_string())));
        }
        PipelineEvent::Rejected { block_id, rejection } => {
            printer.detail(
                "Skipped",
                &format!("{} for {} ({})", rejection.file_name, block_id, rejection.reason),
            );
        }
        PipelineEvent::SkippedEmpty { texture } => {
            printer.warning("Empty", &format!("{} has no opaque pixels, skipped", display_path(&texture.path)));
        }
        PipelineEvent::FilledEmpty { texture, colour } => {
            printer.warning(
                "Empty",
                &format!("{} has no opaque pixels, filled with {}", display_path(&texture.path), colour),
            );
        }
    })?;

    write_materials(&settings.output, &records)?;
    printer.status(
        "Wrote",
        &format!("{} to {}", plural(records.len(), "record", "records"), display_path(&settings.output)),
    );

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaterialsError;
    use crate::serialize::read_materials;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn write_solid(dir: &Path, name: &str, rgba: [u8; 4]) {
        RgbaImage::from_pixel(16, 16, Rgba(rgba))
            .save(dir.join(name))
            .unwrap();
    }

    fn quiet() -> Printer {
        Printer::with_verbosity(Verbosity::Quiet)
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = GenerateSettings::resolve(&GenerateArgs::default(), Manifest::default()).unwrap();

        assert_eq!(
            settings.textures,
            PathBuf::from("minecraft/1.20.1/assets/minecraft/textures/block")
        );
        assert_eq!(settings.output, PathBuf::from("materials.json"));
        assert_eq!(settings.catalog, None);
        assert_eq!(settings.options, PipelineOptions::default());
    }

    #[test]
    fn test_flags_override_manifest() {
        let manifest = Manifest::parse(
            "textures: from-manifest\noutput: manifest.json\nalpha_threshold: 10\non_empty: skip\n",
        )
        .unwrap();
        let args = GenerateArgs {
            output: Some(PathBuf::from("flag.json")),
            alpha_threshold: Some(200),
            ..Default::default()
        };

        let settings = GenerateSettings::resolve(&args, manifest).unwrap();

        assert_eq!(settings.textures, PathBuf::from("from-manifest"));
        assert_eq!(settings.output, PathBuf::from("flag.json"));
        assert_eq!(settings.options.alpha_threshold, 200);
        assert_eq!(settings.options.on_empty, OnEmpty::Skip);
    }

    #[test]
    fn test_fill_colour_precedence() {
        let manifest = Manifest::parse("on_empty: fill\nfill_colour: \"#000000\"\n").unwrap();

        let settings = GenerateSettings::resolve(&GenerateArgs::default(), manifest.clone()).unwrap();
        assert_eq!(settings.options.on_empty, OnEmpty::Fill(Colour::BLACK));

        let args = GenerateArgs {
            fill_colour: Some(Colour::WHITE),
            ..Default::default()
        };
        let settings = GenerateSettings::resolve(&args, manifest).unwrap();
        assert_eq!(settings.options.on_empty, OnEmpty::Fill(Colour::WHITE));
    }

    #[test]
    fn test_generate_writes_dataset() {
        let dir = tempdir().unwrap();
        let textures = dir.path().join("block");
        fs::create_dir_all(&textures).unwrap();
        write_solid(&textures, "oak_log.png", [109, 85, 50, 255]);
        write_solid(&textures, "oak_log_top.png", [151, 121, 73, 255]);
        write_solid(&textures, "stone.png", [125, 125, 125, 255]);
        write_solid(&textures, "stone_bricks.png", [122, 121, 122, 255]);

        let settings = GenerateSettings {
            textures,
            output: dir.path().join("materials.json"),
            catalog: None,
            options: PipelineOptions::default(),
        };

        let count = generate(&settings, &quiet()).unwrap();
        let records = read_materials(&settings.output).unwrap();

        // oak_log, oak_log:top, stone, stone_bricks
        assert_eq!(count, 4);
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].block_id, "oak_log");
        assert_eq!(records[1].part.as_deref(), Some("top"));
        assert_eq!(records[2].block_id, "stone");
        assert_eq!(records[3].block_id, "stone_bricks");
        assert_eq!(records[3].part, None);
    }

    #[test]
    fn test_generate_failure_leaves_previous_output() {
        let dir = tempdir().unwrap();
        let textures = dir.path().join("block");
        fs::create_dir_all(&textures).unwrap();
        fs::write(textures.join("dirt.png"), b"not an image").unwrap();

        let output = dir.path().join("materials.json");
        fs::write(&output, "previous").unwrap();

        let settings = GenerateSettings {
            textures,
            output: output.clone(),
            catalog: None,
            options: PipelineOptions::default(),
        };

        let err = generate(&settings, &quiet()).unwrap_err();
        assert!(matches!(err, MaterialsError::ImageDecode { .. }));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[cfg(unix)]
    #[test]
    fn test_generate_fails_on_dangling_texture_link() {
        let dir = tempdir().unwrap();
        let textures = dir.path().join("block");
        fs::create_dir_all(&textures).unwrap();
        write_solid(&textures, "dirt.png", [134, 96, 67, 255]);
        std::os::unix::fs::symlink(dir.path().join("missing.png"), textures.join("stone.png")).unwrap();

        let settings = GenerateSettings {
            textures: textures.clone(),
            output: dir.path().join("materials.json"),
            catalog: None,
            options: PipelineOptions::default(),
        };

        match generate(&settings, &quiet()).unwrap_err() {
            MaterialsError::ImageDecode { path, .. } => assert_eq!(path, textures.join("stone.png")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!settings.output.exists());
    }

    #[test]
    fn test_generate_with_empty_catalog() {
        let dir = tempdir().unwrap();
        let textures = dir.path().join("block");
        fs::create_dir_all(&textures).unwrap();
        write_solid(&textures, "stone.png", [125, 125, 125, 255]);

        let catalog = dir.path().join("blocks.txt");
        fs::write(&catalog, "# nothing yet\n").unwrap();

        let settings = GenerateSettings {
            textures,
            output: dir.path().join("materials.json"),
            catalog: Some(catalog),
            options: PipelineOptions::default(),
        };

        assert_eq!(generate(&settings, &quiet()).unwrap(), 0);
        assert_eq!(fs::read_to_string(&settings.output).unwrap(), "[]\n");
    }

    #[test]
    fn test_run_with_relative_config_paths() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("project");
        let textures = project.join("tex");
        fs::create_dir_all(&textures).unwrap();
        write_solid(&textures, "sand.png", [219, 207, 163, 255]);
        fs::write(project.join("blocks.txt"), "sand uniform\n").unwrap();

        let config = project.join("materials.yaml");
        fs::write(&config, "textures: tex\noutput: out/materials.json\ncatalog: blocks.txt\n").unwrap();

        run(GenerateArgs {
            config: Some(config),
            quiet: true,
            ..Default::default()
        })
        .unwrap();

        let records = read_materials(&project.join("out/materials.json")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].block_id, "sand");
    }

    #[test]
    fn test_run_with_explicit_config() {
        let dir = tempdir().unwrap();
        let textures = dir.path().join("tex");
        fs::create_dir_all(&textures).unwrap();
        write_solid(&textures, "glass.png", [255, 255, 255, 0]);
        write_solid(&textures, "sand.png", [219, 207, 163, 255]);

        let catalog = dir.path().join("blocks.txt");
        fs::write(&catalog, "glass uniform\nsand uniform\n").unwrap();

        let output = dir.path().join("out.json");
        let config = dir.path().join("materials.yaml");
        fs::write(
            &config,
            format!(
                "textures: {}\noutput: {}\ncatalog: {}\non_empty: skip\n",
                textures.display(),
                output.display(),
                catalog.display()
            ),
        )
        .unwrap();

        run(GenerateArgs {
            config: Some(config),
            quiet: true,
            ..Default::default()
        })
        .unwrap();

        let records = read_materials(&output).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].block_id, "sand");
        assert_eq!(records[0].avg_color, Colour::rgb(219, 207, 163));
    }
}
