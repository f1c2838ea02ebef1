//! SceneForge - command-line project editor
//!
//! Reads and writes versioned project JSON files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sceneforge_core::EditorConfig;
use sceneforge_editor::{ExportForm, ExportSession, LogNotifier, SimulatedExporter};
use sceneforge_scene::ops;
use sceneforge_scene::{
    AspectRatio, LayerOrderAction, OperationResult, ProjectFile, Quality, Resolution, Scene,
    VideoProject,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "sceneforge", version)]
struct Cli {
    /// Editor configuration JSON.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a project with one empty scene.
    New {
        file: PathBuf,
        #[arg(long)]
        title: String,
        #[arg(long, value_enum, default_value_t = Aspect::Portrait)]
        aspect: Aspect,
    },
    /// Print the scene and layer structure.
    Info { file: PathBuf },
    /// Append an empty scene.
    AddScene { file: PathBuf },
    /// Copy a scene, with new ids, right after it.
    DuplicateScene {
        file: PathBuf,
        #[arg(long)]
        index: usize,
    },
    /// Remove a scene. The last scene cannot be removed.
    DeleteScene {
        file: PathBuf,
        #[arg(long)]
        index: usize,
    },
    /// Move a layer within its scene's stack.
    Reorder {
        file: PathBuf,
        #[arg(long)]
        scene: usize,
        #[arg(long)]
        layer: Uuid,
        #[arg(long)]
        action: LayerOrderAction,
    },
    /// Estimate the export size.
    Estimate {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Res::P1080)]
        resolution: Res,
        #[arg(long, value_enum, default_value_t = Qual::High)]
        quality: Qual,
    },
    /// Run a simulated export.
    Export {
        file: PathBuf,
        /// Output directory reported in the result URI.
        #[arg(long)]
        out: String,
        #[arg(long, value_enum, default_value_t = Res::P1080)]
        resolution: Res,
        #[arg(long, value_enum, default_value_t = Qual::High)]
        quality: Qual,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Aspect {
    Landscape,
    Portrait,
    Square,
    Tall,
}

impl From<Aspect> for AspectRatio {
    fn from(aspect: Aspect) -> Self {
        match aspect {
            Aspect::Landscape => AspectRatio::Landscape16x9,
            Aspect::Portrait => AspectRatio::Portrait9x16,
            Aspect::Square => AspectRatio::Square,
            Aspect::Tall => AspectRatio::Portrait4x5,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Res {
    #[value(name = "720p")]
    P720,
    #[value(name = "1080p")]
    P1080,
    #[value(name = "4k")]
    K4,
}

impl From<Res> for Resolution {
    fn from(res: Res) -> Self {
        match res {
            Res::P720 => Self::Hd720,
            Res::P1080 => Self::Hd1080,
            Res::K4 => Self::Uhd4k,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Qual {
    Low,
    Medium,
    High,
}

impl From<Qual> for Quality {
    fn from(quality: Qual) -> Self {
        match quality {
            Qual::Low => Self::Low,
            Qual::Medium => Self::Medium,
            Qual::High => Self::High,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EditorConfig::load_from_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => EditorConfig::default(),
    };

    match cli.cmd {
        Command::New {
            file,
            title,
            aspect,
        } => cmd_new(&file, title, aspect.into()),
        Command::Info { file } => cmd_info(&file),
        Command::AddScene { file } => edit(&file, ops::add_scene),
        Command::DuplicateScene { file, index } => {
            edit(&file, |scenes| ops::duplicate_scene(scenes, index))
        }
        Command::DeleteScene { file, index } => {
            edit(&file, |scenes| ops::delete_scene(scenes, index, 0))
        }
        Command::Reorder {
            file,
            scene,
            layer,
            action,
        } => edit(&file, |scenes| {
            ops::change_layer_order(scenes, scene, layer, action)
        }),
        Command::Estimate {
            file,
            resolution,
            quality,
        } => {
            let project = load(&file)?;
            let form = ExportForm {
                resolution: resolution.into(),
                quality: quality.into(),
                ..Default::default()
            };
            println!(
                "{:.1}s, ~{} MB",
                ExportForm::project_duration_secs(&project),
                form.estimated_size(&project)
            );
            Ok(())
        }
        Command::Export {
            file,
            out,
            resolution,
            quality,
        } => cmd_export(&file, out, resolution, quality, &config),
    }
}

fn load(file: &Path) -> Result<VideoProject> {
    let project_file = ProjectFile::load_from_file(file)
        .with_context(|| format!("read project '{}'", file.display()))?;
    Ok(project_file.project)
}

fn save(file: &Path, project: VideoProject) -> Result<()> {
    ProjectFile::new(project)
        .save_to_file(file)
        .with_context(|| format!("write project '{}'", file.display()))
}

/// Run one edit operation against the project's scenes and save the result.
fn edit(file: &Path, op: impl FnOnce(&[Scene]) -> OperationResult) -> Result<()> {
    let mut project = load(file)?;
    let result = op(&project.scenes);
    let (scenes, _) = match result.into_result() {
        Ok(applied) => applied,
        Err(error) => bail!("{error}"),
    };
    project.set_scenes(scenes);
    save(file, project)?;
    info!(file = %file.display(), "Project updated");
    Ok(())
}

fn cmd_new(file: &Path, title: String, aspect: AspectRatio) -> Result<()> {
    if file.exists() {
        bail!("'{}' already exists", file.display());
    }
    let project = VideoProject::new(title, aspect);
    save(file, project)?;
    eprintln!("wrote {}", file.display());
    Ok(())
}

fn cmd_info(file: &Path) -> Result<()> {
    let project = load(file)?;
    println!("{} ({})", project.title, project.id);
    println!(
        "{} scene(s), {:.1}s",
        project.scenes.len(),
        project.total_duration_ms() as f64 / 1000.0
    );
    for (index, scene) in project.scenes.iter().enumerate() {
        println!(
            "  [{index}] {}  {} ms  {} layer(s){}",
            scene.id,
            scene.duration,
            scene.layers.len(),
            if scene.audio.is_some() { "  +audio" } else { "" }
        );
        for (z, layer) in scene.layers.iter().enumerate() {
            println!("      {z}: {}  {}", layer.id, layer.describe());
        }
    }
    Ok(())
}

fn cmd_export(
    file: &Path,
    out: String,
    resolution: Res,
    quality: Qual,
    config: &EditorConfig,
) -> Result<()> {
    let project = load(file)?;
    let form = ExportForm {
        resolution: resolution.into(),
        quality: quality.into(),
        ..Default::default()
    };
    let mut exporter = SimulatedExporter::new(config.export_frame_rate);
    exporter.output_dir = out;

    let mut session = ExportSession::new();
    let video = session
        .export(&mut exporter, &project, form.to_settings(), &mut LogNotifier)
        .context("export")?;
    println!(
        "{} (~{} MB)",
        video.uri.unwrap_or_default(),
        form.estimated_size(&project)
    );
    Ok(())
}
