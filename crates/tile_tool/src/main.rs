use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use flexi_logger::Logger;
use tile_engine::{formats, limits, Anchor, FlipTable, LayerKind, Level, Position, TileId};
use tile_engine_edit::{EditorSettings, LevelEditState};

#[derive(Parser)]
#[command(version, about = "Inspect and edit tile grid level files")]
pub struct Cli {
    #[arg(help = "Editor settings file (TOML)", long, global = true)]
    settings: Option<PathBuf>,

    #[arg(help = "Tile flip table used by flips and mirroring (TOML)", long, global = true)]
    flip_table: Option<PathBuf>,

    #[arg(help = "Log specification, e.g. 'debug' or 'info, tile_engine=debug'", long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print size and layer usage of a level")]
    Info { path: PathBuf },

    #[command(about = "Create a blank level")]
    New {
        path: PathBuf,
        #[arg(long)]
        width: Option<i32>,
        #[arg(long)]
        height: Option<i32>,
    },

    #[command(about = "Resize a level, keeping content pinned at the anchor")]
    Resize {
        path: PathBuf,
        width: i32,
        height: i32,
        #[arg(help = "nw, n, ne, w, center, e, sw, s, se", long)]
        anchor: Option<Anchor>,
    },

    #[command(about = "Flood fill the region under a cell")]
    Fill {
        path: PathBuf,
        x: i32,
        y: i32,
        #[arg(long, default_value = "active")]
        layer: LayerKind,
        #[arg(long)]
        id: TileId,
    },

    #[command(about = "Replace every tile equal to the one under a cell")]
    Replace {
        path: PathBuf,
        x: i32,
        y: i32,
        #[arg(long, default_value = "active")]
        layer: LayerKind,
        #[arg(long)]
        id: TileId,
    },

    #[command(about = "Flip the whole level")]
    Flip {
        path: PathBuf,
        #[arg(value_enum)]
        axis: FlipAxis,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FlipAxis {
    Horizontal,
    Vertical,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let _logger = Logger::try_with_env_or_str(&args.log_level)
        .context("invalid log specification")?
        .log_to_stderr()
        .start()
        .context("failed to start logger")?;

    let settings = match &args.settings {
        Some(path) => EditorSettings::load(path).with_context(|| format!("loading settings {}", path.display()))?,
        None => EditorSettings::default(),
    };

    match args.command {
        Commands::Info { path } => {
            let level = formats::load_level_file(&path).with_context(|| format!("loading {}", path.display()))?;
            print_info(&path, &level);
        }
        Commands::New { path, width, height } => {
            let size = (width.unwrap_or(settings.default_width), height.unwrap_or(settings.default_height));
            anyhow::ensure!(limits::is_within_limits(size.0, size.1), "level size {}x{} outside the editor limits", size.0, size.1);
            let mut state = LevelEditState::from_level(Level::new(size));
            state.save(&path).with_context(|| format!("writing {}", path.display()))?;
            log::info!("created {} ({})", path.display(), state.level().size());
        }
        Commands::Resize { path, width, height, anchor } => {
            let mut state = open(&path, &settings, args.flip_table.as_deref())?;
            let anchor = anchor.unwrap_or(settings.resize_anchor);
            state.resize((width, height), anchor).context("resize failed")?;
            state.save(&path).with_context(|| format!("writing {}", path.display()))?;
        }
        Commands::Fill { path, x, y, layer, id } => {
            let mut state = open(&path, &settings, args.flip_table.as_deref())?;
            let count = state.flood_fill(Position::new(x, y), layer, id);
            println!("filled {count} cells");
            state.save(&path).with_context(|| format!("writing {}", path.display()))?;
        }
        Commands::Replace { path, x, y, layer, id } => {
            let mut state = open(&path, &settings, args.flip_table.as_deref())?;
            let count = state.replace_all(Position::new(x, y), layer, id);
            println!("replaced {count} cells");
            state.save(&path).with_context(|| format!("writing {}", path.display()))?;
        }
        Commands::Flip { path, axis } => {
            let mut state = open(&path, &settings, args.flip_table.as_deref())?;
            match axis {
                FlipAxis::Horizontal => state.flip_x(),
                FlipAxis::Vertical => state.flip_y(),
            }
            state.save(&path).with_context(|| format!("writing {}", path.display()))?;
        }
    }
    Ok(())
}

fn open(path: &Path, settings: &EditorSettings, flip_table: Option<&Path>) -> Result<LevelEditState> {
    let mut state = LevelEditState::load(path, settings).with_context(|| format!("loading {}", path.display()))?;
    if let Some(table_path) = flip_table {
        let table = FlipTable::load(table_path).with_context(|| format!("loading flip table {}", table_path.display()))?;
        state.set_flip_table(Arc::new(table));
    }
    Ok(state)
}

fn print_info(path: &Path, level: &Level) {
    println!("{}", path.display());
    println!("  format version {}", formats::LEVEL_FORMAT_VERSION);
    println!("  size           {}", level.size());
    for kind in LayerKind::FILE_ORDER {
        println!("  {:<14} {} tiles", kind.name(), level.used_cells_in(kind));
    }
}
