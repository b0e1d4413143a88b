//! CLI entry point for folio

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::content::ContentType;
use folio::effects::{BlurConfig, Curve, Position, Preset, WaveConfig};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Content catalog and presentation math for a markdown portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List published entries (article, project) or tag counts (tag)
    #[command(alias = "ls")]
    List {
        #[arg(default_value = "article")]
        r#type: String,
    },

    /// Show one entry, drafts included
    Show {
        r#type: ContentType,
        identifier: String,

        /// Print the rendered HTML body instead of JSON
        #[arg(long)]
        html: bool,
    },

    /// Create a new draft entry
    New {
        r#type: ContentType,
        title: String,

        /// File name to use instead of the slugified title
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Generate sitemap.xml
    Sitemap {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print gradual-blur layer CSS
    Blur(BlurArgs),

    /// Print the animated wavy divider SVG
    Wave(WaveArgs),

    /// Start the JSON API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },
}

#[derive(Args)]
struct BlurArgs {
    /// Start from a named preset
    #[arg(long)]
    preset: Option<Preset>,
    #[arg(long)]
    position: Option<Position>,
    #[arg(long)]
    strength: Option<f64>,
    /// Number of layers
    #[arg(long)]
    layers: Option<usize>,
    #[arg(long)]
    curve: Option<Curve>,
    /// Grow blur linearly instead of exponentially
    #[arg(long)]
    linear: bool,
    #[arg(long)]
    opacity: Option<f64>,
    /// Apply this hover multiplier to the strength
    #[arg(long)]
    hover: Option<f64>,
    #[arg(long)]
    json: bool,
}

impl BlurArgs {
    fn into_config(self) -> (BlurConfig, bool) {
        let mut config = match self.preset {
            Some(preset) => BlurConfig::from_preset(preset),
            None => BlurConfig::default(),
        };
        if let Some(position) = self.position {
            config.position = position;
        }
        if let Some(strength) = self.strength {
            config.strength = strength;
        }
        if let Some(layers) = self.layers {
            config.div_count = layers;
        }
        if let Some(curve) = self.curve {
            config.curve = curve;
        }
        if self.linear {
            config.exponential = false;
        }
        if let Some(opacity) = self.opacity {
            config.opacity = opacity;
        }
        config.hover_intensity = self.hover;
        (config, self.hover.is_some())
    }
}

#[derive(Args)]
struct WaveArgs {
    #[arg(long, default_value_t = 52.0)]
    waves: f64,
    #[arg(long, default_value_t = 2.0)]
    amplitude: f64,
    /// Viewport units per second
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
    #[arg(long, default_value = "currentColor")]
    color: String,
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let site = folio::Site::new(&base_dir)?;
            folio::commands::list::run(&site, &r#type)?;
        }

        Commands::Show {
            r#type,
            identifier,
            html,
        } => {
            let site = folio::Site::new(&base_dir)?;
            folio::commands::show::run(&site, r#type, &identifier, html)?;
        }

        Commands::New {
            r#type,
            title,
            slug,
        } => {
            let site = folio::Site::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", r#type, title);
            folio::commands::new::run(&site, r#type, &title, slug.as_deref())?;
        }

        Commands::Sitemap { output } => {
            let site = folio::Site::new(&base_dir)?;
            folio::commands::sitemap::run(&site, output.as_deref())?;
        }

        Commands::Blur(args) => {
            let json = args.json;
            let (config, hovered) = args.into_config();
            print!("{}", folio::commands::effects::render_blur(&config, hovered, json)?);
        }

        Commands::Wave(args) => {
            let config = WaveConfig {
                waves: args.waves,
                amplitude: args.amplitude,
                speed: args.speed,
                color: args.color,
                ..Default::default()
            };
            print!("{}", folio::commands::effects::render_wave(&config, args.json)?);
        }

        Commands::Serve { port, ip } => {
            let site = folio::Site::new(&base_dir)?;
            tracing::info!("Serving content from {:?}", site.content_dir);
            folio::server::start(&site, &ip, port).await?;
        }
    }

    Ok(())
}
