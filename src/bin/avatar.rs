use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "avatar", version, about = "Render initials avatars")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one avatar to a PNG file.
    Render(RenderArgs),
    /// Serve avatars over HTTP at `/avatar/{name}`.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Display name to derive initials from.
    #[arg(long)]
    name: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Glyph color override (`#RRGGBB`).
    #[arg(long)]
    fg: Option<String>,

    /// Background color override (`#RRGGBB`).
    #[arg(long)]
    bg: Option<String>,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Keep at most this many rendered avatars in memory (unbounded when omitted).
    #[arg(long)]
    cache_capacity: Option<NonZeroUsize>,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file (TrueType/OpenType).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size in points.
    #[arg(long)]
    size: Option<f32>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Rendering resolution.
    #[arg(long)]
    dpi: Option<u32>,

    /// Gap between initials in pixels.
    #[arg(long)]
    spacer: Option<u32>,

    /// Horizontal nudge of the centered initials.
    #[arg(long, allow_hyphen_values = true)]
    x: Option<i32>,

    /// Baseline position from the top edge.
    #[arg(long, allow_hyphen_values = true)]
    y: Option<i32>,
}

impl ConfigArgs {
    fn resolve(&self) -> anyhow::Result<avatar::AvatarConfig> {
        let mut cfg = match &self.config {
            Some(p) => avatar::AvatarConfig::from_json_file(p)?,
            None => avatar::AvatarConfig::default(),
        };
        if let Some(font) = &self.font {
            cfg.font = avatar::FontSource::path(font);
        }
        cfg.font_size = self.size.unwrap_or(cfg.font_size);
        cfg.width = self.width.unwrap_or(cfg.width);
        cfg.height = self.height.unwrap_or(cfg.height);
        cfg.dpi = self.dpi.unwrap_or(cfg.dpi);
        cfg.spacer = self.spacer.unwrap_or(cfg.spacer);
        cfg.text_x = self.x.unwrap_or(cfg.text_x);
        cfg.text_y = self.y.unwrap_or(cfg.text_y);
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,avatar=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = args.config.resolve()?;
    let composer =
        avatar::AvatarComposer::new(avatar::ParleyRenderer::new(), avatar::AvatarCache::unbounded());
    let overrides = avatar::ColorOverrides::new(args.fg, args.bg);

    let rendered = composer
        .to_disk(&args.name, &overrides, &cfg, &args.out, &avatar::PngEncoder)
        .with_context(|| format!("render avatar for {:?}", args.name))?;

    println!(
        "wrote {} ({}x{}, initials {:?})",
        args.out.display(),
        rendered.image.width(),
        rendered.image.height(),
        rendered.token
    );
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let cfg = args.config.resolve()?;
    let cache = match args.cache_capacity {
        Some(capacity) => avatar::AvatarCache::lru(capacity),
        None => avatar::AvatarCache::unbounded(),
    };
    let composer = avatar::AvatarComposer::new(avatar::ParleyRenderer::new(), cache);
    let service = Arc::new(avatar::AvatarService::new(
        composer,
        cfg,
        avatar::PngEncoder,
    ));

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start tokio runtime")?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(args.addr)
            .await
            .with_context(|| format!("bind {}", args.addr))?;
        tracing::info!("avatar server listening on {}", args.addr);
        tracing::info!("  - GET /avatar/:name?fg=RRGGBB&bg=RRGGBB");
        tracing::info!("  - GET /health");
        avatar::serve(listener, service).await.context("serve")?;
        Ok(())
    })
}
