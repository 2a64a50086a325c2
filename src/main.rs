use mimalloc::MiMalloc;
use tcx_tour::batch::Batch;
use tcx_tour::config::Config;
use tcx_tour::error::AppError;
use tcx_tour::pipeline::caption::SvgCaptionRenderer;
use tcx_tour::pipeline::locate::Gazetteer;
use tcx_tour::storage::Storage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tcx_tour=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if let Err(e) = run(&config) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let gazetteer = match Gazetteer::from_path(&config.gazetteer_path) {
        Ok(gazetteer) => gazetteer,
        Err(e) => {
            tracing::warn!(
                "No gazetteer at {} ({}); localities will be unknown",
                config.gazetteer_path.display(),
                e
            );
            Gazetteer::default()
        }
    };
    tracing::info!("Loaded {} places", gazetteer.len());

    let mut storage = Storage::open(&config.db_path)?;
    let batch = Batch {
        config,
        locator: &gazetteer,
        captions: &SvgCaptionRenderer,
    };
    let report = batch.run(&mut storage)?;

    println!("Done processing {} TCX activity files.", report.files);
    Ok(())
}
