use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use amix::{
    AppResult, Config, Session,
    commands::{self, Command, Outcome},
    config::ViewFormat,
    entities::candidate,
    error::LocationError,
    host::{
        self,
        images::{FsImageLoader, ImageLoader},
        location::acquire_location,
    },
    session::LocationTicket,
    utils::geo::Coordinate,
    view::SessionView,
};

/// Completions of work started off the event loop
enum HostEvent {
    LocationResolved(LocationTicket, Result<Coordinate, LocationError>),
    PhotoLoaded(PathBuf, AppResult<Vec<u8>>),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so they don't mix with the rendered screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "amix=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().expect("Invalid configuration");
    tracing::info!(device_location = ?config.device_location, "Starting session");

    let roster = match &config.candidates_path {
        Some(path) => candidate::load_roster(path)
            .await
            .expect("Failed to load candidate roster"),
        None => candidate::default_roster(),
    };

    let location = host::location_service(&config);
    let images: Arc<dyn ImageLoader> = Arc::new(FsImageLoader);
    let mut session = Session::new(roster);

    let (tx, mut rx) = mpsc::unbounded_channel::<HostEvent>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    render(&session, config.view_format);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!("Failed to read input: {}", e);
                        break;
                    }
                };

                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(message) => {
                        println!("{message}");
                        continue;
                    }
                };

                match commands::dispatch(&mut session, command, location.as_ref()) {
                    Outcome::Render => render(&session, config.view_format),
                    Outcome::AwaitLocation(ticket) => {
                        render(&session, config.view_format);
                        let service = Arc::clone(&location);
                        let options = config.location_options();
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let result = acquire_location(service.as_ref(), options).await;
                            let _ = tx.send(HostEvent::LocationResolved(ticket, result));
                        });
                    }
                    Outcome::LoadPhoto(path) => {
                        let images = Arc::clone(&images);
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let result = images.load(&path).await;
                            let _ = tx.send(HostEvent::PhotoLoaded(path, result));
                        });
                    }
                    Outcome::Help => println!("{}", commands::HELP),
                    Outcome::Quit => break,
                }
            }
            Some(event) = rx.recv() => {
                match event {
                    HostEvent::LocationResolved(ticket, result) => {
                        session.resolve_location(ticket, result);
                    }
                    HostEvent::PhotoLoaded(path, Ok(data)) => {
                        tracing::info!(path = %path.display(), "Photo added");
                        session.add_photo(data);
                    }
                    HostEvent::PhotoLoaded(path, Err(e)) => {
                        tracing::warn!(path = %path.display(), "Failed to load photo: {}", e);
                    }
                }
                render(&session, config.view_format);
            }
        }
    }

    tracing::info!("Session closed");
}

fn render(session: &Session, format: ViewFormat) {
    let view = SessionView::from(session);
    match format {
        ViewFormat::Text => print!("{view}"),
        ViewFormat::Json => match serde_json::to_string(&view) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!("Failed to serialize view: {}", e),
        },
    }
}
