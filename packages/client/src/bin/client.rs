//! Live Comment command line client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin live-comment-client -- room create "Friday Stream" --host-id host-1
//! cargo run --bin live-comment-client -- watch <room-id> --nickname alice
//! ```

use clap::{Parser, Subcommand};
use live_comment_client::{
    ApiClient, ClientError, RoomWatcher, WatchEvent,
    display::{format_comment, format_room, format_stream, format_time},
};
use live_comment_shared::logger::setup_logger;
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

/// Live Comment client
#[derive(Debug, Parser)]
#[command(name = "live-comment-client", version, about)]
struct Cli {
    /// Base URL of the HTTP API
    #[arg(long, env = "LIVE_COMMENT_API_URL", default_value = "http://127.0.0.1:8080")]
    api_url: String,

    /// WebSocket endpoint
    #[arg(long, env = "LIVE_COMMENT_WS_URL", default_value = "ws://127.0.0.1:8080/ws")]
    ws_url: String,

    /// Bearer token sent with every HTTP request
    #[arg(long, env = "LIVE_COMMENT_AUTH_TOKEN")]
    auth_token: Option<String>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "LIVE_COMMENT_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage rooms
    #[command(subcommand)]
    Room(RoomCommand),
    /// Post or list comments
    #[command(subcommand)]
    Comment(CommentCommand),
    /// Browse the stream catalogue
    #[command(subcommand)]
    Streams(StreamsCommand),
    /// Follow a room and post each typed line as a comment
    Watch {
        room_id: String,
        #[arg(long)]
        nickname: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum RoomCommand {
    Create {
        name: String,
        #[arg(long)]
        host_id: String,
    },
    List {
        #[arg(long)]
        host_id: String,
    },
    Close {
        room_id: String,
        #[arg(long)]
        host_id: String,
    },
}

#[derive(Debug, Subcommand)]
enum CommentCommand {
    Post {
        room_id: String,
        content: String,
        #[arg(long)]
        nickname: Option<String>,
    },
    List {
        room_id: String,
    },
}

#[derive(Debug, Subcommand)]
enum StreamsCommand {
    List,
    Show { id: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &cli.log_level);

    if let Err(e) = run(cli).await {
        tracing::error!("Client error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let mut api = ApiClient::new(cli.api_url);
    if let Some(token) = cli.auth_token {
        api = api.with_auth_token(token);
    }

    match cli.command {
        Command::Room(RoomCommand::Create { name, host_id }) => {
            let room = api.create_room(&name, &host_id).await?;
            println!("Created room {} ({})", room.room_id, room.name);
        }
        Command::Room(RoomCommand::List { host_id }) => {
            let rooms = api.list_rooms(&host_id).await?;
            if rooms.is_empty() {
                println!("No rooms for {host_id}");
            }
            for room in &rooms {
                println!("{}", format_room(room));
            }
        }
        Command::Room(RoomCommand::Close { room_id, host_id }) => {
            let room = api.close_room(&room_id, &host_id).await?;
            println!(
                "Room {} is {} (updated {})",
                room.room_id,
                room.status,
                format_time(&room.updated_at)
            );
        }
        Command::Comment(CommentCommand::Post {
            room_id,
            content,
            nickname,
        }) => {
            let comment = api
                .post_comment(&room_id, &content, nickname.as_deref())
                .await?;
            println!("{}", format_comment(&comment));
        }
        Command::Comment(CommentCommand::List { room_id }) => {
            for comment in api.list_comments(&room_id).await? {
                println!("{}", format_comment(&comment));
            }
        }
        Command::Streams(StreamsCommand::List) => {
            for stream in api.get_streams().await? {
                println!("{}", format_stream(&stream));
            }
        }
        Command::Streams(StreamsCommand::Show { id }) => {
            let stream = api.get_stream(&id).await?;
            println!("{}", format_stream(&stream));
            if let Some(description) = &stream.description {
                println!("{description}");
            }
            println!("Created {}", format_time(&stream.created_at));
        }
        Command::Watch { room_id, nickname } => {
            watch(&api, &cli.ws_url, &room_id, nickname.as_deref()).await?;
        }
    }
    Ok(())
}

/// Print pushed comments while posting every line typed at the prompt.
async fn watch(
    api: &ApiClient,
    ws_url: &str,
    room_id: &str,
    nickname: Option<&str>,
) -> Result<(), ClientError> {
    let mut watcher = RoomWatcher::connect(ws_url, room_id).await?;

    // rustyline blocks, so read lines on a dedicated thread
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    let reader = tokio::task::spawn_blocking(move || -> Result<(), ReadlineError> {
        let mut editor = DefaultEditor::new()?;
        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(line.as_str());
                    if line_tx.send(line).is_err() {
                        return Ok(());
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    });

    loop {
        tokio::select! {
            event = watcher.next_event() => match event? {
                Some(WatchEvent::Joined { room_id: joined }) => {
                    println!("Joined room {joined}. Type a comment and press Enter.");
                }
                Some(WatchEvent::Rejected { status_code, message }) => {
                    println!("Could not join room ({status_code}): {message}");
                    break;
                }
                Some(WatchEvent::Comment(comment)) => println!("{}", format_comment(&comment)),
                None => {
                    println!("Connection closed by server");
                    break;
                }
            },
            line = line_rx.recv() => match line {
                Some(content) => {
                    if let Err(e) = api.post_comment(room_id, &content, nickname).await {
                        println!("Failed to post comment: {e}");
                    }
                }
                None => break,
            },
        }
    }

    watcher.close().await?;
    // The prompt thread ends on the next line or Ctrl+D.
    if reader.is_finished()
        && let Ok(Err(e)) = reader.await
    {
        return Err(e.into());
    }
    Ok(())
}
