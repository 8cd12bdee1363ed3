//! CypherX - Entry Point
//!
//! Terminal front end for the login demo: prompts for credentials, then runs
//! an echoing chat session.

use chrono::{Local, Utc};
use log::info;
use std::io;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};
use tokio::time::sleep;

use cypherx_login::chat::{
    ChatThread, Responder, format_relative, group_by_recency, sample_conversations,
};
use cypherx_login::config::AppConfig;
use cypherx_login::error::handlers::{error_to_exit_code, handle_error};
use cypherx_login::error::AppError;
use cypherx_login::{FormField, Session, UserDirectory};

const HELP: &str = "Commands: /history, /logout, /quit, /help\n";

/// How a chat session ended
enum ChatExit {
    Logout,
    Quit,
}

struct Terminal {
    lines: Lines<BufReader<Stdin>>,
    out: Stdout,
}

impl Terminal {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            out: tokio::io::stdout(),
        }
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }

    /// Prints `label` and reads one line; `None` on end of input
    async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.write(label).await?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim_end_matches('\r').to_string()))
    }

    /// Reads a line from the terminal without echoing it
    async fn prompt_hidden(&mut self, label: &'static str) -> Result<String, AppError> {
        self.out.flush().await?;
        read_blocking(move || rpassword::prompt_password(label)).await
    }
}

/// Runs a blocking terminal read off the async runtime
async fn read_blocking<F>(read: F) -> Result<String, AppError>
where
    F: FnOnce() -> io::Result<String> + Send + 'static,
{
    let line = tokio::task::spawn_blocking(read)
        .await
        .map_err(io::Error::other)??;
    Ok(line)
}

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching CypherX...");

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(error_to_exit_code(&e));
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let directory = UserDirectory::from_config(&config)?;
    let responder = Responder::new(config.response_delay());
    let mut term = Terminal::new();
    let mut session = Session::default();

    term.write("Welcome to CypherX. Please sign in.\n").await?;

    loop {
        let Some(username) = term.prompt("Username: ").await? else {
            return Ok(());
        };
        let password = term.prompt_hidden("Password: ").await?;

        let (next, errors) = session.login(&directory, &username, &password);
        session = next;

        if errors.has_errors() {
            for field in [FormField::Username, FormField::Password, FormField::Credentials] {
                if let Some(msg) = errors.get(field) {
                    term.write(&format!("  ! {msg}\n")).await?;
                }
            }
            continue;
        }

        term.write("Signing in...\n").await?;
        sleep(config.login_delay()).await;

        match chat(&mut term, &session, &responder).await? {
            ChatExit::Logout => session = session.logout(),
            ChatExit::Quit => return Ok(()),
        }
    }
}

async fn chat(
    term: &mut Terminal,
    session: &Session,
    responder: &Responder,
) -> Result<ChatExit, AppError> {
    let mut thread = ChatThread::new();

    term.write(&format!("Signed in as {}. {}", session.display_name(), HELP))
        .await?;
    term.write(&format!("CypherX: {}\n", thread.messages()[0].content))
        .await?;

    loop {
        let Some(input) = term.prompt("> ").await? else {
            return Ok(ChatExit::Quit);
        };

        match input.trim() {
            "/quit" => return Ok(ChatExit::Quit),
            "/logout" => return Ok(ChatExit::Logout),
            "/help" => term.write(HELP).await?,
            "/history" => show_history(term).await?,
            _ => {
                let Some(sent) = thread.submit(&input) else {
                    continue;
                };
                let content = sent.content.clone();
                let reply = responder.reply(&content).await;
                let reply = thread.receive_reply(reply);
                term.write(&format!("CypherX: {}\n", reply.content)).await?;
            }
        }
    }
}

async fn show_history(term: &mut Terminal) -> io::Result<()> {
    let now = Local::now();
    let history = sample_conversations(now.with_timezone(&Utc));

    for group in group_by_recency(&history, &now) {
        term.write(&format!("{}\n", group.recency.label())).await?;
        for conv in group.conversations {
            term.write(&format!(
                "  {} ({})\n",
                conv.title,
                format_relative(conv.timestamp, &now)
            ))
            .await?;
        }
    }

    Ok(())
}
