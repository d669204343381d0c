// src/main.rs

use commentbox::config::Config;
use commentbox::models::comment::Comment;
use commentbox::utils::format;
use commentbox::{CommentWidget, HttpCommentService};
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let post_id = std::env::args()
        .nth(1)
        .expect("Usage: commentbox <post-id>");

    let service = match HttpCommentService::from_config(&config) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Invalid COMMENTS_API_URL: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Loading comments for post {}...", post_id);
    let mut widget = CommentWidget::mount(service, post_id).await;
    render(widget.comments());

    println!("Commands: post <name> :: <text> | like <id> | refresh | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();

        if line == "quit" {
            break;
        } else if line == "refresh" {
            widget.load().await;
            render(widget.comments());
        } else if let Some(rest) = line.strip_prefix("like ") {
            match rest.trim().parse::<i64>() {
                Ok(id) => {
                    widget.like(id).await;
                    render(widget.comments());
                }
                Err(_) => println!("like takes a numeric comment id"),
            }
        } else if let Some(rest) = line.strip_prefix("post ") {
            match rest.split_once("::") {
                Some((author, content)) => {
                    widget.set_draft_author(author);
                    widget.set_draft_content(content);
                    widget.submit().await;
                    render(widget.comments());
                }
                None => println!("post takes: <name> :: <text>"),
            }
        } else if !line.is_empty() {
            println!("Unknown command: {}", line);
        }
    }
}

fn render(comments: &[Comment]) {
    if comments.is_empty() {
        println!("No comments yet. Be the first to comment!");
        return;
    }
    for comment in comments {
        println!(
            "#{} {} ({}) [{} likes]",
            comment.id,
            comment.author,
            format::comment_date(&comment.date),
            comment.likes
        );
        println!("    {}", comment.content);
    }
}
