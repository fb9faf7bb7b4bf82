//! Corkboard CLI - command-line interface over the corkboard engine.
//!
//! Commands operate on a `.corkboard` store found by walking up from the
//! current directory, or under an explicit `--root`. Mutating commands
//! take the store lock for their duration; results print as pretty JSON
//! on stdout.

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use corkboard::board::{
    CreateBoard, DeleteBoard, GetBoardDetail, ListBoards, ListFavourites, ReorderBoards,
    ReorderFavourites, UpdateBoard,
};
use corkboard::section::{CreateSection, DeleteSection, UpdateSection};
use corkboard::task::{CreateTask, DeleteTask, MoveTasks, UpdateTask};
use corkboard::user::{CreateUser, GetUser};
use corkboard::{BoardId, CorkboardContext, Execute, SectionId, TaskId, UserId};

mod cli;

use cli::{BoardCommands, Cli, Commands, SectionCommands, TaskCommands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("corkboard=debug,corkboard_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = resolve_context(&cli)?;
    tracing::debug!(root = %ctx.root().display(), "resolved store");

    match cli.command {
        Commands::Init => {
            ctx.ensure_directories().await?;
            println!("Initialized store at {}", ctx.root().display());
            Ok(())
        }
        Commands::Signup { username, secret } => {
            let _lock = ctx.lock().await?;
            let user = CreateUser::new(username, secret).execute(&ctx).await?;
            print_json(&user)
        }
        Commands::User { id } => {
            let user = GetUser::new(UserId::from_string(&id)).execute(&ctx).await?;
            print_json(&user)
        }
        Commands::Board(cmd) => run_board(cmd, &ctx).await,
        Commands::Section(cmd) => run_section(cmd, &ctx).await,
        Commands::Task(cmd) => run_task(cmd, &ctx).await,
    }
}

async fn run_board(cmd: BoardCommands, ctx: &CorkboardContext) -> anyhow::Result<()> {
    match cmd {
        BoardCommands::Create { owner } => {
            let _lock = ctx.lock().await?;
            let board = CreateBoard::new(UserId::from_string(&owner))
                .execute(ctx)
                .await?;
            print_json(&board)
        }
        BoardCommands::List { owner } => {
            let boards = ListBoards::new(UserId::from_string(&owner))
                .execute(ctx)
                .await?;
            print_json(&boards)
        }
        BoardCommands::Favourites { owner } => {
            let boards = ListFavourites::new(UserId::from_string(&owner))
                .execute(ctx)
                .await?;
            print_json(&boards)
        }
        BoardCommands::Show { id, owner } => {
            let detail = GetBoardDetail::new(BoardId::from_string(&id), UserId::from_string(&owner))
                .execute(ctx)
                .await?;
            print_json(&detail)
        }
        BoardCommands::Update {
            id,
            icon,
            title,
            description,
            favourite,
        } => {
            let _lock = ctx.lock().await?;
            let mut update = UpdateBoard::new(BoardId::from_string(&id));
            if let Some(icon) = icon {
                update = update.with_icon(icon);
            }
            if let Some(title) = title {
                update = update.with_title(title);
            }
            if let Some(description) = description {
                update = update.with_description(description);
            }
            if let Some(favourite) = favourite {
                update = update.with_favourite(favourite);
            }
            let board = update.execute(ctx).await?;
            print_json(&board)
        }
        BoardCommands::Delete { id } => {
            let _lock = ctx.lock().await?;
            DeleteBoard::new(BoardId::from_string(&id)).execute(ctx).await?;
            print_json(&json!({ "deleted": id }))
        }
        BoardCommands::Reorder { ids } => {
            let _lock = ctx.lock().await?;
            let ids: Vec<BoardId> = ids.iter().map(BoardId::from_string).collect();
            ReorderBoards::new(ids).execute(ctx).await?;
            print_json(&json!({ "reordered": "boards" }))
        }
        BoardCommands::ReorderFavourites { ids } => {
            let _lock = ctx.lock().await?;
            let ids: Vec<BoardId> = ids.iter().map(BoardId::from_string).collect();
            ReorderFavourites::new(ids).execute(ctx).await?;
            print_json(&json!({ "reordered": "favourites" }))
        }
    }
}

async fn run_section(cmd: SectionCommands, ctx: &CorkboardContext) -> anyhow::Result<()> {
    match cmd {
        SectionCommands::Add { board } => {
            let _lock = ctx.lock().await?;
            let section = CreateSection::new(BoardId::from_string(&board))
                .execute(ctx)
                .await?;
            print_json(&section)
        }
        SectionCommands::Rename { id, title } => {
            let _lock = ctx.lock().await?;
            let section = UpdateSection::new(SectionId::from_string(&id))
                .with_title(title)
                .execute(ctx)
                .await?;
            print_json(&section)
        }
        SectionCommands::Rm { id } => {
            let _lock = ctx.lock().await?;
            DeleteSection::new(SectionId::from_string(&id))
                .execute(ctx)
                .await?;
            print_json(&json!({ "deleted": id }))
        }
    }
}

async fn run_task(cmd: TaskCommands, ctx: &CorkboardContext) -> anyhow::Result<()> {
    match cmd {
        TaskCommands::Add {
            section,
            title,
            content,
        } => {
            let _lock = ctx.lock().await?;
            let mut create = CreateTask::new(SectionId::from_string(&section));
            if let Some(title) = title {
                create = create.with_title(title);
            }
            if let Some(content) = content {
                create = create.with_content(content);
            }
            let task = create.execute(ctx).await?;
            print_json(&task)
        }
        TaskCommands::Edit { id, title, content } => {
            let _lock = ctx.lock().await?;
            let mut update = UpdateTask::new(TaskId::from_string(&id));
            if let Some(title) = title {
                update = update.with_title(title);
            }
            if let Some(content) = content {
                update = update.with_content(content);
            }
            let task = update.execute(ctx).await?;
            print_json(&task)
        }
        TaskCommands::Rm { id } => {
            let _lock = ctx.lock().await?;
            DeleteTask::new(TaskId::from_string(&id)).execute(ctx).await?;
            print_json(&json!({ "deleted": id }))
        }
        TaskCommands::Move {
            source_section,
            destination_section,
            source,
            destination,
        } => {
            let _lock = ctx.lock().await?;
            let source: Vec<TaskId> = source.iter().map(TaskId::from_string).collect();
            let destination: Vec<TaskId> = destination.iter().map(TaskId::from_string).collect();
            MoveTasks::new(
                SectionId::from_string(&source_section),
                SectionId::from_string(&destination_section),
                source,
                destination,
            )
            .execute(ctx)
            .await?;
            print_json(&json!({ "moved": destination_section }))
        }
    }
}

/// Resolve the store: explicit --root wins, `init` may point at a store
/// that does not exist yet, everything else walks up from the cwd.
fn resolve_context(cli: &Cli) -> anyhow::Result<CorkboardContext> {
    if let Some(root) = &cli.root {
        return Ok(CorkboardContext::new(root.join(".corkboard")));
    }
    let cwd = std::env::current_dir()?;
    if matches!(cli.command, Commands::Init) {
        return Ok(CorkboardContext::new(cwd.join(".corkboard")));
    }
    Ok(CorkboardContext::find(&cwd)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
