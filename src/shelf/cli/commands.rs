use super::logging::{init_logging, LogConfig};
use super::render::{
    render_details, render_featured, render_filters, render_messages, render_view,
};
use super::session;
use super::setup::{AddArgs, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use shelf::api::{parse_filter, parse_sort, ShelfApi};
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::ids::RandomIds;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

struct AppContext {
    api: ShelfApi<RandomIds>,
    config: ShelfConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose, cli.log_format));

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { filter, sort }) => handle_list(&mut ctx, filter, sort),
        Some(Commands::Add(args)) => handle_add(&mut ctx, &args),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Featured) => handle_featured(&ctx),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Filters) => handle_filters(&ctx),
        Some(Commands::Session { file }) => handle_session(&mut ctx, file.as_deref()),
        None => handle_list(&mut ctx, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "shelf", "shelf")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| ShelfError::Api("Could not determine config dir".into()))?,
    };
    let config = ShelfConfig::load(&config_dir)?;

    let seed_path: PathBuf = cli
        .seed
        .clone()
        .or_else(|| config.resolve_seed(&config_dir))
        .ok_or_else(|| {
            ShelfError::Api(
                "No seed file: pass --seed or set seed_file in config.json".into(),
            )
        })?;

    let ids = match cli.id_seed {
        Some(seed) => RandomIds::seeded(seed),
        None => RandomIds::new(),
    };
    let mut api = ShelfApi::with_defaults(ids, config.default_filter, config.default_sort);
    api.load_seed(&seed_path)?;

    Ok(AppContext { api, config })
}

fn handle_list(ctx: &mut AppContext, filter: Option<String>, sort: Option<String>) -> Result<()> {
    if let Some(filter) = filter {
        ctx.api.set_filter(parse_filter(&filter)?)?;
    }
    if let Some(sort) = sort {
        ctx.api.set_sort(parse_sort(&sort)?)?;
    }
    print!("{}", render_view(ctx.api.state()));
    Ok(())
}

fn handle_add(ctx: &mut AppContext, args: &AddArgs) -> Result<()> {
    let title = session::new_title(args)?;
    let result = ctx.api.add_title(title)?;
    print!("{}", render_messages(&result.messages));
    print!("{}", render_view(ctx.api.state()));
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.remove_title(id)?;
    print!("{}", render_messages(&result.messages));
    print!("{}", render_view(ctx.api.state()));
    Ok(())
}

fn handle_featured(ctx: &AppContext) -> Result<()> {
    print!("{}", render_featured(&ctx.api.featured()));
    Ok(())
}

fn handle_show(ctx: &AppContext, id: u32) -> Result<()> {
    print!("{}", render_details(ctx.api.find(id), &ctx.config));
    Ok(())
}

fn handle_filters(ctx: &AppContext) -> Result<()> {
    print!("{}", render_filters(ctx.api.state().available_filters()));
    Ok(())
}

fn handle_session(ctx: &mut AppContext, file: Option<&Path>) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let summary = match file {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            session::run(&mut ctx.api, &ctx.config, reader, &mut stdout)?
        }
        None => session::run(&mut ctx.api, &ctx.config, io::stdin().lock(), &mut stdout)?,
    };
    tracing::info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "session finished"
    );
    Ok(())
}
