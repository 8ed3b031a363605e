use std::process;
use std::sync::Arc;

use foglio::{
    application::{catalog::Catalog, error::AppError, listing::Query, render},
    config::{self, Command, ListArgs, RenderArgs, Settings, ShowArgs},
    domain::articles::ArticleId,
    infra::{error::InfraError, memory::InMemoryArticles, telemetry},
    presentation::html,
    util::text,
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or_else(|| Command::List(ListArgs::default()));

    telemetry::init(&settings.logging)?;

    match command {
        Command::List(args) => list(args, &settings).await,
        Command::Show(args) => show(args, &settings).await,
        Command::Render(args) => render_file(args).await,
    }
}

fn seeded_catalog(settings: &Settings) -> Catalog {
    let source = InMemoryArticles::seeded().with_latency(settings.source.latency);
    Catalog::new(Arc::new(source))
}

async fn list(args: ListArgs, settings: &Settings) -> Result<(), AppError> {
    let page_size = args.page_size.unwrap_or(settings.listing.page_size);
    let query = Query::parse(args.search, &args.sort, args.page, page_size)?;
    let listing = seeded_catalog(settings).search(&query).await?;

    if args.json {
        println!("{}", to_pretty_json(&listing)?);
        return Ok(());
    }

    match listing.shown_range() {
        Some((start, end)) => println!(
            "Showing {start} to {end} of {} articles (page {} of {})",
            listing.total_matched, listing.page, listing.total_pages
        ),
        None => println!(
            "No articles on this page (page {} of {}, {} matched)",
            listing.page, listing.total_pages, listing.total_matched
        ),
    }

    for article in &listing.items {
        let summary = render::render(&article.body)
            .map(|document| document.plain_text())
            .unwrap_or_else(|_| article.body.clone());

        let mut meta = article.created_at.date().to_string();
        if let Some(minutes) = article.read_time {
            meta.push_str(&format!(" · {minutes} min read"));
        }

        println!();
        println!("#{} {} by {}", article.id, article.title, article.author.name);
        println!("    {meta}");
        println!("    {}", text::excerpt(&summary, 150));
    }

    Ok(())
}

async fn show(args: ShowArgs, settings: &Settings) -> Result<(), AppError> {
    let catalog = seeded_catalog(settings);

    let article = match args.article.parse::<u64>() {
        Ok(id) => catalog.article(ArticleId(id)).await?,
        Err(_) => catalog.article_by_slug(&args.article).await?,
    };
    let document = render::render(&article.body)?;
    let related = catalog
        .related(article.id, settings.listing.related_limit)
        .await?;

    if args.json {
        let payload = serde_json::json!({
            "article": article,
            "document": document,
            "related": related,
        });
        println!("{}", to_pretty_json(&payload)?);
        return Ok(());
    }

    println!("{} by {}", article.title, article.author.name);
    println!(
        "{} · {} min read",
        article.created_at.date(),
        article
            .read_time
            .unwrap_or(document.metrics.reading_time_minutes)
    );
    if !article.tags.is_empty() {
        println!("tags: {}", article.tags.join(", "));
    }
    println!();
    println!("{}", html::document(&document));

    if !related.is_empty() {
        println!();
        println!("Related articles:");
        for article in &related {
            println!("  #{} {}", article.id, article.title);
        }
    }

    Ok(())
}

async fn render_file(args: RenderArgs) -> Result<(), AppError> {
    let input = match args.path {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .map_err(InfraError::Io)?,
        None => std::io::read_to_string(std::io::stdin()).map_err(InfraError::Io)?,
    };

    let document = render::render(&input)?;
    info!(
        blocks = document.blocks.len(),
        reading_minutes = document.metrics.reading_time_minutes,
        "document rendered"
    );

    if args.nodes {
        println!("{}", to_pretty_json(&document)?);
    } else {
        println!("{}", html::document(&document));
    }

    Ok(())
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::unexpected(err.to_string()))
}
