use std::collections::HashMap;
use std::net::SocketAddr;
use std::process;
use std::sync::{Arc, Mutex};

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use harvest::api::{self, CmsClient, CmsConnection, ContentService, ListOptions};
use harvest::config;
use harvest::models::{Activity, AppState, Product, Record};
use harvest::services::{ContactSubmitter, ListController, LoadOutcome, ViewScope};
use harvest::{build_app, utils};

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);

    let client = match reqwest::Client::builder()
        .user_agent(format!("Harvest/{}", env!("CARGO_PKG_VERSION")))
        .timeout(config::get_cms_timeout())
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    };

    let conn = CmsConnection {
        base_url: config::get_cms_base_url(),
        api_token: config::get_cms_api_token(),
        site_id: config::get_cms_site_id(),
    };
    let contact = ContactSubmitter::from_config(
        &client,
        config::get_contact_webhook_url(),
        config::get_contact_submit_delay(),
    );

    AppState {
        cms: CmsClient::new(client, conn),
        contact,
        flash_store: Arc::new(Mutex::new(HashMap::new())),
        public_base_url: config::get_public_base_url(),
        shop_page_size: config::get_shop_page_size(),
        custom_css: None,
    }
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    tracing::info!(
        %addr,
        cms = %state.cms_hostname(),
        contact = %state.contact.describe(),
        page_size = state.shop_page_size,
        "Starting Harvest server"
    );
    let app = build_app(state);
    println!("{} {}", yansi::Paint::new("Web server running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn opt(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("")
}

fn print_product(p: &Product) {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["ID", p.id.as_str()]);
    table.add_row(vec!["Name", opt(&p.product_name)]);
    table.add_row(vec!["SKU", opt(&p.sku)]);
    table.add_row(vec!["Category", opt(&p.category)]);
    table.add_row(vec!["Description", opt(&p.description)]);
    table.add_row(vec!["Bulk packaging", opt(&p.bulk_packaging_info)]);
    table.add_row(vec!["Image", opt(&p.product_image)]);
    table.add_row(vec!["Alternate image", opt(&p.product_image1)]);
    println!("\n{table}\n");
}

#[derive(Parser)]
#[command(
    name = "harvest",
    author,
    version,
    about = "Premium Harvest catalogue site",
    long_about = r#"Harvest serves the Premium Harvest wholesale catalogue: a home page, the company activity feed, a paginated product range with detail pages, and a contact form.

Content comes from a hosted CMS data collection. Provide the CMS credentials through environment variables or an `--env-file`.

Examples:
  1) Run the site (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Check the CMS credentials:
      harvest check-config --env-file .env
  3) Browse the catalogue from the terminal:
      harvest products list --page 2
      harvest products show 6f1c0d2e
"#,
    after_help = "Use `harvest <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (default: $HOST or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (default: $PORT or 8080)
        #[arg(long)]
        port: Option<u16>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (env vars / CMS credentials)
    #[command(about = "Validate configuration and ensure CMS connectivity.", long_about = "Validate the environment variables required by the Harvest server, then query one product from the CMS to confirm the token and site id are accepted.")]
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Browse wholesale products
    Products {
        #[command(subcommand)]
        sub: ProductCommands,
    },
    /// Browse company activities
    Activities {
        #[command(subcommand)]
        sub: ActivityCommands,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    #[command(about = "List products", long_about = "List one page of the product collection in backend order.")]
    List {
        /// Products per page
        #[arg(long, default_value_t = config::DEFAULT_SHOP_PAGE_SIZE)]
        limit: usize,
        /// Page number to display (1-indexed)
        #[arg(long, short = 'p', default_value_t = 1)]
        page: usize,
    },
    #[command(about = "Show product details", long_about = "Fetch a single product by id and print its fields.")]
    Show { product_id: String },
}

#[derive(Subcommand)]
enum ActivityCommands {
    #[command(about = "List activities", long_about = "List company activities in backend order.")]
    List {
        #[arg(long, default_value_t = config::ABOUT_ACTIVITIES_LIMIT)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    // No command serves the site with defaults
    let Some(command) = cli.command else {
        let state = build_state_from_env(None);
        start_server(state, &config::get_host(), config::get_port(), None).await;
        return;
    };

    match command {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            let host = host.unwrap_or_else(config::get_host);
            let port = port.unwrap_or_else(config::get_port);
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            let conn = state.cms.connection();
            if conn.api_token.is_empty() {
                eprintln!("{}", yansi::Paint::new("CMS_API_TOKEN is not configured; requests will be anonymous").yellow());
            }
            if conn.site_id.is_empty() {
                eprintln!("{}", yansi::Paint::new("CMS_SITE_ID is not configured; no wix-site-id header will be sent").yellow());
            }
            println!("CMS host: {}", yansi::Paint::new(utils::hostname_from_url(&conn.base_url)).cyan());
            println!("Contact delivery: {}", state.contact.describe());
            match state
                .cms
                .list_page::<Product>(
                    Product::COLLECTION,
                    &api::match_all(),
                    ListOptions::new(1, 0),
                )
                .await
            {
                Ok(page) => {
                    println!(
                        "{} ({} product(s) returned)",
                        yansi::Paint::new("Configuration looks valid").green(),
                        page.items.len()
                    );
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Configuration appears invalid").red(), e);
                    process::exit(1);
                }
            }
        }
        Commands::Products { sub } => {
            let state = build_state_from_env(None);
            match sub {
                ProductCommands::List { limit, page } => {
                    let limit = limit.max(1);
                    let page = page.max(1);
                    let options = ListOptions::new(limit, utils::page_offset(page, limit));
                    let result = state
                        .cms
                        .list_page::<Product>(Product::COLLECTION, &api::match_all(), options)
                        .await;
                    let page_data = match result {
                        Ok(p) => p,
                        Err(e) => {
                            eprintln!("{}: {}", yansi::Paint::new("Failed to list products").red(), e);
                            process::exit(1);
                        }
                    };
                    if page_data.items.is_empty() {
                        println!("(empty list)");
                        return;
                    }
                    let mut table = new_table();
                    table.set_header(vec!["ID", "Name", "SKU", "Category"]);
                    for p in &page_data.items {
                        table.add_row(vec![p.id.as_str(), opt(&p.product_name), opt(&p.sku), opt(&p.category)]);
                    }
                    println!("\n{table}");
                    println!("\n{}", yansi::Paint::new(format!("Page {} | {} product(s)", page, page_data.items.len())).cyan());
                    if page > 1 {
                        println!(
                            "{} {}",
                            yansi::Paint::new("←").bold(),
                            yansi::Paint::new(format!("Previous page: harvest products list --page {} --limit {}", page - 1, limit)).dim()
                        );
                    }
                    if page_data.has_next {
                        println!(
                            "{} {}",
                            yansi::Paint::new("→").bold(),
                            yansi::Paint::new(format!("Next page: harvest products list --page {} --limit {}", page.saturating_add(1), limit)).dim()
                        );
                    }
                    println!();
                }
                ProductCommands::Show { product_id } => {
                    match state.cms.get_by_id::<Product>(Product::COLLECTION, &product_id).await {
                        Ok(Some(p)) => print_product(&p),
                        Ok(None) => {
                            eprintln!("{} '{}' {}", yansi::Paint::new("Product").red(), product_id, yansi::Paint::new("not found").red());
                            process::exit(1);
                        }
                        Err(e) => {
                            eprintln!("{}: {}", yansi::Paint::new("Failed to load product").red(), e);
                            process::exit(1);
                        }
                    }
                }
            }
        }
        Commands::Activities { sub } => {
            let state = build_state_from_env(None);
            match sub {
                ActivityCommands::List { limit } => {
                    let mut activities: ListController<'_, _, Activity> =
                        ListController::new(&state.cms, ViewScope::detached(), limit);
                    if activities.load_first_page().await == LoadOutcome::Failed {
                        eprintln!("{}", yansi::Paint::new("Failed to list activities (see logs)").red());
                        process::exit(1);
                    }
                    if activities.items().is_empty() {
                        println!("(empty list)");
                        return;
                    }
                    let mut table = new_table();
                    table.set_header(vec!["Date", "Title", "Type"]);
                    for a in activities.items() {
                        table.add_row(vec![
                            a.short_date_or_update(),
                            opt(&a.activity_title).to_string(),
                            opt(&a.activity_type).to_string(),
                        ]);
                    }
                    println!("\n{table}\n");
                }
            }
        }
    }
}
