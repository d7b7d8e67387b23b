//! `storefront` command-line entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use storefront_client::{CatalogGateway, ClientConfig, HttpCatalogGateway};
use storefront_core::ProductId;
use storefront_observability::tracing::LogFormat;
use storefront_web::{FormInput, MainPanel, Storefront, TerminalOperator, demo};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse and manage the storefront product catalog")]
struct Cli {
    /// Use a built-in sample catalog instead of the backend.
    #[arg(long, global = true, default_value_t = false)]
    demo: bool,
    /// API root, overriding STOREFRONT_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[arg(long, global = true, value_enum, default_value_t = LogFormatCli::Json)]
    log_format: LogFormatCli,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormatCli {
    Json,
    Pretty,
}

impl From<LogFormatCli> for LogFormat {
    fn from(value: LogFormatCli) -> Self {
        match value {
            LogFormatCli::Json => LogFormat::Json,
            LogFormatCli::Pretty => LogFormat::Pretty,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the storefront grid.
    Grid {
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Print the detail panel of one product.
    Detail { id: ProductId },
    /// Admin mode.
    Admin {
        /// Admin code (static mode) or bearer token (bearer mode).
        #[arg(long)]
        code: String,
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Print the admin products table.
    Table,
    /// Create a product.
    Create(ProductArgs),
    /// Replace a product; omitted flags keep their current values.
    Update {
        id: ProductId,
        #[command(flatten)]
        product: ProductArgs,
    },
    /// Delete a product.
    Delete {
        id: ProductId,
        /// Skip the confirmation prompt.
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Args)]
struct ProductArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    image: Option<String>,
    #[arg(long)]
    specs: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    highlight: Option<String>,
}

impl ProductArgs {
    /// Type the given flags into the form over its current contents.
    fn apply(self, mut input: FormInput) -> FormInput {
        let fields = [
            (self.name, &mut input.name),
            (self.category, &mut input.category),
            (self.image, &mut input.image),
            (self.specs, &mut input.specs),
            (self.price, &mut input.price),
            (self.highlight, &mut input.highlight),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        input
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.log_format {
        LogFormatCli::Json => storefront_observability::init(),
        format => storefront_observability::init_with(format.into()),
    }

    let mut config = ClientConfig::from_env().context("invalid storefront configuration")?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    let gateway: Box<dyn CatalogGateway> = if cli.demo {
        tracing::info!("using built-in demo catalog");
        Box::new(demo::demo_gateway())
    } else {
        tracing::info!(api = %config.api_base_url, "using catalog backend");
        Box::new(HttpCatalogGateway::new(&config.api_base_url))
    };

    let assume_yes = matches!(
        &cli.command,
        Command::Admin {
            command: AdminCommand::Delete { yes: true, .. },
            ..
        }
    );
    let mut storefront =
        Storefront::from_config(gateway, TerminalOperator::new(assume_yes), &config);
    storefront.init().await;

    let ok = match cli.command {
        Command::Grid { category } => {
            storefront.filter(&category);
            println!("{}", storefront.state().grid().to_html());
            true
        }
        Command::Detail { id } => {
            storefront.show_detail(id).await;
            match storefront.state().main() {
                MainPanel::Detail(detail) => {
                    println!("{}", detail.to_html());
                    true
                }
                MainPanel::Grid => false,
            }
        }
        Command::Admin { code, command } => {
            if storefront.open_admin(&code).await {
                run_admin(&mut storefront, command).await
            } else {
                false
            }
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn run_admin(
    storefront: &mut Storefront<Box<dyn CatalogGateway>, TerminalOperator>,
    command: AdminCommand,
) -> bool {
    let ok = match command {
        AdminCommand::Table => true,
        AdminCommand::Create(product) => {
            storefront.show_form();
            let input = product.apply(FormInput::default());
            submit_or_show_form(storefront, input).await
        }
        AdminCommand::Update { id, product } => {
            storefront.edit(id).await;
            if storefront.state().active_id() != Some(id) {
                eprintln!("product {id} could not be loaded for editing");
                return false;
            }
            let input = product.apply(storefront.state().form().input.clone());
            submit_or_show_form(storefront, input).await
        }
        AdminCommand::Delete { id, .. } => storefront.delete(id).await,
    };

    if ok {
        println!("{}", storefront.state().table().to_html());
    }
    ok
}

/// Submit the form; on failure print it back with what was entered.
async fn submit_or_show_form(
    storefront: &mut Storefront<Box<dyn CatalogGateway>, TerminalOperator>,
    input: FormInput,
) -> bool {
    let saved = storefront.submit(input).await;
    if !saved {
        eprintln!("{}", storefront.state().form_html());
    }
    saved
}
