use clap::Parser;
use storefront_client::app::render;
use storefront_client::utils::{logger, validation::Validate};
use storefront_client::{
    AuthClient, AuthSession, CatalogController, CatalogFetcher, Category, Cli, Command,
    ListingForm, SubmissionClient, SubmissionOutcome,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting storefront CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.load_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Listings { category } => {
            let category: Category = match category.parse() {
                Ok(category) => category,
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            };

            let mut controller = CatalogController::new(CatalogFetcher::new(&config)?);
            controller.state_mut().select(category);
            controller.load();
            eprintln!("{}", render::render_catalog(controller.state(), &config));

            controller.wait_for_update().await;
            println!("{}", render::render_catalog(controller.state(), &config));

            if controller.state().error_message().is_some() {
                std::process::exit(2);
            }
        }
        Command::Login { email, password } => {
            let client = AuthClient::new(&config)?;
            let mut session = AuthSession::new();
            session.apply_login(client.login(&email, &password).await);

            println!("{}", render::render_menu(&session));
            if !session.is_logged_in() {
                std::process::exit(1);
            }
        }
        Command::Submit {
            title,
            price,
            category,
            description,
        } => {
            let form = ListingForm {
                title,
                price,
                category,
                description,
            };
            let client = SubmissionClient::new(&config)?;
            let outcome: SubmissionOutcome = client.submit(&form).await.into();

            println!("{}", outcome.message());
            if let SubmissionOutcome::Failed(reason) = outcome {
                tracing::error!("❌ Submission failed: {}", reason);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
