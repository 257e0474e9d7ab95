use dotenv::dotenv;
use log::{error, info};
use redeemer::config::Config;
use redeemer::services::{NoSigner, SteemRpc, TransactionSigner, WalletSigner};
use redeemer::utils::helpers::load_deplorables;
use redeemer::{Delegator, DelegatorOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    info!("Starting delegation redeemer");
    let config = Config::from_env()?;

    let deplorables = match &config.deplorables_file {
        Some(path) => load_deplorables(path)?,
        None => Default::default(),
    };
    info!("{} accounts excluded from increases", deplorables.len());

    let client = SteemRpc::connect(&config.primary_rpc, config.secondary_rpc.as_deref());
    let signer: Box<dyn TransactionSigner> = match &config.wallet_rpc {
        Some(url) => Box::new(WalletSigner::new(url, config.wallet_password.clone())),
        None => Box::new(NoSigner),
    };

    let options = DelegatorOptions {
        limit: config.page_limit,
        deplorables,
    };
    let delegator = Delegator::new(client, signer, options).await?;

    if config.dry_run {
        info!("Dry run: transactions will not be signed or broadcast");
    }

    let mut cursor = config.start_cursor.clone();
    let mut total = 0;
    loop {
        let (decisions, next_cursor) = match delegator
            .run_page(
                &config.delegator_account,
                cursor.as_deref(),
                config.expiration_secs,
                config.dry_run,
                &config.wifs,
            )
            .await
        {
            Ok(page) => page,
            Err(e) => {
                error!("Page after {:?} failed: {}", cursor, e);
                return Err(e.into());
            }
        };

        for decision in &decisions {
            println!("{}", serde_json::to_string(decision)?);
        }
        total += decisions.len();

        match next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    info!("Processing complete. {} delegation changes issued.", total);
    Ok(())
}
