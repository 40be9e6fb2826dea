use bookstall::cli::commands::{
    browse::BrowseCommand, buy::BuyCommand, reset::ResetCommand, show::ShowCommand, CommandHandler,
};
use bookstall::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    match cli.command {
        Commands::Browse {
            query,
            price,
            level,
            offset,
            limit,
        } => {
            let command = BrowseCommand::new(
                data_dir,
                query,
                price.into(),
                level.into(),
                offset,
                limit,
            );
            command.execute().await?;
        }
        Commands::Show { id } => {
            let command = ShowCommand::new(data_dir, id);
            command.execute().await?;
        }
        Commands::Buy { items } => {
            let command = BuyCommand::new(data_dir, items);
            command.execute().await?;
        }
        Commands::Reset => {
            let command = ResetCommand::new(data_dir);
            command.execute().await?;
        }
    }

    Ok(())
}
