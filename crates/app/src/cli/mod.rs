use clap::{Parser, Subcommand};

mod brand;
mod db;

#[derive(Debug, Parser)]
#[command(name = "vouchers-app", about = "Voucher catalog CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Brand(brand::BrandCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Brand(command) => brand::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
