use clap::Args;
use vouchers_app::{
    database::{self, Db},
    domain::brands::{BrandsService, PgBrandsService, data::NewBrand},
};

#[derive(Debug, Args)]
pub(crate) struct CreateBrandArgs {
    /// Brand display name
    #[arg(long)]
    name: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateBrandArgs) -> Result<(), String> {
    let name = args.name.trim();

    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let brand = PgBrandsService::new(Db::new(pool))
        .create_brand(NewBrand {
            name: name.to_string(),
        })
        .await
        .map_err(|error| format!("failed to create brand: {error}"))?;

    println!("brand_id: {}", brand.id);
    println!("brand_name: {}", brand.name);

    Ok(())
}
