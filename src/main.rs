//! One-shot CLI: reads `SALESFORCE_*` environment variables (optionally from a `.env`
//! file), runs the JWT-bearer flow, and prints the knowledge-article search records as
//! pretty JSON. Exits non-zero on any failure.

// std
use std::{env, error::Error as StdError, process::ExitCode};
// self
use sfdc_jwt_search::{config::IdentityConfig, flow};

const ARTICLE_QUERY: &str =
	"FIND {article} IN ALL FIELDS RETURNING Knowledge__kav(Id, Title, Summary,PublicContent__c)";

#[tokio::main]
async fn main() -> ExitCode {
	let loaded_dotenv = dotenvy::dotenv().is_ok();

	if loaded_dotenv && env::var("SALESFORCE_ENV").as_deref() == Ok("development") {
		eprintln!("========= Loading Environment from .env ==========");
	}

	match run().await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			report(e.as_ref());

			ExitCode::FAILURE
		},
	}
}

async fn run() -> Result<(), Box<dyn StdError>> {
	let config = IdentityConfig::from_env()?;
	let records = flow::run(&config, ARTICLE_QUERY).await?;

	println!("{}", serde_json::to_string_pretty(&records)?);

	Ok(())
}

fn report(err: &dyn StdError) {
	eprintln!("error: {err}");

	let mut source = err.source();

	while let Some(cause) = source {
		eprintln!("  caused by: {cause}");

		source = cause.source();
	}
}
