use lexoffice::{ApiResult, ContactFilters, LexofficeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = LexofficeClient::from_env()?;

    let filters = ContactFilters {
        name: std::env::args().nth(1),
        customer: Some(true),
        ..Default::default()
    };

    match client.contacts().all(filters).await {
        ApiResult::Success(data) => println!("{}", serde_json::to_string_pretty(&data)?),
        ApiResult::Failure(failure) => {
            eprintln!("status: {}, error: {}", failure.status, failure.error)
        }
    }

    Ok(())
}
