use std::io;

use lexoffice::{DeeplinkKind, LexofficeClient, ResourceId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let id = std::env::args().nth(1).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "usage: credit_note_document <credit-note-id>",
        )
    })?;
    let id = ResourceId::new(id)?;

    let client = LexofficeClient::from_env()?;
    let credit_notes = client.credit_notes();
    println!("view: {}", credit_notes.deeplink(&id, DeeplinkKind::View));

    let rendered = credit_notes.render_document(&id).await.into_result()?;
    let file_id = rendered["documentFileId"].as_str().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "response has no documentFileId")
    })?;

    let pdf = client
        .files()
        .download(&ResourceId::new(file_id)?)
        .await
        .into_result()?;
    let target = format!("{id}.pdf");
    std::fs::write(&target, pdf)?;
    println!("saved {target}");

    Ok(())
}
