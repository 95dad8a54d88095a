//! Message sending example
//!
//! This example checks a number and sends it a text message and a PDF.
//!
//! Run with: cargo run --example send_message

use whatsgate_sdk::{
    types::{ApiKey, WhatsappId},
    Whatsgate, WhatsgateError,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let whatsgate = Whatsgate::builder()
        .api_key(ApiKey::new("your_api_key_here")?)
        .whatsapp_id(WhatsappId::new("your_whatsapp_id")?)
        .verbose_logging()
        .build()?;

    let phone = "79990001122";

    match whatsgate.check_number(phone).await {
        Ok(true) => println!("{} is on WhatsApp", phone),
        Ok(false) => {
            println!("{} is not on WhatsApp", phone);
            return Ok(());
        }
        Err(WhatsgateError::Status { status, body }) => {
            eprintln!("Check rejected ({}): {}", status, body);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    match whatsgate.send_message(phone, "Hello from Rust SDK!").await {
        Ok(sent) => println!("Message sent: {} (ack {})", sent.result.id, sent.result.ack),
        Err(e) => eprintln!("Failed to send: {}", e),
    }

    let pdf = b"%PDF-1.4\n%placeholder\n";
    match whatsgate
        .send_document(phone, "Your invoice", "invoice.pdf", pdf)
        .await
    {
        Ok(sent) => println!("Document sent: {}", sent.result.id),
        Err(e) => eprintln!("Failed to send: {}", e),
    }

    Ok(())
}
