//! Examples for using the PropTrust Server API

use reqwest::multipart;
use reqwest::Client;

const SERVER_URL: &str = "http://localhost:8080";
const API_KEY: &str = "demo-key-12345";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Verify an uploaded document, anchoring it on the ledger
    println!("2. Verify Document:");
    let text = "Owner: RAVI KUMAR\nSurvey No: 45/2A\nVillage: HEBBAL\n2 Acres 10 Guntas";
    let form = multipart::Form::new()
        .part("file", multipart::Part::bytes(text.as_bytes().to_vec()).file_name("record.txt"))
        .text("document_type", "RTC")
        .text("store_on_ledger", "true");
    let resp = client
        .post(format!("{SERVER_URL}/verify/upload"))
        .header("X-API-Key", API_KEY)
        .multipart(form)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let body: serde_json::Value = resp.json().await?;
    println!("Body: {body}");
    println!();

    let property_id = body["property_id"].as_str().unwrap_or_default().to_string();

    // Example 3: Check the same document for tampering
    println!("3. Tamper Check:");
    let form = multipart::Form::new()
        .part("file", multipart::Part::bytes(text.as_bytes().to_vec()).file_name("record.txt"))
        .text("document_type", "RTC");
    let resp = client
        .post(format!("{SERVER_URL}/tamper/check?property_id={property_id}"))
        .header("X-API-Key", API_KEY)
        .multipart(form)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Fetch the latest verification record
    println!("4. Get Verification:");
    let resp = client
        .get(format!("{SERVER_URL}/verification/{property_id}"))
        .header("X-API-Key", API_KEY)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 5: Ledger status
    println!("5. Ledger Status:");
    let resp = client
        .get(format!("{SERVER_URL}/ledger/status"))
        .header("X-API-Key", API_KEY)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 6: Aggregate statistics
    println!("6. Statistics:");
    let resp = client
        .get(format!("{SERVER_URL}/statistics"))
        .header("X-API-Key", API_KEY)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 7: Cascade delete the property
    println!("7. Delete Verification:");
    let resp = client
        .delete(format!("{SERVER_URL}/verification/{property_id}"))
        .header("X-API-Key", API_KEY)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 8: Metrics
    println!("8. Prometheus Metrics:");
    let resp = client.get(format!("{SERVER_URL}/metrics")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("All examples completed!");
    Ok(())
}
