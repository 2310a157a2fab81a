//! `verde auth` - login, register, logout.

use verde_core::Email;

use super::client;

pub async fn login(email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let email = Email::parse(email)?;
    let session = client()?.login(&email, password).await?;
    println!("Logged in as {} <{}>", session.user.full_name(), session.user.email);
    Ok(())
}

pub async fn register(
    email: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = Email::parse(email)?;
    let session = client()?
        .register(&email, first_name, last_name, password)
        .await?;
    println!("Welcome, {}! Your account is ready.", session.user.full_name());
    Ok(())
}

pub async fn logout() -> Result<(), Box<dyn std::error::Error>> {
    client()?.logout().await?;
    println!("Logged out.");
    Ok(())
}
