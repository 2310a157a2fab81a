//! `verde products` and `verde address` - catalog and addresses.

use super::client;

pub async fn products() -> Result<(), Box<dyn std::error::Error>> {
    let products = client()?.products().await?;

    if products.is_empty() {
        println!("No products available.");
        return Ok(());
    }

    for product in products {
        println!(
            "#{:<5} {:<40} {:>10}  [{}]",
            product.id, product.name, product.price, product.category.name
        );
    }
    Ok(())
}

pub async fn addresses() -> Result<(), Box<dyn std::error::Error>> {
    let addresses = client()?.addresses().await?;

    if addresses.is_empty() {
        println!("No addresses on file.");
        return Ok(());
    }

    for address in addresses {
        println!(
            "#{:<5} {}, {} {}",
            address.id, address.street_name, address.zip_code, address.city
        );
    }
    Ok(())
}

pub async fn add_address(
    city: &str,
    street: &str,
    zip: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let address = client()?.create_address(city, street, zip).await?;
    println!(
        "Saved address #{}: {}, {} {}",
        address.id, address.street_name, address.zip_code, address.city
    );
    Ok(())
}
