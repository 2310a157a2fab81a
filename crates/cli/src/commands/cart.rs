//! `verde cart` - list, add, remove.
//!
//! Mutations go through [`CartView`] so the printed state always reflects
//! a fresh fetch after the change.

use verde_client::CartView;
use verde_core::ProductId;

use super::client;

fn print_items(view: &CartView) {
    if view.items().is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for item in view.items() {
        println!(
            "{:>3} x #{:<5} {:<40} {:>10}",
            item.quantity,
            item.product.id,
            item.product.name,
            item.line_total()
        );
    }
    println!("{:>62}", format!("Total: {}", view.total()));
}

pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let view = CartView::load(client()?).await?;
    print_items(&view);
    Ok(())
}

pub async fn add(product: i32, quantity: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = CartView::load(client()?).await?;
    view.add(ProductId::new(product), quantity).await?;
    print_items(&view);
    Ok(())
}

pub async fn remove(product: i32) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = CartView::load(client()?).await?;
    view.remove(ProductId::new(product)).await?;
    print_items(&view);
    Ok(())
}
