use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use ecommerce_ddd::domain::customer::{Address, Customer};
use ecommerce_ddd::domain::order::{Order, OrderItem};
use ecommerce_ddd::domain::product::Product;
use ecommerce_ddd::infrastructure::{
    CustomerRepository, Database, OrderRepository, ProductRepository,
};
use ecommerce_ddd::{DatabaseConfig, RepositoryInterface};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,ecommerce_ddd=debug")),
        )
        .init();

    // === 1. Open database ===
    let config = DatabaseConfig::from_env();
    let db = Database::connect(&config).await?;
    db.sync().await?;

    let customers = CustomerRepository::new(db.pool().clone());
    let products = ProductRepository::new(db.pool().clone());
    let orders = OrderRepository::new(db.pool().clone());

    // === 2. Register customer and catalog ===
    let customer_id = Uuid::new_v4().to_string();
    let mut customer = Customer::new(&customer_id, "Customer 1")?;
    customer.change_address(Address::new("Street 1", 1, "Zipcode 1", "City 1")?);
    customer.activate()?;
    customers.create(&customer).await?;

    let keyboard = Product::new(Uuid::new_v4().to_string(), "Keyboard", 10.0)?;
    let monitor = Product::new(Uuid::new_v4().to_string(), "Monitor", 150.0)?;
    products.create(&keyboard).await?;
    products.create(&monitor).await?;

    // === 3. Place an order ===
    let order_id = Uuid::new_v4().to_string();
    let first_line = OrderItem::new(
        Uuid::new_v4().to_string(),
        keyboard.name(),
        keyboard.price(),
        keyboard.id(),
        2,
    )?;
    let order = Order::new(&order_id, customer.id(), vec![first_line])?;
    orders.create(&order).await?;
    tracing::info!(order_id = %order.id(), total = order.total(), "Order placed");

    // === 4. Add a line and save the whole aggregate ===
    let mut changed = orders.find(&order_id).await?;
    changed.add_item(OrderItem::new(
        Uuid::new_v4().to_string(),
        monitor.name(),
        monitor.price(),
        monitor.id(),
        1,
    )?);
    orders.update(&changed).await?;

    // === 5. Reward the customer ===
    let mut customer = customers.find(&customer_id).await?;
    customer.add_reward_points(changed.total().round() as i64)?;
    customers.update(&customer).await?;

    // === 6. Report ===
    for order in orders.find_all().await? {
        tracing::info!(
            order_id = %order.id(),
            customer_id = %order.customer_id(),
            item_count = order.items().len(),
            total = order.total(),
            "Stored order"
        );
    }
    tracing::info!(
        customer_id = %customer.id(),
        reward_points = customer.reward_points(),
        "Customer rewarded"
    );

    db.close().await;
    Ok(())
}
