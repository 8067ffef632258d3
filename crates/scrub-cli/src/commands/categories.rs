use anyhow::Result;
use scrub_core::Category;

pub fn handle() -> Result<()> {
    println!("Categories (detection order):");
    for (i, category) in Category::ALL.iter().enumerate() {
        println!(
            "  {}. {:<8} {:<10} {}",
            i + 1,
            category.as_str(),
            category.counter_key(),
            category.placeholder()
        );
    }

    Ok(())
}
