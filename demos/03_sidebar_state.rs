/// sidebar toggle state backed by an injected store
use investment_projection_rs::{MemoryStore, SidebarState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut sidebar = SidebarState::load(MemoryStore::new())?;
    println!("initially open: {}", sidebar.is_open());

    sidebar.toggle()?;
    println!("after toggle:   {}", sidebar.is_open());

    // a fresh state over the same store picks up the persisted value
    let sidebar = SidebarState::load(sidebar.into_store())?;
    println!("after reload:   {}", sidebar.is_open());

    Ok(())
}
