extern crate book_manager;

use std::env;
use std::path::PathBuf;

use crate::book_manager::view;
use crate::book_manager::{BookClient, BookManager, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = env::args().nth(1).map(PathBuf::from);
    let config = Config::load(path.as_deref())?;

    let client = BookClient::new(&config)?;
    let manager = BookManager::mount(client).await;

    print!("{}", view::render(&manager)?);

    Ok(())
}
