//! `userlist html` – print the rendered list container.

use anyhow::Result;
use userlist_core::app::UserList;
use userlist_core::config::UserlistConfig;
use userlist_core::surface::lock;

pub async fn run_html(cfg: &UserlistConfig) -> Result<()> {
    let list = UserList::from_config(cfg);
    list.refresh().await?;
    super::show_alerts(list.surface());
    println!("{}", lock(list.surface()).to_html());
    Ok(())
}
