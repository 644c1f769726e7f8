//! `userlist list` – print one line per rendered user.

use anyhow::Result;
use userlist_core::app::UserList;
use userlist_core::config::UserlistConfig;
use userlist_core::surface::{lock, DisplaySurface};

pub async fn run_list(cfg: &UserlistConfig) -> Result<()> {
    let list = UserList::from_config(cfg);
    let report = list.refresh().await?;
    super::show_alerts(list.surface());

    for entry in lock(list.surface()).entries() {
        println!("{}\t{}", entry.nickname, entry.href);
    }
    if report.skipped > 0 {
        tracing::info!("{} item(s) without nickname not shown", report.skipped);
    }
    Ok(())
}
